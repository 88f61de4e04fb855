//! Control panel and tooltip layout

use bevy::ecs::spawn::Spawn;
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, SliderProps, button, slider};
use bevy_feathers::theme::ThemedText;
use bevy_ui_widgets::SliderStep;

use crate::bodies::BodyId;
use crate::config::OrreryConfig;
use crate::simulation::{SimulationState, speed_label};
use crate::ui::state::{
    ControlPanel, PanelText, PauseButton, PauseLabel, SpeedLabel, SpeedSlider, ThemeButton,
    ThemeLabel, ThemePalette, Tooltip, TooltipText,
};

const PANEL_WIDTH_PX: f32 = 300.0;
const NAME_COLUMN_PX: f32 = 70.0;
const SLIDER_WIDTH_PX: f32 = 150.0;

/// Spawn the control panel: pause and theme buttons, then one slider row per planet
pub fn spawn_control_panel(
    mut commands: Commands,
    state: Res<SimulationState>,
    config: Res<OrreryConfig>,
) {
    let palette = ThemePalette::for_theme(state.theme);

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(10.0),
                width: Val::Px(PANEL_WIDTH_PX),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(palette.panel_background),
            ControlPanel,
            Name::new("Control Panel"),
        ))
        .with_children(|panel| {
            panel.spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(8.0),
                    margin: UiRect::bottom(Val::Px(6.0)),
                    ..default()
                },
                children![
                    button(
                        ButtonProps::default(),
                        (PauseButton, Name::new("pause-resume")),
                        Spawn((Text::new(state.pause_label()), ThemedText, PauseLabel)),
                    ),
                    button(
                        ButtonProps::default(),
                        (ThemeButton, Name::new("theme-toggle")),
                        Spawn((Text::new(state.theme.toggle_label()), ThemedText, ThemeLabel)),
                    ),
                ],
            ));

            for id in BodyId::ALL {
                let runtime = state.body(id);
                panel.spawn((
                    Node {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                    children![
                        (
                            Node {
                                width: Val::Px(NAME_COLUMN_PX),
                                ..default()
                            },
                            Text::new(id.descriptor().display_name),
                            TextFont::from_font_size(14.0),
                            TextColor(palette.panel_text),
                            PanelText,
                        ),
                        (
                            Node {
                                width: Val::Px(SLIDER_WIDTH_PX),
                                ..default()
                            },
                            children![slider(
                                SliderProps {
                                    value: runtime.speed_multiplier,
                                    min: config.speed_min,
                                    max: config.speed_max,
                                    ..default()
                                },
                                (
                                    SpeedSlider(id),
                                    SliderStep(config.speed_step),
                                    Name::new(id.slider_name()),
                                ),
                            )],
                        ),
                        (
                            Text::new(speed_label(runtime.speed_multiplier)),
                            TextFont::from_font_size(14.0),
                            TextColor(palette.panel_text),
                            PanelText,
                            SpeedLabel(id),
                        ),
                    ],
                ));
            }
        });
}

/// Spawn the hidden hover tooltip
pub fn spawn_tooltip(mut commands: Commands, state: Res<SimulationState>) {
    let palette = ThemePalette::for_theme(state.theme);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(palette.tooltip_background),
        GlobalZIndex(10),
        Visibility::Hidden,
        // Must never swallow clicks meant for the planet underneath.
        Pickable::IGNORE,
        Tooltip,
        Name::new("Tooltip"),
        children![(
            Text::new(""),
            TextFont::from_font_size(14.0),
            TextColor(palette.tooltip_text),
            Pickable::IGNORE,
            TooltipText,
        )],
    ));
}
