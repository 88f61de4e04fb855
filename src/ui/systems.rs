//! UI systems: control events in, labels, tooltip and theme out

use bevy::prelude::*;
use bevy_ui_widgets::{Activate, SliderValue, ValueChange};

use crate::config::OrreryConfig;
use crate::simulation::{SimCommand, SimulationState, speed_label};
use crate::ui::state::{
    ControlPanel, PanelText, PauseButton, PauseLabel, SpeedLabel, SpeedSlider, ThemeButton,
    ThemeLabel, ThemePalette, Tooltip, TooltipText,
};

/// Speed slider moved: keep the thumb where it was dragged and request the new speed
pub fn on_speed_slider_change(
    change: On<ValueChange<f32>>,
    sliders: Query<&SpeedSlider>,
    mut commands: Commands,
    mut sim_commands: MessageWriter<SimCommand>,
) {
    let slider_entity = change.event_target();
    let Ok(SpeedSlider(body)) = sliders.get(slider_entity) else {
        return;
    };
    commands.entity(slider_entity).insert(SliderValue(change.value));
    sim_commands.write(SimCommand::SetSpeed(*body, change.value));
}

/// Pause or theme button pressed
pub fn on_button_activate(
    activate: On<Activate>,
    pause_buttons: Query<(), With<PauseButton>>,
    theme_buttons: Query<(), With<ThemeButton>>,
    mut sim_commands: MessageWriter<SimCommand>,
) {
    let entity = activate.event_target();
    if pause_buttons.contains(entity) {
        sim_commands.write(SimCommand::TogglePause);
    } else if theme_buttons.contains(entity) {
        sim_commands.write(SimCommand::ToggleTheme);
    }
}

/// Bring button and speed labels in line with the simulation state
pub fn refresh_labels(
    state: Res<SimulationState>,
    mut pause_labels: Query<&mut Text, (With<PauseLabel>, Without<ThemeLabel>)>,
    mut theme_labels: Query<&mut Text, (With<ThemeLabel>, Without<PauseLabel>)>,
    mut speed_labels: Query<(&SpeedLabel, &mut Text), (Without<PauseLabel>, Without<ThemeLabel>)>,
) {
    if !state.is_changed() {
        return;
    }

    for mut text in &mut pause_labels {
        set_text(&mut text, state.pause_label());
    }
    for mut text in &mut theme_labels {
        set_text(&mut text, state.theme.toggle_label());
    }
    for (SpeedLabel(body), mut text) in &mut speed_labels {
        set_text(&mut text, &speed_label(state.body(*body).speed_multiplier));
    }
}

/// Slider thumbs follow the applied (clamped) speed
pub fn sync_slider_values(
    state: Res<SimulationState>,
    sliders: Query<(Entity, &SpeedSlider, &SliderValue)>,
    mut commands: Commands,
) {
    if !state.is_changed() {
        return;
    }
    for (entity, SpeedSlider(body), value) in &sliders {
        let applied = state.body(*body).speed_multiplier;
        if value.0 != applied {
            commands.entity(entity).insert(SliderValue(applied));
        }
    }
}

/// Follow the pointer; show the hovered planet's name or hide
pub fn update_tooltip(
    state: Res<SimulationState>,
    config: Res<OrreryConfig>,
    mut tooltip: Query<(&mut Node, &mut Visibility), With<Tooltip>>,
    mut tooltip_text: Query<&mut Text, With<TooltipText>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok((mut node, mut visibility)) = tooltip.single_mut() else {
        warn!("update_tooltip: tooltip node not found");
        return;
    };

    if let Some(pointer) = state.pointer {
        node.left = Val::Px(pointer.screen.x + config.tooltip_offset[0]);
        node.top = Val::Px(pointer.screen.y + config.tooltip_offset[1]);
    }

    match state.hovered {
        Some(body) => {
            *visibility = Visibility::Visible;
            for mut text in &mut tooltip_text {
                set_text(&mut text, body.descriptor().display_name);
            }
        }
        None => *visibility = Visibility::Hidden,
    }
}

/// Recolour the panel and tooltip when the theme flips
pub fn apply_theme(
    state: Res<SimulationState>,
    mut last_theme: Local<Option<crate::simulation::Theme>>,
    mut panels: Query<&mut BackgroundColor, (With<ControlPanel>, Without<Tooltip>)>,
    mut tooltips: Query<&mut BackgroundColor, (With<Tooltip>, Without<ControlPanel>)>,
    mut panel_text: Query<&mut TextColor, (With<PanelText>, Without<TooltipText>)>,
    mut tooltip_text: Query<&mut TextColor, (With<TooltipText>, Without<PanelText>)>,
) {
    if *last_theme == Some(state.theme) {
        return;
    }
    *last_theme = Some(state.theme);

    let palette = ThemePalette::for_theme(state.theme);
    for mut background in &mut panels {
        background.0 = palette.panel_background;
    }
    for mut background in &mut tooltips {
        background.0 = palette.tooltip_background;
    }
    for mut color in &mut panel_text {
        color.0 = palette.panel_text;
    }
    for mut color in &mut tooltip_text {
        color.0 = palette.tooltip_text;
    }
}

fn set_text(text: &mut Text, value: &str) {
    if text.0 != value {
        text.0 = value.to_string();
    }
}
