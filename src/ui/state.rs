//! UI components and theme palettes

use bevy::prelude::*;

use crate::bodies::BodyId;
use crate::simulation::Theme;

/// Root node of the control panel
#[derive(Component)]
pub struct ControlPanel;

/// Hover tooltip container
#[derive(Component)]
pub struct Tooltip;

#[derive(Component)]
pub struct TooltipText;

#[derive(Component)]
pub struct PauseButton;

#[derive(Component)]
pub struct PauseLabel;

#[derive(Component)]
pub struct ThemeButton;

#[derive(Component)]
pub struct ThemeLabel;

/// Speed slider of one planet
#[derive(Component, Copy, Clone, Debug)]
pub struct SpeedSlider(pub BodyId);

/// `"1x"` label next to a speed slider
#[derive(Component, Copy, Clone, Debug)]
pub struct SpeedLabel(pub BodyId);

/// Panel text that follows the theme colours
#[derive(Component)]
pub struct PanelText;

/// Colours for one [`Theme`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub panel_background: Color,
    pub panel_text: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                panel_background: Color::srgba(0.04, 0.08, 0.12, 0.85),
                panel_text: Color::srgb(0.85, 0.9, 0.95),
                tooltip_background: Color::srgba(0.0, 0.0, 0.0, 0.8),
                tooltip_text: Color::WHITE,
            },
            Theme::Light => Self {
                panel_background: Color::srgba(0.95, 0.95, 0.97, 0.9),
                panel_text: Color::srgb(0.1, 0.1, 0.15),
                tooltip_background: Color::srgba(1.0, 1.0, 1.0, 0.9),
                tooltip_text: Color::BLACK,
            },
        }
    }
}
