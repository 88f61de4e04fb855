use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;
use bevy_input_focus::directional_navigation::DirectionalNavigationPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod camera;
mod config;
mod input;
mod scene;
mod simulation;
mod ui;

use camera::CameraControllerPlugin;
use config::OrreryConfig;
use input::InputPlugin;
use scene::ScenePlugin;
use simulation::SimulationPlugin;
use ui::UiPlugin;

fn main() {
    // Logging is not up yet; report config problems on stderr and carry on.
    let config = OrreryConfig::load().unwrap_or_else(|err| {
        eprintln!("Ignoring orrery config: {err:#}");
        OrreryConfig::default()
    });

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.slider.bg", Color::srgba(0.08, 0.08, 0.1, 0.9));
    theme.set_color("feathers.slider.bar", Color::srgba(0.95, 0.75, 0.2, 0.75));
    theme.set_color("feathers.slider.text", Color::srgba(1.0, 0.95, 0.8, 0.95));
    theme.set_color("feathers.button.bg", Color::srgba(0.12, 0.12, 0.15, 0.9));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.2, 0.2, 0.25, 0.95),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.26, 0.26, 0.32, 0.95),
    );
    theme.set_color("feathers.button.txt", Color::srgba(1.0, 0.95, 0.85, 1.0));
    app.insert_resource(theme);

    app.add_plugins(FeathersPlugins);
    app.add_plugins(DirectionalNavigationPlugin);

    app.insert_resource(ClearColor(Color::BLACK));
    // Must be present before the plugins below build their resources from it.
    app.insert_resource(config);

    app.add_plugins(SimulationPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(InputPlugin);
    app.add_plugins(CameraControllerPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
