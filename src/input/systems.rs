//! Input systems: pointer tracking, clicks, resize, keyboard shortcuts, hover

use bevy::picking::hover::HoverMap;
use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::picking::pointer::PointerId;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_input_focus::InputFocus;

use crate::bodies::Planet;
use crate::camera::MainCamera;
use crate::input::picking::{pick_planet, pointer_ray};
use crate::input::pointer::PointerState;
use crate::simulation::{SimCommand, SimulationState};

/// Logical size of the primary window, refreshed on every resize
#[derive(Resource, Debug, Clone, Copy, Default, Deref)]
pub struct ViewportSize(pub Vec2);

/// Left click on the 3D view (not on the control panel)
#[derive(Message, Debug, Clone, Copy)]
pub struct ViewportClicked(pub PointerState);

/// Read the initial viewport size. Without a primary window there is nothing to
/// draw into, so the app is asked to exit.
pub fn init_viewport_size(
    window: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok(window) = window.single() else {
        error!("init_viewport_size: no primary window, stopping");
        exit.write(AppExit::error());
        return;
    };
    viewport.0 = window.size();
}

/// Keep the cached viewport size in step with the window.
///
/// The camera projection and the surface follow the window on their own; only
/// pointer normalisation needs the size here.
pub fn handle_resize(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Ok(primary) = primary.single() else {
        return;
    };
    for event in resized.read() {
        if event.window != primary {
            continue;
        }
        viewport.0 = Vec2::new(event.width, event.height);
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}

/// Record the pointer position in normalised coordinates
pub fn track_pointer(
    window: Single<&Window, With<PrimaryWindow>>,
    viewport: Res<ViewportSize>,
    mut state: ResMut<SimulationState>,
) {
    let pointer = window
        .cursor_position()
        .map(|screen| PointerState::from_screen(screen, viewport.0));
    // Avoid flagging the state as changed when the pointer is idle.
    if state.pointer != pointer {
        state.pointer = pointer;
    }
}

/// True when the mouse pointer is over any UI node
pub fn pointer_over_ui(hover_map: &HoverMap, nodes: &Query<(), With<Node>>) -> bool {
    hover_map
        .get(&PointerId::Mouse)
        .is_some_and(|hits| hits.keys().any(|entity| nodes.contains(*entity)))
}

pub fn detect_viewport_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    state: Res<SimulationState>,
    hover_map: Res<HoverMap>,
    nodes: Query<(), With<Node>>,
    mut clicks: MessageWriter<ViewportClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if pointer_over_ui(&hover_map, &nodes) {
        return;
    }
    if let Some(pointer) = state.pointer {
        clicks.write(ViewportClicked(pointer));
    }
}

/// Space toggles pause, T toggles the theme.
///
/// Space is left to the widget while a panel control holds keyboard focus.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    focus: Option<Res<InputFocus>>,
    mut commands: MessageWriter<SimCommand>,
) {
    let widget_focused = focus.is_some_and(|focus| focus.get().is_some());
    if keys.just_pressed(KeyCode::Space) && !widget_focused {
        commands.write(SimCommand::TogglePause);
    }
    if keys.just_pressed(KeyCode::KeyT) {
        commands.write(SimCommand::ToggleTheme);
    }
}

/// Pick the planet under the pointer. Frozen while paused, like the orbits.
pub fn update_hover(
    mut state: ResMut<SimulationState>,
    viewport: Res<ViewportSize>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    planets: Query<&Planet>,
    mut ray_cast: MeshRayCast,
) {
    if state.paused {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        warn!("update_hover: main camera not found");
        return;
    };

    let hovered = state
        .pointer
        .and_then(|pointer| pointer_ray(camera, camera_transform, &pointer, viewport.0))
        .and_then(|ray| pick_planet(&mut ray_cast, ray, &planets));

    if state.hovered != hovered {
        state.hovered = hovered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_window_stops_startup() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ViewportSize>();
        app.add_systems(Startup, init_viewport_size);

        app.update();

        assert_eq!(app.should_exit(), Some(AppExit::error()));
        assert_eq!(app.world().resource::<ViewportSize>().0, Vec2::ZERO);
    }
}
