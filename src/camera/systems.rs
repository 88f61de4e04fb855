//! Click-to-zoom camera systems

use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;

use crate::bodies::Planet;
use crate::camera::MainCamera;
use crate::camera::tween::{CameraTransition, zoom_target};
use crate::config::OrreryConfig;
use crate::input::{ViewportClicked, ViewportSize, pick_planet, pointer_ray};
use crate::simulation::SimulationState;

/// Pick the clicked planet and start a transition towards it, or home on a miss
pub fn handle_viewport_clicks(
    mut clicks: MessageReader<ViewportClicked>,
    state: Res<SimulationState>,
    config: Res<OrreryConfig>,
    viewport: Res<ViewportSize>,
    camera: Query<(&Camera, &GlobalTransform, &Transform), With<MainCamera>>,
    planets: Query<&Planet>,
    mut ray_cast: MeshRayCast,
    mut transition: ResMut<CameraTransition>,
) {
    // Only the latest click matters; earlier ones would be superseded anyway.
    let Some(ViewportClicked(pointer)) = clicks.read().last().copied() else {
        return;
    };
    let Ok((camera, camera_global, camera_transform)) = camera.single() else {
        warn!("handle_viewport_clicks: main camera not found");
        return;
    };

    let hit = pointer_ray(camera, camera_global, &pointer, viewport.0)
        .and_then(|ray| pick_planet(&mut ray_cast, ray, &planets));
    let target = zoom_target(hit, &state, &config);

    match hit {
        Some(id) => info!("Zooming to {}", id.descriptor().display_name),
        None => info!("Resetting camera to overview"),
    }
    transition.retarget(camera_transform.translation, target, &config);
}

/// Move the camera along the active transition. Frozen while paused.
pub fn advance_camera_transition(
    time: Res<Time>,
    state: Res<SimulationState>,
    mut transition: ResMut<CameraTransition>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    if state.paused || transition.active.is_none() {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        warn!("advance_camera_transition: main camera not found");
        return;
    };
    if let Some(position) = transition.step(time.delta_secs()) {
        transform.translation = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraControllerPlugin;
    use crate::input::PointerState;
    use crate::simulation::SimulationPlugin;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    /// Headless app with the simulation and camera plugins and 100 ms frames.
    fn camera_app(start: Vec3) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.insert_resource(OrreryConfig {
            star_seed: Some(4),
            ..Default::default()
        });
        app.init_resource::<Assets<Mesh>>();
        app.insert_resource(ViewportSize(Vec2::new(800.0, 600.0)));
        app.add_message::<ViewportClicked>();
        app.add_plugins((SimulationPlugin, CameraControllerPlugin));
        app.world_mut()
            .spawn((Camera::default(), Transform::from_translation(start), MainCamera));
        app
    }

    fn camera_translation(app: &mut App) -> Vec3 {
        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<MainCamera>>();
        query.single(app.world()).expect("one main camera").translation
    }

    #[test]
    fn test_paused_transition_holds_still() {
        let start = Vec3::new(10.0, 0.0, 20.0);
        let mut app = camera_app(start);
        let config = app.world().resource::<OrreryConfig>().clone();
        app.world_mut()
            .resource_mut::<CameraTransition>()
            .retarget(start, config.camera_home(), &config);
        app.world_mut().resource_mut::<SimulationState>().paused = true;

        let tween_before = app.world().resource::<CameraTransition>().active;
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(app.world().resource::<CameraTransition>().active, tween_before);
        assert_eq!(tween_before.map(|tween| tween.elapsed), Some(0.0));
        assert_eq!(camera_translation(&mut app), start);

        app.world_mut().resource_mut::<SimulationState>().paused = false;
        for _ in 0..20 {
            app.update();
        }
        assert!(app.world().resource::<CameraTransition>().active.is_none());
        assert_eq!(camera_translation(&mut app), Vec3::new(0.0, 0.0, 70.0));
    }

    #[test]
    fn test_click_on_empty_space_returns_home() {
        let mut app = camera_app(Vec3::new(30.0, 0.0, 10.0));
        let pointer = PointerState::from_screen(Vec2::new(5.0, 5.0), Vec2::new(800.0, 600.0));
        app.world_mut().write_message(ViewportClicked(pointer));

        app.update();
        assert!(app.world().resource::<CameraTransition>().active.is_some());

        for _ in 0..20 {
            app.update();
        }
        assert!(app.world().resource::<CameraTransition>().active.is_none());
        assert_eq!(camera_translation(&mut app), Vec3::new(0.0, 0.0, 70.0));
    }
}
