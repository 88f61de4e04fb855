//! Ray picking against the planet meshes

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;

use crate::bodies::{BodyId, Planet};
use crate::input::pointer::PointerState;

/// Nearest body among `hits` (`(body, distance)`); hits with no body are skipped.
///
/// Equal distances keep the earlier hit.
pub fn nearest_body(hits: impl IntoIterator<Item = (Option<BodyId>, f32)>) -> Option<BodyId> {
    hits.into_iter()
        .filter_map(|(body, distance)| body.map(|id| (id, distance)))
        .fold(None, |best: Option<(BodyId, f32)>, (id, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((id, distance)),
        })
        .map(|(id, _)| id)
}

/// Cast `ray` against the planet meshes and return the closest planet hit.
///
/// Only entities carrying [`Planet`] are tested, so the sun, orbit rings and
/// starfield never block a pick.
pub fn pick_planet(
    ray_cast: &mut MeshRayCast,
    ray: Ray3d,
    planets: &Query<&Planet>,
) -> Option<BodyId> {
    let filter = |entity: Entity| planets.contains(entity);
    let settings = MeshRayCastSettings::default()
        .with_filter(&filter)
        .with_visibility(RayCastVisibility::Any)
        .never_early_exit();

    let hits = ray_cast.cast_ray(ray, &settings);
    nearest_body(
        hits.iter()
            .map(|(entity, hit)| (planets.get(*entity).ok().map(|planet| planet.0), hit.distance)),
    )
}

/// World-space ray from the camera through the pointer.
pub fn pointer_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    pointer: &PointerState,
    viewport: Vec2,
) -> Option<Ray3d> {
    camera
        .viewport_to_world(camera_transform, pointer.to_viewport(viewport))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Sun;
    use crate::simulation::SimulationState;
    use bevy::camera::primitives::Aabb;
    use bevy::ecs::system::RunSystemOnce;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ray_towards(origin: Vec3, target: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::new(target - origin).unwrap())
    }

    fn spawn_sphere(world: &mut World, center: Vec3, radius: f32) -> Entity {
        let mesh = world
            .resource_mut::<Assets<Mesh>>()
            .add(Sphere::new(radius).mesh().uv(32, 32));
        let transform = Transform::from_translation(center);
        world
            .spawn((
                Mesh3d(mesh),
                transform,
                GlobalTransform::from(transform),
                Aabb::from_min_max(Vec3::splat(-radius), Vec3::splat(radius)),
            ))
            .id()
    }

    /// Headless world holding the sun and every planet at its current position.
    fn solar_system(state: &SimulationState) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<Assets<Mesh>>();

        let world = app.world_mut();
        let sun = spawn_sphere(world, Vec3::ZERO, crate::bodies::SUN.radius);
        world.entity_mut(sun).insert(Sun);
        for id in BodyId::ALL {
            let planet = spawn_sphere(world, state.body_position(id), id.descriptor().radius);
            world.entity_mut(planet).insert(Planet(id));
        }
        app
    }

    fn cast(app: &mut App, ray: Ray3d) -> Option<BodyId> {
        app.world_mut()
            .run_system_once(move |mut ray_cast: MeshRayCast, planets: Query<&Planet>| {
                pick_planet(&mut ray_cast, ray, &planets)
            })
            .expect("ray cast system runs")
    }

    #[test]
    fn test_ray_through_body_center_picks_it() {
        let state = SimulationState::new(&mut StdRng::seed_from_u64(5));
        let mut app = solar_system(&state);
        let camera = Vec3::new(0.0, 0.0, 70.0);

        for id in BodyId::ALL {
            let target = state.body_position(id);
            let hit = cast(&mut app, ray_towards(camera, target));
            // Another planet could sit on the same line of sight; only then is a
            // different answer allowed, and it must be closer.
            match hit {
                Some(hit) if hit != id => {
                    let other = state.body_position(hit);
                    assert!(camera.distance(other) < camera.distance(target));
                }
                other => assert_eq!(other, Some(id)),
            }
        }
    }

    #[test]
    fn test_empty_space_and_sun_pick_nothing() {
        let state = SimulationState::new(&mut StdRng::seed_from_u64(5));
        let mut app = solar_system(&state);

        let above = ray_towards(Vec3::new(0.0, 200.0, 70.0), Vec3::new(0.0, 400.0, 0.0));
        assert_eq!(cast(&mut app, above), None);

        // Straight down onto the sun: it is not a planet, so nothing is picked.
        let onto_sun = ray_towards(Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);
        assert_eq!(cast(&mut app, onto_sun), None);
    }

    #[test]
    fn test_nearest_body_prefers_closest_hit() {
        let hits = [
            (Some(BodyId::Jupiter), 87.0),
            (None, 10.0),
            (Some(BodyId::Mars), 49.0),
        ];
        assert_eq!(nearest_body(hits), Some(BodyId::Mars));
    }

    #[test]
    fn test_nearest_body_tie_keeps_first_hit() {
        let hits = [(Some(BodyId::Uranus), 8.0), (Some(BodyId::Neptune), 8.0)];
        assert_eq!(nearest_body(hits), Some(BodyId::Uranus));
        let no_hits: [(Option<BodyId>, f32); 0] = [];
        assert_eq!(nearest_body(no_hits), None);
        assert_eq!(nearest_body([(None, 1.0)]), None);
    }
}
