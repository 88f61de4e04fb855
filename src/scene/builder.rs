//! One-shot construction of the sun, planets, orbit rings, starfield, lights and camera

use std::f32::consts::FRAC_PI_2;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bodies::{BodyId, OrbitRing, Planet, SUN, Starfield, Sun};
use crate::camera::MainCamera;
use crate::config::OrreryConfig;
use crate::scene::starfield::{generate_star_positions, starfield_mesh};

/// Half-width of an orbit ring.
pub const ORBIT_RING_HALF_WIDTH: f32 = 0.1;
const ORBIT_RING_SEGMENTS: u32 = 128;
const ORBIT_RING_OPACITY: f32 = 0.3;
const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;
/// Point light reach; planets beyond it only get ambient light.
const SUN_LIGHT_RANGE: f32 = 300.0;
const SUN_LIGHT_LUMENS: f32 = 20_000_000.0;

/// Inner and outer radius of the ring drawn along an orbit of radius `distance`.
pub fn orbit_ring_radii(distance: f32) -> (f32, f32) {
    (
        distance - ORBIT_RING_HALF_WIDTH,
        distance + ORBIT_RING_HALF_WIDTH,
    )
}

/// Spawn lights and the camera
pub fn setup_rig(mut commands: Commands, config: Res<OrreryConfig>) {
    // Keeps the night side of the planets faintly visible.
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x33, 0x33, 0x33),
        brightness: 200.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: SUN_LIGHT_LUMENS,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sun Light"),
    ));

    // No look_at: the camera keeps facing -Z while transitions move it around.
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov_degrees.to_radians(),
            near: 0.1,
            far: config.camera_far,
            ..default()
        }),
        Tonemapping::TonyMcMapface,
        MainCamera,
        Transform::from_translation(config.camera_home()),
        Name::new("Main Camera"),
    ));
}

/// Spawn the sun, one sphere and one orbit ring per planet, and the starfield
pub fn build_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<OrreryConfig>,
) {
    // Unlit so the sun reads as self-luminous whatever the lighting.
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN.radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SUN.bevy_color(),
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Sun,
        Name::new(SUN.display_name),
    ));

    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, ORBIT_RING_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for id in BodyId::ALL {
        let descriptor = id.descriptor();

        let (inner, outer) = orbit_ring_radii(descriptor.orbital_distance);
        commands.spawn((
            Mesh3d(meshes.add(Annulus::new(inner, outer).mesh().resolution(ORBIT_RING_SEGMENTS))),
            MeshMaterial3d(ring_material.clone()),
            // Annulus meshes lie in XY; tip them into the orbital (XZ) plane.
            Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            OrbitRing,
            Name::new(format!("{} Orbit", descriptor.display_name)),
        ));

        commands.spawn((
            Mesh3d(meshes.add(
                Sphere::new(descriptor.radius)
                    .mesh()
                    .uv(SPHERE_SECTORS, SPHERE_STACKS),
            )),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: descriptor.bevy_color(),
                perceptual_roughness: 0.7,
                ..default()
            })),
            Transform::from_xyz(descriptor.orbital_distance, 0.0, 0.0),
            Planet(id),
            Name::new(descriptor.display_name),
        ));
    }

    let positions = match config.star_seed {
        Some(seed) => generate_star_positions(
            &mut StdRng::seed_from_u64(seed),
            config.star_count,
            config.star_field_extent,
        ),
        None => generate_star_positions(
            &mut rand::thread_rng(),
            config.star_count,
            config.star_field_extent,
        ),
    };
    commands.spawn((
        Mesh3d(meshes.add(starfield_mesh(positions))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Starfield,
        Name::new("Starfield"),
    ));

    info!(
        "Scene built: sun, {} planets, {} stars",
        BodyId::ALL.len(),
        config.star_count
    );
}
