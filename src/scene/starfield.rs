//! Background starfield point cloud

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;
use rand::Rng;

/// `count` points scattered uniformly in an axis-aligned cube of side `extent`
/// centred on the origin.
pub fn generate_star_positions(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            [
                (rng.r#gen::<f32>() - 0.5) * extent,
                (rng.r#gen::<f32>() - 0.5) * extent,
                (rng.r#gen::<f32>() - 0.5) * extent,
            ]
        })
        .collect()
}

/// Point-list mesh for the given star positions
pub fn starfield_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let normals = vec![[0.0_f32, 1.0, 0.0]; positions.len()];
    Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stars_fill_the_cube() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = generate_star_positions(&mut rng, 10_000, 2000.0);
        assert_eq!(stars.len(), 10_000);
        assert!(
            stars
                .iter()
                .flatten()
                .all(|c| (-1000.0..1000.0).contains(c))
        );
        // Uniform scatter: roughly half the stars on each side of every axis.
        for axis in 0..3 {
            let positive = stars.iter().filter(|s| s[axis] > 0.0).count();
            assert!((4500..5500).contains(&positive), "axis {axis}: {positive}");
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = generate_star_positions(&mut StdRng::seed_from_u64(4), 100, 50.0);
        let b = generate_star_positions(&mut StdRng::seed_from_u64(4), 100, 50.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mesh_has_one_vertex_per_star() {
        let mesh = starfield_mesh(generate_star_positions(&mut StdRng::seed_from_u64(2), 64, 10.0));
        assert_eq!(mesh.count_vertices(), 64);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
    }
}
