/// Floor grid under the code storm, laid out like a square grid helper:
/// evenly spaced lines in X and Z with the two centre lines coloured apart.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::render_settings::{GRID_DIVISIONS, GRID_HEIGHT, GRID_SIZE};

#[derive(Component)]
pub struct GroundGrid;

/// Line-list vertex pairs for a `size` grid split into `divisions` cells per
/// side. Returns the two centre lines and every other line separately.
pub fn grid_lines(size: f32, divisions: u32) -> (Vec<[f32; 3]>, Vec<[f32; 3]>) {
    let half = size / 2.0;
    let step = size / divisions as f32;
    let centre = divisions / 2;

    let mut centre_lines = Vec::new();
    let mut lines = Vec::new();

    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        let target = if divisions % 2 == 0 && i == centre {
            &mut centre_lines
        } else {
            &mut lines
        };
        // Parallel to X, then parallel to Z.
        target.extend_from_slice(&[[-half, 0.0, offset], [half, 0.0, offset]]);
        target.extend_from_slice(&[[offset, 0.0, -half], [offset, 0.0, half]]);
    }

    (centre_lines, lines)
}

fn line_mesh(vertices: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh
}

/// Spawns both grid meshes as children of `parent`.
pub fn spawn_ground_grid(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    centre_material: Handle<StandardMaterial>,
    line_material: Handle<StandardMaterial>,
) {
    let (centre_lines, lines) = grid_lines(GRID_SIZE, GRID_DIVISIONS);
    let transform = Transform::from_xyz(0.0, GRID_HEIGHT, 0.0);

    for (vertices, material) in [(centre_lines, centre_material), (lines, line_material)] {
        parent.spawn((
            Mesh3d(meshes.add(line_mesh(vertices))),
            MeshMaterial3d(material),
            NoFrustumCulling,
            transform,
            GroundGrid,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_divisions_have_one_centre_line_per_axis() {
        let (centre, lines) = grid_lines(100.0, 40);
        assert_eq!(centre.len(), 4);
        assert_eq!(lines.len(), 40 * 4);
        assert!(centre.iter().all(|[x, _, z]| *x == 0.0 || *z == 0.0));
    }

    #[test]
    fn lines_span_the_full_size() {
        let (_, lines) = grid_lines(100.0, 40);
        let max = lines
            .iter()
            .flat_map(|[x, _, z]| [x.abs(), z.abs()])
            .fold(0.0_f32, f32::max);
        assert_eq!(max, 50.0);
        assert!(lines.iter().all(|[_, y, _]| *y == 0.0));
    }
}
