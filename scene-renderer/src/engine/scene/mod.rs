//! The cyber-space backdrop: glyph storm, data bits, sparkles and the floor
//! grid, spawned once the session theme is known.

use bevy::prelude::*;
use constants::palette::ScenePalette;
use constants::render_settings::{DATA_BIT_SPIN, DATA_BIT_THICKNESS, FIELD_SEED, SPARKLE_UNIT};

use crate::engine::core::app_state::AppState;
use crate::engine::render::effects::{palette_for, srgba};
use crate::engine::theme::{SessionTheme, ThemeChanged};

/// Seeded procedural placement of every particle.
pub mod field;

/// Stroke shapes and cached meshes for the code-storm glyphs.
pub mod glyphs;

/// Line-list floor grid.
pub mod grid;

use field::ParticleField;
use glyphs::GlyphMeshes;
use grid::spawn_ground_grid;

/// Root of everything that follows scroll. Holds the eased Y rotation.
#[derive(Component, Default)]
pub struct CodeStorm {
    pub rotation: f32,
}

#[derive(Component)]
pub struct DataBitCloud;

#[derive(Component)]
pub struct Sparkles;

#[derive(Component)]
pub struct Sparkle;

/// Material handles shared by the scene, recoloured in place on theme
/// changes.
#[derive(Resource)]
pub struct SceneMaterials {
    pub glyphs: [Handle<StandardMaterial>; 6],
    pub data_bits: Handle<StandardMaterial>,
    pub sparkles: Handle<StandardMaterial>,
    pub grid_centre: Handle<StandardMaterial>,
    pub grid_lines: Handle<StandardMaterial>,
}

impl SceneMaterials {
    pub fn new(palette: &ScenePalette, materials: &mut Assets<StandardMaterial>) -> Self {
        let mut add = |colour, alpha| materials.add(scene_material(srgba(colour, alpha)));
        Self {
            glyphs: palette.glyphs.map(|colour| add(colour, 1.0)),
            data_bits: add(palette.data_bits, palette.data_bits_opacity),
            sparkles: add(palette.sparkles, palette.sparkle_opacity),
            grid_centre: add(palette.grid_centre, 1.0),
            grid_lines: add(palette.grid_lines, 1.0),
        }
    }

    pub fn recolour(&self, palette: &ScenePalette, materials: &mut Assets<StandardMaterial>) {
        let colours = palette
            .glyphs
            .iter()
            .map(|colour| srgba(*colour, 1.0))
            .chain([
                srgba(palette.data_bits, palette.data_bits_opacity),
                srgba(palette.sparkles, palette.sparkle_opacity),
                srgba(palette.grid_centre, 1.0),
                srgba(palette.grid_lines, 1.0),
            ]);

        for (handle, colour) in self.handles().zip(colours) {
            if let Some(material) = materials.get_mut(handle) {
                *material = scene_material(colour);
            }
        }
    }

    fn handles(&self) -> impl Iterator<Item = &Handle<StandardMaterial>> {
        self.glyphs.iter().chain([
            &self.data_bits,
            &self.sparkles,
            &self.grid_centre,
            &self.grid_lines,
        ])
    }
}

/// Flat colour, blended when translucent. Everything in the scene is
/// emissive-looking line art, so lighting is skipped.
fn scene_material(colour: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: colour,
        alpha_mode: if colour.alpha() < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        unlit: true,
        ..default()
    }
}

pub fn sparkle_scale(palette: &ScenePalette) -> Vec3 {
    Vec3::splat(palette.sparkle_size * SPARKLE_UNIT)
}

pub struct CyberSpacePlugin;

impl Plugin for CyberSpacePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ParticleField::generate(FIELD_SEED))
            .init_resource::<GlyphMeshes>()
            .add_systems(OnEnter(AppState::Running), spawn_cyber_space)
            .add_systems(
                Update,
                (
                    spin_data_bits,
                    recolour_scene.run_if(on_event::<ThemeChanged>),
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}

fn spawn_cyber_space(
    mut commands: Commands,
    session: Res<SessionTheme>,
    field: Res<ParticleField>,
    mut glyph_meshes: ResMut<GlyphMeshes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(theme) = session.effective() else {
        warn!("Scene spawn requested before the theme resolved");
        return;
    };
    let palette = palette_for(theme);
    let scene_materials = SceneMaterials::new(palette, &mut materials);

    let data_bit_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let sparkle_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));

    commands
        .spawn((CodeStorm::default(), Transform::default(), Visibility::default()))
        .with_children(|storm| {
            for particle in &field.glyphs {
                storm.spawn((
                    Mesh3d(glyph_meshes.get_or_build(particle.glyph, &mut meshes)),
                    MeshMaterial3d(scene_materials.glyphs[particle.colour].clone()),
                    Transform::from_translation(particle.position)
                        .with_scale(Vec3::splat(particle.scale)),
                ));
            }

            storm
                .spawn((DataBitCloud, Transform::default(), Visibility::default()))
                .with_children(|cloud| {
                    for bit in &field.data_bits {
                        cloud.spawn((
                            Mesh3d(data_bit_mesh.clone()),
                            MeshMaterial3d(scene_materials.data_bits.clone()),
                            Transform {
                                translation: bit.position,
                                rotation: Quat::from_euler(EulerRot::XYZ, bit.tilt.x, bit.tilt.y, 0.0),
                                scale: Vec3::new(DATA_BIT_THICKNESS, bit.length, DATA_BIT_THICKNESS),
                            },
                        ));
                    }
                });

            spawn_ground_grid(
                storm,
                &mut meshes,
                scene_materials.grid_centre.clone(),
                scene_materials.grid_lines.clone(),
            );
        });

    commands
        .spawn((Sparkles, Transform::default(), Visibility::default()))
        .with_children(|sparkles| {
            for position in &field.sparkles {
                sparkles.spawn((
                    Mesh3d(sparkle_mesh.clone()),
                    MeshMaterial3d(scene_materials.sparkles.clone()),
                    Transform::from_translation(*position).with_scale(sparkle_scale(palette)),
                    Sparkle,
                ));
            }
        });

    info!(
        "Spawned cyber space: {} glyphs ({} shapes), {} data bits, {} sparkles",
        field.glyphs.len(),
        glyph_meshes.len(),
        field.data_bits.len(),
        field.sparkles.len()
    );
    commands.insert_resource(scene_materials);
}

fn spin_data_bits(time: Res<Time>, mut clouds: Query<&mut Transform, With<DataBitCloud>>) {
    for mut transform in &mut clouds {
        transform.rotation = Quat::from_rotation_y(time.elapsed_secs() * DATA_BIT_SPIN);
    }
}

fn recolour_scene(
    mut changes: EventReader<ThemeChanged>,
    scene_materials: Option<Res<SceneMaterials>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut sparkles: Query<&mut Transform, With<Sparkle>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    let Some(scene_materials) = scene_materials else {
        return;
    };
    let palette = palette_for(change.theme);

    scene_materials.recolour(palette, &mut materials);
    let scale = sparkle_scale(palette);
    for mut transform in &mut sparkles {
        transform.scale = scale;
    }
    debug!("Recoloured scene for {} theme", change.theme);
}
