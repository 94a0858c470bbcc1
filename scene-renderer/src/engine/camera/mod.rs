//! Scene camera and the two motion variants.
//!
//! The scroll variant eases the code storm toward the page's scroll position
//! and lets the camera follow the pointer. The orbit variant drifts the
//! camera on a fixed loop.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use constants::render_settings::{CAMERA_FOV_DEGREES, CAMERA_POSITION};

use crate::engine::core::app_state::AppState;
use crate::engine::variant::SceneVariant;

/// Easing, orbit and scroll-target maths plus the systems applying them.
pub mod rig;

#[derive(Component)]
pub struct SceneCamera;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene_camera).add_systems(
            Update,
            (
                rig::ease_code_storm,
                rig::follow_pointer.run_if(resource_equals(SceneVariant::Scroll)),
                rig::orbit_camera.run_if(resource_equals(SceneVariant::Orbit)),
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}

fn spawn_scene_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        // Palette colours are authored in display space.
        Tonemapping::None,
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(CAMERA_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
        SceneCamera,
    ));
}
