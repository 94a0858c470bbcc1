use std::f32::consts::PI;

use bevy::prelude::*;
use constants::render_settings::{
    EASE_RATE, ORBIT_RADIUS, ORBIT_SPEED, POINTER_SENSITIVITY, SCROLL_LIFT,
    SCROLL_ROTATION_TURNS,
};

use super::SceneCamera;
use crate::engine::input::SceneInput;
use crate::engine::scene::CodeStorm;

/// Moves `current` toward `target` by a frame-rate independent share.
/// Long frames snap instead of overshooting.
pub fn ease(current: f32, target: f32, delta: f32) -> f32 {
    let t = (delta * EASE_RATE).clamp(0.0, 1.0);
    current + (target - current) * t
}

/// Y rotation and lift the code storm eases toward at a scroll position.
pub fn scroll_targets(progress: f32) -> (f32, f32) {
    (
        progress * PI * SCROLL_ROTATION_TURNS,
        progress * SCROLL_LIFT,
    )
}

pub fn pointer_target(pointer: Vec2) -> Vec2 {
    pointer * POINTER_SENSITIVITY
}

/// Camera position on the detail-page orbit at `elapsed` seconds.
pub fn orbit_position(elapsed: f32, depth: f32) -> Vec3 {
    let angle = elapsed * ORBIT_SPEED;
    Vec3::new(angle.sin() * ORBIT_RADIUS, angle.cos() * ORBIT_RADIUS, depth)
}

pub fn ease_code_storm(
    time: Res<Time>,
    input: Res<SceneInput>,
    mut storms: Query<(&mut CodeStorm, &mut Transform)>,
) {
    let delta = time.delta_secs();
    let (target_rotation, target_lift) = scroll_targets(input.scroll_progress());

    for (mut storm, mut transform) in &mut storms {
        storm.rotation = ease(storm.rotation, target_rotation, delta);
        transform.rotation = Quat::from_rotation_y(storm.rotation);
        transform.translation.y = ease(transform.translation.y, target_lift, delta);
    }
}

pub fn follow_pointer(
    time: Res<Time>,
    input: Res<SceneInput>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    let delta = time.delta_secs();
    let target = pointer_target(input.pointer);

    for mut transform in &mut cameras {
        transform.translation.x = ease(transform.translation.x, target.x, delta);
        transform.translation.y = ease(transform.translation.y, target.y, delta);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

pub fn orbit_camera(time: Res<Time>, mut cameras: Query<&mut Transform, With<SceneCamera>>) {
    let elapsed = time.elapsed_secs();

    for mut transform in &mut cameras {
        transform.translation = orbit_position(elapsed, transform.translation.z);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_moves_proportionally_and_never_overshoots() {
        assert!((ease(0.0, 10.0, 0.1) - 2.0).abs() < 1e-5);
        assert_eq!(ease(0.0, 10.0, 1.0), 10.0);
        assert_eq!(ease(3.0, 3.0, 0.016), 3.0);
    }

    #[test]
    fn scroll_maps_to_half_turn_and_lift() {
        assert_eq!(scroll_targets(0.0), (0.0, 0.0));
        let (rotation, lift) = scroll_targets(1.0);
        assert!((rotation - PI).abs() < 1e-6);
        assert!((lift - 15.0).abs() < 1e-6);
    }

    #[test]
    fn pointer_offsets_camera_by_sensitivity() {
        assert_eq!(pointer_target(Vec2::new(1.0, -0.5)), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn orbit_starts_above_origin_and_keeps_radius() {
        let start = orbit_position(0.0, 10.0);
        assert!((start - Vec3::new(0.0, 2.0, 10.0)).length() < 1e-6);

        for t in [1.0, 7.5, 31.4] {
            let p = orbit_position(t, 10.0);
            assert!((p.truncate().length() - 2.0).abs() < 1e-5);
            assert_eq!(p.z, 10.0);
        }
    }
}
