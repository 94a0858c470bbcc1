//! Pointer and scroll inputs that drive the camera rig.
//!
//! Inside the iframe the host page owns scrolling and the pointer, so the
//! values arrive over the bridge. Native builds read the window directly.

use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    window::{CursorMoved, PrimaryWindow},
};

/// Wheel lines per full page of native scroll.
#[cfg(not(target_arch = "wasm32"))]
const LINES_PER_PAGE: f32 = 30.0;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneInput {
    scroll_progress: f32,
    /// Normalised device coordinates, `-1..1` with Y up.
    pub pointer: Vec2,
}

impl SceneInput {
    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.scroll_progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        let clamp = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.pointer = Vec2::new(clamp(x), clamp(y));
    }
}

/// Scroll progress of a page: offset over scrollable height, zero when the
/// page does not scroll.
pub fn scroll_progress(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let total = scroll_height - viewport_height;
    if total > 0.0 {
        (scroll_y / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub struct SceneInputPlugin;

impl Plugin for SceneInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneInput>();

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(PreUpdate, (track_native_pointer, track_native_scroll));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn track_native_pointer(
    mut cursor_events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<SceneInput>,
) {
    let Some(event) = cursor_events.read().last() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    input.set_pointer(
        event.position.x / size.x * 2.0 - 1.0,
        -(event.position.y / size.y) * 2.0 + 1.0,
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn track_native_scroll(mut wheel_events: EventReader<MouseWheel>, mut input: ResMut<SceneInput>) {
    let mut lines = 0.0;
    for event in wheel_events.read() {
        lines += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 16.0,
        };
    }
    if lines != 0.0 {
        let progress = input.scroll_progress() - lines / LINES_PER_PAGE;
        input.set_scroll_progress(progress);
    }
}
