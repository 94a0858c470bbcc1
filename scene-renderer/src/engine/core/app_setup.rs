use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

use crate::engine::camera::CameraRigPlugin;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::SceneInputPlugin;
use crate::engine::platform;
use crate::engine::render::effects::SceneEffectsPlugin;
use crate::engine::render::post_processing::CyberPostProcessPlugin;
use crate::engine::scene::CyberSpacePlugin;
use crate::engine::theme::{ThemePlugin, resolve_session_theme};
use crate::rpc::web_rpc::{RpcSystems, WebRpcPlugin};

pub fn create_app() -> App {
    let mut app = App::new();
    let variant = platform::scene_variant();
    info!("Scene variant: {}", variant.as_str());

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .insert_resource(variant)
        // Transparent until the mount gate opens.
        .insert_resource(ClearColor(Color::NONE))
        .add_plugins(ThemePlugin)
        .add_plugins(SceneInputPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(CyberPostProcessPlugin)
        .add_plugins(SceneEffectsPlugin)
        .add_plugins(CameraRigPlugin)
        .add_plugins(CyberSpacePlugin);

    app.add_systems(
        Update,
        (resolve_session_theme, transition_to_running)
            .chain()
            .before(RpcSystems)
            .run_if(in_state(AppState::Mounting)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../../../Cargo.toml");

    #[test]
    fn bevy_builds_only_the_scene_feature_set() {
        let bevy = MANIFEST
            .lines()
            .find(|line| line.starts_with("bevy ="))
            .unwrap();
        assert!(bevy.contains("default-features = false"));
        for unused in ["bevy_audio", "bevy_ui", "bevy_text", "bevy_gltf", "\"dds\"", "\"exr\""] {
            assert!(!MANIFEST.contains(unused), "{unused} is enabled");
        }
        for needed in ["bevy_state", "bevy_pbr", "bevy_core_pipeline", "webgpu"] {
            assert!(MANIFEST.contains(needed), "{needed} is missing");
        }
    }
}
