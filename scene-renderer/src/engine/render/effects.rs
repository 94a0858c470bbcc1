//! Theme-driven environment: clear colour, ambient light and the heavy
//! camera effects that only the dark theme carries.

use bevy::core_pipeline::bloom::Bloom;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use constants::palette::{DARK, LIGHT, Rgb8, ScenePalette};
use constants::render_settings::{BLOOM_INTENSITY, FOG_END, FOG_START};
use portfolio_core::Theme;

use crate::engine::camera::SceneCamera;
use crate::engine::core::app_state::AppState;
use crate::engine::render::post_processing::CyberPostSettings;
use crate::engine::theme::{SessionTheme, ThemeChanged};

pub fn palette_for(theme: Theme) -> &'static ScenePalette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

pub fn srgb(colour: Rgb8) -> Color {
    Color::srgb_u8(colour.r, colour.g, colour.b)
}

pub fn srgba(colour: Rgb8, alpha: f32) -> Color {
    srgb(colour).with_alpha(alpha)
}

pub struct SceneEffectsPlugin;

impl Plugin for SceneEffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), apply_theme_environment)
            .add_systems(
                Update,
                apply_theme_environment
                    .run_if(in_state(AppState::Running))
                    .run_if(on_event::<ThemeChanged>),
            );
    }
}

pub fn apply_theme_environment(
    mut commands: Commands,
    session: Res<SessionTheme>,
    mut clear_colour: ResMut<ClearColor>,
    cameras: Query<Entity, With<SceneCamera>>,
) {
    let Some(theme) = session.effective() else {
        return;
    };
    let palette = palette_for(theme);

    clear_colour.0 = srgb(palette.background);
    commands.insert_resource(AmbientLight {
        brightness: AmbientLight::default().brightness * palette.ambient_intensity,
        ..default()
    });

    for camera in &cameras {
        let mut entity = commands.entity(camera);
        match palette.fog {
            Some(fog) => {
                entity.insert(DistanceFog {
                    color: srgb(fog),
                    falloff: FogFalloff::Linear {
                        start: FOG_START,
                        end: FOG_END,
                    },
                    ..default()
                });
            }
            None => {
                entity.remove::<DistanceFog>();
            }
        }

        if palette.post_processing {
            entity.insert((
                Bloom {
                    intensity: BLOOM_INTENSITY,
                    ..Bloom::NATURAL
                },
                CyberPostSettings::default(),
            ));
        } else {
            entity.remove::<(Bloom, CyberPostSettings)>();
        }
    }

    info!("Applied {} environment", theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::ThemePreference;

    fn environment_app(preference: ThemePreference) -> (App, Entity) {
        let mut app = App::new();
        let mut session = SessionTheme::default();
        session.resolve_with(preference, Theme::Light);
        app.insert_resource(session)
            .insert_resource(ClearColor(Color::NONE))
            .add_systems(Update, apply_theme_environment);
        let camera = app.world_mut().spawn(SceneCamera).id();
        (app, camera)
    }

    #[test]
    fn palettes_follow_theme() {
        assert_eq!(palette_for(Theme::Dark), &DARK);
        assert_eq!(palette_for(Theme::Light), &LIGHT);
        assert_eq!(
            srgb(DARK.background).to_srgba().to_u8_array(),
            [0x02, 0x06, 0x17, 0xff]
        );
    }

    #[test]
    fn dark_adds_effects_and_light_removes_them() {
        let (mut app, camera) = environment_app(ThemePreference::Dark);
        app.update();

        let entity = app.world().entity(camera);
        assert!(entity.contains::<Bloom>());
        assert!(entity.contains::<DistanceFog>());
        assert!(entity.contains::<CyberPostSettings>());
        assert_eq!(app.world().resource::<ClearColor>().0, srgb(DARK.background));

        app.world_mut()
            .resource_mut::<SessionTheme>()
            .set_preference(ThemePreference::Light);
        app.update();

        let entity = app.world().entity(camera);
        assert!(!entity.contains::<Bloom>());
        assert!(!entity.contains::<DistanceFog>());
        assert!(!entity.contains::<CyberPostSettings>());
        assert_eq!(app.world().resource::<ClearColor>().0, srgb(LIGHT.background));
        assert_eq!(
            app.world().resource::<AmbientLight>().brightness,
            AmbientLight::default().brightness
        );
    }

    #[test]
    fn unresolved_session_leaves_the_page_transparent() {
        let mut app = App::new();
        app.init_resource::<SessionTheme>()
            .insert_resource(ClearColor(Color::NONE))
            .add_systems(Update, apply_theme_environment);
        app.update();
        assert_eq!(app.world().resource::<ClearColor>().0, Color::NONE);
    }
}
