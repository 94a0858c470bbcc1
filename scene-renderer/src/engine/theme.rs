//! Session theme: the visitor's stored preference combined with the ambient
//! platform signal, resolved once after mount and kept in sync over RPC.

use bevy::prelude::*;
use portfolio_core::theme::resolve;
use portfolio_core::{Resolution, Theme, ThemePreference};
use serde::Serialize;

use crate::engine::platform;
use crate::rpc::web_rpc::RpcSystems;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SessionTheme {
    pub preference: ThemePreference,
    pub ambient: Theme,
    effective: Resolution<Theme>,
}

impl Default for SessionTheme {
    fn default() -> Self {
        Self {
            preference: ThemePreference::System,
            ambient: Theme::Light,
            effective: Resolution::Unresolved,
        }
    }
}

/// Payload of the `theme_resolved` notification. Carries the toggle's label
/// and the preference a click should request, so the host page never
/// re-derives theme rules.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeReport {
    pub preference: ThemePreference,
    pub effective: Theme,
    pub toggle_label: &'static str,
    pub next_preference: ThemePreference,
}

impl SessionTheme {
    /// Completes the mount gate with both inputs known.
    pub fn resolve_with(&mut self, preference: ThemePreference, ambient: Theme) -> Theme {
        self.preference = preference;
        self.ambient = ambient;
        let theme = resolve(preference, ambient);
        self.effective = Resolution::Resolved(theme);
        theme
    }

    pub fn is_resolved(&self) -> bool {
        self.effective.is_resolved()
    }

    pub fn effective(&self) -> Option<Theme> {
        self.effective.resolved()
    }

    /// Explicit choice from the toggle. Before resolution only the inputs
    /// are recorded.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.refresh();
    }

    pub fn set_ambient(&mut self, ambient: Theme) {
        self.ambient = ambient;
        self.refresh();
    }

    fn refresh(&mut self) {
        if self.is_resolved() {
            self.effective = Resolution::Resolved(resolve(self.preference, self.ambient));
        }
    }

    pub fn report(&self) -> Option<ThemeReport> {
        let effective = self.effective()?;
        Some(ThemeReport {
            preference: self.preference,
            effective,
            toggle_label: self.preference.toggle_label(),
            next_preference: self.preference.toggled(),
        })
    }
}

/// Fired whenever the effective theme changes, including the first
/// resolution.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    pub theme: Theme,
}

pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionTheme>()
            .add_event::<ThemeChanged>()
            .add_systems(
                Update,
                announce_theme_changes
                    .after(RpcSystems)
                    .run_if(resource_changed::<SessionTheme>),
            );
    }
}

/// Reads the stored preference and ambient signal and resolves the session
/// theme. Runs while mounting; a no-op once resolved.
pub fn resolve_session_theme(mut session: ResMut<SessionTheme>) {
    if session.is_resolved() {
        return;
    }
    let preference = platform::stored_preference();
    let ambient = platform::ambient_theme();
    let theme = session.resolve_with(preference, ambient);
    info!(
        "Session theme resolved: preference={} ambient={} effective={}",
        preference, ambient, theme
    );
}

/// Emits [`ThemeChanged`] when the effective theme differs from the last
/// one announced. Preference edits that keep the same effective theme stay
/// silent.
fn announce_theme_changes(
    session: Res<SessionTheme>,
    mut announced: Local<Option<Theme>>,
    mut changes: EventWriter<ThemeChanged>,
) {
    let Some(theme) = session.effective() else {
        return;
    };
    if *announced != Some(theme) {
        debug!("Effective theme is now {}", theme);
        *announced = Some(theme);
        changes.write(ThemeChanged { theme });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_reported_before_resolution() {
        let mut session = SessionTheme::default();
        session.set_preference(ThemePreference::Dark);
        assert!(!session.is_resolved());
        assert_eq!(session.report(), None);
    }

    #[test]
    fn system_preference_follows_ambient_changes() {
        let mut session = SessionTheme::default();
        assert_eq!(session.resolve_with(ThemePreference::System, Theme::Dark), Theme::Dark);
        session.set_ambient(Theme::Light);
        assert_eq!(session.effective(), Some(Theme::Light));
    }

    #[test]
    fn explicit_preference_ignores_ambient() {
        let mut session = SessionTheme::default();
        session.resolve_with(ThemePreference::Light, Theme::Dark);
        session.set_ambient(Theme::Dark);
        assert_eq!(session.effective(), Some(Theme::Light));
    }

    #[test]
    fn report_names_the_next_toggle_state() {
        let mut session = SessionTheme::default();
        session.resolve_with(ThemePreference::Dark, Theme::Light);
        let report = session.report().unwrap();
        assert_eq!(report.toggle_label, "LIGHT MODE");
        assert_eq!(report.next_preference, ThemePreference::Light);

        session.set_preference(ThemePreference::Light);
        let report = session.report().unwrap();
        assert_eq!(report.effective, Theme::Light);
        assert_eq!(report.toggle_label, "DARK MODE");
        assert_eq!(report.next_preference, ThemePreference::Dark);
    }

    #[test]
    fn report_serialises_lowercase() {
        let mut session = SessionTheme::default();
        session.resolve_with(ThemePreference::System, Theme::Dark);
        let json = serde_json::to_value(session.report().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "preference": "system",
                "effective": "dark",
                "toggle_label": "DARK MODE",
                "next_preference": "dark"
            })
        );
    }

    #[test]
    fn only_effective_changes_are_announced() {
        let mut app = App::new();
        app.init_resource::<SessionTheme>()
            .add_event::<ThemeChanged>()
            .add_systems(Update, announce_theme_changes);
        let mut cursor = app.world().resource::<Events<ThemeChanged>>().get_cursor();

        app.update();
        let events = app.world().resource::<Events<ThemeChanged>>();
        assert_eq!(cursor.read(events).count(), 0);

        app.world_mut()
            .resource_mut::<SessionTheme>()
            .resolve_with(ThemePreference::System, Theme::Dark);
        app.update();
        let events = app.world().resource::<Events<ThemeChanged>>();
        let announced: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(announced, vec![ThemeChanged { theme: Theme::Dark }]);

        // Same effective theme, different preference.
        app.world_mut()
            .resource_mut::<SessionTheme>()
            .set_preference(ThemePreference::Dark);
        app.update();
        let events = app.world().resource::<Events<ThemeChanged>>();
        assert_eq!(cursor.read(events).count(), 0);

        app.world_mut()
            .resource_mut::<SessionTheme>()
            .set_preference(ThemePreference::Light);
        app.update();
        let events = app.world().resource::<Events<ThemeChanged>>();
        assert_eq!(cursor.read(events).count(), 1);
    }
}
