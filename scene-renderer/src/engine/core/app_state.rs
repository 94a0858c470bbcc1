use bevy::prelude::*;

use crate::engine::theme::SessionTheme;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// First frames: nothing is drawn until the session theme resolves.
    #[default]
    Mounting,
    Running,
}

pub fn transition_to_running(
    session: Res<SessionTheme>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if session.is_resolved() {
        info!("→ Session theme resolved, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
