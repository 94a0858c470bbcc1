//! JSON-RPC 2.0 bridge between the scene iframe and the host page.
//!
//! Messages travel as JSON strings over `postMessage`. The host forwards
//! what only it can observe (scroll, pointer, ambient theme) and the theme
//! toggle's clicks; the scene owns the session theme and reports it back.
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Scene (iframe)
//!        │                                        │
//!        ├─ scroll_changed / pointer_moved ─────> │  (notifications)
//!        ├─ set_theme / ambient_theme_changed ──> │
//!        ├─ get_scene_state (with id) ──────────> │
//!        │ <──────────────────── Response (id) ───┤
//!        │ <──────────── theme_resolved ──────────┤  (notification)
//!        │ <──────────── scene_unavailable ───────┤  (no surface)
//! ```
//!
//! Errors use the standard codes: `-32601` method not found, `-32602`
//! invalid params. Notifications never get a response, errors included.

/// Transport: message listener, queues and the Bevy plugin.
pub mod web_rpc;

/// Method table shared by the Bevy app and the no-surface fallback.
pub mod scene_methods;
