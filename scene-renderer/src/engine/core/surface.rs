//! Fallback for pages that cannot host an accelerated canvas.
//!
//! The scene app never starts. The theme is still resolved and reported so
//! the host page can reveal its toggle, and the bridge keeps answering theme
//! messages. The host hides the iframe on `scene_unavailable`.

use serde_json::json;

use crate::engine::input::SceneInput;
use crate::engine::platform;
use crate::engine::theme::{SessionTheme, ThemeReport};
use crate::engine::variant::SceneVariant;
use crate::rpc::scene_methods::SceneRpcContext;
use crate::rpc::web_rpc::{RpcNotification, RpcRequest, handle_rpc_request, send_message_to_parent};

/// Session state the fallback bridge keeps between messages.
#[derive(Default)]
pub struct FallbackSession {
    input: SceneInput,
    theme: SessionTheme,
    variant: SceneVariant,
    reported: Option<ThemeReport>,
}

impl FallbackSession {
    pub fn start(variant: SceneVariant) -> Self {
        let mut theme = SessionTheme::default();
        theme.resolve_with(platform::stored_preference(), platform::ambient_theme());
        Self {
            theme,
            variant,
            ..Self::default()
        }
    }

    /// Handles one raw bridge message and returns what should be posted
    /// back, in order.
    pub fn handle(&mut self, message: &str) -> Vec<serde_json::Value> {
        let Ok(request) = serde_json::from_str::<RpcRequest>(message) else {
            return Vec::new();
        };

        let mut ctx = SceneRpcContext {
            input: &mut self.input,
            theme: &mut self.theme,
            variant: self.variant,
        };
        let response = handle_rpc_request(&request, &mut ctx);

        let mut outgoing: Vec<serde_json::Value> = self.theme_notification().into_iter().collect();
        if let Some(response) = response.and_then(|r| serde_json::to_value(r).ok()) {
            outgoing.push(response);
        }
        outgoing
    }

    /// `theme_resolved` if the report changed since it was last sent.
    pub fn theme_notification(&mut self) -> Option<serde_json::Value> {
        let report = self.theme.report()?;
        if self.reported.as_ref() == Some(&report) {
            return None;
        }
        let params = serde_json::to_value(&report).ok()?;
        self.reported = Some(report);
        serde_json::to_value(RpcNotification::new("theme_resolved", params)).ok()
    }
}

/// Resolves and reports the theme, announces that no scene will render and
/// keeps serving theme messages from the host.
pub fn run_without_scene() {
    let mut session = FallbackSession::start(platform::scene_variant());

    if let Some(notification) = session.theme_notification() {
        send_message_to_parent(&notification);
    }
    send_message_to_parent(&RpcNotification::new(
        "scene_unavailable",
        json!({ "reason": "no WebGPU or WebGL2 context" }),
    ));

    #[cfg(target_arch = "wasm32")]
    listen(session);
}

#[cfg(target_arch = "wasm32")]
fn listen(session: FallbackSession) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{MessageEvent, console, window};

    let session = Rc::new(RefCell::new(session));
    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message: String = data.into();
        for outgoing in session.borrow_mut().handle(&message) {
            send_message_to_parent(&outgoing);
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
                .is_err()
            {
                console::error_1(&"Failed to register fallback message listener".into());
            }
        }
        None => console::error_1(&"Window object not available".into()),
    }
    closure.forget();
}
