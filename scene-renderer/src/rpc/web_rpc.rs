use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

use super::scene_methods::{SceneRpcContext, dispatch};
use crate::engine::input::SceneInput;
use crate::engine::theme::{SessionTheme, ThemeReport};
use crate::engine::variant::SceneVariant;

/// JSON-RPC 2.0 request structure. Without an `id` it is a notification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcResponse {
    pub fn from_result(id: serde_json::Value, result: Result<serde_json::Value, RpcError>) -> Self {
        let (result, error) = match result {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            result,
            error,
            id: Some(id),
        }
    }
}

impl RpcNotification {
    pub fn new(method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }
    }
}

/// Resource managing bidirectional RPC communication with the host page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications
            .push(RpcNotification::new(method, params));
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Receive, dispatch and reply, in that order, once per frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RpcSystems;

/// Plugin establishing the WebRPC layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    report_session_theme,
                    send_outgoing_messages,
                )
                    .chain()
                    .in_set(RpcSystems),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

/// Thread-safe message queue filled by the browser listener.
#[derive(Resource, Clone, Default)]
pub struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

impl MessageQueue {
    /// Queues a raw message if it looks like JSON-RPC.
    pub fn push(&self, message: String) {
        if !message.contains("jsonrpc") {
            return;
        }
        if let Ok(mut queue) = self.0.lock() {
            queue.push(message);
        }
    }

    fn drain(&self) -> Vec<String> {
        match self.0.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    let message_queue = MessageQueue::default();
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads are bridge messages.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            queue_clone.push(data.into());
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) =
                window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
            }
        }
        None => error!("Window object not available, bridge disabled"),
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(message_queue);
}

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue) = message_queue else {
        return;
    };

    for content in queue.drain() {
        message_events.write(IncomingRpcMessage { content });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut input: ResMut<SceneInput>,
    mut theme: ResMut<SessionTheme>,
    variant: Res<SceneVariant>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                continue;
            }
        };

        let mut ctx = SceneRpcContext {
            input: &mut *input,
            theme: &mut *theme,
            variant: *variant,
        };
        if let Some(response) = handle_rpc_request(&request, &mut ctx) {
            rpc_interface.queue_response(response);
        }
    }
}

/// Dispatches one request. Only requests with an id get a response.
pub fn handle_rpc_request(
    request: &RpcRequest,
    ctx: &mut SceneRpcContext<'_>,
) -> Option<RpcResponse> {
    let result = dispatch(request, ctx);

    if let Err(error) = &result {
        warn!("RPC {} failed: {}", request.method, error.message);
    }

    let id = request.id.clone()?;
    Some(RpcResponse::from_result(id, result))
}

/// Sends `theme_resolved` whenever the reported theme state changes: once
/// when the mount gate opens and after every preference or ambient change
/// that alters it.
fn report_session_theme(
    theme: Res<SessionTheme>,
    mut reported: Local<Option<ThemeReport>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !theme.is_changed() {
        return;
    }
    let Some(report) = theme.report() else {
        return;
    };
    if reported.as_ref() == Some(&report) {
        return;
    }

    match serde_json::to_value(&report) {
        Ok(params) => rpc_interface.send_notification("theme_resolved", params),
        Err(e) => error!("Failed to serialise theme report: {}", e),
    }
    *reported = Some(report);
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
pub(crate) fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
