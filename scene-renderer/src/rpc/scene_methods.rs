use portfolio_core::{Theme, ThemePreference};
use serde::Deserialize;
use serde_json::{Value, json};

use super::web_rpc::{RpcError, RpcRequest};
use crate::engine::input::SceneInput;
use crate::engine::platform;
use crate::engine::theme::SessionTheme;
use crate::engine::variant::SceneVariant;

/// Everything a bridge method may read or change.
pub struct SceneRpcContext<'a> {
    pub input: &'a mut SceneInput,
    pub theme: &'a mut SessionTheme,
    pub variant: SceneVariant,
}

pub fn dispatch(request: &RpcRequest, ctx: &mut SceneRpcContext<'_>) -> Result<Value, RpcError> {
    match request.method.as_str() {
        "scroll_changed" => handle_scroll_changed(&request.params, ctx),
        "pointer_moved" => handle_pointer_moved(&request.params, ctx),
        "set_theme" => handle_set_theme(&request.params, ctx),
        "ambient_theme_changed" => handle_ambient_theme_changed(&request.params, ctx),
        "get_scene_state" => Ok(scene_state(ctx)),
        _ => Err(RpcError::method_not_found(&request.method)),
    }
}

fn parse<T: for<'de> Deserialize<'de>>(params: &Value, expected: &str) -> Result<T, RpcError> {
    serde_json::from_value(params.clone()).map_err(|_| RpcError::invalid_params(expected))
}

fn handle_scroll_changed(params: &Value, ctx: &mut SceneRpcContext<'_>) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct ScrollParams {
        progress: f32,
    }

    let parsed: ScrollParams = parse(params, "Expected numeric 'progress' parameter")?;
    ctx.input.set_scroll_progress(parsed.progress);
    Ok(json!({ "progress": ctx.input.scroll_progress() }))
}

fn handle_pointer_moved(params: &Value, ctx: &mut SceneRpcContext<'_>) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct PointerParams {
        x: f32,
        y: f32,
    }

    let parsed: PointerParams = parse(params, "Expected numeric 'x' and 'y' parameters")?;
    ctx.input.set_pointer(parsed.x, parsed.y);
    Ok(json!({ "x": ctx.input.pointer.x, "y": ctx.input.pointer.y }))
}

fn handle_set_theme(params: &Value, ctx: &mut SceneRpcContext<'_>) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct SetThemeParams {
        preference: ThemePreference,
    }

    let parsed: SetThemeParams =
        parse(params, "Expected 'preference' of light, dark or system")?;
    ctx.theme.set_preference(parsed.preference);
    platform::persist_preference(parsed.preference);
    Ok(theme_value(ctx.theme))
}

fn handle_ambient_theme_changed(
    params: &Value,
    ctx: &mut SceneRpcContext<'_>,
) -> Result<Value, RpcError> {
    #[derive(Deserialize)]
    struct AmbientParams {
        ambient: Theme,
    }

    let parsed: AmbientParams = parse(params, "Expected 'ambient' of light or dark")?;
    ctx.theme.set_ambient(parsed.ambient);
    Ok(theme_value(ctx.theme))
}

fn theme_value(theme: &SessionTheme) -> Value {
    match theme.report() {
        Some(report) => json!(report),
        None => json!({ "resolved": false, "preference": theme.preference }),
    }
}

fn scene_state(ctx: &SceneRpcContext<'_>) -> Value {
    json!({
        "variant": ctx.variant.as_str(),
        "resolved": ctx.theme.is_resolved(),
        "theme": theme_value(ctx.theme),
        "scroll_progress": ctx.input.scroll_progress(),
        "pointer": { "x": ctx.input.pointer.x, "y": ctx.input.pointer.y },
    })
}
