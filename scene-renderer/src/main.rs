//! Decorative 3D backdrop for the portfolio pages, embedded as an iframe.
//! The host page drives it over a JSON-RPC bridge.

mod engine;
mod rpc;

use engine::core::app_setup::create_app;
use engine::core::surface::run_without_scene;
use engine::platform::accelerated_surface_available;

fn main() {
    if !accelerated_surface_available() {
        run_without_scene();
        return;
    }

    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
