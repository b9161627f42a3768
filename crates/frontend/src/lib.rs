pub mod app;
pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let app = app::App::new();
    log::info!("API at {}", app.client.config().base_url);
}
