pub mod engine;

pub use engine::ClipshiftEngine;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    #[cfg(feature = "browser_log")]
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn greet() -> String {
    "Hello from Clipshift Client WASM!".into()
}

/// Names accepted by `ClipshiftEngine::new` and `reset`
#[wasm_bindgen]
pub fn scenario_names() -> Vec<String> {
    clipshift_core::Scenario::ALL
        .iter()
        .map(|s| s.as_str().to_string())
        .collect()
}
