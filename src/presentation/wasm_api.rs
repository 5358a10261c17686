use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use wasm_bindgen::prelude::*;

/// Mount the calculator panels into the document body.
#[wasm_bindgen]
pub fn mount_calculators() {
    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        "🚀 Mounting MarketCalc panels",
    );
    leptos::mount_to_body(App);
}
