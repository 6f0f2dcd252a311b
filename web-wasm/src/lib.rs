//! Report Browser Web App (Leptos + WASM)

pub mod app;
pub mod components;
mod api;


use leptos::prelude::*;
use app::App;
use report_browser_common::BrowserConfig;

/// ホストページに埋め込む設定ブロックのID
const CONFIG_ELEMENT_ID: &str = "report-browser-config";

#[cfg_attr(not(test), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = load_config();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// `<script id="report-browser-config" type="application/json">` があれば読む
fn load_config() -> BrowserConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(json) => BrowserConfig::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid config block, using defaults");
            BrowserConfig::default()
        }),
        None => BrowserConfig::default(),
    }
}
