//! db.json の取得
//!
//! 起動時に1回だけ、キャッシュを使わずに取得する。再試行はしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};
use report_browser_common::{loader, Dataset, Error, Result};

/// レポート一覧を読み込む
///
/// # Arguments
/// * `url` - db.json の相対パス
///
/// # Returns
/// * `Ok(Dataset)` - 読み込み成功（配列かどうかはページング時に検査）
/// * `Err` - 通信失敗、ステータス異常、JSON構文エラー
pub async fn load_reports(url: &str) -> Result<Dataset> {
    let (status, body) = fetch_text(url)
        .await
        .map_err(|e| Error::Fetch(js_error_message(&e)))?;

    loader::parse_response(status, &body)
}

async fn fetch_text(url: &str) -> std::result::Result<(u16, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
