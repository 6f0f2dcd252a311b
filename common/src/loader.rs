//! db.json のレスポンス解釈
//!
//! fetch自体はWASM側で行い、ここではステータスと本文だけを扱う

use crate::error::{Error, Result};
use crate::types::Dataset;

/// 2xx以外は読み込み失敗
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::HttpStatus(status))
    }
}

/// 本文をパース
///
/// JSON構文エラーは失敗、トップレベルの形はページング時に検査する
pub fn parse_body(body: &str) -> Result<Dataset> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(Dataset::from_value(value))
}

/// レスポンス（ステータス + 本文）を解釈
///
/// # Arguments
/// * `status` - HTTPステータス
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(Dataset)` - 読み込み成功
/// * `Err` - ステータス異常またはJSONパース失敗
pub fn parse_response(status: u16, body: &str) -> Result<Dataset> {
    check_status(status)?;
    let dataset = parse_body(body)?;
    if let Dataset::Reports(reports) = &dataset {
        tracing::debug!(count = reports.len(), "reports loaded");
    }
    Ok(dataset)
}
