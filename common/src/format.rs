//! 表示用フォーマット

use std::fmt::Display;

/// 欠損値のプレースホルダ
pub const PLACEHOLDER: &str = "-";

/// 表示用文字列に変換
///
/// 値なし・空文字は `-` にする
pub fn format_display_value<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value.map(|v| v.to_string()) {
        Some(s) if !s.is_empty() => s,
        _ => PLACEHOLDER.to_string(),
    }
}

/// 通貨表記に変換（`$` 接頭辞、欠損時は `-`）
pub fn format_currency<T: Display + ?Sized>(value: Option<&T>) -> String {
    let display = format_display_value(value);
    if display == PLACEHOLDER {
        display
    } else {
        format!("${}", display)
    }
}
