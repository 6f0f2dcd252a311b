//! 表示モデル
//!
//! ブラウズ状態から導出される宣言的な表示内容。
//! DOM側はこれをそのまま描画するだけで、差分更新は前提にしない。

use crate::format::{format_currency, format_display_value};
use crate::types::Report;

/// 結果テーブルの列数
pub const TABLE_COLUMNS: usize = 6;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No results found";
pub const LOAD_FAILED_MESSAGE: &str =
    "db.json couldn't load. Please run the page from a local server.";

/// 結果テーブル本体
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Loading,
    Rows(Vec<RowView>),
    /// 0件（エラーではない）
    Empty,
    /// ページング時のデータ形状エラー
    RenderError(String),
    /// 起動時の読み込み失敗（終端状態）
    LoadFailed,
}

/// 1セルのプレースホルダ行
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub class: &'static str,
    pub message: String,
}

impl TableBody {
    pub fn rows(&self) -> &[RowView] {
        match self {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        let (class, message) = match self {
            TableBody::Rows(_) => return None,
            TableBody::Loading => ("loading", LOADING_MESSAGE.to_string()),
            TableBody::Empty => ("empty-state", EMPTY_MESSAGE.to_string()),
            TableBody::RenderError(msg) => ("error", format!("Error loading results: {}", msg)),
            TableBody::LoadFailed => ("error", LOAD_FAILED_MESSAGE.to_string()),
        };
        Some(Placeholder { class, message })
    }

    /// "showing N" に出す件数
    pub fn showing_count(&self) -> usize {
        self.rows().len()
    }
}

/// テーブル1行分
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// コレクション内の位置（リストのキー）
    pub key: usize,
    pub image_url: Option<String>,
    pub query: String,
    pub usd_value: String,
    pub lowest_price: String,
    pub highest_price: String,
    pub ebay_link: Option<String>,
    pub compare: CompareView,
}

impl RowView {
    pub fn new(key: usize, report: &Report) -> Self {
        Self {
            key,
            image_url: non_empty(report.input_photo_url.as_deref()),
            query: format_display_value(report.query.as_deref()),
            usd_value: format_currency(report.usd_value.as_ref()),
            lowest_price: format_currency(report.lowest_price.as_ref()),
            highest_price: format_currency(report.highest_price.as_ref()),
            ebay_link: non_empty(report.ebay_link.as_deref()),
            compare: CompareView::from(report),
        }
    }

    pub fn image(&self) -> Option<ImageView> {
        self.image_url.clone().map(|src| ImageView { src })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// 価格比較モーダルの表示内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareView {
    pub query: String,
    pub actual_value: String,
    pub actual_low: String,
    pub actual_high: String,
    pub db_value: String,
    pub db_low: String,
    pub db_high: String,
}

impl From<&Report> for CompareView {
    fn from(report: &Report) -> Self {
        Self {
            query: format_display_value(report.query.as_deref()),
            actual_value: format_currency(report.usd_value.as_ref()),
            actual_low: format_currency(report.lowest_price.as_ref()),
            actual_high: format_currency(report.highest_price.as_ref()),
            db_value: format_currency(report.db_usd_value.as_ref()),
            db_low: format_currency(report.db_lowest_price.as_ref()),
            db_high: format_currency(report.db_highest_price.as_ref()),
        }
    }
}

/// 画像拡大モーダルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub src: String,
}

/// ページ送りの表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationView {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            prev_disabled: current_page <= 1,
            next_disabled: current_page >= total_pages,
        }
    }
}
