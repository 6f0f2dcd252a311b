//! レポートの型定義
//!
//! - Report: db.json の配列要素（価格比較レポート1件）
//! - Price: 数値または文字列で届く価格値
//! - Dataset: 読み込んだドキュメント全体

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// 価格値
///
/// db.json では数値と文字列が混在するため両方を受け付ける
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// 価格比較レポート
///
/// 各フィールドは個別に読む。型の合わないフィールドだけが欠損扱いになる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    /// 検索した品名
    #[serde(deserialize_with = "lenient_text")]
    pub query: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub input_photo_url: Option<String>,

    // 市場価格帯
    #[serde(deserialize_with = "lenient_price")]
    pub usd_value: Option<Price>,
    #[serde(deserialize_with = "lenient_price")]
    pub lowest_price: Option<Price>,
    #[serde(deserialize_with = "lenient_price")]
    pub highest_price: Option<Price>,

    // 基準価格帯
    #[serde(deserialize_with = "lenient_price")]
    pub db_usd_value: Option<Price>,
    #[serde(deserialize_with = "lenient_price")]
    pub db_lowest_price: Option<Price>,
    #[serde(deserialize_with = "lenient_price")]
    pub db_highest_price: Option<Price>,

    #[serde(deserialize_with = "lenient_text")]
    pub ebay_link: Option<String>,
}

/// 文字列フィールド。数値・真偽値は文字列化、null・配列・オブジェクトは欠損
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// 価格フィールド。数値はそのまま、文字列・真偽値はテキスト、それ以外は欠損
fn lenient_price<'de, D>(deserializer: D) -> std::result::Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().map(Price::Number),
        Value::String(s) => Some(Price::Text(s)),
        Value::Bool(b) => Some(Price::Text(b.to_string())),
        _ => None,
    })
}

/// 読み込んだドキュメント
///
/// トップレベルが配列でない場合もここでは失敗させず、
/// ページング時に [`Error::NotAnArray`] として報告する。
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Reports(Vec<Report>),
    Malformed { kind: &'static str },
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Reports(Vec::new())
    }
}

impl From<Vec<Report>> for Dataset {
    fn from(reports: Vec<Report>) -> Self {
        Dataset::Reports(reports)
    }
}

impl Dataset {
    /// JSON値から生成
    ///
    /// オブジェクトでない配列要素は空のReportに置き換える
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let reports = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        serde_json::from_value::<Report>(item).unwrap_or_else(|e| {
                            tracing::warn!(index, error = %e, "report element replaced with empty report");
                            Report::default()
                        })
                    })
                    .collect();
                Dataset::Reports(reports)
            }
            other => Dataset::Malformed { kind: json_kind(&other) },
        }
    }

    /// ページング対象のレポート列
    pub fn reports(&self) -> Result<&[Report]> {
        match self {
            Dataset::Reports(reports) => Ok(reports),
            Dataset::Malformed { .. } => Err(Error::NotAnArray),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_default() {
        let report = Report::default();
        assert_eq!(report.query, None);
        assert_eq!(report.usd_value, None);
    }

    #[test]
    fn test_report_deserialize() {
        let json = r#"{
            "query": "Vintage Camera",
            "inputPhotoUrl": "https://example.com/a.jpg",
            "usdValue": 120,
            "lowestPrice": "80.50",
            "highestPrice": 150.25,
            "dbUsdValue": null,
            "ebayLink": "https://www.ebay.com/itm/1"
        }"#;

        let report: Report = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(report.query.as_deref(), Some("Vintage Camera"));
        assert_eq!(report.usd_value, Some(Price::Number(120.0)));
        assert_eq!(report.lowest_price, Some(Price::Text("80.50".to_string())));
        assert_eq!(report.highest_price, Some(Price::Number(150.25)));
        assert_eq!(report.db_usd_value, None);
        assert_eq!(report.db_lowest_price, None);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Number(12.0).to_string(), "12");
        assert_eq!(Price::Number(12.5).to_string(), "12.5");
        assert_eq!(Price::Text("9.99".to_string()).to_string(), "9.99");
    }

    #[test]
    fn test_dataset_from_array() {
        let dataset = Dataset::from_value(json!([{ "query": "a" }, { "query": "b" }]));
        let reports = dataset.reports().expect("配列のはず");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].query.as_deref(), Some("b"));
    }

    #[test]
    fn test_dataset_non_object_element_becomes_empty_report() {
        let dataset = Dataset::from_value(json!([{ "query": "a" }, 42, "text", null]));
        let reports = dataset.reports().expect("配列のはず");
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].query.as_deref(), Some("a"));
        assert_eq!(reports[1], Report::default());
        assert_eq!(reports[2], Report::default());
        assert_eq!(reports[3], Report::default());
    }

    #[test]
    fn test_bad_field_keeps_other_fields() {
        let dataset = Dataset::from_value(json!([{
            "query": 123,
            "usdValue": 10,
            "lowestPrice": 5,
            "highestPrice": { "amount": 9 },
            "dbUsdValue": true,
            "inputPhotoUrl": ["a.jpg"],
            "ebayLink": "https://e/x"
        }]));
        let report = &dataset.reports().expect("配列のはず")[0];

        assert_eq!(report.query.as_deref(), Some("123"));
        assert_eq!(report.usd_value, Some(Price::Number(10.0)));
        assert_eq!(report.lowest_price, Some(Price::Number(5.0)));
        assert_eq!(report.highest_price, None);
        assert_eq!(report.db_usd_value, Some(Price::Text("true".to_string())));
        assert_eq!(report.input_photo_url, None);
        assert_eq!(report.ebay_link.as_deref(), Some("https://e/x"));
    }

    #[test]
    fn test_dataset_from_object_is_malformed() {
        let dataset = Dataset::from_value(json!({ "reports": [] }));
        assert_eq!(dataset, Dataset::Malformed { kind: "object" });
        assert!(matches!(dataset.reports(), Err(Error::NotAnArray)));
    }
}
