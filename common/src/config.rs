//! ブラウザ設定

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserConfig {
    /// 読み込むJSONの相対パス
    pub data_url: String,
    pub default_page_size: usize,
    /// ページサイズ選択肢
    pub page_size_options: Vec<usize>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            data_url: "./db.json".into(),
            default_page_size: 5,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

impl BrowserConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BrowserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_url.trim().is_empty() {
            return Err(Error::Config("data_url が空です".into()));
        }
        if self.page_size_options.is_empty() {
            return Err(Error::Config("page_size_options が空です".into()));
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::Config("page_size_options に 0 は指定できません".into()));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(Error::Config(format!(
                "default_page_size {} が page_size_options にありません",
                self.default_page_size
            )));
        }
        Ok(())
    }

    /// ページサイズ選択値をパース（数値でなければデフォルト）
    pub fn parse_page_size(&self, raw: &str) -> usize {
        raw.trim().parse().unwrap_or(self.default_page_size)
    }
}
