//! 静的データの取得

pub mod data_source;
