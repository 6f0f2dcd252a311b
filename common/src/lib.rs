//! Report Browser Common Library
//!
//! WASMフロントエンドから使う、DOMに依存しない型とロジック

pub mod types;
pub mod error;
pub mod config;
pub mod format;
pub mod loader;
pub mod pager;
pub mod view;
pub mod modal;

pub use types::{Dataset, Price, Report};
pub use error::{Error, Result};
pub use config::BrowserConfig;
pub use format::{format_currency, format_display_value};
pub use loader::{parse_body, parse_response};
pub use pager::BrowseState;
pub use view::{CompareView, ImageView, PaginationView, RowView, TableBody};
pub use modal::{DismissEvent, Modal, ModalSet};
