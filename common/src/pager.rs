//! ページング状態
//!
//! 読み込んだコレクションをメモリ上でページ分割する。
//! 状態の変更はすべて [`BrowseState`] の操作を通す。

use std::ops::Range;

use crate::error::{Error, Result};
use crate::types::Dataset;
use crate::view::{PaginationView, RowView, TableBody};

/// 総ページ数（最低1）
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// ページの範囲 `[(page-1)*size, page*size)` をコレクション長で切り詰めたもの
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Loading,
    Ready,
    Failed,
}

/// ブラウズ状態
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    dataset: Dataset,
    page_size: usize,
    current_page: usize,
    total_pages: usize,
    body: TableBody,
    phase: Phase,
}

impl BrowseState {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Dataset::default(),
            page_size: page_size.max(1),
            current_page: 1,
            total_pages: 1,
            body: TableBody::Loading,
            phase: Phase::Loading,
        }
    }

    /// 読み込み完了。1ページ目を表示する
    pub fn loaded(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.phase = Phase::Ready;
        self.show_page(1);
    }

    /// 読み込み失敗。以後のページ操作では終端エラー行のまま
    pub fn load_failed(&mut self, error: &Error) {
        tracing::error!(error = %error, "failed to load local data");
        self.dataset = Dataset::default();
        self.phase = Phase::Failed;
        self.reset_to_single_page();
        self.body = TableBody::LoadFailed;
    }

    /// 指定ページを表示（範囲外は丸める）
    pub fn show_page(&mut self, page: usize) {
        if self.phase != Phase::Ready {
            return;
        }

        let reports = match self.dataset.reports() {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!(error = %e, "cannot page local data");
                self.body = TableBody::RenderError(e.to_string());
                self.reset_to_single_page();
                return;
            }
        };

        self.total_pages = total_pages(reports.len(), self.page_size);
        self.current_page = page.clamp(1, self.total_pages);

        let range = page_range(self.current_page, self.page_size, reports.len());
        let offset = range.start;
        let rows: Vec<RowView> = reports[range]
            .iter()
            .enumerate()
            .map(|(i, report)| RowView::new(offset + i, report))
            .collect();

        tracing::debug!(
            page = self.current_page,
            total_pages = self.total_pages,
            rows = rows.len(),
            "page rendered"
        );

        self.body = if rows.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(rows)
        };
    }

    /// ページサイズ変更。1ページ目に戻る
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.show_page(1);
        Ok(())
    }

    /// 前のページへ。先頭ページでは何もしない
    pub fn go_to_previous(&mut self) -> bool {
        if self.phase != Phase::Ready || self.current_page <= 1 {
            return false;
        }
        self.show_page(self.current_page - 1);
        true
    }

    /// 次のページへ。最終ページでは何もしない
    pub fn go_to_next(&mut self) -> bool {
        if self.phase != Phase::Ready || self.current_page >= self.total_pages {
            return false;
        }
        self.show_page(self.current_page + 1);
        true
    }

    fn reset_to_single_page(&mut self) {
        self.current_page = 1;
        self.total_pages = 1;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    pub fn showing_count(&self) -> usize {
        self.body.showing_count()
    }

    pub fn pagination(&self) -> PaginationView {
        PaginationView::new(self.current_page, self.total_pages)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
