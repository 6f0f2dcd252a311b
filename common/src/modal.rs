//! モーダルの状態遷移
//!
//! closed / open の2状態。開いている間の open は内容を上書きするだけ。

use crate::view::{CompareView, ImageView};

/// 閉じる操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissEvent {
    CloseButton,
    /// 背景クリック。クリック対象がモーダル要素そのものの時だけ閉じる
    Backdrop { on_container: bool },
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal<T> {
    Closed,
    Open(T),
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<T> Modal<T> {
    pub fn open(&mut self, payload: T) {
        *self = Modal::Open(payload);
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    /// 閉じたらtrue
    pub fn dismiss(&mut self, event: DismissEvent) -> bool {
        let should_close = match event {
            DismissEvent::CloseButton | DismissEvent::Escape => true,
            DismissEvent::Backdrop { on_container } => on_container,
        };
        if should_close && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Modal::Open(payload) => Some(payload),
            Modal::Closed => None,
        }
    }
}

/// 画面上の2つのモーダル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSet {
    pub image: Modal<ImageView>,
    pub compare: Modal<CompareView>,
}

impl ModalSet {
    /// キー入力。Escape は両方を閉じる
    pub fn handle_key(&mut self, key: &str) {
        if key == "Escape" {
            self.image.dismiss(DismissEvent::Escape);
            self.compare.dismiss(DismissEvent::Escape);
        }
    }
}
