//! UIコンポーネント

pub mod compare_modal;
pub mod header;
pub mod image_modal;
pub mod pagination;
pub mod results_table;

use leptos::ev::MouseEvent;

/// クリック対象がリスナー要素そのもの（モーダル背景）か
pub(crate) fn is_backdrop_click(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
