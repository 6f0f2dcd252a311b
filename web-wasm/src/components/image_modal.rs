//! 画像拡大モーダル

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use report_browser_common::{DismissEvent, ImageView};
use super::is_backdrop_click;

#[component]
pub fn ImageModal<F>(image: Signal<Option<ImageView>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(DismissEvent) + 'static + Clone,
{
    view! {
        <div
            id="image-modal"
            class="modal"
            class:active=move || image.with(Option::is_some)
            on:click={
                let on_dismiss = on_dismiss.clone();
                move |ev: MouseEvent| {
                    on_dismiss(DismissEvent::Backdrop { on_container: is_backdrop_click(&ev) })
                }
            }
        >
            <div class="modal-content image-modal-content">
                <span
                    class="close-btn"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(DismissEvent::CloseButton)
                    }
                >
                    "×"
                </span>
                <img
                    id="modal-image"
                    src=move || image.get().map(|i| i.src).unwrap_or_default()
                    alt="Item Image"
                />
            </div>
        </div>
    }
}
