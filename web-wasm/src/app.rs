//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use report_browser_common::{
    BrowseState, BrowserConfig, CompareView, DismissEvent, ImageView, ModalSet,
};
use crate::api::data_source;
use crate::components::{
    compare_modal::CompareModal,
    header::Header,
    image_modal::ImageModal,
    pagination::{PageSizeSelect, PaginationControls},
    results_table::ResultsTable,
};

/// Escape で両方のモーダルを閉じるwindowリスナーを登録（ページ存続中は解除しない）
pub fn close_modals_on_escape(modals: RwSignal<ModalSet>) {
    let _handle = window_event_listener(leptos::ev::keydown, move |ev| {
        modals.update(|m| m.handle_key(&ev.key()));
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: BrowserConfig) -> impl IntoView {
    // アプリケーション状態
    let browse = RwSignal::new(BrowseState::new(config.default_page_size));
    let modals = RwSignal::new(ModalSet::default());

    // 起動時に1回だけ読み込む
    let data_url = config.data_url.clone();
    spawn_local(async move {
        match data_source::load_reports(&data_url).await {
            Ok(dataset) => {
                tracing::info!(url = %data_url, "local data loaded");
                browse.update(|s| s.loaded(dataset));
            }
            Err(e) => browse.update(|s| s.load_failed(&e)),
        }
    });

    close_modals_on_escape(modals);

    // ページ操作ハンドラ
    let on_previous = move |_: ()| {
        browse.update(|s| {
            s.go_to_previous();
        });
    };
    let on_next = move |_: ()| {
        browse.update(|s| {
            s.go_to_next();
        });
    };
    let on_page_size = {
        let config = config.clone();
        move |raw: String| {
            let size = config.parse_page_size(&raw);
            browse.update(|s| {
                if let Err(e) = s.set_page_size(size) {
                    tracing::warn!(error = %e, "page size rejected");
                }
            });
        }
    };

    // モーダルハンドラ
    let on_open_image = move |image: ImageView| modals.update(|m| m.image.open(image));
    let on_open_compare = move |view: CompareView| modals.update(|m| m.compare.open(view));
    let on_dismiss_image = move |event: DismissEvent| {
        modals.update(|m| {
            m.image.dismiss(event);
        });
    };
    let on_dismiss_compare = move |event: DismissEvent| {
        modals.update(|m| {
            m.compare.dismiss(event);
        });
    };

    let body = Signal::derive(move || browse.with(|s| s.body().clone()));
    let pagination = Signal::derive(move || browse.with(|s| s.pagination()));
    let showing = Signal::derive(move || browse.with(|s| s.showing_count()));
    let page_size = Signal::derive(move || browse.with(|s| s.page_size()));
    let image = Signal::derive(move || modals.with(|m| m.image.payload().cloned()));
    let compare = Signal::derive(move || modals.with(|m| m.compare.payload().cloned()));

    view! {
        <div class="container">
            <Header />

            <div class="results-toolbar">
                <p class="results-info">
                    "Showing "<span id="showing-count">{move || showing.get().to_string()}</span>" results"
                </p>
                <PageSizeSelect
                    page_size=page_size
                    options=config.page_size_options.clone()
                    on_change=on_page_size
                />
            </div>

            <ResultsTable
                body=body
                on_open_image=on_open_image
                on_open_compare=on_open_compare
            />

            <PaginationControls
                pagination=pagination
                on_previous=on_previous
                on_next=on_next
            />

            <ImageModal image=image on_dismiss=on_dismiss_image />
            <CompareModal compare=compare on_dismiss=on_dismiss_compare />
        </div>
    }
}
