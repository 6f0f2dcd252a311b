//! ページ送り・ページサイズ選択コンポーネント

use leptos::prelude::*;
use report_browser_common::PaginationView;

#[component]
pub fn PaginationControls<FP, FN>(
    pagination: Signal<PaginationView>,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class="pagination">
            <button
                id="prev-btn"
                class="btn btn-secondary"
                disabled=move || pagination.get().prev_disabled
                on:click={
                    let on_previous = on_previous.clone();
                    move |_| on_previous(())
                }
            >
                "Previous"
            </button>
            <span class="page-info">
                "Page "
                <span id="current-page">{move || pagination.get().current_page.to_string()}</span>
                " of "
                <span id="total-pages">{move || pagination.get().total_pages.to_string()}</span>
            </span>
            <button
                id="next-btn"
                class="btn btn-secondary"
                disabled=move || pagination.get().next_disabled
                on:click={
                    let on_next = on_next.clone();
                    move |_| on_next(())
                }
            >
                "Next"
            </button>
        </div>
    }
}

#[component]
pub fn PageSizeSelect<F>(
    page_size: Signal<usize>,
    options: Vec<usize>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="form-group page-size">
            <label for="page-size">"Per page"</label>
            <select
                id="page-size"
                on:change=move |ev| on_change(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
