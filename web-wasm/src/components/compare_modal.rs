//! 価格比較モーダル
//!
//! 市場価格帯と基準価格帯を並べて表示する

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use report_browser_common::{CompareView, DismissEvent};
use super::is_backdrop_click;

#[component]
pub fn CompareModal<F>(compare: Signal<Option<CompareView>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(DismissEvent) + 'static + Clone,
{
    // 閉じている間は "-" を表示
    let field = move |get: fn(&CompareView) -> &String| {
        move || {
            compare.with(|c| {
                c.as_ref()
                    .map(|c| get(c).clone())
                    .unwrap_or_else(|| "-".to_string())
            })
        }
    };

    view! {
        <div
            id="compare-modal"
            class="modal"
            class:active=move || compare.with(Option::is_some)
            on:click={
                let on_dismiss = on_dismiss.clone();
                move |ev: MouseEvent| {
                    on_dismiss(DismissEvent::Backdrop { on_container: is_backdrop_click(&ev) })
                }
            }
        >
            <div class="modal-content compare-modal-content">
                <span
                    class="close-btn"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(DismissEvent::CloseButton)
                    }
                >
                    "×"
                </span>
                <h2 id="compare-query">{field(|c| &c.query)}</h2>
                <table class="compare-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Value"</th>
                            <th>"Low"</th>
                            <th>"High"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <th>"Actual"</th>
                            <td id="compare-actual-value">{field(|c| &c.actual_value)}</td>
                            <td id="compare-actual-low">{field(|c| &c.actual_low)}</td>
                            <td id="compare-actual-high">{field(|c| &c.actual_high)}</td>
                        </tr>
                        <tr>
                            <th>"DB"</th>
                            <td id="compare-db-value">{field(|c| &c.db_value)}</td>
                            <td id="compare-db-low">{field(|c| &c.db_low)}</td>
                            <td id="compare-db-high">{field(|c| &c.db_high)}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
