//! 結果テーブルコンポーネント
//!
//! 表示モデルをそのまま描画する。テキストと属性値はLeptosがエスケープする。

use leptos::prelude::*;
use report_browser_common::view::TABLE_COLUMNS;
use report_browser_common::{CompareView, ImageView, RowView, TableBody};

#[component]
pub fn ResultsTable<FI, FC>(
    body: Signal<TableBody>,
    on_open_image: FI,
    on_open_compare: FC,
) -> impl IntoView
where
    FI: Fn(ImageView) + 'static + Clone + Send,
    FC: Fn(CompareView) + 'static + Clone + Send,
{
    view! {
        <table class="results-table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Item"</th>
                    <th>"Value"</th>
                    <th>"Low"</th>
                    <th>"High"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody id="results-body">
                {move || {
                    let body = body.get();
                    match body.placeholder() {
                        Some(placeholder) => view! {
                            <tr>
                                <td colspan=TABLE_COLUMNS.to_string() class=placeholder.class>
                                    {placeholder.message}
                                </td>
                            </tr>
                        }
                        .into_any(),
                        None => body
                            .rows()
                            .iter()
                            .cloned()
                            .map(|row| {
                                view! {
                                    <ResultRow
                                        row=row
                                        on_open_image=on_open_image.clone()
                                        on_open_compare=on_open_compare.clone()
                                    />
                                }
                            })
                            .collect_view()
                            .into_any(),
                    }
                }}
            </tbody>
        </table>
    }
}

#[component]
fn ResultRow<FI, FC>(row: RowView, on_open_image: FI, on_open_compare: FC) -> impl IntoView
where
    FI: Fn(ImageView) + 'static + Clone + Send,
    FC: Fn(CompareView) + 'static + Clone + Send,
{
    let image_cell = match row.image() {
        Some(image) => {
            let src = image.src.clone();
            view! {
                <img
                    src=src
                    alt="Item Image"
                    on:click=move |_| on_open_image(image.clone())
                />
            }
            .into_any()
        }
        None => view! { <span class="placeholder">"-"</span> }.into_any(),
    };

    let link_cell = match row.ebay_link.clone() {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                "View on eBay"
                <svg
                    width="12"
                    height="12"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
                    <polyline points="15 3 21 3 21 9"></polyline>
                    <line x1="10" y1="14" x2="21" y2="3"></line>
                </svg>
            </a>
        }
        .into_any(),
        None => view! { <span class="placeholder">"-"</span> }.into_any(),
    };

    let compare = row.compare.clone();

    view! {
        <tr>
            <td>{image_cell}</td>
            <td>{row.query.clone()}</td>
            <td class="price-value">{row.usd_value.clone()}</td>
            <td class="price-value price-low">{row.lowest_price.clone()}</td>
            <td class="price-value price-high">{row.highest_price.clone()}</td>
            <td>
                <div class="action-group">
                    {link_cell}
                    <button
                        class="compare-btn"
                        type="button"
                        on:click=move |_| on_open_compare(compare.clone())
                    >
                        "Compare"
                    </button>
                </div>
            </td>
        </tr>
    }
}
