//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Price Comparison Reports"</h1>
            <p class="subtitle">"Market price bands next to reference prices for each searched item"</p>
        </header>
    }
}
