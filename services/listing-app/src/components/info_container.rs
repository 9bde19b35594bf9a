//! Title/value pair shown on a card

use leptos::prelude::*;

#[component]
pub fn InfoContainer(title: String, value: String) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: row; align-items: baseline; gap: 0.25rem;">
            <span style="font-size: 0.8em; color: #6c757d;">{title}</span>
            <span style="font-size: 0.9em; font-weight: 600; color: #212529;">{value}</span>
        </div>
    }
}
