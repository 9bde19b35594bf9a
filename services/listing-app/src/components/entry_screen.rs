//! Detail screen placeholder showing what a card forwarded

use crate::navigation::{screen_for_path, SelectedEntry};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn EntryScreen() -> impl IntoView {
    let location = use_location();
    let selected = expect_context::<SelectedEntry>();

    let title = move || {
        screen_for_path(&location.pathname.get())
            .map(|screen| screen.name())
            .unwrap_or("Unknown screen")
    };
    let entry_item = move || {
        selected
            .0
            .get()
            .and_then(|item| serde_json::to_string_pretty(&item).ok())
            .unwrap_or_default()
    };

    view! {
        <section>
            <h1>{title}</h1>
            <pre style="padding: 0.75rem; background-color: #f8f9fa; border-radius: 0.25rem;">{entry_item}</pre>
            <A href="/">"Back to listing"</A>
        </section>
    }
}
