//! Main App component

use crate::components::entry_screen::EntryScreen;
use crate::components::listing_page::ListingPage;
use crate::navigation::SelectedEntry;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SelectedEntry::default());

    view! {
        <Title text="Listing" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=ListingPage />
                    <Route path=path!("/:module/:view") view=EntryScreen />
                </Routes>
            </main>
        </Router>
    }
}
