//! Listing page component

use crate::api::fetch_listing;
use crate::components::listing_card::ListingCard;
use leptos::prelude::*;
use listing_core::ListingEntry;

/// Fetches the listing and renders one card per entry
#[component]
pub fn ListingPage() -> impl IntoView {
    let listing = Resource::new(|| (), |_| async move { fetch_listing().await });
    let refresh_listing_data = Callback::new(move |_| listing.refetch());

    view! {
        <section>
            <h1>"Listing"</h1>
            <Suspense fallback=move || view! { <p>"Loading entries..."</p> }>
                {move || {
                    listing.get().map(|result| {
                        if let Some(notice) = listing_notice(&result) {
                            return view! { <p style=notice.style()>{notice.message()}</p> }.into_any();
                        }
                        result.unwrap_or_default().into_iter().map(|entry| {
                            view! {
                                <ErrorBoundary fallback=|errors| view! {
                                    <div style="margin: 0.5rem 0; padding: 0.75rem; border: 1px solid #f5c6cb; \
                                                border-radius: 0.5rem; color: #721c24; background-color: #f8d7da;">
                                        <ul>
                                            {move || errors.get()
                                                .into_iter()
                                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }>
                                    <ListingCard entry=entry refresh_listing_data=refresh_listing_data />
                                </ErrorBoundary>
                            }
                        }).collect::<Vec<_>>().into_any()
                    })
                }}
            </Suspense>
        </section>
    }
}

/// What the page shows in place of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingNotice {
    Empty,
    Failed(String),
}

impl ListingNotice {
    pub fn message(&self) -> String {
        match self {
            ListingNotice::Empty => "No entries.".to_string(),
            ListingNotice::Failed(e) => format!("Could not load the listing: {}", e),
        }
    }

    fn style(&self) -> &'static str {
        match self {
            ListingNotice::Empty => "color: #6c757d;",
            ListingNotice::Failed(_) => "padding: 0.75rem; border: 1px solid #f5c6cb; border-radius: 0.5rem; \
                 color: #721c24; background-color: #f8d7da;",
        }
    }
}

/// `None` when there are cards to render
pub fn listing_notice(result: &Result<Vec<ListingEntry>, String>) -> Option<ListingNotice> {
    match result {
        Err(e) => {
            leptos::logging::error!("Failed to fetch listing: {}", e);
            Some(ListingNotice::Failed(e.clone()))
        }
        Ok(entries) if entries.is_empty() => Some(ListingNotice::Empty),
        Ok(_) => None,
    }
}
