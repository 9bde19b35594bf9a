//! Listing card component

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use listing_core::{CardActions, CardView, ListingEntry, ListingError};

use crate::api::BrowserBackend;
use crate::components::info_container::InfoContainer;
use crate::components::progress_chip::ProgressChip;
use crate::navigation::{RouterNavigator, SelectedEntry};

const CARD_STYLE: &str = "position: relative; display: flex; flex-direction: row; \
     margin: 0.5rem 0; border: 1px solid #dee2e6; border-radius: 0.5rem; \
     background-color: #fff; overflow: hidden;";
const DELETE_STYLE: &str = "position: absolute; top: 0.25rem; right: 0.25rem; \
     border: none; background: none; color: #F44336; font-size: 1rem; cursor: pointer;";
const LEFT_STYLE: &str = "flex: 3; display: flex; flex-direction: column; padding: 0.75rem;";
const ROW_STYLE: &str = "display: flex; flex-direction: row; justify-content: space-between; \
     align-items: center; gap: 0.5rem;";
const DIVIDER_STYLE: &str = "width: 100%; border: none; border-top: 1px solid #dee2e6; margin: 0.5rem 0;";
const RIGHT_STYLE: &str = "flex: 1; display: flex; flex-direction: column; align-items: center; \
     justify-content: center; border: none; border-left: 1px solid #dee2e6; \
     background-color: #f8f9fa; cursor: pointer;";

/// One listing entry: identity, status chip, module field, date and count.
///
/// Delete is offered only for editable entries and asks the parent list to
/// refresh once the backend confirms it. The count panel opens the module's
/// detail screen. Failures surface to the nearest `ErrorBoundary`.
#[component]
pub fn ListingCard(
    entry: ListingEntry,
    #[prop(into)] refresh_listing_data: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();
    let selected = expect_context::<SelectedEntry>();
    let fault = RwSignal::new(None::<Arc<ListingError>>);
    let card = CardView::build(&entry);
    let entry = StoredValue::new(entry);

    let navigate_on_delete = navigate.clone();
    let on_delete = move |_| {
        let entry = entry.get_value();
        let navigate = navigate_on_delete.clone();
        spawn_local(async move {
            let backend = BrowserBackend::from_window();
            let navigator = RouterNavigator::new(navigate, selected);
            let actions = CardActions::new(
                &backend,
                &backend,
                &navigator,
                backend.base_url(),
                backend.endpoints(),
            );
            if let Err(e) = actions.delete(&entry, || refresh_listing_data.run(())).await {
                leptos::logging::error!("Delete of {} '{}' failed: {}", entry.entry_type, entry.id, e);
                fault.set(Some(Arc::new(e)));
            }
        });
    };

    let on_open = move |_| {
        let entry = entry.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            let backend = BrowserBackend::from_window();
            let navigator = RouterNavigator::new(navigate, selected);
            let actions = CardActions::new(
                &backend,
                &backend,
                &navigator,
                backend.base_url(),
                backend.endpoints(),
            );
            if let Err(e) = actions.open(&entry).await {
                leptos::logging::error!("Open of {} '{}' failed: {}", entry.entry_type, entry.id, e);
                fault.set(Some(Arc::new(e)));
            }
        });
    };

    card.map(|card| {
        let CardView {
            id,
            status,
            module_field,
            date,
            count,
            show_delete,
            ..
        } = card;

        view! {
            <div style=CARD_STYLE>
                {show_delete.then(|| view! {
                    <button style=DELETE_STYLE title="Delete" on:click=on_delete>"✕"</button>
                })}
                <div style=LEFT_STYLE>
                    <div style=ROW_STYLE>
                        <InfoContainer title=id.title value=id.value />
                        <ProgressChip status=status />
                    </div>
                    <hr style=DIVIDER_STYLE />
                    <div style=ROW_STYLE>
                        <InfoContainer title=module_field.title value=module_field.value />
                        <InfoContainer title=date.title value=date.value />
                    </div>
                </div>
                <button style=RIGHT_STYLE on:click=on_open>
                    <span style="font-size: 1.5em; font-weight: 700;">{count.display_value()}</span>
                    <span style="font-size: 0.8em; color: #6c757d;">{count.label.as_str()}</span>
                    <span aria-hidden="true">"›"</span>
                </button>
                {move || fault.get().map_or(Ok(()), Err)}
            </div>
        }
    })
}
