//! Status chip component

use leptos::prelude::*;
use listing_core::chip::chip_style;
use listing_core::Status;

/// A colored pill with the status label in upper case
#[component]
pub fn ProgressChip(status: Status) -> impl IntoView {
    let colors = chip_style(status);

    let style = format!(
        "display: inline-block; padding: 0.2em 0.7em; border-radius: 1rem; \
         font-size: 0.75em; font-weight: 600; color: {}; background-color: {};",
        colors.text, colors.background
    );

    view! {
        <span style=style>{status.as_str().to_uppercase()}</span>
    }
}
