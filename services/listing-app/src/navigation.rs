//! Router-backed navigation for listing cards

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use listing_core::{EntryItem, NavigationParams, Navigator, Screen};

/// The entry item handed to the most recently opened detail screen
#[derive(Debug, Clone, Copy)]
pub struct SelectedEntry(pub RwSignal<Option<EntryItem>>);

impl Default for SelectedEntry {
    fn default() -> Self {
        Self(RwSignal::new(None))
    }
}

/// Stores the forwarded entry item, then pushes the screen's route
pub struct RouterNavigator<F> {
    navigate: F,
    selected: SelectedEntry,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F, selected: SelectedEntry) -> Self {
        Self { navigate, selected }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, screen: Screen, params: NavigationParams) {
        self.selected.0.set(Some(params.entry_item));
        (self.navigate)(screen.path(), NavigateOptions::default());
    }
}

/// The registered screen mounted at a router path, if any
pub fn screen_for_path(path: &str) -> Option<Screen> {
    let path = path.trim_end_matches('/');
    Screen::ALL.iter().copied().find(|screen| screen.path() == path)
}
