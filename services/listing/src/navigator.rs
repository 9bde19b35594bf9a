//! Navigator for the command line: records where a card would take the user

use std::cell::RefCell;

use listing_core::{NavigationParams, Navigator, Screen};

/// Keeps the most recent navigation so the caller can print it
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: RefCell<Option<(Screen, NavigationParams)>>,
}

impl ConsoleNavigator {
    pub fn take_last(&self) -> Option<(Screen, NavigationParams)> {
        self.last.borrow_mut().take()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, screen: Screen, params: NavigationParams) {
        tracing::info!("Opening screen '{}'", screen);
        *self.last.borrow_mut() = Some((screen, params));
    }
}
