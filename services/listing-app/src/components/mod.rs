pub mod entry_screen;
pub mod info_container;
pub mod listing_card;
pub mod listing_page;
pub mod progress_chip;
