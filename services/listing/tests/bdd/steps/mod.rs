//! BDD step definitions for the listing service

pub mod backend;
pub mod card_steps;
pub mod delete_steps;
pub mod navigation_steps;
