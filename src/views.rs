//! maud templates. Row templates turn backend records into region markup for the loaders, and
//! panel templates lay a [`crate::document::Document`] out as a page.

pub mod chat;
pub mod complaints;
pub mod dashboard;
pub mod modals;
pub mod page;
pub mod payments;
pub mod rooms;
pub mod students;
pub mod toasts;
