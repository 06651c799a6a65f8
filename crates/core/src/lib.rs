//! Domain logic for the trivia service.
//!
//! Holds the pieces that make decisions without touching storage: page
//! windows over question listings and quiz question selection. Both the
//! repository layer and the HTTP layer build on these.

pub mod error;
pub mod pagination;
pub mod quiz;
pub mod types;
