//! Row structs and request DTOs.

pub mod category;
pub mod question;
