//! Content models and response validation for the RAW Aviation site.
//!
//! Everything in this crate is pure: no I/O, no logging. The HTTP side
//! lives in `rawav-content`.

pub mod byline;
pub mod contact;
pub mod error;
pub mod media;
pub mod models;
pub mod rich_text;
pub mod schema;
pub mod types;
