//! HTTP access to the RAW Aviation content API.
//!
//! [`CmsClient`] wraps raw requests against the CMS REST API and
//! [`ContentApi`] builds typed accessors for articles, reports, galleries
//! and author profiles on top of it. Both are constructed from an explicit
//! [`CmsConfig`]; nothing here reads the environment on its own.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod query;

pub use api::{ContentApi, LandingContent};
pub use client::{CmsClient, RequestOptions};
pub use config::CmsConfig;
pub use error::{ContentError, ContentResult, ErrorKind};
