//! Trait definitions for Cloud Foundry operations.
//!
//! Each resource type implements the traits it supports, encapsulating
//! endpoint differences in the implementations.

mod get;
mod list;

pub use get::Get;
pub(crate) use list::collect_pages;
pub use list::{List, DEFAULT_RESULTS_PER_PAGE};
