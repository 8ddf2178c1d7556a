//! Cloud Foundry v2 API client library.
//!
//! A Rust library for the Cloud Foundry v2 REST API, built around a
//! declarative filter-query builder: list request types describe their
//! filterable fields once, and the builder turns them into the repeated
//! `q=field<op>value` parameters the v2 API expects.
//!
//! # Quick Start
//!
//! ```no_run
//! use cfapi::{CloudFoundryClient, Get, List, ListOrganizationsRequest, Organization};
//!
//! #[tokio::main]
//! async fn main() -> cfapi::Result<()> {
//!     // Create client from environment variables
//!     let client = CloudFoundryClient::from_env()?;
//!
//!     // List organizations by name
//!     let request = ListOrganizationsRequest {
//!         names: vec!["test-organization".to_string()],
//!         ..Default::default()
//!     };
//!     let organizations = Organization::list_all(&client, &request).await?;
//!     println!("Found {} organizations", organizations.len());
//!
//!     // Get the space summary of the first one
//!     if let Some(organization) = organizations.first() {
//!         let summary = cfapi::get_organization_summary(&client, organization.id()).await?;
//!         println!("{} spaces", summary.spaces.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Filters
//!
//! The [`filter`] module holds the builder. Implement [`FilterParameters`]
//! for a request type and call [`augment`] with any [`QueryTarget`]:
//!
//! - absent values and blank values emit nothing;
//! - a single value is sent as `field:value` (or the descriptor's operator);
//! - a collection of several values is sent as `field IN a,b,c`;
//! - parameters are emitted in accessor-name order.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CF_API_URL` (required) - The Cloud Foundry API endpoint
//! - `CF_ACCESS_TOKEN` (required) - An OAuth access token

mod client;
mod error;
pub mod filter;
mod models;
mod pagination;
mod traits;

// Re-export core types
pub use client::CloudFoundryClient;
pub use error::{CloudFoundryError, Result};
pub use pagination::{Page, PaginatedResponse, MAX_RESULTS_PER_PAGE};

// Re-export filter building blocks
pub use filter::{
    augment, FilterDescriptor, FilterOperation, FilterParameter, FilterParameters, FilterValue,
    QueryTarget, ToFilterValue,
};

// Re-export traits
pub use traits::{Get, List, DEFAULT_RESULTS_PER_PAGE};

// Re-export models
pub use models::{
    // Shared types
    Metadata,
    OrderDirection,
    Resource,
    // Organization types
    ListOrganizationsRequest,
    Organization,
    OrganizationEntity,
    OrganizationSpaceSummary,
    OrganizationStatus,
    OrganizationSummary,
    // Space types
    ListOrganizationSpacesRequest,
    ListSpacesRequest,
    Space,
    SpaceEntity,
};

// Re-export convenience functions
pub use models::get_organization_summary;
pub use models::{list_organization_spaces, list_organization_spaces_page};
