//! List trait for fetching filtered collections of resources.

use std::future::Future;

use async_trait::async_trait;
use serde::Serialize;

use crate::client::CloudFoundryClient;
use crate::error::Result;
use crate::filter::FilterParameters;
use crate::pagination::{Page, MAX_RESULTS_PER_PAGE};

/// Default page size for list operations.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = MAX_RESULTS_PER_PAGE;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List resources with filtering and pagination support.
///
/// The query type carries the filters (emitted as `q` parameters) and any
/// serialized options such as `order-direction`.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, List, ListOrganizationsRequest, Organization};
///
/// let client = CloudFoundryClient::from_env()?;
///
/// // Fetch a single page
/// let page = Organization::list_page(&client, &Default::default(), 1, 50).await?;
///
/// // Fetch all pages
/// let request = ListOrganizationsRequest {
///     names: vec!["test-organization".to_string()],
///     ..Default::default()
/// };
/// let organizations = Organization::list_all(&client, &request).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Filters and options for the list request.
    type Query: FilterParameters + Serialize + Default + Send + Sync;

    /// List resources matching the query (single page).
    ///
    /// # Arguments
    ///
    /// * `client` - The Cloud Foundry API client
    /// * `query` - Filters and options
    /// * `page` - Page number (1-indexed)
    /// * `results_per_page` - Number of resources per page (max 100)
    ///
    /// # Errors
    ///
    /// Returns an error if a filter accessor or the request fails.
    async fn list_page(
        client: &CloudFoundryClient,
        query: &Self::Query,
        page: u32,
        results_per_page: u32,
    ) -> Result<Page<Self>>;

    /// List all resources matching the query (fetches all pages).
    ///
    /// This method automatically handles pagination, fetching pages
    /// until the API reports no next page.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &CloudFoundryClient, query: &Self::Query) -> Result<Vec<Self>> {
        collect_pages(|page| Self::list_page(client, query, page, DEFAULT_RESULTS_PER_PAGE)).await
    }
}

/// Fetch pages starting at 1 until the API reports no next page.
pub(crate) async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all_items = Vec::new();
    let mut page = 1;

    loop {
        let result = fetch(page).await?;
        let has_more = result.has_more;
        all_items.extend(result.items);

        if !has_more {
            break;
        }
        page += 1;

        // Safety limit to prevent infinite loops
        if page > MAX_PAGES {
            tracing::warn!(
                "Reached pagination limit of {} pages, stopping",
                MAX_PAGES
            );
            break;
        }
    }

    Ok(all_items)
}
