//! Get trait for fetching single resources.

use async_trait::async_trait;

use crate::client::CloudFoundryClient;
use crate::error::Result;

/// Fetch a single resource by ID.
///
/// Implement this trait for resource types that can be fetched individually
/// by their GUID.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, Get, Organization};
///
/// let client = CloudFoundryClient::from_env()?;
/// let organization = Organization::get(&client, "test-organization-id".to_string()).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this resource (a GUID string for every v2 resource).
    type Id;

    /// Fetch the resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cloud Foundry API client
    /// * `id` - The resource identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the resource is not found or the request fails.
    async fn get(client: &CloudFoundryClient, id: Self::Id) -> Result<Self>;
}
