//! Space models and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CloudFoundryClient;
use crate::error::{CloudFoundryError, Result};
use crate::filter::{FilterDescriptor, FilterParameter, FilterParameters, ToFilterValue};
use crate::models::resource::{OrderDirection, PagedQuery, Resource};
use crate::pagination::{Page, PaginatedResponse};
use crate::traits::{collect_pages, Get, List, DEFAULT_RESULTS_PER_PAGE};

/// A Cloud Foundry space resource.
pub type Space = Resource<SpaceEntity>;

/// The entity part of a space resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceEntity {
    /// The space name.
    pub name: String,

    /// The ID of the organization that owns the space.
    #[serde(rename = "organization_guid")]
    pub organization_id: String,

    /// Whether SSH access to applications is allowed.
    #[serde(default)]
    pub allow_ssh: Option<bool>,

    /// The space quota definition ID.
    #[serde(rename = "space_quota_definition_guid", default)]
    pub space_quota_definition_id: Option<String>,

    /// The isolation segment ID.
    #[serde(rename = "isolation_segment_guid", default)]
    pub isolation_segment_id: Option<String>,

    /// URL of the owning organization.
    #[serde(default)]
    pub organization_url: Option<String>,

    /// URL of the space's developers.
    #[serde(default)]
    pub developers_url: Option<String>,

    /// URL of the space's managers.
    #[serde(default)]
    pub managers_url: Option<String>,

    /// URL of the space's auditors.
    #[serde(default)]
    pub auditors_url: Option<String>,

    /// URL of the space's applications.
    #[serde(default)]
    pub apps_url: Option<String>,

    /// URL of the space's routes.
    #[serde(default)]
    pub routes_url: Option<String>,

    /// URL of the space's domains.
    #[serde(default)]
    pub domains_url: Option<String>,

    /// URL of the space's service instances.
    #[serde(default)]
    pub service_instances_url: Option<String>,

    /// URL of the space's application events.
    #[serde(default)]
    pub app_events_url: Option<String>,

    /// URL of the space's events.
    #[serde(default)]
    pub events_url: Option<String>,

    /// URL of the space's running security groups.
    #[serde(default)]
    pub security_groups_url: Option<String>,

    /// URL of the space's staging security groups.
    #[serde(default)]
    pub staging_security_groups_url: Option<String>,
}

/// Filters and options for `GET /v2/spaces`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListSpacesRequest {
    /// Filter by application IDs.
    #[serde(skip)]
    pub application_ids: Vec<String>,

    /// Filter by developer user IDs.
    #[serde(skip)]
    pub developer_ids: Vec<String>,

    /// Filter by space names.
    #[serde(skip)]
    pub names: Vec<String>,

    /// Filter by organization IDs.
    #[serde(skip)]
    pub organization_ids: Vec<String>,

    /// Sort direction.
    #[serde(rename = "order-direction", skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
}

impl FilterParameters for ListSpacesRequest {
    fn filter_parameters() -> Vec<FilterParameter<Self>> {
        vec![
            FilterParameter::new("application_ids", FilterDescriptor::new("app_guid"), |r: &Self| {
                Ok(r.application_ids.to_filter_value())
            }),
            FilterParameter::new(
                "developer_ids",
                FilterDescriptor::new("developer_guid"),
                |r: &Self| Ok(r.developer_ids.to_filter_value()),
            ),
            FilterParameter::new("names", FilterDescriptor::new("name"), |r: &Self| {
                Ok(r.names.to_filter_value())
            }),
            FilterParameter::new(
                "organization_ids",
                FilterDescriptor::new("organization_guid"),
                |r: &Self| Ok(r.organization_ids.to_filter_value()),
            ),
        ]
    }
}

/// Filters and options for `GET /v2/organizations/:guid/spaces`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOrganizationSpacesRequest {
    /// The organization whose spaces are listed.
    #[serde(skip)]
    pub organization_id: String,

    /// Filter by application IDs.
    #[serde(skip)]
    pub application_ids: Vec<String>,

    /// Filter by developer user IDs.
    #[serde(skip)]
    pub developer_ids: Vec<String>,

    /// Filter by space names.
    #[serde(skip)]
    pub names: Vec<String>,

    /// Sort direction.
    #[serde(rename = "order-direction", skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
}

impl FilterParameters for ListOrganizationSpacesRequest {
    fn filter_parameters() -> Vec<FilterParameter<Self>> {
        vec![
            FilterParameter::new("application_ids", FilterDescriptor::new("app_guid"), |r: &Self| {
                Ok(r.application_ids.to_filter_value())
            }),
            FilterParameter::new(
                "developer_ids",
                FilterDescriptor::new("developer_guid"),
                |r: &Self| Ok(r.developer_ids.to_filter_value()),
            ),
            FilterParameter::new("names", FilterDescriptor::new("name"), |r: &Self| {
                Ok(r.names.to_filter_value())
            }),
        ]
    }
}

#[async_trait]
impl Get for Space {
    type Id = String; // Space GUID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CloudFoundryClient, id: String) -> Result<Self> {
        let path = format!("v2/spaces/{}", urlencoding::encode(&id));

        let response = client.get(&path).await.map_err(|e| e.into_not_found("Space", &id))?;
        let space: Space = response.json().await.map_err(CloudFoundryError::HttpError)?;
        Ok(space)
    }
}

#[async_trait]
impl List for Space {
    type Query = ListSpacesRequest;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &CloudFoundryClient,
        query: &Self::Query,
        page: u32,
        results_per_page: u32,
    ) -> Result<Page<Self>> {
        let params = PagedQuery {
            query,
            page,
            results_per_page,
        };

        let response = client.get_filtered("v2/spaces", query, &params).await?;
        let data: PaginatedResponse<Space> =
            response.json().await.map_err(CloudFoundryError::HttpError)?;

        Ok(Page::from_response(data, page))
    }
}

// Convenience functions for working with an organization's spaces

/// Fetch a single page of an organization's spaces.
///
/// # Arguments
///
/// * `client` - The Cloud Foundry API client
/// * `request` - The organization ID plus filters
/// * `page` - Page number (1-indexed)
/// * `results_per_page` - Number of spaces per page (max 100)
#[tracing::instrument(skip(client))]
pub async fn list_organization_spaces_page(
    client: &CloudFoundryClient,
    request: &ListOrganizationSpacesRequest,
    page: u32,
    results_per_page: u32,
) -> Result<Page<Space>> {
    let path = format!(
        "v2/organizations/{}/spaces",
        urlencoding::encode(&request.organization_id)
    );
    let params = PagedQuery {
        query: request,
        page,
        results_per_page,
    };

    let response = client
        .get_filtered(&path, request, &params)
        .await
        .map_err(|e| e.into_not_found("Organization", &request.organization_id))?;
    let data: PaginatedResponse<Space> =
        response.json().await.map_err(CloudFoundryError::HttpError)?;

    Ok(Page::from_response(data, page))
}

/// Fetch all spaces of an organization matching the request's filters.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, ListOrganizationSpacesRequest, list_organization_spaces};
///
/// let client = CloudFoundryClient::from_env()?;
/// let spaces = list_organization_spaces(
///     &client,
///     &ListOrganizationSpacesRequest {
///         organization_id: "test-organization-id".to_string(),
///         names: vec!["development".to_string()],
///         ..Default::default()
///     },
/// ).await?;
/// ```
pub async fn list_organization_spaces(
    client: &CloudFoundryClient,
    request: &ListOrganizationSpacesRequest,
) -> Result<Vec<Space>> {
    collect_pages(|page| {
        list_organization_spaces_page(client, request, page, DEFAULT_RESULTS_PER_PAGE)
    })
    .await
}
