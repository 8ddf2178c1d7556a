//! Organization models and trait implementations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CloudFoundryClient;
use crate::error::{CloudFoundryError, Result};
use crate::filter::{FilterDescriptor, FilterParameter, FilterParameters, ToFilterValue};
use crate::models::resource::{OrderDirection, PagedQuery, Resource};
use crate::pagination::{Page, PaginatedResponse};
use crate::traits::{Get, List};

/// A Cloud Foundry organization resource.
pub type Organization = Resource<OrganizationEntity>;

/// Organization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    /// The organization is usable.
    Active,
    /// The organization is suspended; its apps cannot be pushed or started.
    Suspended,
}

impl fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        })
    }
}

/// The entity part of an organization resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationEntity {
    /// The organization name.
    pub name: String,

    /// The organization status (`active` or `suspended`).
    pub status: String,

    /// Whether billing is enabled.
    #[serde(default)]
    pub billing_enabled: Option<bool>,

    /// The quota definition ID.
    #[serde(rename = "quota_definition_guid", default)]
    pub quota_definition_id: Option<String>,

    /// The default isolation segment ID.
    #[serde(rename = "default_isolation_segment_guid", default)]
    pub default_isolation_segment_id: Option<String>,

    /// URL of the quota definition.
    #[serde(default)]
    pub quota_definition_url: Option<String>,

    /// URL of the organization's spaces.
    #[serde(default)]
    pub spaces_url: Option<String>,

    /// URL of the organization's domains.
    #[serde(default)]
    pub domains_url: Option<String>,

    /// URL of the organization's private domains.
    #[serde(default)]
    pub private_domains_url: Option<String>,

    /// URL of the organization's users.
    #[serde(default)]
    pub users_url: Option<String>,

    /// URL of the organization's managers.
    #[serde(default)]
    pub managers_url: Option<String>,

    /// URL of the organization's billing managers.
    #[serde(default)]
    pub billing_managers_url: Option<String>,

    /// URL of the organization's auditors.
    #[serde(default)]
    pub auditors_url: Option<String>,

    /// URL of the organization's application events.
    #[serde(default)]
    pub app_events_url: Option<String>,

    /// URL of the organization's space quota definitions.
    #[serde(default)]
    pub space_quota_definitions_url: Option<String>,
}

impl OrganizationEntity {
    /// Check whether the organization is active.
    pub fn is_active(&self) -> bool {
        self.status == OrganizationStatus::Active.to_string()
    }
}

/// The space part of an organization summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSpaceSummary {
    /// The application count.
    #[serde(rename = "app_count")]
    pub application_count: u32,

    /// The space ID.
    #[serde(rename = "guid")]
    pub id: String,

    /// Memory used by development applications, in MB.
    #[serde(rename = "mem_dev_total")]
    pub memory_development_total: u32,

    /// Memory used by production applications, in MB.
    #[serde(rename = "mem_prod_total")]
    pub memory_production_total: u32,

    /// The space name.
    pub name: String,

    /// The service count.
    pub service_count: u32,
}

/// Response of `GET /v2/organizations/:guid/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// The organization ID.
    #[serde(rename = "guid")]
    pub id: String,

    /// The organization name.
    pub name: String,

    /// The organization status.
    pub status: String,

    /// Per-space summaries.
    #[serde(default)]
    pub spaces: Vec<OrganizationSpaceSummary>,
}

impl OrganizationSummary {
    /// Total number of applications across all spaces.
    pub fn application_count(&self) -> u64 {
        self.spaces
            .iter()
            .map(|s| u64::from(s.application_count))
            .sum()
    }

    /// Total memory (development and production) across all spaces, in MB.
    pub fn memory_total(&self) -> u64 {
        self.spaces
            .iter()
            .map(|s| u64::from(s.memory_development_total) + u64::from(s.memory_production_total))
            .sum()
    }
}

/// Filters and options for `GET /v2/organizations`.
///
/// Every filter is a list: one value is sent as `field:value`, several as
/// `field IN a,b`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOrganizationsRequest {
    /// Filter by auditor user IDs.
    #[serde(skip)]
    pub auditor_ids: Vec<String>,

    /// Filter by billing manager user IDs.
    #[serde(skip)]
    pub billing_manager_ids: Vec<String>,

    /// Filter by manager user IDs.
    #[serde(skip)]
    pub manager_ids: Vec<String>,

    /// Filter by organization names.
    #[serde(skip)]
    pub names: Vec<String>,

    /// Filter by space IDs.
    #[serde(skip)]
    pub space_ids: Vec<String>,

    /// Filter by organization status.
    #[serde(skip)]
    pub statuses: Vec<OrganizationStatus>,

    /// Filter by user IDs.
    #[serde(skip)]
    pub user_ids: Vec<String>,

    /// Sort direction.
    #[serde(rename = "order-direction", skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
}

impl FilterParameters for ListOrganizationsRequest {
    fn filter_parameters() -> Vec<FilterParameter<Self>> {
        vec![
            FilterParameter::new("auditor_ids", FilterDescriptor::new("auditor_guid"), |r: &Self| {
                Ok(r.auditor_ids.to_filter_value())
            }),
            FilterParameter::new(
                "billing_manager_ids",
                FilterDescriptor::new("billing_manager_guid"),
                |r: &Self| Ok(r.billing_manager_ids.to_filter_value()),
            ),
            FilterParameter::new("manager_ids", FilterDescriptor::new("manager_guid"), |r: &Self| {
                Ok(r.manager_ids.to_filter_value())
            }),
            FilterParameter::new("names", FilterDescriptor::new("name"), |r: &Self| {
                Ok(r.names.to_filter_value())
            }),
            FilterParameter::new("space_ids", FilterDescriptor::new("space_guid"), |r: &Self| {
                Ok(r.space_ids.to_filter_value())
            }),
            FilterParameter::new("statuses", FilterDescriptor::new("status"), |r: &Self| {
                Ok(r.statuses.to_filter_value())
            }),
            FilterParameter::new("user_ids", FilterDescriptor::new("user_guid"), |r: &Self| {
                Ok(r.user_ids.to_filter_value())
            }),
        ]
    }
}

#[async_trait]
impl Get for Organization {
    type Id = String; // Organization GUID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CloudFoundryClient, id: String) -> Result<Self> {
        let path = format!("v2/organizations/{}", urlencoding::encode(&id));

        let response = client
            .get(&path)
            .await
            .map_err(|e| e.into_not_found("Organization", &id))?;
        let organization: Organization =
            response.json().await.map_err(CloudFoundryError::HttpError)?;
        Ok(organization)
    }
}

#[async_trait]
impl List for Organization {
    type Query = ListOrganizationsRequest;

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

        let response = client.get_filtered("v2/organizations", query, &params).await?;
        let data: PaginatedResponse<Organization> =
            response.json().await.map_err(CloudFoundryError::HttpError)?;

        Ok(Page::from_response(data, page))
    }
}

#[async_trait]
impl Get for OrganizationSummary {
    type Id = String; // Organization GUID

    #[tracing::instrument(skip(client))]
    async fn get(client: &CloudFoundryClient, id: String) -> Result<Self> {
        let path = format!("v2/organizations/{}/summary", urlencoding::encode(&id));

        let response = client
            .get(&path)
            .await
            .map_err(|e| e.into_not_found("Organization", &id))?;
        let summary: OrganizationSummary =
            response.json().await.map_err(CloudFoundryError::HttpError)?;
        Ok(summary)
    }
}

// Convenience functions for working with organizations

/// Get the space summary of an organization.
///
/// # Example
///
/// ```ignore
/// use cfapi::{CloudFoundryClient, get_organization_summary};
///
/// let client = CloudFoundryClient::from_env()?;
/// let summary = get_organization_summary(&client, "test-organization-id").await?;
/// for space in &summary.spaces {
///     println!("{}: {} apps", space.name, space.application_count);
/// }
/// ```
pub async fn get_organization_summary(
    client: &CloudFoundryClient,
    organization_id: &str,
) -> Result<OrganizationSummary> {
    OrganizationSummary::get(client, organization_id.to_string()).await
}
