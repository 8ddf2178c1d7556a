//! The v2 resource envelope shared by every entity type.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata carried by every v2 resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// The resource GUID.
    #[serde(rename = "guid")]
    pub id: String,

    /// The resource URL, relative to the API root.
    pub url: String,

    /// When the resource was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the resource was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A v2 resource: metadata plus a typed entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<E> {
    /// Resource metadata.
    pub metadata: Metadata,
    /// The entity payload.
    pub entity: E,
}

impl<E> Resource<E> {
    /// The resource GUID.
    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}

/// Sort direction accepted by v2 list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Query string for one page of a list request: the request's own
/// serialized options followed by the paging parameters.
#[derive(Debug, Serialize)]
pub(crate) struct PagedQuery<'a, Q> {
    #[serde(flatten)]
    pub query: &'a Q,
    pub page: u32,
    #[serde(rename = "results-per-page")]
    pub results_per_page: u32,
}
