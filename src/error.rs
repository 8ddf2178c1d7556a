//! Error types for Cloud Foundry API operations.

use thiserror::Error;

/// Errors that can occur during Cloud Foundry API operations.
#[derive(Debug, Error)]
pub enum CloudFoundryError {
    /// Configuration is missing or incomplete.
    #[error("Cloud Foundry configuration required: {0}")]
    ConfigMissing(String),

    /// A filter accessor failed while building request filters.
    #[error("Filter accessor '{accessor}' failed: {message}")]
    FilterAccessor {
        accessor: &'static str,
        message: String,
    },

    /// Entity not found.
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// API request failed.
    #[error("Cloud Foundry API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
        /// The v2 `error_code` (e.g. `CF-OrganizationNotFound`), when the body carried one.
        error_code: Option<String>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl CloudFoundryError {
    /// Build the error returned when a filter accessor cannot produce its value.
    pub fn filter_accessor(accessor: &'static str, message: impl Into<String>) -> Self {
        Self::FilterAccessor {
            accessor,
            message: message.into(),
        }
    }

    /// Convert a 404 API error into [`CloudFoundryError::NotFound`].
    pub(crate) fn into_not_found(self, entity_type: &'static str, id: &str) -> Self {
        match self {
            Self::ApiError {
                status_code: Some(404),
                ..
            } => Self::NotFound {
                entity_type,
                id: id.to_string(),
            },
            other => other,
        }
    }

    /// Returns true if the API reported the requested entity as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::ApiError { status_code, .. } => *status_code == Some(404),
            _ => false,
        }
    }
}

/// Result type alias for Cloud Foundry operations.
pub type Result<T> = core::result::Result<T, CloudFoundryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accessor_display() {
        let err = CloudFoundryError::filter_accessor("names", "boom");
        assert_eq!(err.to_string(), "Filter accessor 'names' failed: boom");
    }

    #[test]
    fn test_is_not_found() {
        let api = CloudFoundryError::ApiError {
            message: "The organization could not be found".to_string(),
            status_code: Some(404),
            error_code: Some("CF-OrganizationNotFound".to_string()),
        };
        assert!(api.is_not_found());

        let not_found = CloudFoundryError::NotFound {
            entity_type: "Space",
            id: "abc".to_string(),
        };
        assert!(not_found.is_not_found());

        let other = CloudFoundryError::ConfigMissing("CF_API_URL".to_string());
        assert!(!other.is_not_found());
    }

    #[test]
    fn test_into_not_found() {
        let api = CloudFoundryError::ApiError {
            message: "The space could not be found".to_string(),
            status_code: Some(404),
            error_code: None,
        };
        let err = api.into_not_found("Space", "test-space-id");
        assert_eq!(err.to_string(), "Space 'test-space-id' not found");

        let forbidden = CloudFoundryError::ApiError {
            message: "You are not authorized to perform the requested action".to_string(),
            status_code: Some(403),
            error_code: Some("CF-NotAuthorized".to_string()),
        };
        let err = forbidden.into_not_found("Space", "test-space-id");
        assert!(matches!(err, CloudFoundryError::ApiError { status_code: Some(403), .. }));
    }
}
