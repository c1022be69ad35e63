//! JSON envelope returned by mutating endpoints and by every error.
//!
//! ```text
//! {"success":true,"id":17,"uri":"applicant/17"}
//! {"success":false,"errorKeys":["minlen-5:name","range-20-60:age"]}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// Outcome envelope; absent fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceResponse {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Identifier of the affected resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// Relative URI of the affected resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Machine-readable failure keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_keys: Option<Vec<String>>,
}

impl ApiResourceResponse {
    /// Success without a resource reference.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            uri: None,
            error_keys: None,
        }
    }

    /// Success pointing at the resource `id` reachable under `uri`.
    #[must_use]
    pub fn resource(id: EntityId, uri: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            uri: Some(uri.into()),
            ..Self::ok()
        }
    }

    /// Failure carrying `error_keys`.
    #[must_use]
    pub fn failure<I, S>(error_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: false,
            id: None,
            uri: None,
            error_keys: Some(error_keys.into_iter().map(Into::into).collect()),
        }
    }
}
