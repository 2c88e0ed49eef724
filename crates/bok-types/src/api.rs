use serde::{Deserialize, Serialize};

// -- Error messages --

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_SOURCE_URL: &str = "Source URL must be an absolute http or https URL";
pub const INVALID_BODY: &str = "Invalid request body";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

// -- Create --

/// Body of `POST /api/bok`.
///
/// Every field is optional at the decoding layer so a missing title surfaces
/// as a field-level 400 instead of a generic decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBokRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
