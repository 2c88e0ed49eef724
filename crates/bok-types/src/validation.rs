use url::Url;

use crate::api::CreateBokRequest;
use crate::models::NewBok;

/// Why a create request can't be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingTitle,
    InvalidSourceUrl,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::MissingTitle => crate::api::TITLE_REQUIRED,
            FieldError::InvalidSourceUrl => crate::api::INVALID_SOURCE_URL,
        }
    }
}

/// Source URL rule shared by the form and the create endpoint.
///
/// Blank input is accepted since the field is optional. Anything else must
/// parse as an absolute URL whose scheme is exactly `http` or `https`.
pub fn validate_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return true;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Collapse blank optional text to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Check a create request and turn it into the fields storage expects.
///
/// Title is checked before the source URL so a request failing both reports
/// the missing title.
pub fn check_create_request(req: CreateBokRequest) -> Result<NewBok, FieldError> {
    let title = non_blank(req.title).ok_or(FieldError::MissingTitle)?;

    let source_url = non_blank(req.source_url);
    if let Some(url) = &source_url {
        if !validate_url(url) {
            return Err(FieldError::InvalidSourceUrl);
        }
    }

    Ok(NewBok {
        title,
        description: non_blank(req.description),
        source_url,
    })
}
