use std::future::Future;

use reqwest::Client;
use tracing::debug;

use bok_types::api::{CreateBokRequest, ErrorResponse};
use bok_types::models::Bok;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("request failed: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Error text the server sent back, if it got that far.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Sends a create request somewhere that persists it.
pub trait BokTransport {
    fn create_bok(
        &self,
        req: &CreateBokRequest,
    ) -> impl Future<Output = Result<Bok, SubmitError>>;
}

/// HTTP client for the BoK create endpoint.
pub struct BokClient {
    client: Client,
    base_url: String,
}

impl BokClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/bok", self.base_url)
    }
}

impl BokTransport for BokClient {
    async fn create_bok(&self, req: &CreateBokRequest) -> Result<Bok, SubmitError> {
        let url = self.endpoint();
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<Bok>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
