use super::DescriptionClient;
use crate::error::GenerateError;
use crate::form::FormData;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const GENERATE_PATH: &str = "/generate-description";

/// Success payloads carry `description`; error payloads may carry
/// `error` and/or `details`. One struct covers both shapes.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    description: Option<String>,
    error: Option<String>,
    details: Option<String>,
}

pub struct HttpDescriptionClient {
    endpoint: String,
    client: Client,
}

impl HttpDescriptionClient {
    /// `endpoint` is the service base URL, e.g. `http://localhost:5000`.
    /// Timeouts surface as transport failures.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        let fallback = || format!("Server error: {}", status.as_u16());
        match serde_json::from_str::<GenerateResponse>(body) {
            Ok(parsed) => parsed
                .details
                .filter(|m| !m.is_empty())
                .or_else(|| parsed.error.filter(|m| !m.is_empty()))
                .unwrap_or_else(fallback),
            Err(_) => fallback(),
        }
    }
}

#[async_trait]
impl DescriptionClient for HttpDescriptionClient {
    async fn generate(&self, form: &FormData) -> Result<String, GenerateError> {
        let url = format!("{}{GENERATE_PATH}", self.endpoint);
        debug!("requesting description for {:?}", form.product_name);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(form)
            .send()
            .await
            .map_err(|err| GenerateError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Service(Self::error_message(status, &body)));
        }

        let payload: GenerateResponse = response.json().await.map_err(|err| {
            GenerateError::Service(format!(
                "invalid response from the generation service: {}",
                err.without_url()
            ))
        })?;

        match payload.description {
            Some(description) if !description.is_empty() => Ok(description),
            _ => Err(GenerateError::EmptyDescription),
        }
    }
}
