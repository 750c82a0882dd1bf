//! Text-generation collaborator.
//!
//! `BriefingModel` is the seam between the requester and the hosted model.
//! `GeminiModel` is the production implementation over the
//! `generateContent` REST endpoint; tests substitute stubs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::IntelConfig;
use crate::error::IntelError;

/// One structured-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    /// JSON schema the response text must conform to.
    pub response_schema: Value,
}

/// A text-generation service able to answer a structured request.
#[async_trait]
pub trait BriefingModel: Send + Sync {
    /// Send one request and return the raw response text.
    ///
    /// An empty string means the service answered without any text.
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, IntelError>;
}

/// Client for the hosted Gemini `generateContent` API.
pub struct GeminiModel {
    /// HTTP client
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiModel {
    /// Create a new client with configuration
    pub fn new(config: &IntelConfig) -> Result<Self, IntelError> {
        config.validate().map_err(IntelError::InvalidConfig)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Full URL of the generation endpoint for the configured model.
    pub fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

#[async_trait]
impl BriefingModel for GeminiModel {
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, IntelError> {
        let url = self.url();
        debug!(model = %self.model, "Requesting briefing generation");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body(request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IntelError::Service {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        Ok(body.text())
    }
}

/// Wire body for a `generateContent` call.
pub fn request_body(request: &GenerationRequest) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": request.system_instruction }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema
        }
    })
}

/// The subset of the `generateContent` response we read.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate. Empty if there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
