use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::consts;
use crate::errors::ClientError;
use crate::models::completion::{CompletionRequest, CompletionResponse};
use crate::models::error_response::ErrorResponse;
use crate::models::moderation::{ModerationRequest, ModerationResponse};
use crate::stream::CompletionStream;

/// The calls a completions backend offers, so callers can swap in a fake in tests.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ClientError>;

    async fn moderations(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ClientError>;
}

/// HTTP client for the completions and moderations endpoints.
///
/// Cloning is cheap and clones share the underlying connection pool. Every
/// call is a single POST with no retries; dropping the returned future aborts
/// the request in flight.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    request_timeout: Option<Duration>,
}

impl Client {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(reqwest::Client::new(), consts::DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            request_timeout: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;

        let mut client = Self::with_base_url(http_client, &config.base_url, &config.api_key);
        client.request_timeout = config.request_timeout_secs.map(Duration::from_secs);
        Ok(client)
    }

    /// Deadline for each whole request, enforced by the transport.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn full_url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// Creates a completion for the prompt. If `request.model` names a
    /// fine-tuned model the server applies that model's parameters.
    pub async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ClientError> {
        self.send_request(consts::COMPLETIONS_PATH, request).await
    }

    /// Classifies the input text against the content policy categories.
    pub async fn moderations(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ClientError> {
        self.send_request(consts::MODERATIONS_PATH, request).await
    }

    /// Same as `create_completion` with `stream` forced on; chunks are read
    /// from the returned stream as the server produces them.
    pub async fn create_completion_stream(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionStream, ClientError> {
        let mut request = request.clone();
        request.stream = Some(true);

        let response = self.post(consts::COMPLETIONS_PATH, &request).await?;
        expect_content_type(&response, consts::CONTENT_TYPE_EVENT_STREAM)?;

        Ok(CompletionStream::new(response))
    }

    async fn send_request<Req, Resp>(&self, suffix: &str, request: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self.post(suffix, request).await?;
        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        Ok(decoded)
    }

    async fn post<Req>(&self, suffix: &str, request: &Req) -> Result<Response, ClientError>
    where
        Req: Serialize + ?Sized,
    {
        let payload =
            serde_json::to_vec(request).map_err(|e| ClientError::EncodeError(e.to_string()))?;

        let url = self.full_url(suffix);
        let url = reqwest::Url::parse(&url)
            .map_err(|e| ClientError::RequestError(format!("invalid url {url}: {e}")))?;

        log::debug!("POST {} ({} bytes)", url, payload.len());

        let mut builder = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, consts::CONTENT_TYPE_JSON)
            .body(payload);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to read error body from {}: {}", suffix, e);
                    String::new()
                }
            };
            log::warn!("{} returned status {}", suffix, status);

            return Err(ClientError::ApiError {
                status: status.as_u16(),
                error: ErrorResponse::parse(&text),
                body: text,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionApi for Client {
    async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ClientError> {
        Client::create_completion(self, request).await
    }

    async fn moderations(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationResponse, ClientError> {
        Client::moderations(self, request).await
    }
}

fn expect_content_type(response: &Response, expected: &str) -> Result<(), ClientError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .ok_or_else(|| ClientError::ParseError("missing content-type".to_string()))?
        .to_str()
        .map_err(|e| ClientError::ParseError(e.to_string()))?;

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if !essence.eq_ignore_ascii_case(expected) {
        return Err(ClientError::ParseError(format!(
            "content-type: {content_type}, expected: {expected}"
        )));
    }
    Ok(())
}
