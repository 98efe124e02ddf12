//! Result callback delivery.

use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use tracing::debug;

use crate::error::CallbackError;
use crate::response::ResponsePayload;

/// Capability to deliver a result payload to the engine's response URL.
#[async_trait]
pub trait CallbackSink: Send + Sync {
    /// Delivers the payload to the given response URL.
    async fn send(&self, response_url: &str, payload: &ResponsePayload)
        -> Result<(), CallbackError>;
}

/// HTTP PUT callback sink backed by a shared reqwest client.
///
/// The client is constructor-injected and built once per process so its
/// connection pool is reused across invocations.
#[derive(Clone)]
pub struct HttpCallbackSink {
    client: reqwest::Client,
}

impl HttpCallbackSink {
    /// Creates a sink using the given client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpCallbackSink {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl CallbackSink for HttpCallbackSink {
    async fn send(
        &self,
        response_url: &str,
        payload: &ResponsePayload,
    ) -> Result<(), CallbackError> {
        let body = serde_json::to_vec(payload)?;

        // The presigned response URL is signed without a content type, so
        // the header must be present but empty.
        let response = self
            .client
            .put(response_url)
            .header(CONTENT_TYPE, "")
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Callback delivered");

        if !status.is_success() {
            return Err(CallbackError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}
