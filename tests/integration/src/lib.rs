//! Integration test harness for the cfkeys lifecycle handler.
//!
//! Provides an in-process HTTP endpoint standing in for the orchestration
//! engine's presigned response URL, so tests can observe the callback the
//! handler delivers.

// Allow unwrap() in tests - panics are acceptable for test assertions
#![allow(clippy::disallowed_methods)]

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::put;
use axum::Router;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use cfkeys_handler::{LifecycleEvent, ResponsePayload};

/// Captures callback PUTs the way the orchestration engine would.
pub struct CallbackReceiver {
    addr: SocketAddr,
    rx: mpsc::Receiver<serde_json::Value>,
    server: JoinHandle<()>,
}

async fn capture(
    State(tx): State<mpsc::Sender<serde_json::Value>>,
    body: Bytes,
) -> StatusCode {
    match serde_json::from_slice(&body) {
        Ok(payload) => {
            let _ = tx.send(payload).await;
            StatusCode::OK
        }
        Err(_) => StatusCode::BAD_REQUEST,
    }
}

impl CallbackReceiver {
    /// Binds a receiver on an ephemeral local port.
    pub async fn start() -> Result<Self> {
        let (tx, rx) = mpsc::channel(16);
        let app = Router::new().route("/callback", put(capture)).with_state(tx);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind callback listener")?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, rx, server })
    }

    /// The response URL lifecycle events should carry.
    pub fn url(&self) -> String {
        format!("http://{}/callback", self.addr)
    }

    /// Waits for the next delivered callback payload.
    pub async fn next_payload(&mut self) -> Result<ResponsePayload> {
        let value = tokio::time::timeout(Duration::from_secs(30), self.rx.recv())
            .await
            .context("timed out waiting for callback")?
            .context("callback channel closed")?;
        serde_json::from_value(value).context("callback payload did not match the wire contract")
    }
}

impl Drop for CallbackReceiver {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Builds a lifecycle event addressed at the given response URL.
pub fn lifecycle_event(
    request_type: &str,
    response_url: &str,
    physical_id: Option<&str>,
) -> LifecycleEvent {
    let mut json = serde_json::json!({
        "RequestType": request_type,
        "ResourceProperties": {"Environment": "prod", "Service": "edge"},
        "StackId": "arn:stack/integration",
        "RequestId": "req-integration",
        "LogicalResourceId": "SigningKeys",
        "ResponseURL": response_url,
    });
    if let Some(id) = physical_id {
        json["PhysicalResourceId"] = id.into();
    }
    serde_json::from_value(json).expect("valid event json")
}
