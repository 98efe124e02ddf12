//! Callback response wire model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::LifecycleEvent;

/// Outcome reported back to the orchestration engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    /// The requested transition completed.
    Success,
    /// The requested transition failed.
    Failed,
}

/// Result payload delivered to the engine's response URL.
///
/// Routing fields (`StackId`, `RequestId`, `LogicalResourceId`) are echoed
/// from the originating event so the engine can correlate the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponsePayload {
    /// SUCCESS or FAILED.
    pub status: ResponseStatus,
    /// Human-readable outcome description.
    pub reason: String,
    /// Stable resource identifier.
    pub physical_resource_id: String,
    /// Echoed stack identifier.
    pub stack_id: String,
    /// Echoed request identifier.
    pub request_id: String,
    /// Echoed logical resource name.
    pub logical_resource_id: String,
    /// Free-form result attributes.
    pub data: Value,
}

impl ResponsePayload {
    /// Builds a SUCCESS payload for the given event.
    pub fn success(event: &LifecycleEvent, physical_resource_id: String, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            reason: "See the handler log stream for details".to_string(),
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }

    /// Builds a FAILED payload carrying the error under `Data.Error`.
    pub fn failed(event: &LifecycleEvent, physical_resource_id: String, error: String) -> Self {
        Self {
            status: ResponseStatus::Failed,
            reason: error.clone(),
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data: serde_json::json!({ "Error": error }),
        }
    }
}
