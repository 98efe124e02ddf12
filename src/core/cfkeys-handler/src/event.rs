//! Lifecycle event wire model.
//!
//! Matches the custom-resource request contract delivered by the
//! orchestration engine. Field names on the wire are PascalCase.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::HandlerError;

/// Resource property key naming the deployment environment.
pub const PROP_ENVIRONMENT: &str = "Environment";

/// Resource property key naming the owning service.
pub const PROP_SERVICE: &str = "Service";

/// The desired state transition for the managed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    /// Provision the resource.
    Create,
    /// Update the resource in place.
    Update,
    /// Tear the resource down.
    Delete,
}

/// A lifecycle event as delivered by the orchestration engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    /// Requested state transition.
    pub request_type: RequestType,

    /// Free-form resource properties; must include `Environment` and
    /// `Service` string values.
    #[serde(default)]
    pub resource_properties: HashMap<String, Value>,

    /// Identifier of the owning stack.
    pub stack_id: String,

    /// Unique identifier of this request.
    pub request_id: String,

    /// Logical name of the resource within the stack template.
    pub logical_resource_id: String,

    /// Presigned URL the result callback must be delivered to.
    #[serde(rename = "ResponseURL")]
    pub response_url: String,

    /// Stable resource identifier, present on Update and Delete.
    #[serde(default)]
    pub physical_resource_id: Option<String>,
}

impl LifecycleEvent {
    /// The `Environment` resource property.
    ///
    /// # Errors
    ///
    /// Fails with [`HandlerError::MalformedEvent`] when the property is
    /// missing or not a string.
    pub fn environment(&self) -> Result<&str, HandlerError> {
        self.string_property(PROP_ENVIRONMENT)
    }

    /// The `Service` resource property.
    ///
    /// # Errors
    ///
    /// Fails with [`HandlerError::MalformedEvent`] when the property is
    /// missing or not a string.
    pub fn service(&self) -> Result<&str, HandlerError> {
        self.string_property(PROP_SERVICE)
    }

    fn string_property(&self, key: &str) -> Result<&str, HandlerError> {
        self.resource_properties
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                HandlerError::MalformedEvent(format!("missing resource property: {key}"))
            })
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "RequestType": "Create",
            "ResourceProperties": {"Environment": "prod", "Service": "edge"},
            "StackId": "arn:stack/demo",
            "RequestId": "req-1",
            "LogicalResourceId": "SigningKeys",
            "ResponseURL": "https://callback.example/presigned"
        })
    }

    #[test]
    fn test_deserialize_create_event() {
        let event: LifecycleEvent = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(event.request_type, RequestType::Create);
        assert_eq!(event.environment().unwrap(), "prod");
        assert_eq!(event.service().unwrap(), "edge");
        assert_eq!(event.response_url, "https://callback.example/presigned");
        assert!(event.physical_resource_id.is_none());
    }

    #[test]
    fn test_deserialize_with_physical_resource_id() {
        let mut json = sample_json();
        json["RequestType"] = "Delete".into();
        json["PhysicalResourceId"] = "cf-keys-prod-edge".into();

        let event: LifecycleEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.request_type, RequestType::Delete);
        assert_eq!(event.physical_resource_id.as_deref(), Some("cf-keys-prod-edge"));
    }

    #[test]
    fn test_missing_property_is_malformed() {
        let mut json = sample_json();
        json["ResourceProperties"] = serde_json::json!({"Environment": "prod"});

        let event: LifecycleEvent = serde_json::from_value(json).unwrap();
        let result = event.service();
        assert!(matches!(result, Err(HandlerError::MalformedEvent(_))));
    }

    #[test]
    fn test_non_string_property_is_malformed() {
        let mut json = sample_json();
        json["ResourceProperties"]["Environment"] = 42.into();

        let event: LifecycleEvent = serde_json::from_value(json).unwrap();
        assert!(matches!(
            event.environment(),
            Err(HandlerError::MalformedEvent(_))
        ));
    }

    #[test]
    fn test_unknown_request_type_rejected() {
        let mut json = sample_json();
        json["RequestType"] = "Upsert".into();

        let result: Result<LifecycleEvent, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
