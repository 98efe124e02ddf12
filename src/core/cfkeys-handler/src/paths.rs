//! Parameter path and physical-id derivation.

/// Store paths for the key pair of one environment/service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterPaths {
    /// Path holding the base64-encoded private key (secret-typed).
    pub private_key: String,
    /// Path holding the public key PEM (plain-typed).
    pub public_key: String,
}

impl ParameterPaths {
    /// Derives the fixed path pair for an environment and service.
    pub fn new(environment: &str, service: &str) -> Self {
        Self {
            private_key: format!("/{environment}/{service}/cloudfront/private-key"),
            public_key: format!("/{environment}/{service}/cloudfront/public-key"),
        }
    }
}

/// Derives the stable physical resource id assigned on Create.
pub fn physical_resource_id(environment: &str, service: &str) -> String {
    format!("cf-keys-{environment}-{service}")
}
