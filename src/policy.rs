use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::exposed_headers::ExposedHeaders;
use thiserror::Error;

/// Immutable CORS policy for one URL scope.
///
/// Constructed once at startup and shared read-only across request-handling
/// threads for the life of the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: AllowedOrigins,
    pub allowed_methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub allow_credentials: bool,
    /// Seconds a browser may cache a preflight response
    /// (`Access-Control-Max-Age`).
    pub preflight_max_age: Option<u64>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::default(),
            allowed_methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            allow_credentials: false,
            preflight_max_age: None,
        }
    }
}

impl CorsPolicy {
    /// Checks the configuration invariants the CORS specification imposes.
    ///
    /// Violations are fatal at startup; the policy is never silently
    /// weakened into something enforceable.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_credentials && self.allowed_origins.is_wildcard() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }
        if self.allowed_headers.list_contains_wildcard() {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }
        if self.exposed_headers.contains_wildcard() {
            return Err(ValidationError::ExposedHeadersCannotContainWildcard);
        }

        Ok(())
    }
}

/// Configuration errors detected before a policy is put into service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Allowing credentials requires an explicit origin allow-list; a wildcard origin together with credentials is forbidden by the CORS specification."
    )]
    CredentialsRequireSpecificOrigin,
    #[error(
        "The allowed-header list cannot contain the '*' wildcard; use AllowedHeaders::Any instead."
    )]
    AllowedHeadersListCannotContainWildcard,
    #[error("The exposed-header list cannot contain the '*' wildcard.")]
    ExposedHeadersCannotContainWildcard,
    #[error("The path pattern '{0}' is invalid; patterns must be non-empty and start with '/'.")]
    InvalidPathPattern(String),
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
