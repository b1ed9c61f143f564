use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::AllowedOrigins;
use crate::constants::header;
use crate::exposed_headers::ExposedHeaders;
use crate::policy::{CorsPolicy, ValidationError};
use crate::registry::{ALL_PATHS, PolicyRegistry};

/// CORS policy for the local frontend dev server.
///
/// Allows `http://localhost:3000` with credentials, any method and any
/// request header; browsers may read the `Authorization` header and the two
/// CORS echo headers, and cache preflights for an hour.
pub fn frontend_dev_policy() -> CorsPolicy {
    CorsPolicy {
        allowed_origins: AllowedOrigins::list(["http://localhost:3000"]),
        allowed_methods: AllowedMethods::any(),
        allowed_headers: AllowedHeaders::any(),
        exposed_headers: ExposedHeaders::list([
            "Authorization",
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        ]),
        allow_credentials: true,
        preflight_max_age: Some(3600),
    }
}

/// Registers the frontend dev policy for every path.
///
/// Idempotent: installing into the same registry twice leaves a single
/// binding for `/**`.
pub fn install(registry: &mut PolicyRegistry) -> Result<(), ValidationError> {
    registry.register(ALL_PATHS, frontend_dev_policy())
}

/// Builds the registry the server mounts at startup. Any validation error
/// propagates so the host refuses to start rather than serve a weakened
/// policy.
pub fn build_registry() -> Result<PolicyRegistry, ValidationError> {
    let mut registry = PolicyRegistry::new();
    install(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
