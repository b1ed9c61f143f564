//! CORS policy configuration for the SDT backend's HTTP layer.
//!
//! The crate builds one immutable [`CorsPolicy`] at startup, validates it,
//! and registers it against a URL path pattern in a [`PolicyRegistry`]. The
//! hosting server hands every inbound request to
//! [`PolicyRegistry::evaluate`] and applies the returned headers.

pub mod constants;

mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod context;
mod exposed_headers;
mod filter;
mod headers;
mod policy;
mod provider;
mod registry;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::{AllowedOrigins, OriginDecision};
pub use context::RequestContext;
pub use exposed_headers::ExposedHeaders;
pub use filter::CorsFilter;
pub use headers::Headers;
pub use policy::{CorsPolicy, ValidationError};
pub use provider::{build_registry, frontend_dev_policy, install};
pub use registry::{ALL_PATHS, PolicyRegistry};
pub use result::{CorsDecision, PreflightResult, SimpleResult};
