use crate::context::RequestContext;
use crate::filter::CorsFilter;
use crate::policy::{CorsPolicy, ValidationError};
use crate::result::CorsDecision;
use indexmap::IndexMap;

/// Pattern matching every request path.
pub const ALL_PATHS: &str = "/**";

/// Maps URL path patterns to validated CORS filters.
///
/// Patterns are consulted in registration order and the first match wins.
/// The grammar is deliberately small: `/**` matches everything, a trailing
/// `/**` turns the rest into a prefix pattern, anything else matches the
/// path exactly.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Default)]
pub struct PolicyRegistry {
    filters: IndexMap<String, CorsFilter>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `policy` and binds it to `pattern`.
    ///
    /// Registering the same pattern again replaces the previous binding, so
    /// repeated registration cannot duplicate a policy for a path.
    pub fn register(
        &mut self,
        pattern: impl Into<String>,
        policy: CorsPolicy,
    ) -> Result<(), ValidationError> {
        let pattern = pattern.into();
        if pattern.is_empty() || !pattern.starts_with('/') {
            return Err(ValidationError::InvalidPathPattern(pattern));
        }

        let filter = CorsFilter::new(policy)?;
        self.filters.insert(pattern, filter);
        Ok(())
    }

    /// The filter bound to the first registered pattern matching `path`.
    pub fn filter_for(&self, path: &str) -> Option<&CorsFilter> {
        self.filters
            .iter()
            .find(|(pattern, _)| pattern_matches(pattern, path))
            .map(|(_, filter)| filter)
    }

    /// Routes the request to the filter registered for its path.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        match self.filter_for(request.path) {
            Some(filter) => filter.evaluate(request),
            None => CorsDecision::NotApplicable,
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern == ALL_PATHS {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/**") {
        return match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        };
    }
    pattern == path
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
