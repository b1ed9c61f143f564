use crate::allowed_origins::OriginDecision;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::policy::{CorsPolicy, ValidationError};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};

const PREFLIGHT_SUCCESS_STATUS: u16 = 204;

/// Evaluates requests against one validated [`CorsPolicy`].
pub struct CorsFilter {
    policy: CorsPolicy,
}

impl CorsFilter {
    /// Wraps a policy, failing fast on any invariant violation.
    pub fn new(policy: CorsPolicy) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn evaluate(&self, request: &RequestContext<'_>) -> CorsDecision {
        if Self::is_preflight(request) {
            match self.evaluate_preflight(request) {
                Some(result) => CorsDecision::Preflight(result),
                None => CorsDecision::NotApplicable,
            }
        } else {
            match self.evaluate_simple(request) {
                Some(result) => CorsDecision::Simple(result),
                None => CorsDecision::NotApplicable,
            }
        }
    }

    // An OPTIONS request only counts as a preflight when the browser names
    // the method it is asking about.
    fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
            && request
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }

    fn evaluate_preflight(&self, request: &RequestContext<'_>) -> Option<PreflightResult> {
        let (origin_headers, origin_allowed) = self.build_origin_headers(request)?;

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);

        if !origin_allowed {
            return Some(PreflightResult {
                headers: headers.into_headers(),
                status: PREFLIGHT_SUCCESS_STATUS,
            });
        }

        let requested_method = request.access_control_request_method.unwrap_or("");
        if !self.policy.allowed_methods.allows_method(requested_method) {
            return None;
        }

        let requested_headers = request.access_control_request_headers.unwrap_or("");
        if !self.policy.allowed_headers.allows_headers(requested_headers) {
            return None;
        }

        headers.extend(self.build_credentials_header());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_exposed_headers());
        headers.extend(self.build_max_age_header());

        Some(PreflightResult {
            headers: headers.into_headers(),
            status: PREFLIGHT_SUCCESS_STATUS,
        })
    }

    fn evaluate_simple(&self, request: &RequestContext<'_>) -> Option<SimpleResult> {
        let (origin_headers, origin_allowed) = self.build_origin_headers(request)?;

        let mut headers = HeaderCollection::new();
        headers.extend(origin_headers);

        if origin_allowed {
            headers.extend(self.build_credentials_header());
            headers.extend(self.build_exposed_headers());
        }

        Some(SimpleResult {
            headers: headers.into_headers(),
        })
    }

    /// Returns the origin-related headers plus whether the origin was
    /// allowed, or `None` when the request carries no `Origin` header.
    fn build_origin_headers(
        &self,
        request: &RequestContext<'_>,
    ) -> Option<(HeaderCollection, bool)> {
        let mut headers = HeaderCollection::new();

        match self.policy.allowed_origins.resolve(request.origin) {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                Some((headers, true))
            }
            OriginDecision::Allow(value) => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                Some((headers, true))
            }
            OriginDecision::Disallow => {
                headers.add_vary(header::ORIGIN);
                Some((headers, false))
            }
            OriginDecision::Skip => None,
        }
    }

    fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.policy.allow_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers
    }

    fn build_allowed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers
    }

    fn build_exposed_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if let Some(value) = self.policy.preflight_max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, value.to_string());
        }
        headers
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
