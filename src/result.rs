use crate::headers::Headers;

/// Response to a preflight `OPTIONS` request. Preflights are always
/// terminal: the host answers with `status` and `headers` and skips routing.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
}

/// Headers to decorate an actual (non-preflight) response with. The request
/// itself proceeds through routing regardless of the origin decision.
#[derive(Debug, Clone)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by the filter for one request.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// Not a CORS request (no `Origin` header) or no policy registered for
    /// the path; the host leaves the exchange untouched.
    NotApplicable,
}
