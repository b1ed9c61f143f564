#![allow(dead_code)]

use sdt_cors::constants::method;
use sdt_cors::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, CorsDecision, CorsFilter, CorsPolicy,
    ExposedHeaders, RequestContext,
};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn origin_list<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins(AllowedOrigins::list(values))
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn methods_any(mut self) -> Self {
        self.methods = Some(AllowedMethods::any());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn build_policy(self) -> CorsPolicy {
        let defaults = CorsPolicy::default();
        CorsPolicy {
            allowed_origins: self.origins.unwrap_or(defaults.allowed_origins),
            allowed_methods: self.methods.unwrap_or(defaults.allowed_methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            allow_credentials: self.credentials.unwrap_or(defaults.allow_credentials),
            preflight_max_age: self.max_age.or(defaults.preflight_max_age),
        }
    }

    pub fn build(self) -> CorsFilter {
        CorsFilter::new(self.build_policy()).expect("valid CORS policy")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: "/".into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, filter: &CorsFilter) -> CorsDecision {
        let SimpleRequestBuilder {
            method,
            path,
            origin,
        } = self;
        let ctx = RequestContext {
            method: &method,
            path: &path,
            origin: origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        filter.evaluate(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    path: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn evaluate(self, filter: &CorsFilter) -> CorsDecision {
        let PreflightRequestBuilder {
            path,
            origin,
            request_method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method::OPTIONS,
            path: path.as_deref().unwrap_or("/"),
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
        };
        filter.evaluate(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
