use crate::util::equals_ignore_case;

// Origin values beyond this length are never matched.
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Configuration for the set of origins allowed to make cross-origin
/// requests.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AllowedOrigins {
    /// Wildcard: any origin is allowed and `*` is emitted. Invalid together
    /// with credentials.
    #[default]
    Any,
    /// Explicit allow-list of origin literals (scheme://host\[:port\]).
    List(Vec<String>),
}

/// Outcome of resolving a request's `Origin` header against the
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the wildcard `*`.
    Any,
    /// Emit the configured literal (its configured spelling, not the
    /// request's casing).
    Allow(String),
    /// Origin present but not allowed; emit no allow-origin header.
    Disallow,
    /// No `Origin` header; the request is not a CORS request.
    Skip,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list, trimming whitespace and dropping
    /// case-insensitive duplicates while preserving first-seen order.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if deduped
                .iter()
                .any(|existing| equals_ignore_case(existing, &trimmed))
            {
                continue;
            }
            deduped.push(trimmed);
        }

        Self::List(deduped)
    }

    /// True when the configuration allows every origin, either via the
    /// `Any` variant or a bare `*` entry in the list.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.iter().any(|value| value == "*"),
        }
    }

    pub(crate) fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };
        if origin.is_empty() {
            return OriginDecision::Skip;
        }
        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Self::Any => OriginDecision::Any,
            Self::List(values) => {
                if values.iter().any(|value| value == "*") {
                    return OriginDecision::Any;
                }
                match values
                    .iter()
                    .find(|value| equals_ignore_case(value, origin))
                {
                    Some(value) => OriginDecision::Allow(value.clone()),
                    None => OriginDecision::Disallow,
                }
            }
        }
    }
}

impl From<&str> for AllowedOrigins {
    fn from(value: &str) -> Self {
        Self::list([value])
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
