use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: every requested header is allowed and `*` is emitted on
    /// preflight.
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(", ")),
        }
    }

    /// Whether every header named in an `Access-Control-Request-Headers`
    /// value is allowed. An empty request list is always allowed.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => {
                let request_headers = request_headers.trim();
                if request_headers.is_empty() {
                    return true;
                }

                request_headers
                    .split(',')
                    .map(|value| value.trim())
                    .filter(|value| !value.is_empty())
                    .all(|header| {
                        allowed
                            .iter()
                            .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                    })
            }
        }
    }

    pub(crate) fn list_contains_wildcard(&self) -> bool {
        match self {
            Self::Any => false,
            Self::List(values) => values.iter().any(|value| value == "*"),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
