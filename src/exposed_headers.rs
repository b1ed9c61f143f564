use crate::util::normalize_lower;
use std::collections::HashSet;
use std::ops::Deref;

/// Configuration mirror of the `Access-Control-Expose-Headers` response
/// header: the response headers browser-side scripts may read.
///
/// Order is significant and preserved; duplicates are removed
/// case-insensitively, keeping the first spelling seen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();

        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize_lower(&trimmed)) {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn contains_wildcard(&self) -> bool {
        self.values.iter().any(|value| value == "*")
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
