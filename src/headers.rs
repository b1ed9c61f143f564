use crate::constants::header;
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

/// Accumulates response headers while merging `Vary` entries instead of
/// clobbering them.
#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_string(), value.into());
        }
    }

    pub(crate) fn add_vary(&mut self, value: impl Into<String>) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.into().trim().to_string();
        if !incoming.is_empty() {
            entries.push(incoming);
        }

        if entries.is_empty() {
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers
            .insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            if name.eq_ignore_ascii_case(header::VARY) {
                self.add_vary(value);
            } else {
                self.headers.insert(name, value);
            }
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
