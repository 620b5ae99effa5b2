//! Navigation targets: a path plus decoded query pairs.

use reqwest::Url;

/// Scheme-only base used to borrow `Url`'s query encoding for in-app paths.
const APP_BASE: &str = "app://local/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: normalize_path(&path.into()), query: Vec::new() }
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Parse `path?query` (a leading `#` from hash-style URLs is ignored).
    /// Unparsable input falls back to the raw path with no query.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('#');
        let parsed = Url::parse(APP_BASE).and_then(|base| base.join(raw));
        match parsed {
            Ok(url) => Self {
                path: normalize_path(url.path()),
                query: url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect(),
            },
            Err(_) => Self::new(raw.split('?').next().unwrap_or("/")),
        }
    }

    /// Path and percent-encoded query, suitable for a `redirect` parameter.
    #[must_use]
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let Ok(mut url) = Url::parse(APP_BASE) else {
            return self.path.clone();
        };
        url.query_pairs_mut().extend_pairs(&self.query);
        match url.query() {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }

    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Leading slash, no trailing slash (except for the root itself).
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
