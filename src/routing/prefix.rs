//! Route prefix normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path segment prepended to every route. Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoutePrefix(String);

impl RoutePrefix {
    /// Normalize `raw` so it begins and ends with `/`. Empty input is the root.
    pub fn new(raw: &str) -> Self {
        let mut prefix = raw.trim().to_string();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        if !prefix.starts_with('/') {
            prefix.insert(0, '/');
        }
        Self(prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Prefix without the trailing slash, `""` for the root.
    pub fn base(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Absolute path for a route relative to the prefix.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }

    /// Every absolute path a route should be registered under. The prefix
    /// root answers both with and without its trailing slash.
    pub fn mount_paths(&self, path: &str) -> Vec<String> {
        let path = path.trim_start_matches('/');
        if path.is_empty() && !self.is_root() {
            vec![self.base().to_string(), self.0.clone()]
        } else {
            vec![self.join(path)]
        }
    }

    /// The part of `path` after the prefix, without a leading slash.
    /// `None` when `path` lies outside the prefix.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if let Some(rest) = path.strip_prefix(self.0.as_str()) {
            return Some(rest);
        }
        (path == self.base()).then_some("")
    }
}

impl Default for RoutePrefix {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl From<String> for RoutePrefix {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<RoutePrefix> for String {
    fn from(prefix: RoutePrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for RoutePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(RoutePrefix::new("api").as_str(), "/api/");
        assert_eq!(RoutePrefix::new("/api").as_str(), "/api/");
        assert_eq!(RoutePrefix::new("api/").as_str(), "/api/");
        assert_eq!(RoutePrefix::new("/api/v1/").as_str(), "/api/v1/");
        assert_eq!(RoutePrefix::new("").as_str(), "/");
        assert_eq!(RoutePrefix::new("/").as_str(), "/");
    }

    #[test]
    fn test_join_and_mount_paths() {
        let root = RoutePrefix::default();
        assert_eq!(root.join("word"), "/word");
        assert_eq!(root.mount_paths(""), vec!["/"]);

        let api = RoutePrefix::new("api");
        assert_eq!(api.join("/status/{code}"), "/api/status/{code}");
        assert_eq!(api.mount_paths(""), vec!["/api", "/api/"]);
        assert_eq!(api.mount_paths("info"), vec!["/api/info"]);
    }

    #[test]
    fn test_strip() {
        let api = RoutePrefix::new("api");
        assert_eq!(api.strip("/api/healthz"), Some("healthz"));
        assert_eq!(api.strip("/api/"), Some(""));
        assert_eq!(api.strip("/api"), Some(""));
        assert_eq!(api.strip("/apis"), None);
        assert_eq!(api.strip("/word"), None);

        assert_eq!(RoutePrefix::default().strip("/anything/here"), Some("anything/here"));
    }
}
