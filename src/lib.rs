mod targets_api;

use std::hash::Hash;

use indexmap::IndexMap;

pub use crate::targets_api::PlatformRecord;

/// Client for the targets endpoints of a RefStack API server.
///
/// Holds a `reqwest::Client` and the API base URL; cloning is cheap, so a
/// single client can be shared across concurrent fetches. Each call issues
/// one GET and fails with the underlying transport or decode error, without
/// retrying or transforming it.
#[derive(Debug, Clone)]
pub struct TargetsClient {
    http: reqwest::Client,
    api_url: String,
}

impl TargetsClient {
    /// Creates a client with a default `reqwest::Client`.
    ///
    /// `api_url` is used as-is as the URL prefix, so it should not carry a
    /// trailing slash.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Creates a client around an existing `reqwest::Client`, for callers
    /// that configure their own timeouts or connection pooling.
    pub fn with_client(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// Lists the versions available for a target type, most recent first
    /// (descending lexicographic order, not semver-aware).
    ///
    /// `target_type` is spliced into the request path verbatim, so callers
    /// must supply a URL-safe identifier.
    pub async fn version_list(&self, target_type: &str) -> anyhow::Result<Vec<String>> {
        targets_api::fetch_version_list(&self.http, &self.api_url, target_type).await
    }

    /// Fetches the known platforms as an insertion-ordered mapping from
    /// platform id to human-readable description.
    pub async fn platform_map(&self) -> anyhow::Result<IndexMap<String, String>> {
        targets_api::fetch_platform_map(&self.http, &self.api_url).await
    }
}

/// Swaps the keys and values of a mapping.
///
/// Entries are processed in insertion order, so when two keys share a value
/// the last key wins deterministically. Inverting twice only restores the
/// original when every value is unique.
pub fn invert<K, V>(map: IndexMap<K, V>) -> IndexMap<V, K>
where
    V: Hash + Eq,
{
    map.into_iter().map(|(key, value)| (value, key)).collect()
}
