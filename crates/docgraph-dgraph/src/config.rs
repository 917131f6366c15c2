// Dweve DocGraph - Ledger Document Graph Mapping
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration types for the Dgraph client and read operations.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Dgraph HTTP endpoint (alpha node).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for talking to a Dgraph alpha over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DgraphConfig {
    /// Base URL of the alpha HTTP API (default: `http://localhost:8080`).
    pub endpoint: String,

    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,

    /// Guard inserts with an upsert condition so that two writers racing on
    /// the same new hash cannot both create a document (default: true).
    pub guard_inserts: bool,

    /// Access token sent as `X-Dgraph-AccessToken` (default: none).
    pub auth_token: Option<String>,
}

impl Default for DgraphConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            guard_inserts: true,
            auth_token: None,
        }
    }
}

/// Builder for DgraphConfig.
///
/// # Examples
///
/// ```
/// # use docgraph_dgraph::DgraphConfig;
/// let config = DgraphConfig::builder()
///     .endpoint("http://dgraph:8080")
///     .timeout_secs(5)
///     .build();
/// assert_eq!(config.endpoint, "http://dgraph:8080");
/// assert!(config.guard_inserts);
/// ```
#[derive(Default)]
pub struct DgraphConfigBuilder {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    guard_inserts: Option<bool>,
    auth_token: Option<Option<String>>,
}

impl DgraphConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alpha HTTP endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set whether inserts are guarded by an upsert condition.
    pub fn guard_inserts(mut self, guard: bool) -> Self {
        self.guard_inserts = Some(guard);
        self
    }

    /// Set the access token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(Some(token.into()));
        self
    }

    /// Build the DgraphConfig instance.
    ///
    /// All unset fields will use their default values.
    pub fn build(self) -> DgraphConfig {
        let defaults = DgraphConfig::default();
        DgraphConfig {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            guard_inserts: self.guard_inserts.unwrap_or(defaults.guard_inserts),
            auth_token: self.auth_token.unwrap_or(defaults.auth_token),
        }
    }
}

impl DgraphConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for DgraphConfig.
    pub fn builder() -> DgraphConfigBuilder {
        DgraphConfigBuilder::default()
    }

    /// Point at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Submit inserts as plain mutations, without the upsert guard.
    pub fn without_insert_guard(mut self) -> Self {
        self.guard_inserts = false;
        self
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join `path` onto the endpoint, tolerating a trailing slash.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Which nested collections [`crate::DocumentGraph::get_by_hash`] expands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    /// Include content groups and their contents (default: true).
    pub content_groups: bool,
    /// Include certificates (default: true).
    pub certificates: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            content_groups: true,
            certificates: true,
        }
    }
}

impl GetOptions {
    /// Expand everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip content groups.
    pub fn without_content_groups(mut self) -> Self {
        self.content_groups = false;
        self
    }

    /// Skip certificates.
    pub fn without_certificates(mut self) -> Self {
        self.certificates = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DgraphConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.guard_inserts);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = DgraphConfig::builder()
            .endpoint("http://db:9080")
            .timeout_secs(3)
            .guard_inserts(false)
            .auth_token("secret")
            .build();
        assert_eq!(config.endpoint, "http://db:9080");
        assert_eq!(config.timeout_secs, 3);
        assert!(!config.guard_inserts);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_fluent_methods() {
        let config = DgraphConfig::new()
            .with_endpoint("http://x")
            .without_insert_guard();
        assert_eq!(config.endpoint, "http://x");
        assert!(!config.guard_inserts);
    }

    #[test]
    fn test_url_joining() {
        let config = DgraphConfig::new().with_endpoint("http://localhost:8080/");
        assert_eq!(config.url("/query"), "http://localhost:8080/query");
        assert_eq!(config.url("alter"), "http://localhost:8080/alter");
    }

    #[test]
    fn test_get_options() {
        let all = GetOptions::default();
        assert!(all.content_groups && all.certificates);
        let certs_only = GetOptions::new().without_content_groups();
        assert!(!certs_only.content_groups);
        assert!(certs_only.certificates);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DgraphConfig::builder().auth_token("t").build();
        let json = serde_json::to_string(&config).unwrap();
        let back: DgraphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
