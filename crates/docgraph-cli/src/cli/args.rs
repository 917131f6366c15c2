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

//! Options shared by every command.

use clap::Args;
use docgraph_dgraph::{DgraphConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// How to reach Dgraph.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Dgraph alpha HTTP endpoint
    #[arg(long, env = "DGRAPH_URL", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "DGRAPH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Access token sent as X-Dgraph-AccessToken
    #[arg(long, env = "DGRAPH_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Submit inserts without the duplicate-hash guard
    #[arg(long, global = true)]
    pub no_insert_guard: bool,
}

impl ConnectionArgs {
    /// Build the client configuration.
    pub fn config(&self) -> DgraphConfig {
        let mut builder = DgraphConfig::builder()
            .endpoint(self.endpoint.clone())
            .timeout_secs(self.timeout)
            .guard_inserts(!self.no_insert_guard);
        if let Some(token) = &self.token {
            builder = builder.auth_token(token.clone());
        }
        builder.build()
    }
}

/// How to print results.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = ConnectionArgs {
            endpoint: "http://dgraph:8080".to_string(),
            timeout: 5,
            token: Some("secret".to_string()),
            no_insert_guard: true,
        };
        let config = args.config();
        assert_eq!(config.endpoint, "http://dgraph:8080");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert!(!config.guard_inserts);
    }
}
