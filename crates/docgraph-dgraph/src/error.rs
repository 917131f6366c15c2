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

//! Error types for docgraph-dgraph.

use thiserror::Error;

/// Error type for Dgraph mapping operations.
#[derive(Debug, Error)]
pub enum DgraphError {
    /// Transport failure talking to Dgraph.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error from serde_json.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dgraph answered with an `errors` array.
    #[error("Dgraph rejected the request: {}", .messages.join("; "))]
    Backend {
        /// Messages reported by Dgraph.
        messages: Vec<String>,
    },

    /// Dgraph answered with a non-success HTTP status.
    #[error("Dgraph returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The document cannot be inserted because it has no content groups.
    #[error("document {hash} has no content groups and cannot be inserted")]
    InvalidDocument {
        /// Hash of the rejected document.
        hash: String,
    },

    /// A stored document was returned without its uid.
    #[error("stored document {hash} was returned without a uid")]
    MissingUid {
        /// Hash of the document.
        hash: String,
    },

    /// The response did not have the expected shape.
    #[error("unexpected Dgraph response: {0}")]
    UnexpectedResponse(String),

    /// The client was used after `close`.
    #[error("Dgraph client is closed")]
    Closed,

    /// Ledger document model error.
    #[error("document error: {0}")]
    Core(#[from] docgraph_core::CoreError),
}

/// Result type alias for Dgraph mapping operations.
pub type Result<T> = std::result::Result<T, DgraphError>;
