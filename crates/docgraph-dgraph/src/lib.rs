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

//! Store ledger documents in Dgraph and read them back.
//!
//! # Mapping
//!
//! | Ledger concept | Dgraph representation |
//! |----------------|-----------------------|
//! | Document | `Document` node keyed by `hash` |
//! | Content group | `ContentGroup` node, `content_group_sequence` = position |
//! | Content | `Content` node with `label`, `value`, `type`, `content_sequence` |
//! | checksum256 content | `document` edge to the named `Document`, when stored |
//! | Certificate | `Certificate` node, `certification_sequence` = position |
//!
//! Storing a hash that already exists appends the certificates the stored
//! node does not have yet. Content groups are written once, on insert.
//!
//! # Example
//!
//! ```rust,no_run
//! use docgraph_core::ChainDocument;
//! use docgraph_dgraph::{DgraphConfig, DocumentGraph, GetOptions, StoreOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), docgraph_dgraph::DgraphError> {
//!     let graph = DocumentGraph::connect(DgraphConfig::new())?;
//!     if graph.schema_exists().await?.is_some() {
//!         graph.set_schema().await?;
//!     }
//!
//!     let doc = ChainDocument::from_json(r#"{
//!         "hash": "7b5755ce",
//!         "creator": "alice",
//!         "content_groups": [[{"label": "vote_count", "value": ["int64", 67]}]]
//!     }"#)?;
//!
//!     if let StoreOutcome::Inserted { uid, .. } = graph.store(&doc).await? {
//!         println!("stored as {}", uid);
//!     }
//!
//!     let stored = graph.get_by_hash("7b5755ce", GetOptions::new()).await?;
//!     println!("{:?}", stored);
//!
//!     graph.close().await
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod dql;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod schema;

// Re-export main types at crate root for convenience
pub use client::{
    GraphClient, HttpGraphClient, Mutation, MutationResponse, UpsertGuard, Variables,
};
pub use config::{
    DgraphConfig, DgraphConfigBuilder, GetOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
pub use error::{DgraphError, Result};
pub use graph::{DocumentGraph, StoreOutcome};
pub use mapping::{
    CertificateNode, ContentGroupNode, ContentNode, DocumentNode, DocumentRef, HashUidMap,
    NewCertificate, StoredCertificate, StoredContent, StoredContentGroup, StoredDocument,
    UidRef,
};
pub use mapping::{transform_new, transform_update};
pub use schema::{type_names, NodeType, SCHEMA};
