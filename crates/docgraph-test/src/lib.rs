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

//! Shared fixtures and graph doubles for DocGraph tests.
//!
//! # Quick Start
//!
//! ```rust
//! use docgraph_test::{fixtures, MemoryGraph};
//! use docgraph_dgraph::DocumentGraph;
//!
//! let doc = fixtures::referencing_document();
//! assert_eq!(doc.groups().len(), 2);
//!
//! let graph = DocumentGraph::new(MemoryGraph::new());
//! # let _ = graph;
//! ```
//!
//! [`MemoryGraph`] understands exactly the queries and mutations the mapper
//! issues. [`FailingGraph`] rejects everything with a backend error.

pub mod failing;
pub mod fixtures;
pub mod memory;

pub use failing::FailingGraph;
pub use memory::MemoryGraph;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> docgraph_core::ChainDocument)>;
