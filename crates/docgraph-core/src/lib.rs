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

//! Ledger document model for DocGraph.
//!
//! Documents on the ledger are content-addressed records made of ordered
//! content groups. Each content is a label plus a typed value written as a
//! `[type, value]` pair:
//!
//! ```json
//! {
//!   "hash": "7b5755ce318c42fc750a754b4734282d1fad08e52c0de04762cb5f159a253c24",
//!   "creator": "alice",
//!   "created_date": "2020-08-25T03:02:10.000",
//!   "content_groups": [[
//!     {"label": "content_group_name", "value": ["string", "My Content Group #1"]},
//!     {"label": "salary_amount", "value": ["asset", "130.00 USD"]}
//!   ]]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use docgraph_core::{ChainDocument, ValueType};
//!
//! let doc = ChainDocument::from_json(r#"{
//!     "hash": "7b57",
//!     "content_groups": [[{"label": "vote_count", "value": ["int64", 67]}]]
//! }"#).unwrap();
//!
//! let votes = doc.find_content("vote_count").unwrap();
//! assert_eq!(votes.value_type, ValueType::Int64);
//! assert_eq!(votes.as_i64(), Some(67));
//! ```

#![deny(missing_docs)]

pub mod document;
pub mod error;
pub mod value;

pub use document::{
    ChainCertificate, ChainContent, ChainDocument, ContentGroup, CONTENT_GROUP_LABEL,
};
pub use error::{CoreError, Result};
pub use value::{FlexValue, ValueType};
