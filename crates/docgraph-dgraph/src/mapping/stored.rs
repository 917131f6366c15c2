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

//! Documents as read back from the graph.
//!
//! Every field is lenient: predicates a query did not select, or that Dgraph
//! omitted because they are empty, deserialize to `None` or an empty list.

use serde::{Deserialize, Serialize};

/// A Document node read from the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Graph identifier (absent from `expand(_all_)` results).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Content hash.
    #[serde(default)]
    pub hash: String,
    /// Creating account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation timestamp as returned by Dgraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Content groups, ordered by sequence when the query asked for it.
    #[serde(default)]
    pub content_groups: Vec<StoredContentGroup>,
    /// Certificates, ordered by sequence when the query asked for it.
    #[serde(default)]
    pub certificates: Vec<StoredCertificate>,
}

impl StoredDocument {
    /// The content group at `sequence`, if present.
    pub fn content_group(&self, sequence: i64) -> Option<&StoredContentGroup> {
        self.content_groups
            .iter()
            .find(|g| g.content_group_sequence == sequence)
    }
}

/// A ContentGroup node read from the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredContentGroup {
    /// Graph identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Position within the document.
    #[serde(default)]
    pub content_group_sequence: i64,
    /// Contents.
    #[serde(default)]
    pub contents: Vec<StoredContent>,
}

/// A Content node read from the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredContent {
    /// Graph identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Content label.
    #[serde(default)]
    pub label: String,
    /// Value as text.
    #[serde(default)]
    pub value: String,
    /// Value-type tag.
    #[serde(default, rename = "type")]
    pub value_type: String,
    /// Position within the group.
    #[serde(default)]
    pub content_sequence: i64,
    /// Referenced documents (at most one in practice).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub document: Vec<DocumentRef>,
}

/// The far end of a Content's `document` edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Graph identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Hash of the referenced document.
    #[serde(default)]
    pub hash: String,
    /// Creator of the referenced document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Creation timestamp of the referenced document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

/// A Certificate node read from the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredCertificate {
    /// Graph identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Certifying account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifier: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Certification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<String>,
    /// Position in the document's certificate list.
    #[serde(default)]
    pub certification_sequence: i64,
}
