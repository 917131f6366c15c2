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

//! Graph schema: node types and predicate declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The node types stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// A ledger document.
    Document,
    /// An ordered group of contents.
    ContentGroup,
    /// A labelled, typed value.
    Content,
    /// An attestation on a document.
    Certificate,
}

impl NodeType {
    /// Every node type, in declaration order.
    pub const ALL: [NodeType; 4] = [
        NodeType::Document,
        NodeType::ContentGroup,
        NodeType::Content,
        NodeType::Certificate,
    ];

    /// The type name as declared to Dgraph and written to `dgraph.type`.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Document => "Document",
            NodeType::ContentGroup => "ContentGroup",
            NodeType::Content => "Content",
            NodeType::Certificate => "Certificate",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of all declared types, in declaration order.
pub fn type_names() -> Vec<&'static str> {
    NodeType::ALL.iter().map(|t| t.as_str()).collect()
}

/// Type and predicate declarations submitted by
/// [`crate::DocumentGraph::set_schema`].
///
/// `hash` carries `@upsert` so that concurrent inserts of the same hash
/// conflict at commit time.
pub const SCHEMA: &str = r#"
type Document {
    hash
    created_date
    creator
    content_groups
    certificates
}

type ContentGroup {
    content_group_sequence
    contents
}

type Content {
    label
    value
    type
    content_sequence
    document
}

type Certificate {
    certifier
    notes
    certification_date
    certification_sequence
}

hash: string @index(exact) @upsert .
created_date: datetime .
creator: string @index(term) .
content_groups: [uid] .
certificates: [uid] .

content_group_sequence: int .
contents: [uid] .

label: string @index(term) .
value: string @index(term) .
type: string @index(term) .
content_sequence: int .
document: [uid] .

certifier: string @index(term) .
notes: string .
certification_date: datetime .
certification_sequence: int .
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_is_declared() {
        for name in type_names() {
            assert!(
                SCHEMA.contains(&format!("type {} {{", name)),
                "missing type block for {}",
                name
            );
        }
    }

    #[test]
    fn test_hash_is_exact_indexed() {
        assert!(SCHEMA.contains("hash: string @index(exact)"));
    }

    #[test]
    fn test_type_names_order() {
        assert_eq!(
            type_names(),
            vec!["Document", "ContentGroup", "Content", "Certificate"]
        );
    }

    #[test]
    fn test_node_type_serializes_as_name() {
        let json = serde_json::to_string(&NodeType::ContentGroup).unwrap();
        assert_eq!(json, "\"ContentGroup\"");
    }
}
