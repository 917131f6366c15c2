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

//! Graph node payloads submitted as mutations.
//!
//! Each struct serializes to the JSON object Dgraph expects in a `set`
//! mutation, with its `dgraph.type` tag and, for updates, the existing `uid`.

use serde::Serialize;

use crate::schema::NodeType;

/// Blank-node name given to a newly inserted document.
pub const DOCUMENT_BLANK_NODE: &str = "document";

/// A bare reference to an existing node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UidRef {
    /// Graph identifier of the referenced node.
    pub uid: String,
}

impl UidRef {
    /// Reference `uid`.
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}

/// A Document node, either new (blank uid) or a patch of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentNode {
    /// `_:document` for inserts, the stored uid for updates.
    pub uid: String,
    /// Content hash; omitted on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Creating account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Ledger creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Content groups; omitted on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_groups: Option<Vec<ContentGroupNode>>,
    /// Certificates: existing ones by uid, new ones in full.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub certificates: Vec<CertificateNode>,
    /// Always [`NodeType::Document`].
    #[serde(rename = "dgraph.type")]
    pub node_type: NodeType,
}

impl DocumentNode {
    /// Whether this node creates a new document rather than patching one.
    pub fn is_insert(&self) -> bool {
        self.uid.starts_with("_:")
    }

    /// Number of certificates this node writes for the first time.
    pub fn new_certificate_count(&self) -> usize {
        self.certificates
            .iter()
            .filter(|c| matches!(c, CertificateNode::New(_)))
            .count()
    }

    /// Every Content node, in document order.
    pub fn contents(&self) -> impl Iterator<Item = &ContentNode> {
        self.content_groups
            .iter()
            .flatten()
            .flat_map(|group| group.contents.iter())
    }

    /// Every Content node, mutably, in document order.
    pub fn contents_mut(&mut self) -> impl Iterator<Item = &mut ContentNode> {
        self.content_groups
            .iter_mut()
            .flatten()
            .flat_map(|group| group.contents.iter_mut())
    }
}

/// A ContentGroup node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentGroupNode {
    /// Position of the group within its document.
    pub content_group_sequence: usize,
    /// Contents in source order.
    pub contents: Vec<ContentNode>,
    /// Always [`NodeType::ContentGroup`].
    #[serde(rename = "dgraph.type")]
    pub node_type: NodeType,
}

/// A Content node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentNode {
    /// Content label, absent when the source content had none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Value rendered as text.
    pub value: String,
    /// Value-type tag.
    #[serde(rename = "type")]
    pub value_type: String,
    /// Position of the content within its group.
    pub content_sequence: usize,
    /// Edge to the referenced document, for resolved checksum256 values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<UidRef>,
    /// Always [`NodeType::Content`].
    #[serde(rename = "dgraph.type")]
    pub node_type: NodeType,
}

/// A certificate entry in a document mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CertificateNode {
    /// Already persisted; kept by uid and never rewritten.
    Existing(UidRef),
    /// Appended by this mutation.
    New(NewCertificate),
}

/// A Certificate node written for the first time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCertificate {
    /// Certifying account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifier: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Ledger timestamp of the certification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<String>,
    /// Position in the document's certificate list.
    pub certification_sequence: usize,
    /// Always [`NodeType::Certificate`].
    #[serde(rename = "dgraph.type")]
    pub node_type: NodeType,
}
