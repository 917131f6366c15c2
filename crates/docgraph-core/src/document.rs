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

//! Ledger-side document records.
//!
//! A [`ChainDocument`] is what the ledger emits for one document: a content
//! hash, its creator, an ordered list of content groups (each an ordered
//! list of labelled [`FlexValue`]s) and an append-only list of certificates.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, Result};
use crate::value::{FlexValue, ValueType};

/// Label of the content that names its enclosing content group.
pub const CONTENT_GROUP_LABEL: &str = "content_group_label";

/// An ordered list of contents.
pub type ContentGroup = Vec<ChainContent>;

/// A labelled value inside a content group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContent {
    /// Content label, unique within its group by convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Typed value.
    pub value: FlexValue,
}

impl ChainContent {
    /// Create a content.
    pub fn new(label: impl Into<String>, value: FlexValue) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }
}

/// An attestation attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCertificate {
    /// Account that certified the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifier: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Ledger timestamp of the certification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<String>,
}

impl ChainCertificate {
    /// Create a certificate.
    pub fn new(
        certifier: impl Into<String>,
        notes: impl Into<String>,
        certification_date: impl Into<String>,
    ) -> Self {
        Self {
            certifier: Some(certifier.into()),
            notes: Some(notes.into()),
            certification_date: Some(certification_date.into()),
        }
    }
}

/// A document as read from the ledger.
///
/// Only `hash` is mandatory. Every other field may be missing in the source
/// and stays `None`; `content_groups` being `None` marks the record as
/// unusable for an insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDocument {
    /// Ledger table row id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Content hash (hex), the natural key of the document.
    pub hash: String,
    /// Creating account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Ledger creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Ordered content groups. A `null` group reads as an empty one.
    #[serde(
        default,
        deserialize_with = "null_groups_as_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_groups: Option<Vec<ContentGroup>>,
    /// Certificates in ledger order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<ChainCertificate>>,
}

fn null_groups_as_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<ContentGroup>>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = Option::<Vec<Option<ContentGroup>>>::deserialize(deserializer)?;
    Ok(groups.map(|groups| groups.into_iter().map(Option::unwrap_or_default).collect()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<ChainDocument>),
    Many(Vec<ChainDocument>),
}

impl ChainDocument {
    /// Create a document with only its hash set.
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            id: None,
            hash: hash.into(),
            creator: None,
            created_date: None,
            content_groups: None,
            certificates: None,
        }
    }

    /// Parse a single document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse either one document or an array of documents.
    pub fn from_json_many(json: &str) -> Result<Vec<Self>> {
        match serde_json::from_str::<OneOrMany>(json)? {
            OneOrMany::One(doc) => Ok(vec![*doc]),
            OneOrMany::Many(docs) => Ok(docs),
        }
    }

    /// Set the ledger row id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the creator.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_date(mut self, created_date: impl Into<String>) -> Self {
        self.created_date = Some(created_date.into());
        self
    }

    /// Append a content group.
    pub fn with_content_group(mut self, group: ContentGroup) -> Self {
        self.content_groups.get_or_insert_with(Vec::new).push(group);
        self
    }

    /// Append a certificate.
    pub fn with_certificate(mut self, certificate: ChainCertificate) -> Self {
        self.certificates
            .get_or_insert_with(Vec::new)
            .push(certificate);
        self
    }

    /// Content groups, empty when absent.
    pub fn groups(&self) -> &[ContentGroup] {
        self.content_groups.as_deref().unwrap_or(&[])
    }

    /// Certificates, empty when absent.
    pub fn certificates(&self) -> &[ChainCertificate] {
        self.certificates.as_deref().unwrap_or(&[])
    }

    /// Find the group whose `content_group_label` content equals `label`.
    ///
    /// A `content_group_label` that is not a `string` value never matches.
    pub fn content_group(&self, label: &str) -> Option<&ContentGroup> {
        self.groups().iter().find(|group| {
            group.iter().any(|content| {
                content.label.as_deref() == Some(CONTENT_GROUP_LABEL)
                    && content.value.value_type == ValueType::String
                    && content.value.value == label
            })
        })
    }

    /// Look up a content by group label and content label.
    pub fn content(&self, group_label: &str, content_label: &str) -> Result<&ChainContent> {
        let group = self
            .content_group(group_label)
            .ok_or_else(|| CoreError::GroupNotFound {
                label: group_label.to_string(),
                hash: self.hash.clone(),
            })?;
        group
            .iter()
            .find(|content| content.label.as_deref() == Some(content_label))
            .ok_or_else(|| CoreError::ContentNotFound {
                label: content_label.to_string(),
                hash: self.hash.clone(),
            })
    }

    /// First content with `label` in any group, in document order.
    pub fn find_content(&self, label: &str) -> Result<&FlexValue> {
        self.groups()
            .iter()
            .flatten()
            .find(|content| content.label.as_deref() == Some(label))
            .map(|content| &content.value)
            .ok_or_else(|| CoreError::ContentNotFound {
                label: label.to_string(),
                hash: self.hash.clone(),
            })
    }

    /// Every `checksum256` value in the document, in document order.
    pub fn referenced_hashes(&self) -> Vec<&str> {
        self.groups()
            .iter()
            .flatten()
            .filter(|content| content.value.is_checksum256())
            .map(|content| content.value.value.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: &str = r#"{
        "id": 24,
        "hash": "05e81010c4600ed5d978d2ddf22420ffdf6c4094f4b3822711f0596c7c342ccb",
        "creator": "johnnyhypha1",
        "content_groups": [[
            {"label": "content_group_label", "value": ["string", "details"]},
            {"label": "title", "value": ["string", "Healer"]},
            {"label": "husd_coefficient_x10000", "value": ["int64", 10100]}
        ], [
            {"label": "content_group_label", "value": ["string", "system"]},
            {"label": "ballot_id", "value": ["name", "hypha1....14i"]},
            {"label": "type", "value": ["name", "badge"]}
        ]],
        "certificates": [{
            "certifier": "dao.hypha",
            "notes": "certification notes",
            "certification_date": "2020-10-19T14:02:32.500"
        }],
        "created_date": "2020-10-16T14:02:32.500"
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = ChainDocument::from_json(BADGE).unwrap();
        assert_eq!(doc.id, Some(24));
        assert_eq!(doc.creator.as_deref(), Some("johnnyhypha1"));
        assert_eq!(doc.groups().len(), 2);
        assert_eq!(doc.groups()[0].len(), 3);
        assert_eq!(doc.groups()[0][1].label.as_deref(), Some("title"));
        assert_eq!(doc.groups()[0][1].value.value, "Healer");
        assert_eq!(doc.certificates().len(), 1);
    }

    #[test]
    fn test_find_content() {
        let doc = ChainDocument::from_json(BADGE).unwrap();
        assert_eq!(doc.find_content("title").unwrap().value, "Healer");
        assert_eq!(
            doc.find_content("husd_coefficient_x10000").unwrap().as_i64(),
            Some(10100)
        );
    }

    #[test]
    fn test_find_content_not_found() {
        let doc = ChainDocument::from_json(BADGE).unwrap();
        let err = doc.find_content("label not found").unwrap_err();
        assert!(matches!(err, CoreError::ContentNotFound { ref label, .. } if label == "label not found"));
    }

    #[test]
    fn test_content_by_group() {
        let doc = ChainDocument::from_json(BADGE).unwrap();
        let content = doc.content("system", "type").unwrap();
        assert_eq!(content.value.value, "badge");
        assert!(matches!(
            doc.content("missing", "type"),
            Err(CoreError::GroupNotFound { .. })
        ));
        assert!(matches!(
            doc.content("details", "ballot_id"),
            Err(CoreError::ContentNotFound { .. })
        ));
    }

    #[test]
    fn test_group_label_must_be_string() {
        let doc = ChainDocument::new("h").with_content_group(vec![ChainContent::new(
            CONTENT_GROUP_LABEL,
            FlexValue::new(ValueType::Name, "details"),
        )]);
        assert!(doc.content_group("details").is_none());
    }

    #[test]
    fn test_missing_optional_fields() {
        let doc = ChainDocument::from_json(r#"{"hash": "abc"}"#).unwrap();
        assert!(doc.content_groups.is_none());
        assert!(doc.certificates.is_none());
        assert!(doc.groups().is_empty());
        assert!(doc.certificates().is_empty());
    }

    #[test]
    fn test_unlabelled_content_is_tolerated() {
        let doc = ChainDocument::from_json(
            r#"{"hash": "h", "content_groups": [[{"value": ["string", "x"]}]]}"#,
        )
        .unwrap();
        let content = &doc.groups()[0][0];
        assert!(content.label.is_none());
        assert_eq!(content.value.value, "x");
        assert!(doc.find_content("x").is_err());

        let json = serde_json::to_value(content).unwrap();
        assert!(json.get("label").is_none());
    }

    #[test]
    fn test_null_content_group_reads_as_empty() {
        let doc = ChainDocument::from_json(
            r#"{"hash": "h", "content_groups": [null, [{"label": "a", "value": ["int64", 1]}]]}"#,
        )
        .unwrap();
        assert_eq!(doc.groups().len(), 2);
        assert!(doc.groups()[0].is_empty());
        assert_eq!(doc.groups()[1].len(), 1);

        let doc = ChainDocument::from_json(r#"{"hash": "h", "content_groups": null}"#).unwrap();
        assert!(doc.content_groups.is_none());
    }

    #[test]
    fn test_content_without_value_rejected() {
        assert!(ChainDocument::from_json(
            r#"{"hash": "h", "content_groups": [[{"label": "a"}]]}"#
        )
        .is_err());
    }

    #[test]
    fn test_hash_is_required() {
        assert!(ChainDocument::from_json(r#"{"creator": "alice"}"#).is_err());
    }

    #[test]
    fn test_from_json_many() {
        let one = ChainDocument::from_json_many(r#"{"hash": "a"}"#).unwrap();
        assert_eq!(one.len(), 1);
        let many = ChainDocument::from_json_many(r#"[{"hash": "a"}, {"hash": "b"}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].hash, "b");
    }

    #[test]
    fn test_referenced_hashes() {
        let doc = ChainDocument::new("h").with_content_group(vec![
            ChainContent::new("a", FlexValue::string("x")),
            ChainContent::new("link", FlexValue::checksum256("7b57")),
        ]);
        assert_eq!(doc.referenced_hashes(), vec!["7b57"]);
    }

    #[test]
    fn test_builder_and_serialize_skips_absent() {
        let doc = ChainDocument::new("h")
            .with_creator("alice")
            .with_certificate(ChainCertificate::new("bob", "ok", "2020-08-26T03:02:16.000"));
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("content_groups").is_none());
        assert_eq!(json["certificates"][0]["certifier"], "bob");
    }
}
