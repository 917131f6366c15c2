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

//! Ledger document to graph node transformation.
//!
//! Inserts turn the whole record into a node tree; updates only append
//! certificates to the stored document. Array positions become the
//! `*_sequence` predicates so the graph can restore source order.

use docgraph_core::{ChainCertificate, ChainContent, ChainDocument, ValueType};
use std::collections::BTreeMap;

use crate::error::{DgraphError, Result};
use crate::mapping::nodes::{
    CertificateNode, ContentGroupNode, ContentNode, DocumentNode, NewCertificate, UidRef,
    DOCUMENT_BLANK_NODE,
};
use crate::mapping::stored::StoredDocument;
use crate::schema::NodeType;

/// Hash to graph uid, as returned by [`crate::DocumentGraph::get_hash_uid_map`].
pub type HashUidMap = BTreeMap<String, String>;

/// Build the node tree for a document that is not stored yet.
///
/// Fails with [`DgraphError::InvalidDocument`] when the record carries no
/// `content_groups` at all. An empty list is accepted.
pub fn transform_new(doc: &ChainDocument) -> Result<DocumentNode> {
    let groups = doc
        .content_groups
        .as_ref()
        .ok_or_else(|| DgraphError::InvalidDocument {
            hash: doc.hash.clone(),
        })?;

    let content_groups = groups
        .iter()
        .enumerate()
        .map(|(sequence, group)| ContentGroupNode {
            content_group_sequence: sequence,
            contents: transform_contents(group),
            node_type: NodeType::ContentGroup,
        })
        .collect();

    Ok(DocumentNode {
        uid: format!("_:{}", DOCUMENT_BLANK_NODE),
        hash: Some(doc.hash.clone()),
        creator: doc.creator.clone(),
        created_date: doc.created_date.clone(),
        content_groups: Some(content_groups),
        certificates: transform_certificates(doc.certificates(), 0),
        node_type: NodeType::Document,
    })
}

/// Build the patch for a document that is already stored.
///
/// Stored certificates are kept by uid; source certificates past the stored
/// count are appended with sequences continuing from that count. Content
/// groups are not touched.
pub fn transform_update(doc: &ChainDocument, current: &StoredDocument) -> Result<DocumentNode> {
    let uid = current.uid.clone().ok_or_else(|| DgraphError::MissingUid {
        hash: doc.hash.clone(),
    })?;

    let mut certificates = current
        .certificates
        .iter()
        .map(|stored| {
            stored
                .uid
                .clone()
                .map(|uid| CertificateNode::Existing(UidRef::new(uid)))
                .ok_or_else(|| {
                    DgraphError::UnexpectedResponse(format!(
                        "certificate of document {} returned without a uid",
                        doc.hash
                    ))
                })
        })
        .collect::<Result<Vec<_>>>()?;
    certificates.extend(transform_certificates(
        doc.certificates(),
        current.certificates.len(),
    ));

    Ok(DocumentNode {
        uid,
        hash: None,
        creator: None,
        created_date: None,
        content_groups: None,
        certificates,
        node_type: NodeType::Document,
    })
}

/// Turn one source group into Content nodes, numbered from 0.
pub fn transform_contents(contents: &[ChainContent]) -> Vec<ContentNode> {
    contents
        .iter()
        .enumerate()
        .map(|(sequence, content)| ContentNode {
            label: content.label.clone(),
            value: content.value.value.clone(),
            value_type: content.value.value_type.as_str().to_string(),
            content_sequence: sequence,
            document: None,
            node_type: NodeType::Content,
        })
        .collect()
}

/// Certificates at positions `start..` of `certificates`, numbered by their
/// position. Yields nothing when `start` is past the end.
pub fn transform_certificates(
    certificates: &[ChainCertificate],
    start: usize,
) -> Vec<CertificateNode> {
    certificates
        .iter()
        .enumerate()
        .skip(start)
        .map(|(sequence, certificate)| {
            CertificateNode::New(NewCertificate {
                certifier: certificate.certifier.clone(),
                notes: certificate.notes.clone(),
                certification_date: certificate.certification_date.clone(),
                certification_sequence: sequence,
                node_type: NodeType::Certificate,
            })
        })
        .collect()
}

fn is_checksum256(content: &ContentNode) -> bool {
    content.value_type == ValueType::Checksum256.as_str()
}

/// Values of every `checksum256` Content in the tree, in document order.
pub fn referenced_hashes(node: &DocumentNode) -> Vec<String> {
    node.contents()
        .filter(|content| is_checksum256(content))
        .map(|content| content.value.clone())
        .collect()
}

/// Point each `checksum256` Content whose value resolves in `uids` at the
/// referenced document. Returns how many contents were linked.
pub fn link_documents(node: &mut DocumentNode, uids: &HashUidMap) -> usize {
    let mut linked = 0;
    for content in node.contents_mut() {
        if !is_checksum256(content) {
            continue;
        }
        if let Some(uid) = uids.get(&content.value) {
            content.document = Some(UidRef::new(uid.clone()));
            linked += 1;
        }
    }
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::stored::StoredCertificate;
    use docgraph_core::FlexValue;

    fn two_content_doc() -> ChainDocument {
        ChainDocument::new("7b57")
            .with_creator("alice")
            .with_created_date("2020-08-25T03:02:10.000")
            .with_content_group(vec![
                ChainContent::new("content_group_name", FlexValue::string("My Content Group #1")),
                ChainContent::new("salary_amount", FlexValue::new("asset", "130.00 USD")),
            ])
    }

    fn certs(n: usize) -> Vec<ChainCertificate> {
        (0..n)
            .map(|i| ChainCertificate::new(format!("c{}", i), "notes", "2020-08-26T03:02:10.000"))
            .collect()
    }

    fn stored_with_certs(n: usize) -> StoredDocument {
        StoredDocument {
            uid: Some("0x1".to_string()),
            hash: "7b57".to_string(),
            certificates: (0..n)
                .map(|i| StoredCertificate {
                    uid: Some(format!("0x1{}", i)),
                    certification_sequence: i as i64,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_transform_new_sequences() {
        let node = transform_new(&two_content_doc()).unwrap();
        assert!(node.is_insert());
        assert_eq!(node.hash.as_deref(), Some("7b57"));
        let groups = node.content_groups.as_ref().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].content_group_sequence, 0);
        let contents = &groups[0].contents;
        assert_eq!(contents[0].content_sequence, 0);
        assert_eq!(contents[1].content_sequence, 1);
        assert_eq!(contents[1].value_type, "asset");
        assert_eq!(contents[1].value, "130.00 USD");
        assert!(node.certificates.is_empty());
    }

    #[test]
    fn test_transform_new_without_groups_is_invalid() {
        let doc = ChainDocument::new("abc").with_creator("alice");
        let err = transform_new(&doc).unwrap_err();
        assert!(matches!(err, DgraphError::InvalidDocument { ref hash } if hash == "abc"));
    }

    #[test]
    fn test_transform_new_accepts_empty_groups() {
        let mut doc = ChainDocument::new("abc");
        doc.content_groups = Some(vec![]);
        let node = transform_new(&doc).unwrap();
        assert_eq!(node.content_groups, Some(vec![]));
    }

    #[test]
    fn test_transform_new_numbers_certificates_from_zero() {
        let mut doc = two_content_doc();
        doc.certificates = Some(certs(2));
        let node = transform_new(&doc).unwrap();
        let sequences: Vec<usize> = node
            .certificates
            .iter()
            .map(|c| match c {
                CertificateNode::New(n) => n.certification_sequence,
                CertificateNode::Existing(_) => panic!("insert has no existing certificates"),
            })
            .collect();
        assert_eq!(sequences, vec![0, 1]);
    }

    #[test]
    fn test_transform_update_appends_after_stored() {
        let mut doc = two_content_doc();
        doc.certificates = Some(certs(3));
        let node = transform_update(&doc, &stored_with_certs(2)).unwrap();

        assert_eq!(node.uid, "0x1");
        assert!(node.content_groups.is_none());
        assert_eq!(node.certificates.len(), 3);
        assert_eq!(
            node.certificates[0],
            CertificateNode::Existing(UidRef::new("0x10"))
        );
        assert_eq!(
            node.certificates[1],
            CertificateNode::Existing(UidRef::new("0x11"))
        );
        match &node.certificates[2] {
            CertificateNode::New(cert) => {
                assert_eq!(cert.certification_sequence, 2);
                assert_eq!(cert.certifier.as_deref(), Some("c2"));
            }
            other => panic!("expected new certificate, got {:?}", other),
        }
        assert_eq!(node.new_certificate_count(), 1);
    }

    #[test]
    fn test_transform_update_with_fewer_source_certificates() {
        let mut doc = two_content_doc();
        doc.certificates = Some(certs(1));
        let node = transform_update(&doc, &stored_with_certs(2)).unwrap();
        assert_eq!(node.certificates.len(), 2);
        assert_eq!(node.new_certificate_count(), 0);
    }

    #[test]
    fn test_transform_update_requires_uid() {
        let stored = StoredDocument {
            hash: "7b57".to_string(),
            ..Default::default()
        };
        let err = transform_update(&two_content_doc(), &stored).unwrap_err();
        assert!(matches!(err, DgraphError::MissingUid { .. }));
    }

    #[test]
    fn test_link_documents() {
        let doc = ChainDocument::new("c0b0").with_content_group(vec![
            ChainContent::new("reference_link", FlexValue::checksum256("7b57")),
            ChainContent::new("dangling", FlexValue::checksum256("ffff")),
            ChainContent::new("not_a_link", FlexValue::string("7b57")),
        ]);
        let mut node = transform_new(&doc).unwrap();
        assert_eq!(referenced_hashes(&node), vec!["7b57", "ffff"]);

        let mut uids = HashUidMap::new();
        uids.insert("7b57".to_string(), "0x2".to_string());
        assert_eq!(link_documents(&mut node, &uids), 1);

        let contents: Vec<&ContentNode> = node.contents().collect();
        assert_eq!(contents[0].document, Some(UidRef::new("0x2")));
        assert_eq!(contents[1].document, None);
        assert_eq!(contents[2].document, None);
    }

    #[test]
    fn test_unlabelled_content_omits_label() {
        let doc = ChainDocument::from_json(
            r#"{"hash": "h", "content_groups": [[{"value": ["string", "x"]}], null]}"#,
        )
        .unwrap();
        let node = transform_new(&doc).unwrap();
        let groups = node.content_groups.as_ref().unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups[1].contents.is_empty());

        let json = serde_json::to_value(&groups[0].contents[0]).unwrap();
        assert!(json.get("label").is_none());
        assert_eq!(json["value"], "x");
        assert_eq!(json["content_sequence"], 0);
    }
}
