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

//! Valid ledger documents.

use docgraph_core::{ChainCertificate, ChainContent, ChainDocument, ContentGroup, FlexValue};

/// Hash of [`alice_document`].
pub const ALICE_HASH: &str = "7b5755ce318c42fc750a754b4734282d1fad08e52c0de04762cb5f159a253c24";

/// Hash of [`referencing_document`] and [`recertified_document`].
pub const REFERENCING_HASH: &str =
    "c0b0e48a9cd1b73ac924cf58a430abd5d3091ca7cbcda6caf5b7e7cebb379327";

/// Hash of [`badge_document`].
pub const BADGE_HASH: &str = "05e81010c4600ed5d978d2ddf22420ffdf6c4094f4b3822711f0596c7c342ccb";

/// Hash of [`empty_groups_document`].
pub const EMPTY_GROUPS_HASH: &str =
    "9d0c2b7e4f1a3d5c6b8e0f2a4c6e8a0b2d4f6a8c0e2b4d6f8a0c2e4b6d8f0a2c";

/// Hash that no fixture uses.
pub const UNKNOWN_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

const CREATED_DATE: &str = "2020-08-25T03:02:10.000";

fn named_group(name: &str) -> Vec<ChainContent> {
    vec![
        ChainContent::new("content_group_name", FlexValue::string(name)),
        ChainContent::new("salary_amount", FlexValue::new("asset", "130.00 USD")),
    ]
}

fn referencing_group(name: &str) -> ContentGroup {
    let mut group = named_group(name);
    group.push(ChainContent::new("referrer", FlexValue::new("name", "friendacct")));
    group.push(ChainContent::new("vote_count", FlexValue::int64(67)));
    group.push(ChainContent::new(
        "reference_link",
        FlexValue::checksum256(ALICE_HASH),
    ));
    group
}

fn alice_certificate() -> ChainCertificate {
    ChainCertificate::new("alice", "Alice's notes", "2020-08-26T03:02:10.000")
}

fn maria_certificate() -> ChainCertificate {
    ChainCertificate::new("maria", "Marias's notes", "2020-08-26T03:02:15.000")
}

fn bob_certificate() -> ChainCertificate {
    ChainCertificate::new("bob", "Bob's notes", "2020-08-26T03:02:16.000")
}

/// A single-group document by alice with no certificates.
pub fn alice_document() -> ChainDocument {
    ChainDocument::new(ALICE_HASH)
        .with_id(9)
        .with_creator("alice")
        .with_created_date(CREATED_DATE)
        .with_content_group(named_group("My Content Group #1"))
}

/// Two groups of five contents; the last content of each group is a
/// checksum256 reference to [`alice_document`]. Certified by alice and maria.
pub fn referencing_document() -> ChainDocument {
    ChainDocument::new(REFERENCING_HASH)
        .with_id(10)
        .with_creator("johnnyhypha1")
        .with_created_date(CREATED_DATE)
        .with_content_group(referencing_group("My Content Group #1"))
        .with_content_group(referencing_group("My Content Group #2"))
        .with_certificate(alice_certificate())
        .with_certificate(maria_certificate())
}

/// [`referencing_document`] after bob certified it.
pub fn recertified_document() -> ChainDocument {
    referencing_document().with_certificate(bob_certificate())
}

/// A badge document with labelled content groups.
pub fn badge_document() -> ChainDocument {
    ChainDocument::new(BADGE_HASH)
        .with_id(24)
        .with_creator("johnnyhypha1")
        .with_created_date("2020-10-16T14:02:32.500")
        .with_content_group(vec![
            ChainContent::new("content_group_label", FlexValue::string("details")),
            ChainContent::new("title", FlexValue::string("Healer")),
            ChainContent::new("husd_coefficient_x10000", FlexValue::int64(10100)),
        ])
        .with_content_group(vec![
            ChainContent::new("content_group_label", FlexValue::string("system")),
            ChainContent::new("ballot_id", FlexValue::new("name", "hypha1....14i")),
            ChainContent::new("type", FlexValue::new("name", "badge")),
        ])
        .with_certificate(ChainCertificate::new(
            "dao.hypha",
            "certification notes",
            "2020-10-19T14:02:32.500",
        ))
}

/// A document whose content group list is present but empty.
pub fn empty_groups_document() -> ChainDocument {
    let mut doc = ChainDocument::new(EMPTY_GROUPS_HASH)
        .with_creator("bob")
        .with_created_date(CREATED_DATE);
    doc.content_groups = Some(Vec::new());
    doc
}

/// A document that carries no content groups at all.
pub fn without_content_groups(hash: &str) -> ChainDocument {
    ChainDocument::new(hash)
        .with_creator("mallory")
        .with_certificate(alice_certificate())
}

/// [`referencing_document`] as ledger JSON, the way a table dump holds it.
pub const REFERENCING_JSON: &str = r#"{
  "id": 10,
  "hash": "c0b0e48a9cd1b73ac924cf58a430abd5d3091ca7cbcda6caf5b7e7cebb379327",
  "creator": "johnnyhypha1",
  "content_groups": [
    [
      {"label": "content_group_name", "value": ["string", "My Content Group #1"]},
      {"label": "salary_amount", "value": ["asset", "130.00 USD"]},
      {"label": "referrer", "value": ["name", "friendacct"]},
      {"label": "vote_count", "value": ["int64", 67]},
      {"label": "reference_link", "value": ["checksum256", "7b5755ce318c42fc750a754b4734282d1fad08e52c0de04762cb5f159a253c24"]}
    ],
    [
      {"label": "content_group_name", "value": ["string", "My Content Group #2"]},
      {"label": "salary_amount", "value": ["asset", "130.00 USD"]},
      {"label": "referrer", "value": ["name", "friendacct"]},
      {"label": "vote_count", "value": ["int64", 67]},
      {"label": "reference_link", "value": ["checksum256", "7b5755ce318c42fc750a754b4734282d1fad08e52c0de04762cb5f159a253c24"]}
    ]
  ],
  "certificates": [
    {"certifier": "alice", "notes": "Alice's notes", "certification_date": "2020-08-26T03:02:10.000"},
    {"certifier": "maria", "notes": "Marias's notes", "certification_date": "2020-08-26T03:02:15.000"}
  ],
  "created_date": "2020-08-25T03:02:10.000"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referencing_json_matches_builder() {
        let parsed = ChainDocument::from_json(REFERENCING_JSON).unwrap();
        assert_eq!(parsed, referencing_document());
    }

    #[test]
    fn test_referencing_document_shape() {
        let doc = referencing_document();
        assert_eq!(doc.groups().len(), 2);
        assert!(doc.groups().iter().all(|g| g.len() == 5));
        assert_eq!(doc.referenced_hashes(), vec![ALICE_HASH, ALICE_HASH]);
    }

    #[test]
    fn test_recertified_appends_bob() {
        let doc = recertified_document();
        assert_eq!(doc.certificates().len(), 3);
        assert_eq!(doc.certificates()[2].certifier.as_deref(), Some("bob"));
    }
}
