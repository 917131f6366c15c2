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

//! Property-based tests for docgraph-dgraph.
//!
//! Test coverage:
//! - DQL string literal escaping
//! - Positional sequences on insert
//! - Certificate append on update
//! - Stored order matches source order

use docgraph_core::{ChainCertificate, ChainContent, ChainDocument, FlexValue};
use docgraph_dgraph::dql::{escape_string, quote_string};
use docgraph_dgraph::mapping::transform::transform_certificates;
use docgraph_dgraph::{
    transform_new, CertificateNode, DocumentGraph, GetOptions, StoreOutcome,
};
use docgraph_test::MemoryGraph;
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

fn arb_certificates(max: usize) -> impl Strategy<Value = Vec<ChainCertificate>> {
    prop::collection::vec(("[a-z]{1,8}", ".{0,16}"), 0..max).prop_map(|certs| {
        certs
            .into_iter()
            .map(|(certifier, notes)| {
                ChainCertificate::new(certifier, notes, "2020-08-26T03:02:10.000")
            })
            .collect()
    })
}

fn arb_document() -> impl Strategy<Value = ChainDocument> {
    (
        "[0-9a-f]{64}",
        prop::collection::vec(prop::collection::vec(("[a-z_]{1,10}", ".{0,12}"), 0..6), 0..5),
        arb_certificates(5),
    )
        .prop_map(|(hash, groups, certificates)| {
            let mut doc = ChainDocument::new(hash).with_creator("prop");
            doc.content_groups = Some(
                groups
                    .into_iter()
                    .map(|group| {
                        group
                            .into_iter()
                            .map(|(label, value)| ChainContent::new(label, FlexValue::string(value)))
                            .collect()
                    })
                    .collect(),
            );
            doc.certificates = Some(certificates);
            doc
        })
}

// ============================================================================
// DQL Escaping Properties
// ============================================================================

proptest! {
    /// Quoted literals have exactly two unescaped double quotes and no raw
    /// line breaks.
    #[test]
    fn prop_quote_string_is_single_literal(s in ".*") {
        let quoted = quote_string(&s);
        prop_assert!(quoted.starts_with('"'));
        prop_assert!(quoted.ends_with('"'));
        prop_assert!(!quoted.contains('\n'));
        prop_assert!(!quoted.contains('\r'));

        let mut unescaped_quotes = 0;
        let mut escaped = false;
        for c in quoted.chars() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                unescaped_quotes += 1;
            }
        }
        prop_assert_eq!(unescaped_quotes, 2);
    }

    /// Strings without special characters are left alone.
    #[test]
    fn prop_escape_safe_string_unchanged(s in "[a-zA-Z0-9 _.-]*") {
        let escaped = escape_string(&s);
        prop_assert_eq!(escaped.as_ref(), s.as_str());
    }
}

// ============================================================================
// Transformation Properties
// ============================================================================

proptest! {
    /// Every group and content is numbered by its position.
    #[test]
    fn prop_insert_sequences_match_positions(doc in arb_document()) {
        let node = transform_new(&doc).unwrap();
        let groups = node.content_groups.as_ref().unwrap();
        prop_assert_eq!(groups.len(), doc.groups().len());
        for (g, group) in groups.iter().enumerate() {
            prop_assert_eq!(group.content_group_sequence, g);
            prop_assert_eq!(group.contents.len(), doc.groups()[g].len());
            for (c, content) in group.contents.iter().enumerate() {
                prop_assert_eq!(content.content_sequence, c);
                prop_assert_eq!(&content.label, &doc.groups()[g][c].label);
            }
        }
        prop_assert_eq!(node.new_certificate_count(), doc.certificates().len());
    }

    /// Only certificates past the stored count are produced, numbered by
    /// their source position.
    #[test]
    fn prop_certificate_append_continues_sequence(
        certs in arb_certificates(8),
        stored in 0usize..10,
    ) {
        let appended = transform_certificates(&certs, stored);
        prop_assert_eq!(appended.len(), certs.len().saturating_sub(stored));
        for (offset, cert) in appended.iter().enumerate() {
            match cert {
                CertificateNode::New(new) => {
                    prop_assert_eq!(new.certification_sequence, stored + offset);
                    prop_assert_eq!(&new.certifier, &certs[stored + offset].certifier);
                }
                CertificateNode::Existing(_) => prop_assert!(false, "unexpected existing"),
            }
        }
    }
}

// ============================================================================
// Storage Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Reading a stored document returns groups, contents and certificates
    /// in source order.
    #[test]
    fn prop_stored_order_matches_source(doc in arb_document()) {
        let rt = runtime();
        let stored = rt.block_on(async {
            let graph = DocumentGraph::new(MemoryGraph::new());
            graph.store(&doc).await.unwrap();
            graph.get_by_hash(&doc.hash, GetOptions::new()).await.unwrap().unwrap()
        });

        let non_empty: Vec<_> = doc.groups().iter().filter(|g| !g.is_empty()).collect();
        let stored_non_empty: Vec<_> = stored
            .content_groups
            .iter()
            .filter(|g| !g.contents.is_empty())
            .collect();
        prop_assert_eq!(stored.content_groups.len(), doc.groups().len());
        prop_assert_eq!(stored_non_empty.len(), non_empty.len());
        for (g, group) in stored.content_groups.iter().enumerate() {
            let source = &doc.groups()[g];
            let values: Vec<&str> = group.contents.iter().map(|c| c.value.as_str()).collect();
            let expected: Vec<&str> = source.iter().map(|c| c.value.value.as_str()).collect();
            prop_assert_eq!(values, expected);
        }

        let certifiers: Vec<_> = stored.certificates.iter().map(|c| c.certifier.clone()).collect();
        let expected: Vec<_> = doc.certificates().iter().map(|c| c.certifier.clone()).collect();
        prop_assert_eq!(certifiers, expected);
    }

    /// Storing a longer certificate list appends exactly the difference.
    #[test]
    fn prop_update_appends_difference(
        doc in arb_document(),
        extra in arb_certificates(4),
    ) {
        let rt = runtime();
        let mut longer = doc.clone();
        if let Some(certs) = longer.certificates.as_mut() {
            certs.extend(extra.iter().cloned());
        }

        let (outcome, total) = rt.block_on(async {
            let graph = DocumentGraph::new(MemoryGraph::new());
            graph.store(&doc).await.unwrap();
            let outcome = graph.store(&longer).await.unwrap();
            let stored = graph
                .get_by_hash(&doc.hash, GetOptions::new().without_content_groups())
                .await
                .unwrap()
                .unwrap();
            (outcome, stored.certificates.len())
        });

        let appended_expected = extra.len();
        let appended_matches = matches!(
            outcome,
            StoreOutcome::Updated { appended, .. } if appended == appended_expected
        );
        prop_assert!(appended_matches);
        prop_assert_eq!(total, doc.certificates().len() + extra.len());
    }
}
