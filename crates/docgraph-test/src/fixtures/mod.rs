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

//! Canonical test documents.
//!
//! Organized by category:
//!
//! - **documents**: valid ledger documents, including a cross-reference
//! - **errors**: malformed JSON and records that cannot be inserted

mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all valid fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("alice_document", alice_document),
        ("referencing_document", referencing_document),
        ("recertified_document", recertified_document),
        ("badge_document", badge_document),
        ("empty_groups_document", empty_groups_document),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_all_fixtures_have_content_groups() {
        for (name, fixture) in all() {
            assert!(fixture().content_groups.is_some(), "{} has no groups", name);
        }
    }

    #[test]
    fn test_fixture_hashes_are_distinct() {
        let hashes: BTreeSet<String> = [
            alice_document(),
            referencing_document(),
            badge_document(),
            empty_groups_document(),
        ]
        .into_iter()
        .map(|d| d.hash)
        .collect();
        assert_eq!(hashes.len(), 4);
    }
}
