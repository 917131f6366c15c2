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

//! DQL query templates.

use crate::config::GetOptions;
use crate::dql::escape::{quote_list, quote_string};

/// Name of the result block every document query uses.
pub const DOCUMENTS_BLOCK: &str = "documents";

/// Documents by exact creator, expanded three levels deep.
///
/// Variables: `$creator`.
pub const BY_CREATOR: &str = r#"query documents($creator: string) {
  documents(func: eq(creator, $creator)) {
    expand(_all_) {
      expand(_all_) {
        expand(_all_)
      }
    }
  }
}"#;

const CONTENT_GROUPS_SELECTION: &str = r#"
    content_groups (orderasc: content_group_sequence) {
      uid
      content_group_sequence
      contents (orderasc: content_sequence) {
        uid
        content_sequence
        label
        value
        type
        document {
          uid
          expand(_all_)
        }
      }
    }"#;

const CERTIFICATES_SELECTION: &str = r#"
    certificates (orderasc: certification_sequence) {
      uid
      expand(_all_)
    }"#;

/// Document by exact hash with the nested collections `options` asks for.
///
/// Variables: `$hash`.
pub fn by_hash(options: &GetOptions) -> String {
    let mut query = String::from(
        "query documents($hash: string) {\n  documents(func: eq(hash, $hash)) {\n    uid\n    hash\n    creator\n    created_date",
    );
    if options.content_groups {
        query.push_str(CONTENT_GROUPS_SELECTION);
    }
    if options.certificates {
        query.push_str(CERTIFICATES_SELECTION);
    }
    query.push_str("\n  }\n}");
    query
}

/// `uid` and `hash` of every document whose hash is in `hashes`.
///
/// The hash list is inlined as a quoted literal.
pub fn hash_uid_map<'a>(hashes: impl IntoIterator<Item = &'a str>) -> String {
    format!(
        "{{\n  documents(func: eq(hash, {})) {{\n    uid\n    hash\n  }}\n}}",
        quote_list(hashes)
    )
}

/// Variable name bound by [`insert_guard`].
pub const GUARD_VARIABLE: &str = "existing";

/// Upsert query and condition that only let a mutation through when no
/// document with `hash` exists yet.
pub fn insert_guard(hash: &str) -> (String, String) {
    let query = format!(
        "{{\n  guard(func: eq(hash, {})) {{\n    {} as uid\n  }}\n}}",
        quote_string(hash),
        GUARD_VARIABLE
    );
    let cond = format!("@if(eq(len({}), 0))", GUARD_VARIABLE);
    (query, cond)
}

/// Schema query listing which of `type_names` are declared.
pub fn types_query(type_names: &[&str]) -> String {
    format!("schema(type: [{}]) {{}}", type_names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_hash_full() {
        let q = by_hash(&GetOptions::default());
        assert!(q.contains("eq(hash, $hash)"));
        assert!(q.contains("orderasc: content_group_sequence"));
        assert!(q.contains("orderasc: content_sequence"));
        assert!(q.contains("orderasc: certification_sequence"));
        assert!(q.contains("uid"));
    }

    #[test]
    fn test_by_hash_without_content_groups() {
        let q = by_hash(&GetOptions::new().without_content_groups());
        assert!(!q.contains("content_groups"));
        assert!(q.contains("certificates"));
    }

    #[test]
    fn test_by_hash_without_certificates() {
        let q = by_hash(&GetOptions::new().without_certificates());
        assert!(q.contains("content_groups"));
        assert!(!q.contains("certificates"));
    }

    #[test]
    fn test_by_hash_braces_balance() {
        for opts in [
            GetOptions::default(),
            GetOptions::new().without_content_groups(),
            GetOptions::new().without_certificates(),
            GetOptions::new().without_certificates().without_content_groups(),
        ] {
            let q = by_hash(&opts);
            assert_eq!(q.matches('{').count(), q.matches('}').count(), "{}", q);
        }
    }

    #[test]
    fn test_by_creator_expands_three_levels() {
        assert_eq!(BY_CREATOR.matches("expand(_all_)").count(), 3);
        assert!(BY_CREATOR.contains("eq(creator, $creator)"));
    }

    #[test]
    fn test_hash_uid_map_inlines_quoted_list() {
        let q = hash_uid_map(["a", "b"]);
        assert!(q.contains(r#"eq(hash, ["a", "b"])"#));
    }

    #[test]
    fn test_insert_guard() {
        let (query, cond) = insert_guard("7b57");
        assert!(query.contains(r#"eq(hash, "7b57")"#));
        assert!(query.contains("existing as uid"));
        assert_eq!(cond, "@if(eq(len(existing), 0))");
    }

    #[test]
    fn test_types_query() {
        assert_eq!(
            types_query(&["Document", "Content"]),
            "schema(type: [Document, Content]) {}"
        );
    }
}
