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

//! Inputs that must be rejected.

/// Malformed ledger JSON samples as (name, json) pairs.
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("not_json", "this is not json"),
        ("missing_hash", r#"{"creator": "alice", "content_groups": []}"#),
        ("hash_not_string", r#"{"hash": 7, "content_groups": []}"#),
        (
            "value_not_pair",
            r#"{"hash": "ab", "content_groups": [[{"label": "x", "value": "string"}]]}"#,
        ),
        (
            "missing_value",
            r#"{"hash": "ab", "content_groups": [[{"label": "x"}]]}"#,
        ),
        (
            "value_object",
            r#"{"hash": "ab", "content_groups": [[{"label": "x", "value": ["string", {"a": 1}]}]]}"#,
        ),
    ]
}

/// A parseable document that has no `content_groups` key.
pub const NO_CONTENT_GROUPS_JSON: &str = r#"{
  "hash": "ee11e4e5a1c0b8f7d2c3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5",
  "creator": "mallory"
}"#;
