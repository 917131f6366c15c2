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

//! Property-based tests for ledger value parsing.

use docgraph_core::{ChainContent, ChainDocument, FlexValue, ValueType};
use proptest::prelude::*;

fn arb_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("string".to_string()),
        Just("asset".to_string()),
        Just("checksum256".to_string()),
        Just("time_point".to_string()),
        "[a-z_]{1,12}",
    ]
}

proptest! {
    #[test]
    fn prop_string_values_survive_parsing(tag in arb_tag(), value in ".*") {
        let json = serde_json::json!([tag.clone(), value.clone()]);
        let flex: FlexValue = serde_json::from_value(json).unwrap();
        prop_assert_eq!(flex.value_type.as_str(), tag.as_str());
        prop_assert_eq!(flex.value, value);
    }

    #[test]
    fn prop_int64_numbers_render_as_decimal(n in any::<i64>()) {
        let json = serde_json::json!(["int64", n]);
        let flex: FlexValue = serde_json::from_value(json).unwrap();
        prop_assert_eq!(&flex.value_type, &ValueType::Int64);
        prop_assert_eq!(flex.as_i64(), Some(n));
        let back = serde_json::to_value(&flex).unwrap();
        prop_assert_eq!(back, serde_json::json!(["int64", n]));
    }

    #[test]
    fn prop_find_content_returns_first_match(
        labels in prop::collection::vec("[a-c]", 1..12),
        probe in "[a-c]",
    ) {
        let group: Vec<ChainContent> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| ChainContent::new(label.clone(), FlexValue::int64(i as i64)))
            .collect();
        let doc = ChainDocument::new("h").with_content_group(group);

        match labels.iter().position(|l| *l == probe) {
            Some(idx) => {
                let found = doc.find_content(&probe).unwrap();
                prop_assert_eq!(found.as_i64(), Some(idx as i64));
            }
            None => prop_assert!(doc.find_content(&probe).is_err()),
        }
    }
}
