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

//! DQL string escaping.
//!
//! Values that cannot travel as GraphQL variables (list literals in `eq`,
//! upsert guard queries) are interpolated into the query text and must be
//! quoted here.

use std::borrow::Cow;

/// Check if a string needs escaping inside a DQL string literal.
#[inline]
fn needs_escaping(s: &str) -> bool {
    s.chars()
        .any(|ch| matches!(ch, '\\' | '"' | '\n' | '\r' | '\t' | '\x00'))
}

/// Escape a string value for use inside a double-quoted DQL literal.
///
/// Returns `Cow::Borrowed` when nothing needs escaping.
///
/// # Examples
///
/// ```
/// # use docgraph_dgraph::dql::escape_string;
/// let clean = escape_string("7b5755ce");
/// assert!(matches!(clean, std::borrow::Cow::Borrowed(_)));
///
/// let dirty = escape_string("a\"b");
/// assert_eq!(dirty, "a\\\"b");
/// ```
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 10);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x00' => {}
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Quote a string value as a DQL literal.
pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

/// Render a list literal of quoted strings, e.g. `["a", "b"]`.
pub fn quote_list<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = values.into_iter().map(quote_string).collect();
    format!("[{}]", quoted.join(", "))
}
