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

//! An in-memory stand-in for a Dgraph alpha.
//!
//! Mutations are applied the way Dgraph applies JSON `set` mutations: every
//! object becomes a node, nested objects become `uid` edges, `_:name` blank
//! nodes are reported back in the response. Queries are matched by the
//! root function they use, which covers every query the mapper sends.

use async_trait::async_trait;
use docgraph_dgraph::client::missing_types;
use docgraph_dgraph::{DgraphError, GraphClient, Mutation, MutationResponse, Result, Variables};
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
struct Node {
    scalars: Map<String, Value>,
    edges: BTreeMap<String, Vec<u64>>,
}

#[derive(Debug, Default)]
struct State {
    next_uid: u64,
    nodes: BTreeMap<u64, Node>,
    types: BTreeSet<String>,
    schema: Option<String>,
    queries: Vec<String>,
    mutations: usize,
    stale_reads: bool,
    closed: bool,
}

/// In-memory [`GraphClient`].
#[derive(Debug, Default)]
pub struct MemoryGraph {
    state: Mutex<State>,
}

impl MemoryGraph {
    /// An empty graph with no schema.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make `eq(hash, $hash)` lookups miss, as a reader would that has not
    /// seen another writer's commit yet.
    pub fn set_stale_reads(&self, stale: bool) {
        self.lock().stale_reads = stale;
    }

    /// Every query text received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.lock().queries.clone()
    }

    /// Number of mutations received, including guarded ones that were skipped.
    pub fn mutation_count(&self) -> usize {
        self.lock().mutations
    }

    /// Number of nodes whose `dgraph.type` is `type_name`.
    pub fn count_type(&self, type_name: &str) -> usize {
        self.lock()
            .nodes
            .values()
            .filter(|node| node.scalars.get("dgraph.type").and_then(Value::as_str) == Some(type_name))
            .count()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.lock().nodes.len()
    }

    /// The last schema text applied, if any.
    pub fn schema(&self) -> Option<String> {
        self.lock().schema.clone()
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

#[async_trait]
impl GraphClient for MemoryGraph {
    async fn query(&self, query: &str, variables: &Variables) -> Result<Value> {
        let mut state = self.lock();
        state.ensure_open()?;
        state.queries.push(query.to_string());

        let rows: Vec<Value> = if query.contains("eq(hash, $hash)") {
            if state.stale_reads {
                Vec::new()
            } else {
                let hash = variable(variables, "$hash")?;
                state
                    .with_scalar("hash", hash)
                    .into_iter()
                    .map(|uid| state.render_document(uid, query))
                    .collect()
            }
        } else if query.contains("eq(creator, $creator)") {
            let creator = variable(variables, "$creator")?;
            state
                .with_scalar("creator", creator)
                .into_iter()
                .map(|uid| state.render_expanded(uid, 2))
                .collect()
        } else if query.contains("eq(hash, [") {
            let wanted = quoted_strings(query);
            state
                .nodes
                .iter()
                .filter_map(|(uid, node)| {
                    let hash = node.scalars.get("hash")?.as_str()?;
                    wanted
                        .iter()
                        .any(|w| w == hash)
                        .then(|| json!({"uid": format_uid(*uid), "hash": hash}))
                })
                .collect()
        } else {
            return Err(DgraphError::Backend {
                messages: vec![format!("unsupported query: {}", query)],
            });
        };

        Ok(json!({ "documents": rows }))
    }

    async fn update_schema(&self, schema: &str) -> Result<()> {
        let mut state = self.lock();
        state.ensure_open()?;
        for line in schema.lines() {
            if let Some(rest) = line.trim().strip_prefix("type ") {
                let name = rest.trim_end_matches('{').trim();
                state.types.insert(name.to_string());
            }
        }
        state.schema = Some(schema.to_string());
        Ok(())
    }

    async fn types_exist(&self, type_names: &[&str]) -> Result<Option<Vec<String>>> {
        let state = self.lock();
        state.ensure_open()?;
        let present: Vec<String> = state.types.iter().cloned().collect();
        Ok(missing_types(type_names, &present))
    }

    async fn update_data(&self, mutation: &Mutation) -> Result<MutationResponse> {
        let mut state = self.lock();
        state.ensure_open()?;
        state.mutations += 1;

        if let Some(guard) = &mutation.guard {
            let blocked = quoted_strings(&guard.query)
                .iter()
                .any(|hash| !state.with_scalar("hash", hash).is_empty());
            if blocked {
                return Ok(MutationResponse::default());
            }
        }

        let snapshot = (state.nodes.clone(), state.next_uid);
        let mut blanks = BTreeMap::new();
        if let Err(err) = state.set_node(&mutation.set, &mut blanks) {
            state.nodes = snapshot.0;
            state.next_uid = snapshot.1;
            return Err(err);
        }
        Ok(MutationResponse { uids: blanks })
    }

    async fn drop_all(&self) -> Result<()> {
        let mut state = self.lock();
        state.ensure_open()?;
        state.nodes.clear();
        state.types.clear();
        state.schema = None;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.lock().closed = true;
        Ok(())
    }
}

impl State {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(DgraphError::Closed)
        } else {
            Ok(())
        }
    }

    fn allocate(&mut self) -> u64 {
        self.next_uid += 1;
        self.next_uid
    }

    fn set_node(&mut self, value: &Value, blanks: &mut BTreeMap<String, String>) -> Result<u64> {
        let object = value.as_object().ok_or_else(|| DgraphError::Backend {
            messages: vec![format!("mutation node is not an object: {}", value)],
        })?;

        let uid = match object.get("uid").and_then(Value::as_str) {
            Some(blank) if blank.starts_with("_:") => {
                let name = &blank[2..];
                match blanks.get(name) {
                    Some(uid) => parse_uid(uid)?,
                    None => {
                        let uid = self.allocate();
                        blanks.insert(name.to_string(), format_uid(uid));
                        uid
                    }
                }
            }
            Some(uid) => parse_uid(uid)?,
            None => self.allocate(),
        };
        self.nodes.entry(uid).or_default();

        for (key, field) in object {
            if key == "uid" {
                continue;
            }
            match field {
                Value::Object(_) => {
                    let child = self.set_node(field, blanks)?;
                    self.link(uid, key, child);
                }
                Value::Array(items) if items.iter().all(Value::is_object) => {
                    for item in items {
                        let child = self.set_node(item, blanks)?;
                        self.link(uid, key, child);
                    }
                }
                scalar => {
                    self.nodes
                        .entry(uid)
                        .or_default()
                        .scalars
                        .insert(key.clone(), scalar.clone());
                }
            }
        }
        Ok(uid)
    }

    fn link(&mut self, parent: u64, predicate: &str, child: u64) {
        let targets = self
            .nodes
            .entry(parent)
            .or_default()
            .edges
            .entry(predicate.to_string())
            .or_default();
        if !targets.contains(&child) {
            targets.push(child);
        }
    }

    fn with_scalar(&self, predicate: &str, value: &str) -> Vec<u64> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.scalars.get(predicate).and_then(Value::as_str) == Some(value))
            .map(|(uid, _)| *uid)
            .collect()
    }

    fn children(&self, uid: u64, predicate: &str) -> Vec<u64> {
        self.nodes
            .get(&uid)
            .and_then(|node| node.edges.get(predicate))
            .cloned()
            .unwrap_or_default()
    }

    fn children_ordered(&self, uid: u64, predicate: &str, order_by: &str) -> Vec<u64> {
        let mut children = self.children(uid, predicate);
        children.sort_by_key(|child| {
            self.nodes
                .get(child)
                .and_then(|node| node.scalars.get(order_by))
                .and_then(Value::as_i64)
                .unwrap_or(0)
        });
        children
    }

    /// Scalar predicates of `uid`, without `dgraph.type`.
    fn scalars(&self, uid: u64, with_uid: bool) -> Map<String, Value> {
        let mut out = Map::new();
        if with_uid {
            out.insert("uid".to_string(), Value::String(format_uid(uid)));
        }
        if let Some(node) = self.nodes.get(&uid) {
            for (key, value) in &node.scalars {
                if key != "dgraph.type" {
                    out.insert(key.clone(), value.clone());
                }
            }
        }
        out
    }

    fn render_document(&self, uid: u64, query: &str) -> Value {
        let all = self.scalars(uid, true);
        let mut out = Map::new();
        for key in ["uid", "hash", "creator", "created_date"] {
            if let Some(value) = all.get(key) {
                out.insert(key.to_string(), value.clone());
            }
        }

        if query.contains("content_groups") {
            let groups: Vec<Value> = self
                .children_ordered(uid, "content_groups", "content_group_sequence")
                .into_iter()
                .map(|group| {
                    let mut rendered = self.scalars(group, true);
                    let contents: Vec<Value> = self
                        .children_ordered(group, "contents", "content_sequence")
                        .into_iter()
                        .map(|content| {
                            let mut rendered = self.scalars(content, true);
                            let documents: Vec<Value> = self
                                .children(content, "document")
                                .into_iter()
                                .map(|doc| Value::Object(self.scalars(doc, true)))
                                .collect();
                            if !documents.is_empty() {
                                rendered.insert("document".to_string(), Value::Array(documents));
                            }
                            Value::Object(rendered)
                        })
                        .collect();
                    if !contents.is_empty() {
                        rendered.insert("contents".to_string(), Value::Array(contents));
                    }
                    Value::Object(rendered)
                })
                .collect();
            if !groups.is_empty() {
                out.insert("content_groups".to_string(), Value::Array(groups));
            }
        }

        if query.contains("certificates") {
            let certificates: Vec<Value> = self
                .children_ordered(uid, "certificates", "certification_sequence")
                .into_iter()
                .map(|cert| Value::Object(self.scalars(cert, true)))
                .collect();
            if !certificates.is_empty() {
                out.insert("certificates".to_string(), Value::Array(certificates));
            }
        }

        Value::Object(out)
    }

    /// `expand(_all_)` nested `depth` levels below `uid`.
    fn render_expanded(&self, uid: u64, depth: usize) -> Value {
        let mut out = self.scalars(uid, false);
        if depth > 0 {
            if let Some(node) = self.nodes.get(&uid) {
                for (predicate, targets) in &node.edges {
                    let children: Vec<Value> = targets
                        .iter()
                        .map(|child| self.render_expanded(*child, depth - 1))
                        .collect();
                    out.insert(predicate.clone(), Value::Array(children));
                }
            }
        }
        Value::Object(out)
    }
}

fn variable<'a>(variables: &'a Variables, name: &str) -> Result<&'a str> {
    variables
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| DgraphError::Backend {
            messages: vec![format!("variable {} not bound", name)],
        })
}

fn format_uid(uid: u64) -> String {
    format!("{:#x}", uid)
}

fn parse_uid(uid: &str) -> Result<u64> {
    u64::from_str_radix(uid.trim_start_matches("0x"), 16).map_err(|_| DgraphError::Backend {
        messages: vec![format!("invalid uid {}", uid)],
    })
}

/// Every double-quoted DQL string literal in `text`, unescaped.
fn quoted_strings(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut literal = String::new();
        while let Some(c) = chars.next() {
            match c {
                '"' => break,
                '\\' => match chars.next() {
                    Some('n') => literal.push('\n'),
                    Some('r') => literal.push('\r'),
                    Some('t') => literal.push('\t'),
                    Some(other) => literal.push(other),
                    None => break,
                },
                other => literal.push(other),
            }
        }
        out.push(literal);
    }
    out
}
