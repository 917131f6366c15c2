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

//! The collaborator contract between the mapper and a Dgraph connection.
//!
//! [`DocumentGraph`](crate::DocumentGraph) never talks HTTP itself. It drives
//! a [`GraphClient`], which production code backs with [`HttpGraphClient`]
//! and tests back with an in-memory double.

mod http;

pub use http::HttpGraphClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::Result;

/// GraphQL variables for a parameterised query, keyed with their `$` prefix.
pub type Variables = BTreeMap<String, String>;

/// Condition attached to a mutation: `query` binds variables and the
/// mutation only applies when `cond` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertGuard {
    /// DQL query block binding the variables `cond` tests.
    pub query: String,
    /// `@if(...)` condition.
    pub cond: String,
}

/// A single `set` mutation, optionally guarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// Node tree to set.
    pub set: serde_json::Value,
    /// Upsert condition, if any.
    pub guard: Option<UpsertGuard>,
}

impl Mutation {
    /// An unconditional mutation.
    pub fn set(set: serde_json::Value) -> Self {
        Self { set, guard: None }
    }

    /// Only apply when `guard` holds.
    pub fn with_guard(mut self, guard: UpsertGuard) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// What Dgraph reports after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Blank-node name to assigned uid. Empty when a guard blocked the write.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uids: BTreeMap<String, String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Operations the mapper needs from a Dgraph connection.
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Run a read-only query and return its `data` object.
    async fn query(&self, query: &str, variables: &Variables) -> Result<serde_json::Value>;

    /// Submit schema declarations.
    async fn update_schema(&self, schema: &str) -> Result<()>;

    /// Which of `type_names` are not declared. `None` when all are.
    async fn types_exist(&self, type_names: &[&str]) -> Result<Option<Vec<String>>>;

    /// Apply a mutation and commit it.
    async fn update_data(&self, mutation: &Mutation) -> Result<MutationResponse>;

    /// Delete all data and schema.
    async fn drop_all(&self) -> Result<()>;

    /// Release the connection. Later calls may fail.
    async fn close(&self) -> Result<()>;
}

#[async_trait]
impl<T: GraphClient + ?Sized> GraphClient for Arc<T> {
    async fn query(&self, query: &str, variables: &Variables) -> Result<serde_json::Value> {
        (**self).query(query, variables).await
    }

    async fn update_schema(&self, schema: &str) -> Result<()> {
        (**self).update_schema(schema).await
    }

    async fn types_exist(&self, type_names: &[&str]) -> Result<Option<Vec<String>>> {
        (**self).types_exist(type_names).await
    }

    async fn update_data(&self, mutation: &Mutation) -> Result<MutationResponse> {
        (**self).update_data(mutation).await
    }

    async fn drop_all(&self) -> Result<()> {
        (**self).drop_all().await
    }

    async fn close(&self) -> Result<()> {
        (**self).close().await
    }
}

/// Compute which of `wanted` are absent from `present`, in `wanted` order.
pub fn missing_types(wanted: &[&str], present: &[String]) -> Option<Vec<String>> {
    let missing: Vec<String> = wanted
        .iter()
        .filter(|name| !present.iter().any(|p| p.as_str() == **name))
        .map(|name| name.to_string())
        .collect();
    if missing.is_empty() {
        None
    } else {
        Some(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_types_none_when_complete() {
        let present = vec!["Content".to_string(), "Document".to_string()];
        assert_eq!(missing_types(&["Document", "Content"], &present), None);
    }

    #[test]
    fn test_missing_types_in_request_order() {
        let present = vec!["Content".to_string()];
        assert_eq!(
            missing_types(&["Document", "Content", "Certificate"], &present),
            Some(vec!["Document".to_string(), "Certificate".to_string()])
        );
    }

    #[test]
    fn test_mutation_builder() {
        let guard = UpsertGuard {
            query: "{ q(func: eq(hash, \"a\")) { v as uid } }".to_string(),
            cond: "@if(eq(len(v), 0))".to_string(),
        };
        let m = Mutation::set(serde_json::json!({"uid": "_:document"})).with_guard(guard.clone());
        assert_eq!(m.guard, Some(guard));
    }

    #[test]
    fn test_mutation_response_defaults() {
        let r: MutationResponse = serde_json::from_str(r#"{"code": "Success"}"#).unwrap();
        assert!(r.uids.is_empty());
        let r: MutationResponse = serde_json::from_str(r#"{"uids": null}"#).unwrap();
        assert!(r.uids.is_empty());
    }
}
