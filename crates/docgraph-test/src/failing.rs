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

//! A graph client whose backend rejects requests.

use async_trait::async_trait;
use docgraph_dgraph::{DgraphError, GraphClient, Mutation, MutationResponse, Result, Variables};
use serde_json::{json, Value};

/// [`GraphClient`] that answers with a backend error.
///
/// By default every call fails. [`FailingGraph::mutations_only`] lets reads
/// through with empty results so that a write is attempted.
#[derive(Debug, Clone)]
pub struct FailingGraph {
    message: String,
    reads_succeed: bool,
}

impl FailingGraph {
    /// Fail every call with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reads_succeed: false,
        }
    }

    /// Return empty query results and fail only writes.
    pub fn mutations_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reads_succeed: true,
        }
    }

    fn error(&self) -> DgraphError {
        DgraphError::Backend {
            messages: vec![self.message.clone()],
        }
    }
}

#[async_trait]
impl GraphClient for FailingGraph {
    async fn query(&self, _query: &str, _variables: &Variables) -> Result<Value> {
        if self.reads_succeed {
            Ok(json!({ "documents": [] }))
        } else {
            Err(self.error())
        }
    }

    async fn update_schema(&self, _schema: &str) -> Result<()> {
        Err(self.error())
    }

    async fn types_exist(&self, type_names: &[&str]) -> Result<Option<Vec<String>>> {
        if self.reads_succeed {
            Ok(Some(type_names.iter().map(|t| t.to_string()).collect()))
        } else {
            Err(self.error())
        }
    }

    async fn update_data(&self, _mutation: &Mutation) -> Result<MutationResponse> {
        Err(self.error())
    }

    async fn drop_all(&self) -> Result<()> {
        Err(self.error())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
