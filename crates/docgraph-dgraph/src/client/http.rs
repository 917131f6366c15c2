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

//! Dgraph HTTP API client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

use super::{missing_types, GraphClient, Mutation, MutationResponse, Variables};
use crate::config::DgraphConfig;
use crate::dql::queries::types_query;
use crate::error::{DgraphError, Result};

const ACCESS_TOKEN_HEADER: &str = "X-Dgraph-AccessToken";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<BackendMessage>,
}

#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct DeclaredType {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct SchemaTypes {
    #[serde(default)]
    types: Vec<DeclaredType>,
}

/// A [`GraphClient`] speaking to a Dgraph alpha over HTTP.
///
/// Cheap to share behind an `Arc`; the underlying connection pool is reused
/// across calls. Once [`GraphClient::close`] has been called every further
/// call fails with [`DgraphError::Closed`].
pub struct HttpGraphClient {
    config: DgraphConfig,
    http: reqwest::Client,
    closed: AtomicBool,
}

impl HttpGraphClient {
    /// Build a client for `config`.
    pub fn new(config: DgraphConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            config,
            http,
            closed: AtomicBool::new(false),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &DgraphConfig {
        &self.config
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            Err(DgraphError::Closed)
        } else {
            Ok(())
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.post(self.config.url(path));
        match &self.config.auth_token {
            Some(token) => request.header(ACCESS_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Send a request and unwrap Dgraph's `{data, errors}` envelope.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        self.ensure_open()?;
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<Envelope>(&body);
        let envelope = match parsed {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(DgraphError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => return Err(e.into()),
        };

        if !envelope.errors.is_empty() {
            return Err(DgraphError::Backend {
                messages: envelope.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        if !status.is_success() {
            return Err(DgraphError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

/// Body for `POST /mutate`, plain or as an upsert block.
pub(crate) fn mutation_body(mutation: &Mutation) -> Value {
    match &mutation.guard {
        Some(guard) => json!({
            "query": guard.query,
            "mutations": [{ "set": mutation.set, "cond": guard.cond }],
        }),
        None => json!({ "set": mutation.set }),
    }
}

#[async_trait]
impl GraphClient for HttpGraphClient {
    async fn query(&self, query: &str, variables: &Variables) -> Result<Value> {
        debug!(variables = ?variables, "running query");
        let body = json!({ "query": query, "variables": variables });
        self.send(self.post("/query").json(&body)).await
    }

    async fn update_schema(&self, schema: &str) -> Result<()> {
        debug!(bytes = schema.len(), "altering schema");
        self.send(self.post("/alter").body(schema.to_string()))
            .await
            .map(|_| ())
    }

    async fn types_exist(&self, type_names: &[&str]) -> Result<Option<Vec<String>>> {
        let body = json!({ "query": types_query(type_names) });
        let data = self.send(self.post("/query").json(&body)).await?;
        let declared: SchemaTypes = if data.is_null() {
            SchemaTypes::default()
        } else {
            serde_json::from_value(data)?
        };
        let present: Vec<String> = declared.types.into_iter().map(|t| t.name).collect();
        Ok(missing_types(type_names, &present))
    }

    async fn update_data(&self, mutation: &Mutation) -> Result<MutationResponse> {
        debug!(guarded = mutation.guard.is_some(), "submitting mutation");
        let request = self
            .post("/mutate?commitNow=true")
            .json(&mutation_body(mutation));
        let data = self.send(request).await?;
        if data.is_null() {
            return Ok(MutationResponse::default());
        }
        Ok(serde_json::from_value(data)?)
    }

    async fn drop_all(&self) -> Result<()> {
        info!(endpoint = %self.config.endpoint, "dropping all data");
        self.send(self.post("/alter").json(&json!({ "drop_all": true })))
            .await
            .map(|_| ())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        debug!(endpoint = %self.config.endpoint, "client closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::UpsertGuard;

    #[test]
    fn test_plain_mutation_body() {
        let m = Mutation::set(json!({"uid": "_:document"}));
        assert_eq!(mutation_body(&m), json!({"set": {"uid": "_:document"}}));
    }

    #[test]
    fn test_guarded_mutation_body() {
        let m = Mutation::set(json!({"uid": "_:document"})).with_guard(UpsertGuard {
            query: "{ guard(func: eq(hash, \"a\")) { existing as uid } }".to_string(),
            cond: "@if(eq(len(existing), 0))".to_string(),
        });
        let body = mutation_body(&m);
        assert!(body["query"].as_str().unwrap().contains("existing as uid"));
        assert_eq!(body["mutations"][0]["cond"], "@if(eq(len(existing), 0))");
        assert_eq!(body["mutations"][0]["set"]["uid"], "_:document");
    }

    #[test]
    fn test_envelope_with_errors() {
        let env: Envelope =
            serde_json::from_str(r#"{"errors": [{"message": "boom", "extensions": {}}]}"#).unwrap();
        assert_eq!(env.errors[0].message, "boom");
        assert!(env.data.is_none());
    }

    #[tokio::test]
    async fn test_closed_client_refuses_calls() {
        let client = HttpGraphClient::new(DgraphConfig::default()).unwrap();
        client.close().await.unwrap();
        let err = client.drop_all().await.unwrap_err();
        assert!(matches!(err, DgraphError::Closed));
    }
}
