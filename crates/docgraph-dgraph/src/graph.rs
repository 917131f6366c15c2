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

//! The document mapper.

use docgraph_core::ChainDocument;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::client::{GraphClient, HttpGraphClient, Mutation, UpsertGuard, Variables};
use crate::config::{DgraphConfig, GetOptions};
use crate::dql::queries::{self, DOCUMENTS_BLOCK};
use crate::error::{DgraphError, Result};
use crate::mapping::nodes::DOCUMENT_BLANK_NODE;
use crate::mapping::transform::{self, HashUidMap};
use crate::mapping::StoredDocument;
use crate::schema::{type_names, SCHEMA};

/// What [`DocumentGraph::store`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StoreOutcome {
    /// A new document was created.
    Inserted {
        /// Uid assigned to the document.
        uid: String,
        /// Number of checksum256 contents linked to an existing document.
        linked: usize,
    },
    /// The document existed; new certificates were appended.
    Updated {
        /// Uid of the existing document.
        uid: String,
        /// Number of certificates appended by this call.
        appended: usize,
    },
    /// Another writer inserted the same hash between the lookup and the
    /// guarded insert. Nothing was written.
    Superseded,
}

#[derive(Debug, Deserialize)]
struct HashUid {
    uid: String,
    hash: String,
}

/// Maps ledger documents onto a Dgraph graph and reads them back.
///
/// Owns its [`GraphClient`]. Call [`DocumentGraph::close`] at shutdown.
pub struct DocumentGraph<C> {
    client: C,
    guard_inserts: bool,
}

impl DocumentGraph<HttpGraphClient> {
    /// Connect to the Dgraph alpha described by `config`.
    pub fn connect(config: DgraphConfig) -> Result<Self> {
        let guard_inserts = config.guard_inserts;
        Ok(Self::new(HttpGraphClient::new(config)?).with_insert_guard(guard_inserts))
    }
}

impl<C: GraphClient> DocumentGraph<C> {
    /// Wrap a client. Inserts are guarded by default.
    pub fn new(client: C) -> Self {
        Self {
            client,
            guard_inserts: true,
        }
    }

    /// Enable or disable the upsert guard on inserts.
    pub fn with_insert_guard(mut self, guard: bool) -> Self {
        self.guard_inserts = guard;
        self
    }

    /// The underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Give the client back.
    pub fn into_client(self) -> C {
        self.client
    }

    /// Declare the graph types and predicates. Safe to repeat.
    pub async fn set_schema(&self) -> Result<()> {
        self.client.update_schema(SCHEMA).await?;
        info!("schema applied");
        Ok(())
    }

    /// `None` when every node type is declared, otherwise the missing ones.
    pub async fn schema_exists(&self) -> Result<Option<Vec<String>>> {
        let missing = self.client.types_exist(&type_names()).await?;
        if let Some(missing) = &missing {
            debug!(missing = ?missing, "schema incomplete");
        }
        Ok(missing)
    }

    /// Every document created by `creator`, fully expanded.
    pub async fn get_by_creator(&self, creator: &str) -> Result<Vec<StoredDocument>> {
        let mut variables = Variables::new();
        variables.insert("$creator".to_string(), creator.to_string());
        let data = self.client.query(queries::BY_CREATOR, &variables).await?;
        documents(data)
    }

    /// The document with `hash`, expanded as `options` asks.
    pub async fn get_by_hash(
        &self,
        hash: &str,
        options: GetOptions,
    ) -> Result<Option<StoredDocument>> {
        let mut variables = Variables::new();
        variables.insert("$hash".to_string(), hash.to_string());
        let data = self
            .client
            .query(&queries::by_hash(&options), &variables)
            .await?;
        Ok(documents(data)?.into_iter().next())
    }

    /// Uids of the stored documents among `hashes`. Duplicates are queried
    /// once; hashes with no stored document are absent from the map.
    pub async fn get_hash_uid_map<S: AsRef<str>>(&self, hashes: &[S]) -> Result<HashUidMap> {
        let mut seen = BTreeSet::new();
        let unique: Vec<&str> = hashes
            .iter()
            .map(AsRef::as_ref)
            .filter(|hash| seen.insert(*hash))
            .collect();
        if unique.is_empty() {
            return Ok(HashUidMap::new());
        }

        let data = self
            .client
            .query(&queries::hash_uid_map(unique.iter().copied()), &Variables::new())
            .await?;
        let rows: Vec<HashUid> = documents(data)?;
        Ok(rows.into_iter().map(|row| (row.hash, row.uid)).collect())
    }

    /// Persist `doc`, keyed by its hash.
    ///
    /// A new hash is inserted with all content groups and certificates, and
    /// its checksum256 contents are linked to the documents they name where
    /// those exist. A known hash only gets the certificates it does not have
    /// yet. Inserting a record without content groups fails with
    /// [`DgraphError::InvalidDocument`] and writes nothing.
    pub async fn store(&self, doc: &ChainDocument) -> Result<StoreOutcome> {
        let current = self
            .get_by_hash(&doc.hash, GetOptions::new().without_content_groups())
            .await?;

        match current {
            Some(current) => self.update(doc, &current).await,
            None => self.insert(doc).await,
        }
    }

    async fn insert(&self, doc: &ChainDocument) -> Result<StoreOutcome> {
        let mut node = transform::transform_new(doc)?;

        let references = transform::referenced_hashes(&node);
        let mut linked = 0;
        if !references.is_empty() {
            let uids = self.get_hash_uid_map(&references[..]).await?;
            linked = transform::link_documents(&mut node, &uids);
            if linked < references.len() {
                debug!(
                    hash = %doc.hash,
                    unresolved = references.len() - linked,
                    "references left unlinked"
                );
            }
        }

        let mut mutation = Mutation::set(serde_json::to_value(&node)?);
        if self.guard_inserts {
            let (query, cond) = queries::insert_guard(&doc.hash);
            mutation = mutation.with_guard(UpsertGuard { query, cond });
        }

        let response = self.client.update_data(&mutation).await?;
        match response.uids.get(DOCUMENT_BLANK_NODE) {
            Some(uid) => {
                info!(hash = %doc.hash, uid = %uid, linked, "inserted document");
                Ok(StoreOutcome::Inserted {
                    uid: uid.clone(),
                    linked,
                })
            }
            None if self.guard_inserts => {
                warn!(hash = %doc.hash, "document inserted concurrently, skipping");
                Ok(StoreOutcome::Superseded)
            }
            None => Err(DgraphError::UnexpectedResponse(format!(
                "no uid assigned to document {}",
                doc.hash
            ))),
        }
    }

    async fn update(&self, doc: &ChainDocument, current: &StoredDocument) -> Result<StoreOutcome> {
        if doc.content_groups.is_some() {
            debug!(hash = %doc.hash, "content groups are kept as stored on update");
        }

        let node = transform::transform_update(doc, current)?;
        let appended = node.new_certificate_count();
        self.client
            .update_data(&Mutation::set(serde_json::to_value(&node)?))
            .await?;

        info!(hash = %doc.hash, uid = %node.uid, appended, "updated document");
        Ok(StoreOutcome::Updated {
            uid: node.uid,
            appended,
        })
    }

    /// Delete everything in the database.
    pub async fn drop_all(&self) -> Result<()> {
        self.client.drop_all().await
    }

    /// Close the client.
    pub async fn close(&self) -> Result<()> {
        self.client.close().await
    }
}

/// Pull the `documents` block out of a query result.
fn documents<T: DeserializeOwned>(mut data: serde_json::Value) -> Result<Vec<T>> {
    match data.get_mut(DOCUMENTS_BLOCK) {
        Some(block) => Ok(serde_json::from_value(block.take())?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_documents_block_missing() {
        let docs: Vec<StoredDocument> = documents(json!({})).unwrap();
        assert!(docs.is_empty());
        let docs: Vec<StoredDocument> = documents(serde_json::Value::Null).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_documents_block_parsed() {
        let docs: Vec<StoredDocument> =
            documents(json!({"documents": [{"uid": "0x1", "hash": "a"}]})).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].hash, "a");
    }

    #[test]
    fn test_store_outcome_serialization() {
        let outcome = StoreOutcome::Updated {
            uid: "0x1".to_string(),
            appended: 1,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"outcome": "updated", "uid": "0x1", "appended": 1})
        );
    }
}
