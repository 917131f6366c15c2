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

//! Read commands - fetch stored documents

use super::{connect, print_json};
use crate::error::CliError;
use docgraph_dgraph::{DgraphConfig, GetOptions};

/// Print the document with `hash`.
///
/// # Errors
///
/// Returns [`CliError::NotFound`] when no document has that hash.
pub async fn get(
    config: DgraphConfig,
    hash: &str,
    options: GetOptions,
    pretty: bool,
) -> Result<(), CliError> {
    let graph = connect(config)?;
    let document = graph.get_by_hash(hash, options).await?;
    graph.close().await?;

    match document {
        Some(document) => print_json(&document, pretty),
        None => Err(CliError::NotFound(hash.to_string())),
    }
}

/// Print every document created by `creator`.
pub async fn by_creator(config: DgraphConfig, creator: &str, pretty: bool) -> Result<(), CliError> {
    let graph = connect(config)?;
    let documents = graph.get_by_creator(creator).await?;
    graph.close().await?;
    print_json(&documents, pretty)
}

/// Print the `hash -> uid` map of the stored documents among `hashes`.
pub async fn uids(config: DgraphConfig, hashes: &[String], pretty: bool) -> Result<(), CliError> {
    let graph = connect(config)?;
    let map = graph.get_hash_uid_map(hashes).await?;
    graph.close().await?;
    print_json(&map, pretty)
}
