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

//! Example printing the queries and mutation a store would send, without a
//! database.

use docgraph_dgraph::dql::queries;
use docgraph_dgraph::mapping::transform::{link_documents, referenced_hashes};
use docgraph_dgraph::{transform_new, GetOptions, HashUidMap};
use docgraph_test::fixtures::{self, ALICE_HASH};

fn main() -> Result<(), docgraph_dgraph::DgraphError> {
    let doc = fixtures::referencing_document();

    println!("=== Lookup ===\n");
    println!("{}\n", queries::by_hash(&GetOptions::new().without_content_groups()));

    let mut node = transform_new(&doc)?;
    let references = referenced_hashes(&node);
    println!("=== References ===\n");
    println!("{}\n", queries::hash_uid_map(references.iter().map(String::as_str)));

    // Pretend the referenced document is stored as 0x1.
    let mut uids = HashUidMap::new();
    uids.insert(ALICE_HASH.to_string(), "0x1".to_string());
    let linked = link_documents(&mut node, &uids);

    let (guard, cond) = queries::insert_guard(&doc.hash);
    println!("=== Guard ({} contents linked) ===\n", linked);
    println!("{}\n{}\n", guard, cond);

    println!("=== Mutation ===\n");
    println!("{}", serde_json::to_string_pretty(&node)?);
    Ok(())
}
