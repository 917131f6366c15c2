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

//! Schema commands - declare and verify the graph types

use super::connect;
use crate::error::CliError;
use colored::Colorize;
use docgraph_dgraph::DgraphConfig;

/// Submit the type and predicate declarations.
pub async fn schema_apply(config: DgraphConfig) -> Result<(), CliError> {
    let graph = connect(config)?;
    graph.set_schema().await?;
    eprintln!("{} schema applied", "✓".green().bold());
    graph.close().await?;
    Ok(())
}

/// Report whether every node type is declared.
///
/// # Errors
///
/// Returns [`CliError::SchemaIncomplete`] listing the missing types.
pub async fn schema_check(config: DgraphConfig) -> Result<(), CliError> {
    let graph = connect(config)?;
    let missing = graph.schema_exists().await?;
    graph.close().await?;

    match missing {
        None => {
            eprintln!("{} schema complete", "✓".green().bold());
            Ok(())
        }
        Some(missing) => {
            eprintln!("{} schema incomplete", "✗".red().bold());
            for name in &missing {
                eprintln!("  missing type: {}", name);
            }
            Err(CliError::SchemaIncomplete(missing))
        }
    }
}
