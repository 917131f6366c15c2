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

//! Admin commands

use super::connect;
use crate::error::CliError;
use colored::Colorize;
use docgraph_dgraph::DgraphConfig;

/// Delete all data and schema. Requires `confirmed`.
pub async fn drop_all(config: DgraphConfig, confirmed: bool) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::ConfirmationRequired("drop all data".to_string()));
    }
    let graph = connect(config)?;
    graph.drop_all().await?;
    tracing::warn!("dropped all data");
    eprintln!("{} all data dropped", "✓".green().bold());
    graph.close().await?;
    Ok(())
}
