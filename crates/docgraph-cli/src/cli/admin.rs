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

//! Administrative commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use docgraph_dgraph::DgraphConfig;

/// Administrative commands.
#[derive(Subcommand)]
pub enum AdminCommands {
    /// Delete all data and schema
    DropAll {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

impl AdminCommands {
    /// Execute the admin command.
    pub async fn execute(self, config: DgraphConfig) -> Result<(), CliError> {
        match self {
            AdminCommands::DropAll { yes } => commands::drop_all(config, yes).await,
        }
    }
}
