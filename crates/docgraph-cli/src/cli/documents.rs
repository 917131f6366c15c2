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

//! Commands that write and read documents.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use docgraph_dgraph::{DgraphConfig, GetOptions};

/// Document commands.
#[derive(Subcommand)]
pub enum DocumentCommands {
    /// Store ledger documents
    ///
    /// Each file holds one document or a JSON array of documents. New hashes
    /// are inserted; known hashes get their new certificates appended.
    Store {
        /// Document files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },

    /// Print the document with a given hash
    Get {
        /// Document hash
        #[arg(value_name = "HASH")]
        hash: String,

        /// Leave out content groups
        #[arg(long)]
        no_content_groups: bool,

        /// Leave out certificates
        #[arg(long)]
        no_certificates: bool,
    },

    /// Print every document created by an account
    ByCreator {
        /// Creator account
        #[arg(value_name = "CREATOR")]
        creator: String,
    },

    /// Print the uid of each stored document among the given hashes
    Uids {
        /// Document hashes
        #[arg(value_name = "HASH", required = true)]
        hashes: Vec<String>,
    },
}

impl DocumentCommands {
    /// Execute the document command.
    pub async fn execute(self, config: DgraphConfig, pretty: bool) -> Result<(), CliError> {
        match self {
            DocumentCommands::Store { files } => commands::store(config, &files, pretty).await,
            DocumentCommands::Get {
                hash,
                no_content_groups,
                no_certificates,
            } => {
                let mut options = GetOptions::new();
                if no_content_groups {
                    options = options.without_content_groups();
                }
                if no_certificates {
                    options = options.without_certificates();
                }
                commands::get(config, &hash, options, pretty).await
            }
            DocumentCommands::ByCreator { creator } => {
                commands::by_creator(config, &creator, pretty).await
            }
            DocumentCommands::Uids { hashes } => commands::uids(config, &hashes, pretty).await,
        }
    }
}
