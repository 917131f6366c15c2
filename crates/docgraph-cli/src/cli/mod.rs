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

//! CLI command definitions and argument parsing.
//!
//! # Organization
//!
//! - [`args`]: connection and output options shared by every command
//! - [`schema`]: `schema apply`, `schema check`
//! - [`documents`]: store, get, by-creator, uids
//! - [`admin`]: drop-all

mod admin;
pub mod args;
mod documents;
mod schema;

use clap::Subcommand;

pub use admin::AdminCommands;
pub use args::{ConnectionArgs, OutputArgs};
pub use documents::DocumentCommands;
pub use schema::SchemaCommands;

use crate::error::CliError;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── schema (apply, check)
/// ├── Documents (store, get, by-creator, uids)
/// └── Admin (drop-all)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the graph schema
    #[command(subcommand)]
    Schema(SchemaCommands),

    // Document commands - flattened to appear at top level
    #[command(flatten)]
    Documents(DocumentCommands),

    // Admin commands - flattened to appear at top level
    #[command(flatten)]
    Admin(AdminCommands),
}

impl Commands {
    /// Execute the command against the database described by `connection`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a file cannot be read or parsed, the database
    /// rejects a request, or the command's own check fails.
    pub async fn execute(
        self,
        connection: &ConnectionArgs,
        output: &OutputArgs,
    ) -> Result<(), CliError> {
        let config = connection.config();
        match self {
            Commands::Schema(cmd) => cmd.execute(config).await,
            Commands::Documents(cmd) => cmd.execute(config, output.pretty).await,
            Commands::Admin(cmd) => cmd.execute(config).await,
        }
    }
}
