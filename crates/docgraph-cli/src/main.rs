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

//! DocGraph Command Line Interface

use clap::Parser;
use docgraph_cli::cli::{Commands, ConnectionArgs, OutputArgs};
use docgraph_cli::logging::log_filter;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// DocGraph - ledger documents in a Dgraph graph
///
/// # Examples
///
/// ```bash
/// # Declare the schema
/// docgraph schema apply
///
/// # Store documents from a ledger dump
/// docgraph store documents.json
///
/// # Read one back
/// docgraph get 7b5755ce318c42fc750a754b4734282d1fad08e52c0de04762cb5f159a253c24 --pretty
/// ```
#[derive(Parser)]
#[command(name = "docgraph")]
#[command(author, version, about = "DocGraph - ledger documents in a Dgraph graph", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute(&cli.connection, &cli.output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
