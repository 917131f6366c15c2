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

//! CLI command implementations

mod admin;
mod query;
mod schema;
mod store;

pub use admin::drop_all;
pub use query::{by_creator, get, uids};
pub use schema::{schema_apply, schema_check};
pub use store::{load_documents, store};

use crate::error::CliError;
use docgraph_dgraph::{DgraphConfig, DocumentGraph, HttpGraphClient};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

/// Default maximum document file size (1 GB).
/// Can be overridden via the DOCGRAPH_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("DOCGRAPH_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk, rejecting files over the size limit before
/// reading them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is larger than
/// `DOCGRAPH_MAX_FILE_SIZE`, or the contents are not UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write `value` to stdout as JSON, followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text).map_err(|e| CliError::Output(e.to_string()))
}

/// Open a mapper over HTTP. No request is sent until the first operation.
pub fn connect(config: DgraphConfig) -> Result<DocumentGraph<HttpGraphClient>, CliError> {
    tracing::debug!(endpoint = %config.endpoint, "connecting");
    Ok(DocumentGraph::connect(config)?)
}
