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

//! Structured error types for the DocGraph CLI.

use docgraph_dgraph::DgraphError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for DocGraph CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// A document file is not valid ledger JSON.
    #[error("Parse error in '{path}': {message}")]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// The parser message
        message: String,
    },

    /// The database or the mapper rejected an operation.
    #[error("Dgraph error: {0}")]
    Dgraph(String),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(String),

    /// No document has the requested hash.
    #[error("No document with hash {0}")]
    NotFound(String),

    /// Some node types are not declared.
    #[error("Schema incomplete, missing types: {}", .0.join(", "))]
    SchemaIncomplete(Vec<String>),

    /// Some documents of a `store` run failed.
    #[error("{failed} of {total} documents failed to store")]
    StoreFailed {
        /// Number of failed documents
        failed: usize,
        /// Number of documents attempted
        total: usize,
    },

    /// A destructive command was run without confirmation.
    #[error("Refusing to {0} without --yes")]
    ConfirmationRequired(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a parse error for `path`.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<DgraphError> for CliError {
    fn from(err: DgraphError) -> Self {
        Self::Dgraph(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
