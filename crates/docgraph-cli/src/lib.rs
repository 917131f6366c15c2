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

//! DocGraph CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **schema apply**: declare the node types and predicates
//! - **schema check**: report missing node types (non-zero exit if any)
//! - **store**: insert or recertify ledger documents from JSON files
//! - **get**: print a document by hash
//! - **by-creator**: print the documents of an account
//! - **uids**: print the uids of stored documents by hash
//! - **drop-all**: delete everything (requires `--yes`)
//!
//! Results are printed as JSON on stdout; status lines go to stderr.
//! Connection options default from `DGRAPH_URL`, `DGRAPH_TIMEOUT_SECS` and
//! `DGRAPH_ACCESS_TOKEN`. Logging follows `RUST_LOG` and defaults to
//! `docgraph=warn`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
