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

//! Store command - write ledger documents to the graph

use super::{connect, print_json, read_file};
use crate::error::CliError;
use colored::Colorize;
use docgraph_core::ChainDocument;
use docgraph_dgraph::{DgraphConfig, StoreOutcome};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StoreReport {
    hash: String,
    #[serde(flatten)]
    outcome: Option<StoreOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Read and parse every file. Each file holds one document or an array of
/// documents.
///
/// # Errors
///
/// Returns the first read or parse failure; nothing is stored in that case.
pub fn load_documents(files: &[String]) -> Result<Vec<ChainDocument>, CliError> {
    let mut documents = Vec::new();
    for file in files {
        let content = read_file(file)?;
        let parsed = ChainDocument::from_json_many(&content)
            .map_err(|e| CliError::parse(file, e.to_string()))?;
        tracing::debug!(file = %file, count = parsed.len(), "loaded documents");
        documents.extend(parsed);
    }
    Ok(documents)
}

/// Store the documents in `files`, in file order.
///
/// A failing document does not stop the run. The per-document outcomes are
/// printed as JSON on stdout.
///
/// # Errors
///
/// Returns `Err` if any file cannot be loaded, or
/// [`CliError::StoreFailed`] if any document failed to store.
pub async fn store(config: DgraphConfig, files: &[String], pretty: bool) -> Result<(), CliError> {
    let documents = load_documents(files)?;
    let graph = connect(config)?;

    let mut reports = Vec::with_capacity(documents.len());
    let mut failed = 0;
    for doc in &documents {
        match graph.store(doc).await {
            Ok(outcome) => {
                let status = match &outcome {
                    StoreOutcome::Inserted { uid, linked } => {
                        format!("inserted as {} ({} linked)", uid, linked)
                    }
                    StoreOutcome::Updated { uid, appended } => {
                        format!("updated {} ({} certificates appended)", uid, appended)
                    }
                    StoreOutcome::Superseded => "written concurrently, skipped".to_string(),
                };
                eprintln!("{} {} {}", "✓".green().bold(), doc.hash, status);
                reports.push(StoreReport {
                    hash: doc.hash.clone(),
                    outcome: Some(outcome),
                    error: None,
                });
            }
            Err(e) => {
                eprintln!("{} {} {}", "✗".red().bold(), doc.hash, e);
                failed += 1;
                reports.push(StoreReport {
                    hash: doc.hash.clone(),
                    outcome: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    graph.close().await?;

    print_json(&reports, pretty)?;
    if failed > 0 {
        return Err(CliError::StoreFailed {
            failed,
            total: documents.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_documents_one_and_many() {
        let mut one = tempfile::NamedTempFile::new().unwrap();
        write!(one, r#"{{"hash": "a1", "content_groups": []}}"#).unwrap();
        let mut many = tempfile::NamedTempFile::new().unwrap();
        write!(many, r#"[{{"hash": "b1"}}, {{"hash": "b2"}}]"#).unwrap();

        let files = vec![
            one.path().to_string_lossy().to_string(),
            many.path().to_string_lossy().to_string(),
        ];
        let docs = load_documents(&files).unwrap();
        let hashes: Vec<&str> = docs.iter().map(|d| d.hash.as_str()).collect();
        assert_eq!(hashes, vec!["a1", "b1", "b2"]);
    }

    #[test]
    fn test_load_documents_parse_error() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        let files = vec![bad.path().to_string_lossy().to_string()];
        assert!(matches!(
            load_documents(&files),
            Err(CliError::Parse { .. })
        ));
    }

    #[test]
    fn test_report_serialization() {
        let report = StoreReport {
            hash: "a1".to_string(),
            outcome: Some(StoreOutcome::Updated {
                uid: "0x1".to_string(),
                appended: 2,
            }),
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"hash": "a1", "outcome": "updated", "uid": "0x1", "appended": 2})
        );
    }
}
