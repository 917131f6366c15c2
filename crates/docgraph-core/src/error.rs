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

//! Error types for the ledger document model.

use thiserror::Error;

/// Error type for document model operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The document JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No content group carries the requested `content_group_label`.
    #[error("no content group labelled '{label}' in document {hash}")]
    GroupNotFound {
        /// The requested group label.
        label: String,
        /// Hash of the document that was searched.
        hash: String,
    },

    /// No content with the requested label exists.
    #[error("content '{label}' not found in document {hash}")]
    ContentNotFound {
        /// The requested content label.
        label: String,
        /// Hash of the document that was searched.
        hash: String,
    },

    /// A `[type, value]` pair could not be interpreted.
    #[error("invalid flex value: {0}")]
    InvalidFlexValue(String),
}

/// Result type alias for document model operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_content_not_found() {
        let err = CoreError::ContentNotFound {
            label: "title".to_string(),
            hash: "05e8".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("05e8"));
    }

    #[test]
    fn test_error_display_group_not_found() {
        let err = CoreError::GroupNotFound {
            label: "details".to_string(),
            hash: "abc".to_string(),
        };
        assert!(err.to_string().contains("details"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<i32>("nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
