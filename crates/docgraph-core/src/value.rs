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

//! Typed content values.
//!
//! Ledger contents carry their value as a two-element `[type, value]` array,
//! e.g. `["asset", "130.00 USD"]` or `["int64", 67]`. [`FlexValue`] keeps the
//! type tag and the value rendered as a string, which is how the graph stores
//! it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Value-type tag of a ledger content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Account name (`name`).
    Name,
    /// Free text (`string`).
    String,
    /// Token amount with symbol (`asset`).
    Asset,
    /// Signed 64-bit integer (`int64`).
    Int64,
    /// Content hash of another document (`checksum256`).
    Checksum256,
    /// Ledger timestamp (`time_point`).
    TimePoint,
    /// Any tag not known to this crate, carried through untouched.
    Other(String),
}

impl ValueType {
    /// The tag as it appears on the ledger and in the graph `type` predicate.
    pub fn as_str(&self) -> &str {
        match self {
            ValueType::Name => "name",
            ValueType::String => "string",
            ValueType::Asset => "asset",
            ValueType::Int64 => "int64",
            ValueType::Checksum256 => "checksum256",
            ValueType::TimePoint => "time_point",
            ValueType::Other(tag) => tag,
        }
    }

    /// Parse a tag. Unknown tags become [`ValueType::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "name" => ValueType::Name,
            "string" => ValueType::String,
            "asset" => ValueType::Asset,
            "int64" => ValueType::Int64,
            "checksum256" => ValueType::Checksum256,
            "time_point" => ValueType::TimePoint,
            other => ValueType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ValueType {
    fn from(tag: &str) -> Self {
        ValueType::from_tag(tag)
    }
}

impl Serialize for ValueType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ValueType::from_tag(&tag))
    }
}

/// A typed content value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlexValue", into = "RawFlexValue")]
pub struct FlexValue {
    /// The value-type tag.
    pub value_type: ValueType,
    /// The value rendered as text.
    pub value: String,
}

impl FlexValue {
    /// Create a value from a tag and its textual form.
    pub fn new(value_type: impl Into<ValueType>, value: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `string` value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ValueType::String, value)
    }

    /// Shorthand for an `int64` value.
    pub fn int64(value: i64) -> Self {
        Self::new(ValueType::Int64, value.to_string())
    }

    /// Shorthand for a `checksum256` value referencing another document.
    pub fn checksum256(hash: impl Into<String>) -> Self {
        Self::new(ValueType::Checksum256, hash)
    }

    /// Whether this value references another document by hash.
    pub fn is_checksum256(&self) -> bool {
        self.value_type == ValueType::Checksum256
    }

    /// Interpret the value as a signed integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

/// Wire form of a [`FlexValue`]: `[type, value]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFlexValue(String, serde_json::Value);

impl TryFrom<RawFlexValue> for FlexValue {
    type Error = CoreError;

    fn try_from(raw: RawFlexValue) -> Result<Self, Self::Error> {
        let RawFlexValue(tag, value) = raw;
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => {
                return Err(CoreError::InvalidFlexValue(format!(
                    "value of type '{}' must be a string or number, got {}",
                    tag, other
                )))
            }
        };
        Ok(FlexValue {
            value_type: ValueType::from_tag(&tag),
            value,
        })
    }
}

impl From<FlexValue> for RawFlexValue {
    fn from(flex: FlexValue) -> Self {
        // int64 goes back out as a JSON number, the way the ledger emits it
        let value = match (&flex.value_type, flex.value.parse::<i64>()) {
            (ValueType::Int64, Ok(n)) => serde_json::Value::from(n),
            _ => serde_json::Value::String(flex.value),
        };
        RawFlexValue(flex.value_type.as_str().to_string(), value)
    }
}
