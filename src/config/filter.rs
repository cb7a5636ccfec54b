//! Copyright © 2025-2026 The Dashi Authors. All Rights Reserved.
//!
//! This file is part of Dashi.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Filter Config Module
//!
//! Config model for dashboard-level filter pills and the query bar. Each
//! filter kind maps to one canonical query shape on the output side; the
//! `custom` kind passes raw query DSL through untouched.

use serde::Deserialize;
use serde_json::Value;

/// One dashboard filter pill: shared flags plus the per-kind payload
/// selected by the YAML `type` field.
#[derive(Clone, Debug)]
pub struct DashiFilterConfig {
    /// Invert the filter.
    pub negate: bool,

    /// Keep the pill but disable its effect.
    pub disabled: bool,

    /// Display label shown on the pill.
    pub label: Option<String>,

    /// Pinned filters survive navigation across dashboards.
    pub pinned: bool,

    pub kind: DashiFilterKind,
}

const FILTER_SHARED_KEYS: &[&str] = &["type", "negate", "disabled", "label", "pinned"];

fn filter_type_keys(filter_type: &str) -> Option<&'static [&'static str]> {
    Some(match filter_type {
        "phrase" => &["field", "value"],
        "phrases" => &["field", "values"],
        "range" => &["field", "gt", "gte", "lt", "lte"],
        "exists" => &["field"],
        "custom" => &["dsl"],
        _ => return None,
    })
}

// Same hand-rolled unknown-key check as the panel config: the flattened
// `kind` rules out `deny_unknown_fields`.
impl<'de> Deserialize<'de> for DashiFilterConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            negate: bool,
            #[serde(default)]
            disabled: bool,
            #[serde(default)]
            label: Option<String>,
            #[serde(default)]
            pinned: bool,
            #[serde(flatten)]
            kind: DashiFilterKind,
        }

        let value = Value::deserialize(deserializer)?;
        let filter_type = value.get("type").and_then(Value::as_str).unwrap_or("");
        super::check_known_keys(
            &value,
            &format!("{} filter", filter_type),
            FILTER_SHARED_KEYS,
            filter_type_keys(filter_type),
        )
        .map_err(serde::de::Error::custom)?;

        let raw: Raw = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(DashiFilterConfig {
            negate: raw.negate,
            disabled: raw.disabled,
            label: raw.label,
            pinned: raw.pinned,
            kind: raw.kind,
        })
    }
}

/// Per-kind filter payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashiFilterKind {
    /// Exact match of one field against one value.
    Phrase { field: String, value: Value },
    /// Match of one field against any of several values.
    Phrases { field: String, values: Vec<Value> },
    /// Numeric or date range over one field. At least one bound.
    Range {
        field: String,
        #[serde(default)]
        gt: Option<Value>,
        #[serde(default)]
        gte: Option<Value>,
        #[serde(default)]
        lt: Option<Value>,
        #[serde(default)]
        lte: Option<Value>,
    },
    /// Documents where the field is present.
    Exists { field: String },
    /// Raw query DSL, passed through untouched.
    Custom { dsl: Value },
}

impl DashiFilterKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            DashiFilterKind::Phrase { .. } => "phrase",
            DashiFilterKind::Phrases { .. } => "phrases",
            DashiFilterKind::Range { .. } => "range",
            DashiFilterKind::Exists { .. } => "exists",
            DashiFilterKind::Custom { .. } => "custom",
        }
    }
}

/// Query language of the dashboard query bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiQueryLanguage {
    Kuery,
    Lucene,
}

impl DashiQueryLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiQueryLanguage::Kuery => "kuery",
            DashiQueryLanguage::Lucene => "lucene",
        }
    }
}

/// Query bar content. A bare string is shorthand for a kuery query:
///
/// ```yaml
/// query: "status_code : 200"
/// # equivalent to
/// query: { language: kuery, query: "status_code : 200" }
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiQueryConfig {
    Short(String),
    Full {
        language: DashiQueryLanguage,
        query: String,
    },
}

impl DashiQueryConfig {
    pub fn language(&self) -> DashiQueryLanguage {
        match self {
            DashiQueryConfig::Short(_) => DashiQueryLanguage::Kuery,
            DashiQueryConfig::Full { language, .. } => *language,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DashiQueryConfig::Short(text) => text,
            DashiQueryConfig::Full { query, .. } => query,
        }
    }
}
