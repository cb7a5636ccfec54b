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

//! # Filter Compiler
//!
//! Compiles filter pills and the query bar into the dashboard's
//! `searchSourceJSON` payload. Each filter kind maps to one canonical
//! query shape; `custom` filters pass their DSL through untouched.
//! Pinned filters use the `globalState` store, everything else
//! `appState`.

use serde_json::{json, Value};

use crate::config::{DashiFilterConfig, DashiFilterKind, DashiQueryConfig};
use crate::errors::Result;

/// Compiles the query bar and filter pills into the stringified
/// `searchSourceJSON` stored on the dashboard attributes.
pub fn search_source_json(
    query: Option<&DashiQueryConfig>,
    filters: &[DashiFilterConfig],
) -> Result<String> {
    let (language, text) = match query {
        Some(q) => (q.language().as_str(), q.text()),
        None => ("kuery", ""),
    };
    let compiled: Vec<Value> = filters.iter().map(compile_filter).collect();
    let source = json!({
        "query": { "query": text, "language": language },
        "filter": compiled,
    });
    Ok(serde_json::to_string(&source)?)
}

/// Compiles one filter pill into its query plus `meta`/`$state` wrapper.
pub fn compile_filter(config: &DashiFilterConfig) -> Value {
    let (query, params, key) = match &config.kind {
        DashiFilterKind::Phrase { field, value } => (
            json!({ "match_phrase": { (field.clone()): value } }),
            Some(json!({ "query": value })),
            Some(field.clone()),
        ),
        DashiFilterKind::Phrases { field, values } => {
            let should: Vec<Value> = values
                .iter()
                .map(|value| json!({ "match_phrase": { (field.clone()): value } }))
                .collect();
            (
                json!({ "bool": { "should": should, "minimum_should_match": 1 } }),
                Some(json!(values)),
                Some(field.clone()),
            )
        }
        DashiFilterKind::Range {
            field,
            gt,
            gte,
            lt,
            lte,
        } => {
            let mut bounds = json!({});
            if let Some(v) = gt {
                bounds["gt"] = v.clone();
            }
            if let Some(v) = gte {
                bounds["gte"] = v.clone();
            }
            if let Some(v) = lt {
                bounds["lt"] = v.clone();
            }
            if let Some(v) = lte {
                bounds["lte"] = v.clone();
            }
            (
                json!({ "range": { (field.clone()): bounds.clone() } }),
                Some(bounds),
                Some(field.clone()),
            )
        }
        DashiFilterKind::Exists { field } => (
            json!({ "exists": { "field": field } }),
            None,
            Some(field.clone()),
        ),
        DashiFilterKind::Custom { dsl } => (dsl.clone(), None, None),
    };

    let mut meta = json!({
        "negate": config.negate,
        "disabled": config.disabled,
        "type": config.kind.type_name(),
    });
    if let Some(label) = &config.label {
        meta["alias"] = json!(label);
    }
    if let Some(key) = key {
        meta["key"] = json!(key);
    }
    if let Some(params) = params {
        meta["params"] = params;
    }

    let store = if config.pinned { "globalState" } else { "appState" };

    json!({ "meta": meta, "query": query, "$state": { "store": store } })
}
