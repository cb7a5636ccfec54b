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

//! Saved-search panels embed by reference: the panel entry carries a
//! `panelRefName` and the saved-object id travels in the dashboard's
//! references array.

use serde_json::{json, Value};

use crate::compile::DashiCompileContext;
use crate::config::DashiSearchPanel;

/// Builds the `embeddableConfig` and `panelRefName` of a saved-search
/// panel, registering the search reference.
pub fn compile(
    ctx: &mut DashiCompileContext,
    panel_index: &str,
    config: &DashiSearchPanel,
) -> (Value, String) {
    let panel_ref_name = format!("panel_{}", panel_index);
    ctx.push_reference(
        config.search_id.clone(),
        format!("{}:{}", panel_index, panel_ref_name),
        "search",
    );

    let mut embeddable = json!({ "enhancements": {} });
    if !config.columns.is_empty() {
        embeddable["columns"] = json!(config.columns);
    }
    if !config.sort.is_empty() {
        let sort: Vec<Value> = config
            .sort
            .iter()
            .map(|spec| json!([spec.field, spec.direction.as_str()]))
            .collect();
        embeddable["sort"] = json!(sort);
    }

    (embeddable, panel_ref_name)
}
