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

//! # Lens Builder Module
//!
//! Shared assembly for all Lens-backed panels: the textBased datasource
//! layer, the ad-hoc data view derived from the query source, and column
//! synthesis. Per-panel modules build their visualization state and hand
//! it to [`build_embeddable`] together with the columns they created.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::compile::DashiCompileContext;
use crate::config::{DashiFieldRef, DashiFieldType};
use crate::view::lens::{
    DashiAdHocDataView, DashiColumnMeta, DashiDatasourceStates, DashiEsqlQuery,
    DashiLensAttributes, DashiLensColumn, DashiLensState, DashiTextBasedLayer,
    DashiTextBasedState,
};

/// Extracts the source index pattern from an ES|QL query, for the ad-hoc
/// data view title. Only the `FROM` clause is inspected; `ROW`/`SHOW`
/// queries have no source. The keyword match is case-insensitive, like
/// the ES|QL grammar itself.
pub fn esql_index(query: &str) -> Option<String> {
    let trimmed = query.trim();
    let keyword = trimmed.split_whitespace().next()?;
    if !keyword.eq_ignore_ascii_case("FROM") {
        return None;
    }
    let clause = trimmed[keyword.len()..].split('|').next().unwrap_or("");
    let source = clause
        .split_whitespace()
        .take_while(|token| !token.eq_ignore_ascii_case("METADATA"))
        .collect::<Vec<_>>()
        .join(" ");
    if source.is_empty() {
        None
    } else {
        Some(source)
    }
}

/// The layer id of a panel's single textBased layer.
pub fn layer_id(ctx: &DashiCompileContext, panel_index: &str) -> String {
    ctx.stable_id(&format!("panel/{}/layer", panel_index))
}

/// Synthesizes one layer column for a field reference. `role` keeps the
/// derived column id unique when a field serves several roles.
pub fn column(
    ctx: &DashiCompileContext,
    panel_index: &str,
    role: &str,
    field: &DashiFieldRef,
    default_type: DashiFieldType,
) -> DashiLensColumn {
    DashiLensColumn {
        column_id: ctx.stable_id(&format!("panel/{}/column/{}/{}", panel_index, role, field.field())),
        field_name: field.field().to_string(),
        label: field.label().map(String::from),
        meta: DashiColumnMeta {
            column_type: field.type_or(default_type).as_str().to_string(),
        },
    }
}

/// Assembles the full `embeddableConfig.attributes` for a Lens panel from
/// the per-type visualization state and the synthesized columns.
pub fn build_embeddable(
    ctx: &DashiCompileContext,
    panel_index: &str,
    visualization_type: &str,
    esql: &str,
    visualization: Value,
    columns: Vec<DashiLensColumn>,
) -> Value {
    let data_view_id = ctx.stable_id(&format!("panel/{}/dataview", panel_index));
    let source = esql_index(esql);

    let mut layers = BTreeMap::new();
    layers.insert(
        layer_id(ctx, panel_index),
        DashiTextBasedLayer {
            index: data_view_id.clone(),
            query: DashiEsqlQuery {
                esql: esql.to_string(),
            },
            columns,
        },
    );

    let mut ad_hoc_data_views = BTreeMap::new();
    ad_hoc_data_views.insert(
        data_view_id.clone(),
        DashiAdHocDataView {
            id: data_view_id,
            title: source.clone().unwrap_or_default(),
            time_field_name: source.map(|_| "@timestamp".to_string()),
            view_type: "esql".to_string(),
        },
    );

    let attributes = DashiLensAttributes {
        title: String::new(),
        visualization_type: visualization_type.to_string(),
        attr_type: "lens".to_string(),
        references: Vec::new(),
        state: DashiLensState {
            visualization,
            query: DashiEsqlQuery {
                esql: esql.to_string(),
            },
            filters: Vec::new(),
            datasource_states: DashiDatasourceStates {
                text_based: DashiTextBasedState { layers },
            },
            ad_hoc_data_views,
        },
    };

    json!({ "attributes": attributes })
}
