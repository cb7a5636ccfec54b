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

//! Datatable panels compile to an `lnsDatatable` Lens embeddable. Every
//! declared column appears both in the datasource layer and the
//! visualization column list.

use serde_json::{json, Value};

use crate::compile::{lens, DashiCompileContext};
use crate::config::{DashiDatatableColumn, DashiDatatablePanel, DashiFieldType, DashiSummaryRow};
use crate::view::lens::{DashiColumnMeta, DashiLensColumn};

/// Builds the `embeddableConfig` of a datatable panel.
pub fn compile(
    ctx: &DashiCompileContext,
    panel_index: &str,
    config: &DashiDatatablePanel,
) -> Value {
    let mut columns = Vec::new();
    let mut vis_columns = Vec::new();

    for (i, column) in config.columns.iter().enumerate() {
        let column_id = ctx.stable_id(&format!(
            "panel/{}/column/table/{}/{}",
            panel_index,
            i,
            column.field()
        ));

        let mut vis_column = json!({ "columnId": column_id });
        if let DashiDatatableColumn::Spec {
            width,
            alignment,
            hidden,
            summary,
            ..
        } = column
        {
            if let Some(width) = width {
                vis_column["width"] = json!(width);
            }
            if let Some(alignment) = alignment {
                vis_column["alignment"] = json!(alignment.as_str());
            }
            if *hidden {
                vis_column["hidden"] = json!(true);
            }
            if let Some(summary) = summary {
                if *summary != DashiSummaryRow::None {
                    vis_column["summaryRow"] = json!(summary.as_str());
                }
            }
        }
        vis_columns.push(vis_column);

        columns.push(DashiLensColumn {
            column_id,
            field_name: column.field().to_string(),
            label: column.label().map(String::from),
            meta: DashiColumnMeta {
                column_type: column.type_or(DashiFieldType::String).as_str().to_string(),
            },
        });
    }

    let mut visualization = json!({
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "columns": vis_columns,
        "headerRowHeight": "single",
    });
    if let Some(row_height) = &config.row_height {
        visualization["rowHeight"] = json!(row_height.as_str());
    }
    if let Some(size) = config.paging {
        visualization["paging"] = json!({ "enabled": true, "size": size });
    }

    lens::build_embeddable(ctx, panel_index, "lnsDatatable", &config.esql, visualization, columns)
}
