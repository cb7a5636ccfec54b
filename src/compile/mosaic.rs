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

//! Mosaic panels reuse the partition state with the `mosaic` shape. The
//! first grouping becomes the vertical axis, the optional second one the
//! horizontal axis.

use serde_json::{json, Value};

use crate::compile::{lens, palette, DashiCompileContext};
use crate::config::{DashiFieldType, DashiLegendConfig, DashiMosaicPanel};

fn legend_display(legend: Option<&DashiLegendConfig>) -> &'static str {
    match legend {
        None => "default",
        Some(l) if l.visible => "show",
        Some(_) => "hide",
    }
}

/// Builds the `embeddableConfig` of a mosaic panel.
pub fn compile(ctx: &DashiCompileContext, panel_index: &str, config: &DashiMosaicPanel) -> Value {
    let mut columns = Vec::new();

    let mut primary_groups = Vec::new();
    let mut secondary_groups = Vec::new();
    for (i, group) in config.slice_by.iter().enumerate() {
        let col = lens::column(
            ctx,
            panel_index,
            &format!("slice/{}", i),
            group,
            DashiFieldType::String,
        );
        if i == 0 {
            primary_groups.push(col.column_id.clone());
        } else {
            secondary_groups.push(col.column_id.clone());
        }
        columns.push(col);
    }

    let metric = lens::column(ctx, panel_index, "metric", &config.metric, DashiFieldType::Number);
    let metric_id = metric.column_id.clone();
    columns.push(metric);

    let mut layer = json!({
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "primaryGroups": primary_groups,
        "metrics": [metric_id],
        "numberDisplay": "percent",
        "categoryDisplay": "default",
        "legendDisplay": legend_display(config.legend.as_ref()),
        "nestedLegend": false,
    });
    if !secondary_groups.is_empty() {
        layer["secondaryGroups"] = json!(secondary_groups);
    }
    if let Some(legend) = &config.legend {
        layer["legendPosition"] = json!(legend.position.as_str());
    }

    let mut visualization = json!({
        "shape": "mosaic",
        "layers": [layer],
    });
    if let Some(color) = &config.palette {
        visualization["palette"] = palette::compile(color);
    }

    lens::build_embeddable(ctx, panel_index, "lnsPie", &config.esql, visualization, columns)
}
