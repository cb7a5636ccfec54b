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

//! Heatmap panels compile to an `lnsHeatmap` Lens embeddable.

use serde_json::{json, Value};

use crate::compile::{lens, palette, DashiCompileContext};
use crate::config::{DashiFieldType, DashiHeatmapPanel};

/// Builds the `embeddableConfig` of a heatmap panel.
pub fn compile(ctx: &DashiCompileContext, panel_index: &str, config: &DashiHeatmapPanel) -> Value {
    let mut columns = Vec::new();

    let x = lens::column(ctx, panel_index, "x", &config.x, DashiFieldType::String);
    let value = lens::column(ctx, panel_index, "value", &config.value, DashiFieldType::Number);

    let legend = config.legend.clone().unwrap_or_default();
    let mut visualization = json!({
        "shape": "heatmap",
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "xAccessor": x.column_id,
        "valueAccessor": value.column_id,
        "gridConfig": {
            "type": "heatmap_grid",
            "isCellLabelVisible": config.cell_labels,
            "isXAxisLabelVisible": true,
            "isYAxisLabelVisible": true,
            "isXAxisTitleVisible": false,
            "isYAxisTitleVisible": false,
        },
        "legend": {
            "isVisible": legend.visible,
            "position": legend.position.as_str(),
            "type": "heatmap_legend",
        },
    });
    columns.push(x);
    columns.push(value);

    if let Some(y) = &config.y {
        let col = lens::column(ctx, panel_index, "y", y, DashiFieldType::String);
        visualization["yAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(color) = &config.palette {
        visualization["palette"] = palette::compile(color);
    }

    lens::build_embeddable(ctx, panel_index, "lnsHeatmap", &config.esql, visualization, columns)
}
