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

//! Gauge panels compile to an `lnsGauge` Lens embeddable.

use serde_json::{json, Value};

use crate::compile::{lens, DashiCompileContext};
use crate::config::{DashiFieldType, DashiGaugePanel, DashiTicksPosition};

/// Builds the `embeddableConfig` of a gauge panel.
pub fn compile(ctx: &DashiCompileContext, panel_index: &str, config: &DashiGaugePanel) -> Value {
    let mut columns = Vec::new();

    let value = lens::column(ctx, panel_index, "value", &config.value, DashiFieldType::Number);
    let mut visualization = json!({
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "shape": config.shape.as_str(),
        "metricAccessor": value.column_id,
        "ticksPosition": config.ticks.unwrap_or(DashiTicksPosition::Auto).as_str(),
        "labelMajorMode": if config.label_major.is_some() { "custom" } else { "auto" },
    });
    columns.push(value);

    if let Some(min) = &config.min {
        let col = lens::column(ctx, panel_index, "min", min, DashiFieldType::Number);
        visualization["minAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(max) = &config.max {
        let col = lens::column(ctx, panel_index, "max", max, DashiFieldType::Number);
        visualization["maxAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(goal) = &config.goal {
        let col = lens::column(ctx, panel_index, "goal", goal, DashiFieldType::Number);
        visualization["goalAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(label) = &config.label_major {
        visualization["labelMajor"] = json!(label);
    }

    lens::build_embeddable(ctx, panel_index, "lnsGauge", &config.esql, visualization, columns)
}
