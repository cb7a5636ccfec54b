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

//! Single-value metric panels compile to an `lnsMetric` Lens embeddable.

use serde_json::{json, Value};

use crate::compile::{lens, DashiCompileContext};
use crate::config::{DashiFieldType, DashiMetricPanel};

/// Builds the `embeddableConfig` of a metric panel.
pub fn compile(
    ctx: &DashiCompileContext,
    panel_index: &str,
    config: &DashiMetricPanel,
) -> Value {
    let mut columns = Vec::new();

    let value = lens::column(ctx, panel_index, "value", &config.value, DashiFieldType::Number);
    let mut visualization = json!({
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "metricAccessor": value.column_id,
    });
    columns.push(value);

    if let Some(secondary) = &config.secondary {
        let col = lens::column(ctx, panel_index, "secondary", secondary, DashiFieldType::Number);
        visualization["secondaryMetricAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(max) = &config.max {
        let col = lens::column(ctx, panel_index, "max", max, DashiFieldType::Number);
        visualization["maxAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(breakdown) = &config.breakdown_by {
        let col = lens::column(ctx, panel_index, "breakdown", breakdown, DashiFieldType::String);
        visualization["breakdownByAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(color) = &config.color {
        visualization["color"] = json!(color);
    }
    if let Some(sub_label) = &config.sub_label {
        visualization["subtitle"] = json!(sub_label);
    }
    if let Some(direction) = &config.progress_direction {
        visualization["progressDirection"] = json!(direction.as_str());
    }

    lens::build_embeddable(ctx, panel_index, "lnsMetric", &config.esql, visualization, columns)
}
