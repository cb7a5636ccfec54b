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

//! Cartesian panels (bar, line, area) compile to an `lnsXY` Lens
//! embeddable with a single data layer.

use serde_json::{json, Value};

use crate::compile::{lens, palette, DashiCompileContext};
use crate::config::{DashiFieldType, DashiXyPanel};

/// Builds the `embeddableConfig` of a cartesian chart panel.
pub fn compile(ctx: &DashiCompileContext, panel_index: &str, config: &DashiXyPanel) -> Value {
    let mut columns = Vec::new();

    let mut accessors = Vec::new();
    for (i, metric) in config.y.iter().enumerate() {
        let col = lens::column(
            ctx,
            panel_index,
            &format!("y/{}", i),
            metric,
            DashiFieldType::Number,
        );
        accessors.push(col.column_id.clone());
        columns.push(col);
    }

    let mut layer = json!({
        "layerId": lens::layer_id(ctx, panel_index),
        "layerType": "data",
        "seriesType": config.series_type.as_str(),
        "accessors": accessors,
    });
    if let Some(x) = &config.x {
        let col = lens::column(ctx, panel_index, "x", x, DashiFieldType::Date);
        layer["xAccessor"] = json!(col.column_id);
        columns.push(col);
    }
    if let Some(split) = &config.split_by {
        let col = lens::column(ctx, panel_index, "split", split, DashiFieldType::String);
        layer["splitAccessor"] = json!(col.column_id);
        columns.push(col);
    }

    let legend = config.legend.clone().unwrap_or_default();
    let gridlines = config
        .axes
        .as_ref()
        .and_then(|axes| axes.gridlines)
        .unwrap_or(true);

    let mut visualization = json!({
        "legend": {
            "isVisible": legend.visible,
            "position": legend.position.as_str(),
        },
        "valueLabels": "hide",
        "preferredSeriesType": config.series_type.as_str(),
        "layers": [layer],
        "axisTitlesVisibilitySettings": {
            "x": config.axes.as_ref().map_or(false, |a| a.x_title.is_some()),
            "yLeft": config.axes.as_ref().map_or(false, |a| a.y_title.is_some()),
            "yRight": false,
        },
        "gridlinesVisibilitySettings": {
            "x": gridlines,
            "yLeft": gridlines,
            "yRight": gridlines,
        },
    });
    if let Some(axes) = &config.axes {
        if let Some(title) = &axes.x_title {
            visualization["xTitle"] = json!(title);
        }
        if let Some(title) = &axes.y_title {
            visualization["yTitle"] = json!(title);
        }
    }
    if let Some(fitting) = &config.fitting {
        visualization["fittingFunction"] = json!(fitting.as_str());
    }
    if let Some(color) = &config.palette {
        visualization["palette"] = palette::compile(color);
    }

    lens::build_embeddable(ctx, panel_index, "lnsXY", &config.esql, visualization, columns)
}
