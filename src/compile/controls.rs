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

//! # Control Group Compiler
//!
//! Compiles the control list and group settings into the dashboard's
//! `controlGroupInput`. The group serializes its panels and its parent
//! ignore settings as nested JSON strings, mirroring the double
//! serialization of the dashboard attributes themselves. Field-backed
//! controls register their data view as a reference named
//! `controlGroup_{id}:{type}DataView`.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::compile::DashiCompileContext;
use crate::config::{DashiControlConfig, DashiControlKind, DashiControlSettings};
use crate::errors::Result;
use crate::view::DashiControlGroupInput;

/// Compiles controls plus group settings into a `controlGroupInput`.
/// Returns `None` when the dashboard declares no controls.
pub fn compile(
    ctx: &mut DashiCompileContext,
    controls: &[DashiControlConfig],
    settings: &DashiControlSettings,
) -> Result<Option<DashiControlGroupInput>> {
    if controls.is_empty() {
        return Ok(None);
    }

    // BTreeMap keeps panel order independent of control id spelling;
    // rendering order comes from the `order` field.
    let mut panels = BTreeMap::new();
    for (order, control) in controls.iter().enumerate() {
        let control_id = control
            .id
            .clone()
            .unwrap_or_else(|| ctx.stable_id(&format!("control/{}", order)));
        let entry = compile_control(ctx, &control_id, order, control);
        panels.insert(control_id, entry);
    }

    let ignore_settings = json!({
        "ignoreFilters": settings.ignore_filters,
        "ignoreQuery": settings.ignore_query,
        "ignoreTimerange": settings.ignore_time_range,
        "ignoreValidations": false,
    });

    Ok(Some(DashiControlGroupInput {
        chaining_system: (if settings.chaining { "HIERARCHICAL" } else { "NONE" }).to_string(),
        control_style: settings.label_position.as_str().to_string(),
        show_apply_selections: settings.apply_button,
        ignore_parent_settings_json: serde_json::to_string(&ignore_settings)?,
        panels_json: serde_json::to_string(&panels)?,
    }))
}

/// Builds one control panel entry and registers its data-view reference
/// when the control type is field backed.
fn compile_control(
    ctx: &mut DashiCompileContext,
    control_id: &str,
    order: usize,
    control: &DashiControlConfig,
) -> Value {
    let mut explicit_input = json!({ "id": control_id, "enhancements": {} });
    if let Some(label) = &control.label {
        explicit_input["title"] = json!(label);
    }

    let control_type = match &control.kind {
        DashiControlKind::OptionsList(options) => {
            ctx.push_reference(
                options.data_view.clone(),
                format!("controlGroup_{}:optionsListDataView", control_id),
                "index-pattern",
            );
            explicit_input["fieldName"] = json!(options.field);
            explicit_input["selectedOptions"] = json!(options.selected);
            explicit_input["exclude"] = json!(options.exclude);
            if let Some(technique) = &options.search_technique {
                explicit_input["searchTechnique"] = json!(technique.as_str());
            }
            if !options.allow_multiple {
                explicit_input["singleSelect"] = json!(true);
            }
            "optionsListControl"
        }
        DashiControlKind::RangeSlider(slider) => {
            ctx.push_reference(
                slider.data_view.clone(),
                format!("controlGroup_{}:rangeSliderDataView", control_id),
                "index-pattern",
            );
            explicit_input["fieldName"] = json!(slider.field);
            if let Some(step) = slider.step {
                explicit_input["step"] = json!(step);
            }
            "rangeSliderControl"
        }
        DashiControlKind::TimeSlider => "timeSlider",
        DashiControlKind::Esql(esql) => {
            explicit_input["variableName"] = json!(esql.variable);
            explicit_input["variableType"] = json!(esql.variable_type.as_str());
            if let Some(query) = &esql.esql {
                explicit_input["esqlQuery"] = json!(query);
            }
            if !esql.options.is_empty() {
                explicit_input["availableOptions"] = json!(esql.options);
            }
            if let Some(selected) = &esql.selected {
                explicit_input["selectedOptions"] = json!([selected]);
            }
            "esqlControl"
        }
    };

    json!({
        "type": control_type,
        "order": order,
        "grow": control.grow,
        "width": control.width.as_str(),
        "explicitInput": explicit_input,
    })
}
