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

//! # Control Config Module
//!
//! Config model for dashboard-level controls: the interactive filter
//! widgets rendered above the panel grid. Field-backed controls (options
//! list, range slider) reference a data view; ES|QL controls bind a query
//! variable instead.

use serde::Deserialize;
use serde_json::Value;

use super::panel::default_true;

/// Width class of a control in the control bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiControlWidth {
    Small,
    Medium,
    Large,
}

impl Default for DashiControlWidth {
    fn default() -> Self {
        DashiControlWidth::Medium
    }
}

impl DashiControlWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiControlWidth::Small => "small",
            DashiControlWidth::Medium => "medium",
            DashiControlWidth::Large => "large",
        }
    }
}

/// One control: shared presentation fields plus the per-type payload
/// selected by the YAML `type` field.
#[derive(Clone, Debug)]
pub struct DashiControlConfig {
    /// Explicit control id. Derived deterministically when omitted.
    pub id: Option<String>,

    /// Label shown above or beside the control.
    pub label: Option<String>,

    pub width: DashiControlWidth,

    /// Whether the control stretches to fill spare bar width.
    pub grow: bool,

    pub kind: DashiControlKind,
}

const CONTROL_SHARED_KEYS: &[&str] = &["type", "id", "label", "width", "grow"];

fn control_type_keys(control_type: &str) -> Option<&'static [&'static str]> {
    Some(match control_type {
        "options_list" => &[
            "field",
            "data_view",
            "selected",
            "exclude",
            "search_technique",
            "allow_multiple",
        ],
        "range_slider" => &["field", "data_view", "step"],
        "time_slider" => &[],
        "esql" => &["variable", "variable_type", "esql", "options", "selected"],
        _ => return None,
    })
}

// Same hand-rolled unknown-key check as the panel config: the flattened
// `kind` rules out `deny_unknown_fields`.
impl<'de> Deserialize<'de> for DashiControlConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            id: Option<String>,
            #[serde(default)]
            label: Option<String>,
            #[serde(default)]
            width: DashiControlWidth,
            #[serde(default = "default_true")]
            grow: bool,
            #[serde(flatten)]
            kind: DashiControlKind,
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let control_type = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        super::check_known_keys(
            &value,
            &format!("{} control", control_type),
            CONTROL_SHARED_KEYS,
            control_type_keys(control_type),
        )
        .map_err(serde::de::Error::custom)?;

        let raw: Raw = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(DashiControlConfig {
            id: raw.id,
            label: raw.label,
            width: raw.width,
            grow: raw.grow,
            kind: raw.kind,
        })
    }
}

impl DashiControlConfig {
    /// A short handle for error messages.
    pub fn handle(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        if let Some(label) = &self.label {
            return label.clone();
        }
        self.kind.type_name().to_string()
    }
}

/// Per-type control payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashiControlKind {
    OptionsList(DashiOptionsListControl),
    RangeSlider(DashiRangeSliderControl),
    TimeSlider,
    Esql(DashiEsqlControl),
}

impl DashiControlKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            DashiControlKind::OptionsList(_) => "options_list",
            DashiControlKind::RangeSlider(_) => "range_slider",
            DashiControlKind::TimeSlider => "time_slider",
            DashiControlKind::Esql(_) => "esql",
        }
    }
}

/// Match technique for typing into an options list.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiSearchTechnique {
    Prefix,
    Wildcard,
    Exact,
}

impl DashiSearchTechnique {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiSearchTechnique::Prefix => "prefix",
            DashiSearchTechnique::Wildcard => "wildcard",
            DashiSearchTechnique::Exact => "exact",
        }
    }
}

/// Multi-select list of values of one field.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiOptionsListControl {
    /// Field the control filters on.
    pub field: String,
    /// Data view id the field belongs to.
    pub data_view: String,
    /// Values selected when the dashboard opens. Scalars only.
    #[serde(default)]
    pub selected: Vec<Value>,
    /// Invert the selection into an exclusion.
    #[serde(default)]
    pub exclude: bool,
    #[serde(default)]
    pub search_technique: Option<DashiSearchTechnique>,
    #[serde(default = "default_true")]
    pub allow_multiple: bool,
}

/// Numeric range slider over one field.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiRangeSliderControl {
    pub field: String,
    pub data_view: String,
    #[serde(default)]
    pub step: Option<f64>,
}

/// Kind of value an ES|QL control variable holds.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashiVariableType {
    Values,
    Fields,
    TimeLiteral,
}

impl DashiVariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiVariableType::Values => "values",
            DashiVariableType::Fields => "fields",
            DashiVariableType::TimeLiteral => "time_literal",
        }
    }
}

/// A control binding an ES|QL query variable.
///
/// Options either come from a static list or from an options query
/// evaluated by the target application.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiEsqlControl {
    /// Variable name, referenced from panel queries as `?name`.
    pub variable: String,
    #[serde(default = "default_variable_type")]
    pub variable_type: DashiVariableType,
    /// Options query; mutually exclusive with `options`.
    #[serde(default)]
    pub esql: Option<String>,
    /// Static option list.
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

fn default_variable_type() -> DashiVariableType {
    DashiVariableType::Values
}

/// Position of control labels in the control bar.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashiLabelPosition {
    OneLine,
    TwoLine,
}

impl Default for DashiLabelPosition {
    fn default() -> Self {
        DashiLabelPosition::OneLine
    }
}

impl DashiLabelPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiLabelPosition::OneLine => "oneLine",
            DashiLabelPosition::TwoLine => "twoLine",
        }
    }
}

/// Settings shared by every control in the group.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashiControlSettings {
    /// Whether selections in one control narrow the options of the next.
    pub chaining: bool,
    pub label_position: DashiLabelPosition,
    /// Ignore dashboard filter pills when computing control options.
    pub ignore_filters: bool,
    /// Ignore the dashboard query bar when computing control options.
    pub ignore_query: bool,
    /// Ignore the dashboard time range when computing control options.
    pub ignore_time_range: bool,
    /// Require an explicit apply click instead of filtering on change.
    pub apply_button: bool,
}

impl Default for DashiControlSettings {
    fn default() -> Self {
        Self {
            chaining: true,
            label_position: DashiLabelPosition::OneLine,
            ignore_filters: false,
            ignore_query: false,
            ignore_time_range: false,
            apply_button: false,
        }
    }
}
