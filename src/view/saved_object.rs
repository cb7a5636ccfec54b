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

//! # Saved Object Module
//!
//! The saved-object envelope and dashboard attributes: the outermost layer
//! of the compiled output. One [`DashiSavedObject`] per dashboard, one
//! NDJSON line per saved object on export.
//!
//! Several attributes are stringified JSON (`panelsJSON`, `optionsJSON`,
//! `searchSourceJSON`): the target schema double-serializes them, and the
//! compiler reproduces that faithfully.

use serde::Serialize;
use serde_json::Value;

use crate::view::controls::DashiControlGroupInput;

/// A reference from the dashboard to another saved object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashiReference {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ref_type: String,
}

/// Position and size of one panel on the 48-column grid. `i` repeats the
/// panel index, as the target schema requires.
#[derive(Clone, Debug, Serialize)]
pub struct DashiGridData {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub i: String,
}

/// One entry of the `panelsJSON` array.
#[derive(Clone, Debug, Serialize)]
pub struct DashiPanelJson {
    #[serde(rename = "type")]
    pub panel_type: String,
    #[serde(rename = "gridData")]
    pub grid_data: DashiGridData,
    #[serde(rename = "panelIndex")]
    pub panel_index: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "embeddableConfig")]
    pub embeddable_config: Value,
    /// Present only for by-reference panels (saved searches); names the
    /// dashboard-level reference carrying the target id.
    #[serde(rename = "panelRefName", skip_serializing_if = "Option::is_none")]
    pub panel_ref_name: Option<String>,
}

/// The `kibanaSavedObjectMeta` attribute.
#[derive(Clone, Debug, Serialize)]
pub struct DashiSavedObjectMeta {
    #[serde(rename = "searchSourceJSON")]
    pub search_source_json: String,
}

/// Dashboard attributes inside the saved-object envelope.
#[derive(Clone, Debug, Serialize)]
pub struct DashiDashboardAttributes {
    pub title: String,
    pub description: String,
    #[serde(rename = "timeRestore")]
    pub time_restore: bool,
    #[serde(rename = "timeFrom", skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    #[serde(rename = "timeTo", skip_serializing_if = "Option::is_none")]
    pub time_to: Option<String>,
    #[serde(rename = "refreshInterval", skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<Value>,
    #[serde(rename = "panelsJSON")]
    pub panels_json: String,
    #[serde(rename = "optionsJSON")]
    pub options_json: String,
    #[serde(rename = "kibanaSavedObjectMeta")]
    pub kibana_saved_object_meta: DashiSavedObjectMeta,
    #[serde(rename = "controlGroupInput", skip_serializing_if = "Option::is_none")]
    pub control_group_input: Option<DashiControlGroupInput>,
    pub version: u32,
}

/// The saved-object envelope: one exported dashboard.
#[derive(Clone, Debug, Serialize)]
pub struct DashiSavedObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub attributes: DashiDashboardAttributes,
    pub references: Vec<DashiReference>,
    #[serde(rename = "coreMigrationVersion")]
    pub core_migration_version: String,
    #[serde(rename = "typeMigrationVersion")]
    pub type_migration_version: String,
    pub managed: bool,
}
