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

//! # Lens View Module
//!
//! The embedded Lens attributes carried inside a visualization panel's
//! `embeddableConfig`. All Lens-backed panels share this envelope; only
//! the `visualization` state (a per-type JSON object) differs.
//!
//! The datasource is always `textBased`: panels are fed by ES|QL queries
//! against an ad-hoc data view synthesized from the query's source.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// An ES|QL query wrapper, `{"esql": "..."}` on the wire.
#[derive(Clone, Debug, Serialize)]
pub struct DashiEsqlQuery {
    pub esql: String,
}

/// Column type metadata.
#[derive(Clone, Debug, Serialize)]
pub struct DashiColumnMeta {
    #[serde(rename = "type")]
    pub column_type: String,
}

/// One column of a textBased layer.
#[derive(Clone, Debug, Serialize)]
pub struct DashiLensColumn {
    #[serde(rename = "columnId")]
    pub column_id: String,
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub meta: DashiColumnMeta,
}

/// One layer of the textBased datasource.
#[derive(Clone, Debug, Serialize)]
pub struct DashiTextBasedLayer {
    /// Id of the ad-hoc data view backing the layer.
    pub index: String,
    pub query: DashiEsqlQuery,
    pub columns: Vec<DashiLensColumn>,
}

/// The textBased datasource state. Keyed by layer id; a compiled panel
/// always has exactly one layer.
#[derive(Clone, Debug, Serialize)]
pub struct DashiTextBasedState {
    pub layers: BTreeMap<String, DashiTextBasedLayer>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashiDatasourceStates {
    #[serde(rename = "textBased")]
    pub text_based: DashiTextBasedState,
}

/// An ad-hoc data view synthesized from the panel's ES|QL source.
#[derive(Clone, Debug, Serialize)]
pub struct DashiAdHocDataView {
    pub id: String,
    pub title: String,
    #[serde(rename = "timeFieldName", skip_serializing_if = "Option::is_none")]
    pub time_field_name: Option<String>,
    #[serde(rename = "type")]
    pub view_type: String,
}

/// Lens state: per-type visualization object plus the shared datasource.
#[derive(Clone, Debug, Serialize)]
pub struct DashiLensState {
    pub visualization: Value,
    pub query: DashiEsqlQuery,
    pub filters: Vec<Value>,
    #[serde(rename = "datasourceStates")]
    pub datasource_states: DashiDatasourceStates,
    #[serde(rename = "adHocDataViews")]
    pub ad_hoc_data_views: BTreeMap<String, DashiAdHocDataView>,
}

/// The Lens attribute envelope inside `embeddableConfig.attributes`.
#[derive(Clone, Debug, Serialize)]
pub struct DashiLensAttributes {
    pub title: String,
    #[serde(rename = "visualizationType")]
    pub visualization_type: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    pub references: Vec<Value>,
    pub state: DashiLensState,
}
