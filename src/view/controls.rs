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

//! Control group input attribute: the dashboard-level container for
//! compiled controls. `panelsJSON` and `ignoreParentSettingsJSON` are
//! stringified JSON, matching the target schema.

use serde::Serialize;

/// The `controlGroupInput` dashboard attribute.
#[derive(Clone, Debug, Serialize)]
pub struct DashiControlGroupInput {
    #[serde(rename = "chainingSystem")]
    pub chaining_system: String,
    #[serde(rename = "controlStyle")]
    pub control_style: String,
    #[serde(rename = "showApplySelections")]
    pub show_apply_selections: bool,
    #[serde(rename = "ignoreParentSettingsJSON")]
    pub ignore_parent_settings_json: String,
    #[serde(rename = "panelsJSON")]
    pub panels_json: String,
}
