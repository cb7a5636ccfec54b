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

//! # Dashboard Config Module
//!
//! Top-level config model for one dashboard document. A YAML file holds one
//! or more documents, each deserializing into a [`DashiDashboardConfig`].
//!
//! ## Example Document
//!
//! ```yaml
//! title: Web traffic
//! description: Edge traffic broken down by service
//! tags: [traffic, edge]
//! time: { from: now-24h, to: now }
//! query: "status_code : 200"
//! panels:
//!   - type: metric
//!     title: Requests
//!     esql: FROM logs-web-* | STATS requests = COUNT(*)
//!     value: requests
//! ```

use serde::Deserialize;

use super::control::{DashiControlConfig, DashiControlSettings};
use super::filter::{DashiFilterConfig, DashiQueryConfig};
use super::panel::DashiPanelConfig;

/// One dashboard definition, parsed from a single YAML document.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiDashboardConfig {
    /// Explicit saved-object id. When omitted the compiler derives a
    /// deterministic id from the title.
    #[serde(default)]
    pub id: Option<String>,

    /// Dashboard title. Required and non-empty.
    pub title: String,

    /// Free-form description shown in the dashboard listing.
    #[serde(default)]
    pub description: String,

    /// Tag names attached to the dashboard as references.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Stored time range. Presence enables `timeRestore` on the output.
    #[serde(default)]
    pub time: Option<DashiTimeRange>,

    /// Stored refresh interval.
    #[serde(default)]
    pub refresh: Option<DashiRefreshInterval>,

    /// Dashboard-level query bar content.
    #[serde(default)]
    pub query: Option<DashiQueryConfig>,

    /// Dashboard-level filter pills.
    #[serde(default)]
    pub filters: Vec<DashiFilterConfig>,

    /// Interactive controls rendered above the panel grid.
    #[serde(default)]
    pub controls: Vec<DashiControlConfig>,

    /// Settings shared by all controls in the control group.
    #[serde(default)]
    pub control_settings: Option<DashiControlSettings>,

    /// The panels making up the dashboard body.
    #[serde(default)]
    pub panels: Vec<DashiPanelConfig>,

    /// Rendering settings for the dashboard as a whole.
    #[serde(default)]
    pub settings: DashiDashboardSettings,
}

/// Stored time range, expressed in the target application's date math.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiTimeRange {
    pub from: String,
    pub to: String,
}

/// Stored refresh interval.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiRefreshInterval {
    /// Whether the interval starts paused.
    #[serde(default)]
    pub pause: bool,
    /// Interval length in milliseconds.
    pub interval: u64,
}

/// Dashboard-wide rendering options, mapped onto `optionsJSON`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashiDashboardSettings {
    pub use_margins: bool,
    pub sync_colors: bool,
    pub sync_cursor: bool,
    pub sync_tooltips: bool,
    pub hide_panel_titles: bool,
}

impl Default for DashiDashboardSettings {
    fn default() -> Self {
        Self {
            use_margins: true,
            sync_colors: false,
            sync_cursor: true,
            sync_tooltips: false,
            hide_panel_titles: false,
        }
    }
}
