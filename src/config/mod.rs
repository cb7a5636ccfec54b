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

//! # Config Model Module
//!
//! This module contains the typed, validated in-memory representation of a
//! YAML dashboard definition. It is the input side of the compiler: one
//! [`DashiDashboardConfig`] per YAML document, holding panels, controls,
//! filters, and dashboard-level settings.
//!
//! ## Model Categories
//!
//! - **dashboard**: Top-level dashboard document, time range, settings
//! - **panel**: One variant per panel type (markdown, links, image, search,
//!   metric, pie, xy, heatmap, gauge, mosaic, datatable)
//! - **control**: Interactive filter widgets (options list, range slider,
//!   time slider, ES|QL variable controls)
//! - **filter**: Dashboard-level filter and query definitions
//!
//! ## Design
//!
//! Config structs derive `Deserialize` and lean on serde for structural
//! checks; everything serde cannot express (grid bounds, color codes, link
//! targets) lives in the [`crate::validate`] module. Unknown keys are
//! rejected everywhere: plain structs via `deny_unknown_fields`, the
//! tagged panel/control/filter structs via [`check_known_keys`], since
//! serde cannot combine `deny_unknown_fields` with `flatten`.

pub mod control;
pub mod dashboard;
pub mod filter;
pub mod panel;

/// Rejects keys of a tagged config mapping that neither the shared
/// fields nor the selected type's payload declare. A `None` key list
/// means the tag itself is unknown; the error is left to the enum
/// deserializer, which names the valid variants.
pub(crate) fn check_known_keys(
    value: &serde_json::Value,
    context: &str,
    shared: &[&str],
    type_keys: Option<&'static [&'static str]>,
) -> Result<(), String> {
    let map = match value.as_object() {
        Some(map) => map,
        None => return Ok(()),
    };
    let allowed = match type_keys {
        Some(keys) => keys,
        None => return Ok(()),
    };
    for key in map.keys() {
        if !shared.contains(&key.as_str()) && !allowed.contains(&key.as_str()) {
            return Err(format!(
                "unknown field `{}` in {}, expected one of {:?}",
                key, context, allowed
            ));
        }
    }
    Ok(())
}

pub use control::{
    DashiControlConfig, DashiControlKind, DashiControlSettings, DashiControlWidth,
    DashiEsqlControl, DashiLabelPosition, DashiOptionsListControl, DashiRangeSliderControl,
    DashiSearchTechnique, DashiVariableType,
};
pub use dashboard::{
    DashiDashboardConfig, DashiDashboardSettings, DashiRefreshInterval, DashiTimeRange,
};
pub use filter::{DashiFilterConfig, DashiFilterKind, DashiQueryConfig, DashiQueryLanguage};
pub use panel::{
    DashiAxesConfig, DashiColorConfig, DashiColorStop, DashiColumnAlignment,
    DashiDatatableColumn, DashiDatatablePanel, DashiDrilldownConfig, DashiDrilldownKind,
    DashiDrilldownTrigger, DashiFieldRef, DashiFieldType, DashiFittingFunction,
    DashiGaugePanel, DashiGaugeShape, DashiGridConfig, DashiHeatmapPanel, DashiImageFit,
    DashiImagePanel, DashiImageSource, DashiLegendConfig, DashiLegendPosition,
    DashiLinkConfig, DashiLinksLayout, DashiLinksPanel, DashiMarkdownPanel, DashiMetricPanel,
    DashiMosaicPanel, DashiPanelConfig, DashiPanelKind, DashiPiePanel, DashiPieShape,
    DashiProgressDirection, DashiRowHeight, DashiSearchPanel, DashiSeriesType,
    DashiSortDirection, DashiSortSpec, DashiSummaryRow, DashiTicksPosition, DashiXyPanel,
};
