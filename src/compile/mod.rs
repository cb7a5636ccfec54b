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

//! # Compile Module
//!
//! Pure translation from the validated config model to the saved-object
//! view model. [`DashiCompiler::compile`] drives one dashboard end to
//! end: grid placement, per-panel embeddable assembly, control group,
//! filters, references, and the envelope.
//!
//! Everything here is deterministic. Ids that the config does not
//! provide are derived from the dashboard id and a stable path, so
//! compiling the same config twice yields byte-identical output.

pub mod controls;
pub mod datatable;
pub mod drilldown;
pub mod filters;
pub mod gauge;
pub mod grid;
pub mod heatmap;
pub mod image;
pub mod lens;
pub mod links;
pub mod markdown;
pub mod metric;
pub mod mosaic;
pub mod palette;
pub mod pie;
pub mod search;
pub mod xy;

use serde_json::json;

use crate::config::{DashiDashboardConfig, DashiPanelConfig, DashiPanelKind};
use crate::errors::Result;
use crate::version::{
    CORE_MIGRATION_VERSION, DASHBOARD_ATTRIBUTES_VERSION, TYPE_MIGRATION_VERSION,
};
use crate::view::{
    DashiDashboardAttributes, DashiGridData, DashiPanelJson, DashiReference, DashiSavedObject,
    DashiSavedObjectMeta,
};

/// Derives a deterministic UUID-shaped id from a stable path string.
pub fn stable_uuid(path: &str) -> String {
    let hash = blake3::hash(path.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash.as_bytes()[..16]);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// Per-dashboard compilation state: the dashboard id seeding every
/// derived id, and the references accumulated while panels compile.
pub struct DashiCompileContext {
    dashboard_id: String,
    references: Vec<DashiReference>,
}

impl DashiCompileContext {
    pub fn new(dashboard_id: impl Into<String>) -> Self {
        Self {
            dashboard_id: dashboard_id.into(),
            references: Vec::new(),
        }
    }

    /// The id of the dashboard being compiled.
    pub fn dashboard_id(&self) -> &str {
        &self.dashboard_id
    }

    /// Derives a deterministic id scoped to this dashboard.
    pub fn stable_id(&self, path: &str) -> String {
        stable_uuid(&format!("{}/{}", self.dashboard_id, path))
    }

    /// Records a saved-object reference. Exact duplicates collapse to a
    /// single entry.
    pub fn push_reference(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        ref_type: impl Into<String>,
    ) {
        let reference = DashiReference {
            id: id.into(),
            name: name.into(),
            ref_type: ref_type.into(),
        };
        if !self.references.contains(&reference) {
            self.references.push(reference);
        }
    }

    /// Consumes the context, yielding the accumulated references.
    pub fn into_references(self) -> Vec<DashiReference> {
        self.references
    }
}

/// Compiles validated dashboard configs into saved objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashiCompiler;

impl DashiCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compiles one dashboard config into its saved-object envelope.
    pub fn compile(&self, config: &DashiDashboardConfig) -> Result<DashiSavedObject> {
        let dashboard_id = config
            .id
            .clone()
            .unwrap_or_else(|| stable_uuid(&format!("dashi/dashboard/{}", config.title)));
        let mut ctx = DashiCompileContext::new(dashboard_id.clone());

        for tag in &config.tags {
            ctx.push_reference(tag.clone(), format!("tag-ref-{}", tag), "tag");
        }

        let rects = grid::layout(&config.panels);
        let mut panels = Vec::with_capacity(config.panels.len());
        for (idx, (panel, rect)) in config.panels.iter().zip(rects).enumerate() {
            panels.push(self.compile_panel(&mut ctx, idx, panel, rect)?);
        }

        let control_group_input = controls::compile(
            &mut ctx,
            &config.controls,
            &config.control_settings.clone().unwrap_or_default(),
        )?;

        let options = json!({
            "useMargins": config.settings.use_margins,
            "syncColors": config.settings.sync_colors,
            "syncCursor": config.settings.sync_cursor,
            "syncTooltips": config.settings.sync_tooltips,
            "hidePanelTitles": config.settings.hide_panel_titles,
        });

        let attributes = DashiDashboardAttributes {
            title: config.title.clone(),
            description: config.description.clone(),
            time_restore: config.time.is_some(),
            time_from: config.time.as_ref().map(|t| t.from.clone()),
            time_to: config.time.as_ref().map(|t| t.to.clone()),
            refresh_interval: config
                .refresh
                .as_ref()
                .map(|r| json!({ "pause": r.pause, "value": r.interval })),
            panels_json: serde_json::to_string(&panels)?,
            options_json: serde_json::to_string(&options)?,
            kibana_saved_object_meta: DashiSavedObjectMeta {
                search_source_json: filters::search_source_json(
                    config.query.as_ref(),
                    &config.filters,
                )?,
            },
            control_group_input,
            version: DASHBOARD_ATTRIBUTES_VERSION,
        };

        Ok(DashiSavedObject {
            id: dashboard_id,
            object_type: "dashboard".to_string(),
            attributes,
            references: ctx.into_references(),
            core_migration_version: CORE_MIGRATION_VERSION.to_string(),
            type_migration_version: TYPE_MIGRATION_VERSION.to_string(),
            managed: false,
        })
    }

    /// Compiles one panel into its `panelsJSON` entry.
    fn compile_panel(
        &self,
        ctx: &mut DashiCompileContext,
        idx: usize,
        panel: &DashiPanelConfig,
        rect: grid::DashiRect,
    ) -> Result<DashiPanelJson> {
        let panel_index = panel
            .id
            .clone()
            .unwrap_or_else(|| ctx.stable_id(&format!("panel/{}", idx)));

        let (panel_type, mut embeddable, panel_ref_name) = match &panel.kind {
            DashiPanelKind::Markdown(p) => ("visualization", markdown::compile(p), None),
            DashiPanelKind::Links(p) => ("links", links::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Image(p) => ("image", image::compile(p), None),
            DashiPanelKind::Search(p) => {
                let (embeddable, ref_name) = search::compile(ctx, &panel_index, p);
                ("search", embeddable, Some(ref_name))
            }
            DashiPanelKind::Metric(p) => ("lens", metric::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Pie(p) => ("lens", pie::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Xy(p) => ("lens", xy::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Heatmap(p) => ("lens", heatmap::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Gauge(p) => ("lens", gauge::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Mosaic(p) => ("lens", mosaic::compile(ctx, &panel_index, p), None),
            DashiPanelKind::Datatable(p) => {
                ("lens", datatable::compile(ctx, &panel_index, p), None)
            }
        };

        if let Some(actions) = drilldown::compile(ctx, &panel_index, &panel.drilldowns) {
            embeddable["enhancements"] = json!({ "dynamicActions": actions });
        }
        if panel.hide_title {
            embeddable["hidePanelTitles"] = json!(true);
        }
        if !panel.description.is_empty() {
            embeddable["description"] = json!(panel.description);
        }

        let (x, y, w, h) = rect;
        Ok(DashiPanelJson {
            panel_type: panel_type.to_string(),
            grid_data: DashiGridData {
                x,
                y,
                w,
                h,
                i: panel_index.clone(),
            },
            panel_index,
            title: panel.title.clone(),
            embeddable_config: embeddable,
            panel_ref_name,
        })
    }
}
