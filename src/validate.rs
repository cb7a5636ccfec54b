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

//! # Validation Module
//!
//! Semantic validation of a parsed [`DashiDashboardConfig`], covering the
//! rules serde's structural checks cannot express: grid bounds, color
//! codes, link targets, palette names, and the relationships between
//! fields of one panel.
//!
//! Validation runs before compilation. It returns the collected warnings
//! on success and stops at the first hard failure, so error messages stay
//! focused on one problem at a time.

use std::collections::HashSet;

use regex::Regex;
use serde_json::Value;

use crate::config::{
    DashiColorConfig, DashiControlConfig, DashiControlKind, DashiDashboardConfig,
    DashiDrilldownConfig, DashiDrilldownKind, DashiFilterConfig, DashiFilterKind,
    DashiGridConfig, DashiPanelConfig, DashiPanelKind, DashiPieShape, DashiSeriesType,
};
use crate::errors::{DashiError, Result};

/// Palette names known to the target application.
pub const KNOWN_PALETTES: &[&str] = &[
    "default",
    "kibana_palette",
    "negative",
    "positive",
    "cool",
    "warm",
    "gray",
    "temperature",
    "complementary",
    "status",
];

/// Number of columns on the dashboard grid.
pub const GRID_COLUMNS: u32 = 48;

/// Upper bound applied to link labels.
const MAX_LABEL_LEN: usize = 256;

fn is_hex_color(text: &str) -> bool {
    Regex::new(r"^#[0-9a-fA-F]{6}$")
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

fn is_identifier(text: &str) -> bool {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

fn is_http_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Checks that an ES|QL query starts with a source command. The query is
/// otherwise opaque to the compiler.
fn has_esql_source(query: &str) -> bool {
    let first = query.trim().split_whitespace().next().unwrap_or("");
    matches!(
        first.to_ascii_uppercase().as_str(),
        "FROM" | "ROW" | "SHOW"
    )
}

/// Validates dashboard configs before compilation.
#[derive(Debug, Default)]
pub struct DashiValidator;

impl DashiValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates one dashboard. Returns collected warnings on success.
    pub fn validate(&self, dashboard: &DashiDashboardConfig) -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        if dashboard.title.trim().is_empty() {
            return Err(DashiError::validation("dashboard title must not be empty"));
        }

        if dashboard.panels.is_empty() {
            warnings.push(format!("dashboard '{}' has no panels", dashboard.title));
        }

        self.check_unique_ids(dashboard)?;

        for panel in &dashboard.panels {
            self.validate_panel(panel, &mut warnings)?;
        }
        self.check_grid_overlap(&dashboard.panels, &mut warnings)?;

        for control in &dashboard.controls {
            self.validate_control(control)?;
        }

        for filter in &dashboard.filters {
            self.validate_filter(filter)?;
        }

        log::debug!(
            "validated dashboard '{}': {} warning(s)",
            dashboard.title,
            warnings.len()
        );
        Ok(warnings)
    }

    fn check_unique_ids(&self, dashboard: &DashiDashboardConfig) -> Result<()> {
        let mut panel_ids = HashSet::new();
        for panel in &dashboard.panels {
            if let Some(id) = &panel.id {
                if !panel_ids.insert(id.as_str()) {
                    return Err(DashiError::validation(format!(
                        "duplicate panel id '{}'",
                        id
                    )));
                }
            }
        }

        let mut control_ids = HashSet::new();
        for control in &dashboard.controls {
            if let Some(id) = &control.id {
                if !control_ids.insert(id.as_str()) {
                    return Err(DashiError::validation(format!(
                        "duplicate control id '{}'",
                        id
                    )));
                }
            }
        }

        Ok(())
    }

    fn validate_panel(&self, panel: &DashiPanelConfig, warnings: &mut Vec<String>) -> Result<()> {
        let handle = panel.handle();

        if let Some(grid) = &panel.grid {
            self.validate_grid(&handle, grid)?;
        }

        if let Some(esql) = panel.esql() {
            if esql.trim().is_empty() {
                return Err(DashiError::validation(format!(
                    "panel '{}': esql query must not be empty",
                    handle
                )));
            }
            if !has_esql_source(esql) {
                return Err(DashiError::validation(format!(
                    "panel '{}': esql query must start with FROM, ROW, or SHOW",
                    handle
                )));
            }
        }

        match &panel.kind {
            DashiPanelKind::Markdown(p) => {
                if p.content.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': markdown content must not be empty",
                        handle
                    )));
                }
            }
            DashiPanelKind::Links(p) => {
                if p.links.is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': links panel needs at least one link",
                        handle
                    )));
                }
                for link in &p.links {
                    self.validate_link(&handle, link)?;
                }
            }
            DashiPanelKind::Image(p) => {
                if let crate::config::DashiImageSource::Url { url } = &p.src {
                    if !is_http_url(url) && !url.starts_with("data:") {
                        return Err(DashiError::validation(format!(
                            "panel '{}': image url must be http(s) or a data: URI",
                            handle
                        )));
                    }
                }
                if let Some(color) = &p.background_color {
                    self.require_hex(&handle, "background_color", color)?;
                }
            }
            DashiPanelKind::Search(p) => {
                if p.search_id.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': search_id must not be empty",
                        handle
                    )));
                }
            }
            DashiPanelKind::Metric(p) => {
                if let Some(color) = &p.color {
                    self.require_hex(&handle, "color", color)?;
                }
            }
            DashiPanelKind::Pie(p) => {
                if p.metrics.is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': pie needs at least one metric",
                        handle
                    )));
                }
                if p.slice_by.is_empty() || p.slice_by.len() > 3 {
                    return Err(DashiError::validation(format!(
                        "panel '{}': pie needs one to three slice_by columns",
                        handle
                    )));
                }
                if let Some(hole) = p.donut_hole {
                    if !(0.0..1.0).contains(&hole) {
                        return Err(DashiError::validation(format!(
                            "panel '{}': donut_hole must be within 0.0..1.0",
                            handle
                        )));
                    }
                    if !matches!(p.shape, DashiPieShape::Donut) {
                        warnings.push(format!(
                            "panel '{}': donut_hole has no effect on shape '{}'",
                            handle,
                            p.shape.as_str()
                        ));
                    }
                }
                self.validate_palette(&handle, p.palette.as_ref())?;
            }
            DashiPanelKind::Mosaic(p) => {
                if p.slice_by.is_empty() || p.slice_by.len() > 2 {
                    return Err(DashiError::validation(format!(
                        "panel '{}': mosaic needs one or two slice_by columns",
                        handle
                    )));
                }
                self.validate_palette(&handle, p.palette.as_ref())?;
            }
            DashiPanelKind::Xy(p) => {
                if p.y.is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': xy needs at least one y column",
                        handle
                    )));
                }
                let is_line_or_area = matches!(
                    p.series_type,
                    DashiSeriesType::Line | DashiSeriesType::Area | DashiSeriesType::AreaStacked
                );
                if p.fitting.is_some() && !is_line_or_area {
                    warnings.push(format!(
                        "panel '{}': fitting only applies to line and area series",
                        handle
                    ));
                }
                self.validate_palette(&handle, p.palette.as_ref())?;
            }
            DashiPanelKind::Heatmap(p) => {
                self.validate_palette(&handle, p.palette.as_ref())?;
            }
            DashiPanelKind::Gauge(_) => {}
            DashiPanelKind::Datatable(p) => {
                if p.columns.is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': datatable needs at least one column",
                        handle
                    )));
                }
                let mut seen = HashSet::new();
                for column in &p.columns {
                    let key = (column.field().to_string(), column.label().map(String::from));
                    if !seen.insert(key) {
                        return Err(DashiError::validation(format!(
                            "panel '{}': duplicate datatable column '{}'",
                            handle,
                            column.field()
                        )));
                    }
                }
                if let Some(paging) = p.paging {
                    if paging == 0 {
                        return Err(DashiError::validation(format!(
                            "panel '{}': paging size must be positive",
                            handle
                        )));
                    }
                }
            }
        }

        for drilldown in &panel.drilldowns {
            self.validate_drilldown(&handle, drilldown)?;
        }

        Ok(())
    }

    fn validate_grid(&self, handle: &str, grid: &DashiGridConfig) -> Result<()> {
        if grid.x.is_some() != grid.y.is_some() {
            return Err(DashiError::validation(format!(
                "panel '{}': grid position needs both x and y, or neither",
                handle
            )));
        }
        if let Some(w) = grid.w {
            if w == 0 || w > GRID_COLUMNS {
                return Err(DashiError::validation(format!(
                    "panel '{}': grid width must be within 1..={}",
                    handle, GRID_COLUMNS
                )));
            }
        }
        if let Some(h) = grid.h {
            if h == 0 {
                return Err(DashiError::validation(format!(
                    "panel '{}': grid height must be at least 1",
                    handle
                )));
            }
        }
        if let Some(x) = grid.x {
            if x >= GRID_COLUMNS {
                return Err(DashiError::validation(format!(
                    "panel '{}': grid x must be below {}",
                    handle, GRID_COLUMNS
                )));
            }
            let w = grid.w.unwrap_or(crate::compile::grid::DEFAULT_PANEL_WIDTH);
            if x + w > GRID_COLUMNS {
                return Err(DashiError::validation(format!(
                    "panel '{}': grid x + w must not exceed {}",
                    handle, GRID_COLUMNS
                )));
            }
        }
        Ok(())
    }

    /// Overlap between explicitly positioned panels renders fine in the
    /// target application, so it is only reported as a warning.
    fn check_grid_overlap(
        &self,
        panels: &[DashiPanelConfig],
        warnings: &mut Vec<String>,
    ) -> Result<()> {
        let rects: Vec<(String, u32, u32, u32, u32)> = panels
            .iter()
            .filter_map(|panel| {
                let grid = panel.grid.as_ref()?;
                let (x, y) = (grid.x?, grid.y?);
                let w = grid.w.unwrap_or(crate::compile::grid::DEFAULT_PANEL_WIDTH);
                let h = grid.h.unwrap_or(crate::compile::grid::DEFAULT_PANEL_HEIGHT);
                Some((panel.handle(), x, y, w, h))
            })
            .collect();

        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                // y and h are unbounded, so the sums must saturate.
                let disjoint = a.1 + a.3 <= b.1
                    || b.1 + b.3 <= a.1
                    || a.2.saturating_add(a.4) <= b.2
                    || b.2.saturating_add(b.4) <= a.2;
                if !disjoint {
                    warnings.push(format!("panels '{}' and '{}' overlap", a.0, b.0));
                }
            }
        }
        Ok(())
    }

    fn validate_link(&self, handle: &str, link: &crate::config::DashiLinkConfig) -> Result<()> {
        match link {
            crate::config::DashiLinkConfig::Dashboard {
                dashboard, label, ..
            } => {
                if dashboard.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': dashboard link target must not be empty",
                        handle
                    )));
                }
                self.check_label(handle, label.as_deref())?;
            }
            crate::config::DashiLinkConfig::External { url, label, .. } => {
                if !is_http_url(url) {
                    return Err(DashiError::validation(format!(
                        "panel '{}': external link url must be http(s)",
                        handle
                    )));
                }
                self.check_label(handle, label.as_deref())?;
            }
        }
        Ok(())
    }

    fn check_label(&self, handle: &str, label: Option<&str>) -> Result<()> {
        if let Some(label) = label {
            if label.len() > MAX_LABEL_LEN {
                return Err(DashiError::validation(format!(
                    "panel '{}': link label exceeds {} characters",
                    handle, MAX_LABEL_LEN
                )));
            }
        }
        Ok(())
    }

    fn validate_palette(&self, handle: &str, palette: Option<&DashiColorConfig>) -> Result<()> {
        match palette {
            None => Ok(()),
            Some(DashiColorConfig::Palette(name)) => {
                if !KNOWN_PALETTES.contains(&name.as_str()) {
                    return Err(DashiError::validation(format!(
                        "panel '{}': unknown palette '{}'",
                        handle, name
                    )));
                }
                Ok(())
            }
            Some(DashiColorConfig::Custom { custom }) => {
                if custom.len() < 2 {
                    return Err(DashiError::validation(format!(
                        "panel '{}': custom palette needs at least two stops",
                        handle
                    )));
                }
                for pair in custom.windows(2) {
                    if pair[1].stop <= pair[0].stop {
                        return Err(DashiError::validation(format!(
                            "panel '{}': palette stops must be strictly increasing",
                            handle
                        )));
                    }
                }
                for stop in custom {
                    self.require_hex(handle, "palette stop", &stop.color)?;
                }
                Ok(())
            }
        }
    }

    fn require_hex(&self, handle: &str, what: &str, color: &str) -> Result<()> {
        if !is_hex_color(color) {
            return Err(DashiError::validation(format!(
                "panel '{}': {} '{}' is not a #rrggbb color",
                handle, what, color
            )));
        }
        Ok(())
    }

    fn validate_control(&self, control: &DashiControlConfig) -> Result<()> {
        let handle = control.handle();
        match &control.kind {
            DashiControlKind::OptionsList(c) => {
                if c.field.trim().is_empty() || c.data_view.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "control '{}': field and data_view must not be empty",
                        handle
                    )));
                }
                for value in &c.selected {
                    if matches!(value, Value::Array(_) | Value::Object(_)) {
                        return Err(DashiError::validation(format!(
                            "control '{}': selected values must be scalars",
                            handle
                        )));
                    }
                }
            }
            DashiControlKind::RangeSlider(c) => {
                if c.field.trim().is_empty() || c.data_view.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "control '{}': field and data_view must not be empty",
                        handle
                    )));
                }
                if let Some(step) = c.step {
                    if step <= 0.0 {
                        return Err(DashiError::validation(format!(
                            "control '{}': step must be positive",
                            handle
                        )));
                    }
                }
            }
            DashiControlKind::TimeSlider => {}
            DashiControlKind::Esql(c) => {
                if !is_identifier(&c.variable) {
                    return Err(DashiError::validation(format!(
                        "control '{}': variable '{}' is not a valid identifier",
                        handle, c.variable
                    )));
                }
                match (&c.esql, c.options.is_empty()) {
                    (Some(_), false) => {
                        return Err(DashiError::validation(format!(
                            "control '{}': esql and options are mutually exclusive",
                            handle
                        )));
                    }
                    (None, true) => {
                        return Err(DashiError::validation(format!(
                            "control '{}': needs either an esql options query or a static options list",
                            handle
                        )));
                    }
                    _ => {}
                }
                if let Some(esql) = &c.esql {
                    if !has_esql_source(esql) {
                        return Err(DashiError::validation(format!(
                            "control '{}': esql query must start with FROM, ROW, or SHOW",
                            handle
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_filter(&self, filter: &DashiFilterConfig) -> Result<()> {
        match &filter.kind {
            DashiFilterKind::Phrase { field, .. } | DashiFilterKind::Exists { field } => {
                if field.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "{} filter: field must not be empty",
                        filter.kind.type_name()
                    )));
                }
            }
            DashiFilterKind::Phrases { field, values } => {
                if field.trim().is_empty() {
                    return Err(DashiError::validation(
                        "phrases filter: field must not be empty",
                    ));
                }
                if values.is_empty() {
                    return Err(DashiError::validation(
                        "phrases filter: needs at least one value",
                    ));
                }
            }
            DashiFilterKind::Range {
                field,
                gt,
                gte,
                lt,
                lte,
            } => {
                if field.trim().is_empty() {
                    return Err(DashiError::validation(
                        "range filter: field must not be empty",
                    ));
                }
                if gt.is_none() && gte.is_none() && lt.is_none() && lte.is_none() {
                    return Err(DashiError::validation(
                        "range filter: needs at least one bound",
                    ));
                }
            }
            DashiFilterKind::Custom { dsl } => {
                if !dsl.is_object() {
                    return Err(DashiError::validation(
                        "custom filter: dsl must be an object",
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_drilldown(&self, handle: &str, drilldown: &DashiDrilldownConfig) -> Result<()> {
        if drilldown.name.trim().is_empty() {
            return Err(DashiError::validation(format!(
                "panel '{}': drilldown name must not be empty",
                handle
            )));
        }
        match &drilldown.kind {
            DashiDrilldownKind::Dashboard { dashboard, .. } => {
                if dashboard.trim().is_empty() {
                    return Err(DashiError::validation(format!(
                        "panel '{}': drilldown '{}' needs a target dashboard id",
                        handle, drilldown.name
                    )));
                }
            }
            DashiDrilldownKind::Url { url, .. } => {
                if !is_http_url(url) && !url.contains("{{") {
                    return Err(DashiError::validation(format!(
                        "panel '{}': drilldown '{}' needs a URL or a {{{{...}}}} template",
                        handle, drilldown.name
                    )));
                }
            }
        }
        Ok(())
    }
}
