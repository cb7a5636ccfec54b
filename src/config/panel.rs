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

//! # Panel Config Module
//!
//! One config struct per panel type, tied together by [`DashiPanelKind`],
//! an internally tagged enum over the YAML `type` field. Shared fields
//! (id, title, grid position, drilldowns) live on [`DashiPanelConfig`] and
//! are flattened alongside the per-type payload.
//!
//! ## Panel Types
//!
//! - **markdown**: Static markdown text
//! - **links**: A list of dashboard or external links
//! - **image**: An image by URL or uploaded file id
//! - **search**: A saved search shown as a document table
//! - **metric / pie / xy / heatmap / gauge / mosaic / datatable**:
//!   Lens-backed visualizations fed by an ES|QL query
//!
//! ES|QL query strings are treated as opaque: the compiler only inspects
//! the leading keyword and the `FROM` source needed for the ad-hoc data
//! view; everything else passes through unchanged.

use serde::Deserialize;

/// Grid position and size of a panel on the 48-column dashboard grid.
///
/// A panel either carries a full position (`x` and `y`) or none at all, in
/// which case the compiler's auto-layout places it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiGridConfig {
    #[serde(default)]
    pub x: Option<u32>,
    #[serde(default)]
    pub y: Option<u32>,
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub h: Option<u32>,
}

/// Field value types recognized by the target visualization engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiFieldType {
    Number,
    String,
    Date,
    Boolean,
    Ip,
}

impl DashiFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiFieldType::Number => "number",
            DashiFieldType::String => "string",
            DashiFieldType::Date => "date",
            DashiFieldType::Boolean => "boolean",
            DashiFieldType::Ip => "ip",
        }
    }
}

/// A reference to a column produced by the panel's ES|QL query.
///
/// Accepts either a bare string (`value: requests`) or an object with an
/// explicit type or display label:
///
/// ```yaml
/// value: { field: requests, type: number, label: "Requests / min" }
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiFieldRef {
    Name(String),
    Spec {
        field: String,
        #[serde(default, rename = "type")]
        field_type: Option<DashiFieldType>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl DashiFieldRef {
    /// The referenced column name.
    pub fn field(&self) -> &str {
        match self {
            DashiFieldRef::Name(name) => name,
            DashiFieldRef::Spec { field, .. } => field,
        }
    }

    /// The declared type, or `default` when the reference does not carry one.
    pub fn type_or(&self, default: DashiFieldType) -> DashiFieldType {
        match self {
            DashiFieldRef::Name(_) => default,
            DashiFieldRef::Spec { field_type, .. } => field_type.unwrap_or(default),
        }
    }

    /// Optional display label override.
    pub fn label(&self) -> Option<&str> {
        match self {
            DashiFieldRef::Name(_) => None,
            DashiFieldRef::Spec { label, .. } => label.as_deref(),
        }
    }
}

/// Legend placement and visibility.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashiLegendConfig {
    pub visible: bool,
    pub position: DashiLegendPosition,
}

impl Default for DashiLegendConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: DashiLegendPosition::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiLegendPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl DashiLegendPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiLegendPosition::Left => "left",
            DashiLegendPosition::Right => "right",
            DashiLegendPosition::Top => "top",
            DashiLegendPosition::Bottom => "bottom",
        }
    }
}

/// Color palette selection: a palette known to the target application by
/// name, or a custom stop-based palette.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiColorConfig {
    Palette(String),
    Custom { custom: Vec<DashiColorStop> },
}

/// One stop of a custom palette. `color` must be `#rrggbb`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiColorStop {
    pub stop: f64,
    pub color: String,
}

/// A drilldown attached to a panel.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiDrilldownConfig {
    /// Display name of the drilldown action.
    pub name: String,
    /// Triggers the drilldown reacts to. Defaults to the panel filter
    /// context trigger.
    #[serde(default)]
    pub triggers: Vec<DashiDrilldownTrigger>,
    #[serde(flatten)]
    pub kind: DashiDrilldownKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashiDrilldownTrigger {
    Filter,
    ValueClick,
    RowClick,
}

impl DashiDrilldownTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiDrilldownTrigger::Filter => "FILTER_TRIGGER",
            DashiDrilldownTrigger::ValueClick => "VALUE_CLICK_TRIGGER",
            DashiDrilldownTrigger::RowClick => "ROW_CLICK_TRIGGER",
        }
    }
}

/// Drilldown destination: another dashboard or a templated URL.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiDrilldownKind {
    Dashboard {
        dashboard: String,
        #[serde(default = "default_true")]
        use_current_filters: bool,
        #[serde(default = "default_true")]
        use_current_time_range: bool,
        #[serde(default)]
        open_in_new_tab: bool,
    },
    Url {
        url: String,
        #[serde(default = "default_true")]
        open_in_new_tab: bool,
        #[serde(default = "default_true")]
        encode: bool,
    },
}

/// One panel of a dashboard: shared placement fields plus the per-type
/// payload selected by the YAML `type` field.
#[derive(Clone, Debug)]
pub struct DashiPanelConfig {
    /// Explicit panel id. Derived deterministically when omitted.
    pub id: Option<String>,

    /// Panel title shown in the panel header.
    pub title: Option<String>,

    /// Hides the panel title even when one is set.
    pub hide_title: bool,

    /// Panel description, surfaced as a tooltip in the header.
    pub description: String,

    /// Grid position and size; auto-layout applies when absent.
    pub grid: Option<DashiGridConfig>,

    /// Drilldown actions attached to the panel.
    pub drilldowns: Vec<DashiDrilldownConfig>,

    pub kind: DashiPanelKind,
}

const PANEL_SHARED_KEYS: &[&str] = &[
    "type",
    "id",
    "title",
    "hide_title",
    "description",
    "grid",
    "drilldowns",
];

fn panel_type_keys(panel_type: &str) -> Option<&'static [&'static str]> {
    Some(match panel_type {
        "markdown" => &["content", "font_size", "open_links_in_new_tab"],
        "links" => &["layout", "links"],
        "image" => &["src", "alt_text", "fit", "background_color"],
        "search" => &["search_id", "columns", "sort"],
        "metric" => &[
            "esql",
            "value",
            "secondary",
            "max",
            "breakdown_by",
            "color",
            "sub_label",
            "progress_direction",
        ],
        "pie" => &[
            "esql",
            "metrics",
            "slice_by",
            "shape",
            "legend",
            "donut_hole",
            "palette",
        ],
        "mosaic" => &["esql", "metric", "slice_by", "legend", "palette"],
        "xy" => &[
            "esql",
            "series_type",
            "x",
            "y",
            "split_by",
            "axes",
            "legend",
            "fitting",
            "palette",
        ],
        "heatmap" => &["esql", "x", "y", "value", "legend", "cell_labels", "palette"],
        "gauge" => &[
            "esql",
            "value",
            "min",
            "max",
            "goal",
            "shape",
            "ticks",
            "label_major",
        ],
        "datatable" => &["esql", "columns", "row_height", "paging"],
        _ => return None,
    })
}

// The flattened `kind` rules out serde's `deny_unknown_fields`, so
// unknown keys are checked by hand against the per-type key lists.
impl<'de> Deserialize<'de> for DashiPanelConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            id: Option<String>,
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            hide_title: bool,
            #[serde(default)]
            description: String,
            #[serde(default)]
            grid: Option<DashiGridConfig>,
            #[serde(default)]
            drilldowns: Vec<DashiDrilldownConfig>,
            #[serde(flatten)]
            kind: DashiPanelKind,
        }

        let value = serde_json::Value::deserialize(deserializer)?;
        let panel_type = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");
        super::check_known_keys(
            &value,
            &format!("{} panel", panel_type),
            PANEL_SHARED_KEYS,
            panel_type_keys(panel_type),
        )
        .map_err(serde::de::Error::custom)?;

        let raw: Raw = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(DashiPanelConfig {
            id: raw.id,
            title: raw.title,
            hide_title: raw.hide_title,
            description: raw.description,
            grid: raw.grid,
            drilldowns: raw.drilldowns,
            kind: raw.kind,
        })
    }
}

impl DashiPanelConfig {
    /// A short human-readable handle for error messages: the explicit id,
    /// the title, or the panel type name.
    pub fn handle(&self) -> String {
        if let Some(id) = &self.id {
            return id.clone();
        }
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.kind.type_name().to_string()
    }

    /// The panel's ES|QL query, for Lens-backed panel types.
    pub fn esql(&self) -> Option<&str> {
        match &self.kind {
            DashiPanelKind::Metric(p) => Some(&p.esql),
            DashiPanelKind::Pie(p) => Some(&p.esql),
            DashiPanelKind::Xy(p) => Some(&p.esql),
            DashiPanelKind::Heatmap(p) => Some(&p.esql),
            DashiPanelKind::Gauge(p) => Some(&p.esql),
            DashiPanelKind::Mosaic(p) => Some(&p.esql),
            DashiPanelKind::Datatable(p) => Some(&p.esql),
            _ => None,
        }
    }
}

/// Per-type panel payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashiPanelKind {
    Markdown(DashiMarkdownPanel),
    Links(DashiLinksPanel),
    Image(DashiImagePanel),
    Search(DashiSearchPanel),
    Metric(DashiMetricPanel),
    Pie(DashiPiePanel),
    Xy(DashiXyPanel),
    Heatmap(DashiHeatmapPanel),
    Gauge(DashiGaugePanel),
    Mosaic(DashiMosaicPanel),
    Datatable(DashiDatatablePanel),
}

impl DashiPanelKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            DashiPanelKind::Markdown(_) => "markdown",
            DashiPanelKind::Links(_) => "links",
            DashiPanelKind::Image(_) => "image",
            DashiPanelKind::Search(_) => "search",
            DashiPanelKind::Metric(_) => "metric",
            DashiPanelKind::Pie(_) => "pie",
            DashiPanelKind::Xy(_) => "xy",
            DashiPanelKind::Heatmap(_) => "heatmap",
            DashiPanelKind::Gauge(_) => "gauge",
            DashiPanelKind::Mosaic(_) => "mosaic",
            DashiPanelKind::Datatable(_) => "datatable",
        }
    }
}

/// Static markdown text panel.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiMarkdownPanel {
    pub content: String,
    #[serde(default)]
    pub font_size: Option<u32>,
    #[serde(default)]
    pub open_links_in_new_tab: bool,
}

/// Layout of a links panel.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiLinksLayout {
    Vertical,
    Horizontal,
}

impl Default for DashiLinksLayout {
    fn default() -> Self {
        DashiLinksLayout::Vertical
    }
}

impl DashiLinksLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiLinksLayout::Vertical => "vertical",
            DashiLinksLayout::Horizontal => "horizontal",
        }
    }
}

/// A panel listing navigation links.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiLinksPanel {
    #[serde(default)]
    pub layout: DashiLinksLayout,
    pub links: Vec<DashiLinkConfig>,
}

/// One entry of a links panel: either a link to another dashboard or an
/// external URL.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiLinkConfig {
    Dashboard {
        dashboard: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default = "default_true")]
        use_current_filters: bool,
        #[serde(default = "default_true")]
        use_current_time_range: bool,
        #[serde(default)]
        open_in_new_tab: bool,
    },
    External {
        url: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default = "default_true")]
        open_in_new_tab: bool,
        #[serde(default = "default_true")]
        encode: bool,
    },
}

/// Image scaling behavior.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiImageFit {
    Fill,
    Contain,
    Cover,
    None,
}

impl Default for DashiImageFit {
    fn default() -> Self {
        DashiImageFit::Contain
    }
}

impl DashiImageFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiImageFit::Fill => "fill",
            DashiImageFit::Contain => "contain",
            DashiImageFit::Cover => "cover",
            DashiImageFit::None => "none",
        }
    }
}

/// Image origin: a URL or a previously uploaded file id.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiImageSource {
    Url { url: String },
    File { file_id: String },
}

/// Static image panel.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiImagePanel {
    pub src: DashiImageSource,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub fit: DashiImageFit,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Sort entry for a saved-search panel.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiSortSpec {
    pub field: String,
    pub direction: DashiSortDirection,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiSortDirection {
    Asc,
    Desc,
}

impl DashiSortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiSortDirection::Asc => "asc",
            DashiSortDirection::Desc => "desc",
        }
    }
}

/// A saved search embedded by reference.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiSearchPanel {
    /// Saved-object id of the search to embed.
    pub search_id: String,
    /// Column override applied on top of the saved search.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Sort override applied on top of the saved search.
    #[serde(default)]
    pub sort: Vec<DashiSortSpec>,
}

/// Direction of the optional progress bar on a metric panel.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiProgressDirection {
    Vertical,
    Horizontal,
}

impl DashiProgressDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiProgressDirection::Vertical => "vertical",
            DashiProgressDirection::Horizontal => "horizontal",
        }
    }
}

/// Single-value metric visualization.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiMetricPanel {
    pub esql: String,
    /// Primary metric column.
    pub value: DashiFieldRef,
    /// Secondary metric shown under the primary value.
    #[serde(default)]
    pub secondary: Option<DashiFieldRef>,
    /// Maximum column enabling the progress bar.
    #[serde(default)]
    pub max: Option<DashiFieldRef>,
    /// Breakdown column splitting the metric into a grid of tiles.
    #[serde(default)]
    pub breakdown_by: Option<DashiFieldRef>,
    /// Static tile color (`#rrggbb`).
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub sub_label: Option<String>,
    #[serde(default)]
    pub progress_direction: Option<DashiProgressDirection>,
}

/// Shape of a partition visualization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiPieShape {
    Pie,
    Donut,
    Treemap,
}

impl Default for DashiPieShape {
    fn default() -> Self {
        DashiPieShape::Pie
    }
}

impl DashiPieShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiPieShape::Pie => "pie",
            DashiPieShape::Donut => "donut",
            DashiPieShape::Treemap => "treemap",
        }
    }
}

/// Partition visualization (pie, donut, treemap).
#[derive(Clone, Debug, Deserialize)]
pub struct DashiPiePanel {
    pub esql: String,
    /// Metric columns sizing the slices. At least one.
    pub metrics: Vec<DashiFieldRef>,
    /// Grouping columns, outermost first. One to three.
    pub slice_by: Vec<DashiFieldRef>,
    #[serde(default)]
    pub shape: DashiPieShape,
    #[serde(default)]
    pub legend: Option<DashiLegendConfig>,
    /// Hole size ratio for donut shapes, 0.0..1.0.
    #[serde(default)]
    pub donut_hole: Option<f64>,
    #[serde(default)]
    pub palette: Option<DashiColorConfig>,
}

/// Mosaic (Marimekko) visualization. Shares the partition state with pie
/// on the output side but constrains the grouping to one or two columns.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiMosaicPanel {
    pub esql: String,
    pub metric: DashiFieldRef,
    /// One (vertical only) or two (vertical and horizontal) groupings.
    pub slice_by: Vec<DashiFieldRef>,
    #[serde(default)]
    pub legend: Option<DashiLegendConfig>,
    #[serde(default)]
    pub palette: Option<DashiColorConfig>,
}

/// Cartesian series rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashiSeriesType {
    Bar,
    BarStacked,
    BarHorizontal,
    Line,
    Area,
    AreaStacked,
}

impl Default for DashiSeriesType {
    fn default() -> Self {
        DashiSeriesType::BarStacked
    }
}

impl DashiSeriesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiSeriesType::Bar => "bar",
            DashiSeriesType::BarStacked => "bar_stacked",
            DashiSeriesType::BarHorizontal => "bar_horizontal",
            DashiSeriesType::Line => "line",
            DashiSeriesType::Area => "area",
            DashiSeriesType::AreaStacked => "area_stacked",
        }
    }
}

/// Interpolation of missing values on line and area series.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiFittingFunction {
    None,
    Zero,
    Linear,
    Carry,
    Lookahead,
}

impl DashiFittingFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiFittingFunction::None => "None",
            DashiFittingFunction::Zero => "Zero",
            DashiFittingFunction::Linear => "Linear",
            DashiFittingFunction::Carry => "Carry",
            DashiFittingFunction::Lookahead => "Lookahead",
        }
    }
}

/// Axis titles and gridline visibility for cartesian charts.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashiAxesConfig {
    #[serde(default)]
    pub x_title: Option<String>,
    #[serde(default)]
    pub y_title: Option<String>,
    #[serde(default)]
    pub gridlines: Option<bool>,
}

/// Cartesian chart (bar, line, area).
#[derive(Clone, Debug, Deserialize)]
pub struct DashiXyPanel {
    pub esql: String,
    #[serde(default)]
    pub series_type: DashiSeriesType,
    /// Horizontal axis column. Defaults to a date type when untyped.
    #[serde(default)]
    pub x: Option<DashiFieldRef>,
    /// Vertical axis metric columns. At least one.
    pub y: Vec<DashiFieldRef>,
    /// Column splitting the series into one series per value.
    #[serde(default)]
    pub split_by: Option<DashiFieldRef>,
    #[serde(default)]
    pub axes: Option<DashiAxesConfig>,
    #[serde(default)]
    pub legend: Option<DashiLegendConfig>,
    #[serde(default)]
    pub fitting: Option<DashiFittingFunction>,
    #[serde(default)]
    pub palette: Option<DashiColorConfig>,
}

/// Heatmap visualization.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiHeatmapPanel {
    pub esql: String,
    /// Horizontal bucket column.
    pub x: DashiFieldRef,
    /// Optional vertical bucket column.
    #[serde(default)]
    pub y: Option<DashiFieldRef>,
    /// Cell value column.
    pub value: DashiFieldRef,
    #[serde(default)]
    pub legend: Option<DashiLegendConfig>,
    /// Render the numeric value inside each cell.
    #[serde(default)]
    pub cell_labels: bool,
    #[serde(default)]
    pub palette: Option<DashiColorConfig>,
}

/// Gauge body shape.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashiGaugeShape {
    HorizontalBullet,
    VerticalBullet,
    Arc,
    Circle,
}

impl Default for DashiGaugeShape {
    fn default() -> Self {
        DashiGaugeShape::HorizontalBullet
    }
}

impl DashiGaugeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiGaugeShape::HorizontalBullet => "horizontalBullet",
            DashiGaugeShape::VerticalBullet => "verticalBullet",
            DashiGaugeShape::Arc => "arc",
            DashiGaugeShape::Circle => "circle",
        }
    }
}

/// Tick placement on a gauge.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiTicksPosition {
    Auto,
    Bands,
    Hidden,
}

impl DashiTicksPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiTicksPosition::Auto => "auto",
            DashiTicksPosition::Bands => "bands",
            DashiTicksPosition::Hidden => "hidden",
        }
    }
}

/// Gauge visualization.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiGaugePanel {
    pub esql: String,
    pub value: DashiFieldRef,
    #[serde(default)]
    pub min: Option<DashiFieldRef>,
    #[serde(default)]
    pub max: Option<DashiFieldRef>,
    #[serde(default)]
    pub goal: Option<DashiFieldRef>,
    #[serde(default)]
    pub shape: DashiGaugeShape,
    #[serde(default)]
    pub ticks: Option<DashiTicksPosition>,
    /// Major label text; defaults to the metric column label.
    #[serde(default)]
    pub label_major: Option<String>,
}

/// Summary row function for a datatable column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiSummaryRow {
    None,
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl DashiSummaryRow {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiSummaryRow::None => "none",
            DashiSummaryRow::Sum => "sum",
            DashiSummaryRow::Avg => "avg",
            DashiSummaryRow::Min => "min",
            DashiSummaryRow::Max => "max",
            DashiSummaryRow::Count => "count",
        }
    }
}

/// Column alignment in a datatable.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiColumnAlignment {
    Left,
    Center,
    Right,
}

impl DashiColumnAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiColumnAlignment::Left => "left",
            DashiColumnAlignment::Center => "center",
            DashiColumnAlignment::Right => "right",
        }
    }
}

/// One column of a datatable panel: a bare field name or a full spec.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum DashiDatatableColumn {
    Name(String),
    Spec {
        field: String,
        #[serde(default, rename = "type")]
        field_type: Option<DashiFieldType>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        alignment: Option<DashiColumnAlignment>,
        #[serde(default)]
        hidden: bool,
        #[serde(default)]
        summary: Option<DashiSummaryRow>,
    },
}

impl DashiDatatableColumn {
    pub fn field(&self) -> &str {
        match self {
            DashiDatatableColumn::Name(name) => name,
            DashiDatatableColumn::Spec { field, .. } => field,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            DashiDatatableColumn::Name(_) => None,
            DashiDatatableColumn::Spec { label, .. } => label.as_deref(),
        }
    }

    pub fn type_or(&self, default: DashiFieldType) -> DashiFieldType {
        match self {
            DashiDatatableColumn::Name(_) => default,
            DashiDatatableColumn::Spec { field_type, .. } => field_type.unwrap_or(default),
        }
    }
}

/// Row height of a datatable.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashiRowHeight {
    Single,
    Auto,
}

impl DashiRowHeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashiRowHeight::Single => "single",
            DashiRowHeight::Auto => "auto",
        }
    }
}

/// Tabular visualization over an ES|QL result.
#[derive(Clone, Debug, Deserialize)]
pub struct DashiDatatablePanel {
    pub esql: String,
    /// Displayed columns in order. At least one.
    pub columns: Vec<DashiDatatableColumn>,
    #[serde(default)]
    pub row_height: Option<DashiRowHeight>,
    /// Page size; paging disabled when absent.
    #[serde(default)]
    pub paging: Option<u32>,
}

pub(crate) fn default_true() -> bool {
    true
}
