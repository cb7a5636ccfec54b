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

//! # Dashi Validation Tests
//!
//! Semantic validation of parsed dashboard configs: grid bounds, ES|QL
//! leading keywords, palette rules, control constraints, and the
//! warning-versus-error split.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test config_validate
//! ```

use dashix::config::DashiDashboardConfig;
use dashix::loader::DashiLoader;
use dashix::validate::DashiValidator;

fn parse_one(yaml: &str) -> DashiDashboardConfig {
    let mut result = DashiLoader::new().strict(true).load_yaml(yaml).unwrap();
    assert_eq!(result.dashboards.len(), 1);
    result.dashboards.remove(0)
}

fn validate(yaml: &str) -> dashix::Result<Vec<String>> {
    DashiValidator::new().validate(&parse_one(yaml))
}

/// Tests that a whitespace-only title is a hard error.
#[test]
fn test_empty_title_rejected() {
    assert!(validate("title: \"  \"").is_err());
}

/// Tests that a dashboard without panels validates with a warning.
#[test]
fn test_no_panels_warns() {
    let warnings = validate("title: Empty").unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("no panels"));
}

/// Tests that duplicate explicit panel ids are rejected.
#[test]
fn test_duplicate_panel_ids_rejected() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    id: a
    content: one
  - type: markdown
    id: a
    content: two
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that a grid position with only one coordinate is rejected.
#[test]
fn test_half_positioned_grid_rejected() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    content: hi
    grid: { x: 0, w: 24, h: 15 }
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that a panel crossing the right edge of the grid is rejected.
#[test]
fn test_grid_out_of_bounds_rejected() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    content: hi
    grid: { x: 30, y: 0, w: 24, h: 15 }
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that overlapping explicit panels produce a warning, not an
/// error.
#[test]
fn test_overlap_is_warning() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    id: a
    content: one
    grid: { x: 0, y: 0, w: 24, h: 15 }
  - type: markdown
    id: b
    content: two
    grid: { x: 12, y: 5, w: 24, h: 15 }
"#;
    let warnings = validate(yaml).unwrap();
    assert!(warnings.iter().any(|w| w.contains("overlap")));
}

/// Tests that the overlap check handles positions near the top of the
/// `u32` range without overflowing.
#[test]
fn test_overlap_check_with_huge_y() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    id: a
    content: one
    grid: { x: 0, y: 4294967290, w: 24, h: 15 }
  - type: markdown
    id: b
    content: two
    grid: { x: 12, y: 4294967290, w: 24, h: 15 }
"#;
    let warnings = validate(yaml).unwrap();
    assert!(warnings.iter().any(|w| w.contains("overlap")));
}

/// Tests that an ES|QL query without a leading source command is
/// rejected.
#[test]
fn test_esql_without_source_rejected() {
    let yaml = r#"
title: T
panels:
  - type: metric
    esql: "STATS c = COUNT(*)"
    value: c
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that the ES|QL leading keyword check is case-insensitive.
#[test]
fn test_esql_keyword_case_insensitive() {
    let yaml = r#"
title: T
panels:
  - type: metric
    esql: "from logs | stats c = count(*)"
    value: c
"#;
    assert!(validate(yaml).is_ok());
}

/// Tests that a pie with more than three slice_by columns is rejected.
#[test]
fn test_pie_slice_limit() {
    let yaml = r#"
title: T
panels:
  - type: pie
    esql: FROM logs | STATS c = COUNT(*) BY a, b, c, d
    metrics: [c]
    slice_by: [a, b, c, d]
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that donut_hole on a plain pie shape is only a warning.
#[test]
fn test_donut_hole_on_pie_warns() {
    let yaml = r#"
title: T
panels:
  - type: pie
    esql: FROM logs | STATS c = COUNT(*) BY a
    metrics: [c]
    slice_by: [a]
    donut_hole: 0.4
"#;
    let warnings = validate(yaml).unwrap();
    assert!(warnings.iter().any(|w| w.contains("donut_hole")));
}

/// Tests that an unknown named palette is rejected.
#[test]
fn test_unknown_palette_rejected() {
    let yaml = r#"
title: T
panels:
  - type: heatmap
    esql: FROM logs | STATS c = COUNT(*) BY a, b
    x: a
    value: c
    palette: neon
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that custom palette stops must be strictly increasing.
#[test]
fn test_custom_palette_stops_must_increase() {
    let yaml = r##"
title: T
panels:
  - type: heatmap
    esql: FROM logs | STATS c = COUNT(*) BY a, b
    x: a
    value: c
    palette:
      custom:
        - { stop: 0.5, color: "#ff0000" }
        - { stop: 0.5, color: "#00ff00" }
"##;
    assert!(validate(yaml).is_err());
}

/// Tests that a malformed hex color is rejected.
#[test]
fn test_bad_hex_color_rejected() {
    let yaml = r#"
title: T
panels:
  - type: metric
    esql: FROM logs | STATS c = COUNT(*)
    value: c
    color: "red"
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that an external link must use http(s).
#[test]
fn test_non_http_link_rejected() {
    let yaml = r#"
title: T
panels:
  - type: links
    links:
      - url: ftp://example.com/file
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that an ES|QL control must pick either a query or a static
/// options list, not both and not neither.
#[test]
fn test_esql_control_exclusivity() {
    let both = r#"
title: T
controls:
  - type: esql
    variable: service
    esql: FROM logs | STATS BY service.name
    options: [web, api]
"#;
    assert!(validate(both).is_err());

    let neither = r#"
title: T
controls:
  - type: esql
    variable: service
"#;
    assert!(validate(neither).is_err());
}

/// Tests that an ES|QL control variable must be an identifier.
#[test]
fn test_esql_control_variable_identifier() {
    let yaml = r#"
title: T
controls:
  - type: esql
    variable: "my variable"
    options: [a]
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that a range filter without any bound is rejected.
#[test]
fn test_range_filter_needs_bound() {
    let yaml = r#"
title: T
filters:
  - type: range
    field: bytes
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that selected options of an options list must be scalars.
#[test]
fn test_options_list_selected_scalars() {
    let yaml = r#"
title: T
controls:
  - type: options_list
    field: service.name
    data_view: logs-*
    selected:
      - [nested]
"#;
    assert!(validate(yaml).is_err());
}

/// Tests that a URL drilldown accepts a template even without an
/// http(s) prefix.
#[test]
fn test_url_drilldown_template_allowed() {
    let yaml = r#"
title: T
panels:
  - type: metric
    esql: FROM logs | STATS c = COUNT(*)
    value: c
    drilldowns:
      - name: Open logs
        url: "{{context.panel.query}}"
"#;
    assert!(validate(yaml).is_ok());
}
