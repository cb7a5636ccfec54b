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

//! # Dashi Loader Tests
//!
//! Parsing of YAML and JSON dashboard definitions into the config model:
//! multi-document streams, shorthand forms, defaults, and the lenient
//! versus strict handling of malformed documents.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test config_parse
//! ```

use dashix::config::{
    DashiControlKind, DashiFieldRef, DashiFieldType, DashiLinkConfig, DashiPanelKind,
    DashiQueryLanguage,
};
use dashix::loader::DashiLoader;

/// Tests parsing a minimal single-document dashboard.
#[test]
fn test_minimal_dashboard() {
    let yaml = r#"
title: Web traffic
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    assert_eq!(result.dashboards.len(), 1);
    assert!(result.warnings.is_empty());

    let dashboard = &result.dashboards[0];
    assert_eq!(dashboard.title, "Web traffic");
    assert!(dashboard.id.is_none());
    assert!(dashboard.panels.is_empty());
    assert!(dashboard.settings.use_margins);
    assert!(dashboard.settings.sync_cursor);
    assert!(!dashboard.settings.sync_colors);
}

/// Tests that a multi-document stream yields one dashboard per document
/// and that blank documents between separators are skipped.
#[test]
fn test_multi_document_stream() {
    let yaml = r#"
title: First
---
---
title: Second
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    assert_eq!(result.dashboards.len(), 2);
    assert_eq!(result.dashboards[0].title, "First");
    assert_eq!(result.dashboards[1].title, "Second");
}

/// Tests the shorthand query form: a bare string means a kuery query.
#[test]
fn test_query_shorthand() {
    let yaml = r#"
title: T
query: "status_code : 200"
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    let query = result.dashboards[0].query.as_ref().unwrap();
    assert_eq!(query.language(), DashiQueryLanguage::Kuery);
    assert_eq!(query.text(), "status_code : 200");
}

/// Tests the full query form with an explicit language.
#[test]
fn test_query_full_form() {
    let yaml = r#"
title: T
query: { language: lucene, query: "status:200" }
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    let query = result.dashboards[0].query.as_ref().unwrap();
    assert_eq!(query.language(), DashiQueryLanguage::Lucene);
    assert_eq!(query.text(), "status:200");
}

/// Tests that a metric panel parses with both field reference forms:
/// a bare column name and a full spec with type and label.
#[test]
fn test_field_ref_forms() {
    let yaml = r#"
title: T
panels:
  - type: metric
    esql: FROM logs | STATS requests = COUNT(*)
    value: requests
    secondary: { field: errors, type: number, label: "Errors" }
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    let panel = &result.dashboards[0].panels[0];
    let metric = match &panel.kind {
        DashiPanelKind::Metric(m) => m,
        other => panic!("expected metric panel, got {:?}", other),
    };

    assert!(matches!(&metric.value, DashiFieldRef::Name(name) if name == "requests"));
    let secondary = metric.secondary.as_ref().unwrap();
    assert_eq!(secondary.field(), "errors");
    assert_eq!(secondary.label(), Some("Errors"));
    assert_eq!(
        secondary.type_or(DashiFieldType::String),
        DashiFieldType::Number
    );
}

/// Tests that links panels accept dashboard and external entries in the
/// same list, distinguished by their fields alone.
#[test]
fn test_link_config_forms() {
    let yaml = r#"
title: T
panels:
  - type: links
    links:
      - dashboard: overview-id
        label: Overview
      - url: https://example.com/runbook
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    let panel = &result.dashboards[0].panels[0];
    let links = match &panel.kind {
        DashiPanelKind::Links(l) => l,
        other => panic!("expected links panel, got {:?}", other),
    };
    assert_eq!(links.links.len(), 2);
    assert!(matches!(&links.links[0], DashiLinkConfig::Dashboard { dashboard, .. } if dashboard == "overview-id"));
    assert!(matches!(&links.links[1], DashiLinkConfig::External { url, .. } if url == "https://example.com/runbook"));
}

/// Tests control parsing with per-type payloads and shared defaults.
#[test]
fn test_control_parsing() {
    let yaml = r#"
title: T
controls:
  - type: options_list
    label: Service
    field: service.name
    data_view: logs-*
    selected: [web, api]
  - type: time_slider
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    let controls = &result.dashboards[0].controls;
    assert_eq!(controls.len(), 2);
    assert!(controls[0].grow);

    let options = match &controls[0].kind {
        DashiControlKind::OptionsList(o) => o,
        other => panic!("expected options list, got {:?}", other),
    };
    assert_eq!(options.field, "service.name");
    assert_eq!(options.selected.len(), 2);
    assert!(options.allow_multiple);
    assert!(matches!(controls[1].kind, DashiControlKind::TimeSlider));
}

/// Tests that an unknown top-level key is rejected.
#[test]
fn test_unknown_key_rejected() {
    let yaml = r#"
title: T
panles: []
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    assert!(result.dashboards.is_empty());
    assert_eq!(result.warnings.len(), 1);
}

/// Tests that a misspelled panel field is rejected in strict mode
/// despite the flattened per-type payload.
#[test]
fn test_unknown_panel_key_rejected() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    content: hi
    font_sizee: 99
"#;
    let result = DashiLoader::new().strict(true).load_yaml(yaml);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("font_sizee"), "unexpected error: {}", err);
}

/// Tests that a misspelled control field is rejected in strict mode.
#[test]
fn test_unknown_control_key_rejected() {
    let yaml = r#"
title: T
controls:
  - type: options_list
    field: service.name
    data_view: logs-*
    excluded: true
"#;
    let result = DashiLoader::new().strict(true).load_yaml(yaml);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("excluded"), "unexpected error: {}", err);
}

/// Tests that a misspelled filter field is rejected in strict mode.
#[test]
fn test_unknown_filter_key_rejected() {
    let yaml = r#"
title: T
filters:
  - type: phrase
    field: status
    valeu: 200
"#;
    let result = DashiLoader::new().strict(true).load_yaml(yaml);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("valeu"), "unexpected error: {}", err);
}

/// Tests that in lenient mode a misspelled panel field skips the
/// document with a warning instead of silently dropping the key.
#[test]
fn test_unknown_panel_key_warns_leniently() {
    let yaml = r#"
title: T
panels:
  - type: markdown
    content: hi
    open_links_in_new_tabb: true
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    assert!(result.dashboards.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("open_links_in_new_tabb"));
}

/// Tests that lenient mode skips a malformed document with a warning
/// while the valid documents still load.
#[test]
fn test_lenient_skips_bad_document() {
    let yaml = r#"
title: Good
---
description: missing a title
---
title: Also good
"#;
    let result = DashiLoader::new().load_yaml(yaml).unwrap();
    assert_eq!(result.dashboards.len(), 2);
    assert_eq!(result.warnings.len(), 1);
}

/// Tests that strict mode fails on the first malformed document.
#[test]
fn test_strict_fails_on_bad_document() {
    let yaml = r#"
title: Good
---
description: missing a title
"#;
    let result = DashiLoader::new().strict(true).load_yaml(yaml);
    assert!(result.is_err());
}

/// Tests loading a single JSON object.
#[test]
fn test_json_object() {
    let json = r#"{ "title": "From JSON" }"#;
    let result = DashiLoader::new().load_json(json).unwrap();
    assert_eq!(result.dashboards.len(), 1);
    assert_eq!(result.dashboards[0].title, "From JSON");
}

/// Tests loading a JSON array of dashboards.
#[test]
fn test_json_array() {
    let json = r#"[ { "title": "A" }, { "title": "B" } ]"#;
    let result = DashiLoader::new().load_json(json).unwrap();
    assert_eq!(result.dashboards.len(), 2);
}

/// Tests that a JSON scalar is rejected outright.
#[test]
fn test_json_scalar_rejected() {
    assert!(DashiLoader::new().load_json("42").is_err());
}
