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

//! # Dashi Filter Compilation Tests
//!
//! Compilation of the query bar and filter pills into the stringified
//! `searchSourceJSON`: one canonical query shape per filter kind, the
//! meta wrapper, and the pinned-versus-app state store.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test compile_filters
//! ```

use dashix::compile_str;
use serde_json::Value;

fn search_source(yaml: &str) -> Value {
    let objects = compile_str(yaml).unwrap();
    serde_json::from_str(
        &objects[0]
            .attributes
            .kibana_saved_object_meta
            .search_source_json,
    )
    .unwrap()
}

/// Tests the default search source: empty kuery query, no filters.
#[test]
fn test_default_search_source() {
    let source = search_source("title: T\n");
    assert_eq!(source["query"]["query"], "");
    assert_eq!(source["query"]["language"], "kuery");
    assert_eq!(source["filter"].as_array().unwrap().len(), 0);
}

/// Tests that the query bar shorthand lands as a kuery query.
#[test]
fn test_query_bar() {
    let source = search_source("title: T\nquery: \"status : 200\"\n");
    assert_eq!(source["query"]["query"], "status : 200");
    assert_eq!(source["query"]["language"], "kuery");
}

/// Tests a phrase filter: match_phrase query, meta key and params.
#[test]
fn test_phrase_filter() {
    let yaml = r#"
title: T
filters:
  - type: phrase
    field: service.name
    value: web
    label: Only web
"#;
    let source = search_source(yaml);
    let filter = &source["filter"][0];
    assert_eq!(filter["query"]["match_phrase"]["service.name"], "web");
    assert_eq!(filter["meta"]["type"], "phrase");
    assert_eq!(filter["meta"]["key"], "service.name");
    assert_eq!(filter["meta"]["alias"], "Only web");
    assert_eq!(filter["meta"]["params"]["query"], "web");
    assert_eq!(filter["meta"]["negate"], false);
    assert_eq!(filter["$state"]["store"], "appState");
}

/// Tests a phrases filter: bool/should with minimum_should_match.
#[test]
fn test_phrases_filter() {
    let yaml = r#"
title: T
filters:
  - type: phrases
    field: service.name
    values: [web, api]
"#;
    let source = search_source(yaml);
    let filter = &source["filter"][0];
    let should = filter["query"]["bool"]["should"].as_array().unwrap();
    assert_eq!(should.len(), 2);
    assert_eq!(should[0]["match_phrase"]["service.name"], "web");
    assert_eq!(filter["query"]["bool"]["minimum_should_match"], 1);
    assert_eq!(filter["meta"]["type"], "phrases");
    assert_eq!(filter["meta"]["params"][1], "api");
}

/// Tests a range filter: only the present bounds appear.
#[test]
fn test_range_filter() {
    let yaml = r#"
title: T
filters:
  - type: range
    field: bytes
    gte: 1000
    lt: 5000
"#;
    let source = search_source(yaml);
    let filter = &source["filter"][0];
    let range = &filter["query"]["range"]["bytes"];
    assert_eq!(range["gte"], 1000);
    assert_eq!(range["lt"], 5000);
    assert!(range.get("gt").is_none());
    assert!(range.get("lte").is_none());
}

/// Tests an exists filter.
#[test]
fn test_exists_filter() {
    let yaml = r#"
title: T
filters:
  - type: exists
    field: error.message
    negate: true
"#;
    let source = search_source(yaml);
    let filter = &source["filter"][0];
    assert_eq!(filter["query"]["exists"]["field"], "error.message");
    assert_eq!(filter["meta"]["negate"], true);
}

/// Tests that a custom filter passes its DSL through untouched.
#[test]
fn test_custom_filter_passthrough() {
    let yaml = r#"
title: T
filters:
  - type: custom
    dsl:
      terms:
        tags: [prod, canary]
"#;
    let source = search_source(yaml);
    let filter = &source["filter"][0];
    assert_eq!(filter["query"]["terms"]["tags"][1], "canary");
    assert_eq!(filter["meta"]["type"], "custom");
    assert!(filter["meta"].get("key").is_none());
}

/// Tests that pinned filters use the global state store and disabled
/// filters keep their flag.
#[test]
fn test_pinned_and_disabled() {
    let yaml = r#"
title: T
filters:
  - type: phrase
    field: env
    value: prod
    pinned: true
  - type: phrase
    field: env
    value: staging
    disabled: true
"#;
    let source = search_source(yaml);
    assert_eq!(source["filter"][0]["$state"]["store"], "globalState");
    assert_eq!(source["filter"][1]["$state"]["store"], "appState");
    assert_eq!(source["filter"][1]["meta"]["disabled"], true);
}
