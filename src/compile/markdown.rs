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

//! Markdown panels compile to a by-value legacy visualization embeddable
//! with a `markdown` savedVis payload.

use serde_json::{json, Value};

use crate::config::DashiMarkdownPanel;

const DEFAULT_FONT_SIZE: u32 = 12;

/// Builds the `embeddableConfig` of a markdown panel.
pub fn compile(config: &DashiMarkdownPanel) -> Value {
    json!({
        "savedVis": {
            "id": "",
            "title": "",
            "description": "",
            "type": "markdown",
            "params": {
                "fontSize": config.font_size.unwrap_or(DEFAULT_FONT_SIZE),
                "openLinksInNewTab": config.open_links_in_new_tab,
                "markdown": config.content,
            },
            "uiState": {},
            "data": {
                "aggs": [],
                "searchSource": {
                    "query": { "query": "", "language": "kuery" },
                    "filter": [],
                },
            },
        },
        "enhancements": {},
    })
}
