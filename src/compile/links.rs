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

//! Links panels compile to a by-value links embeddable. Dashboard links
//! are emitted as references and wired through `destinationRefName`;
//! external links carry their URL inline.

use serde_json::{json, Value};

use crate::compile::DashiCompileContext;
use crate::config::{DashiLinkConfig, DashiLinksPanel};

/// Builds the `embeddableConfig` of a links panel and registers one
/// dashboard reference per dashboard link.
pub fn compile(
    ctx: &mut DashiCompileContext,
    panel_index: &str,
    config: &DashiLinksPanel,
) -> Value {
    let mut links = Vec::with_capacity(config.links.len());

    for (order, link) in config.links.iter().enumerate() {
        let link_id = ctx.stable_id(&format!("panel/{}/link/{}", panel_index, order));
        match link {
            DashiLinkConfig::Dashboard {
                dashboard,
                label,
                use_current_filters,
                use_current_time_range,
                open_in_new_tab,
            } => {
                let ref_name = format!("link_{}_dashboard", link_id);
                ctx.push_reference(
                    dashboard.clone(),
                    format!("{}:{}", panel_index, ref_name),
                    "dashboard",
                );
                links.push(json!({
                    "id": link_id,
                    "type": "dashboardLink",
                    "label": label.clone().unwrap_or_default(),
                    "destinationRefName": ref_name,
                    "order": order,
                    "options": {
                        "openInNewTab": open_in_new_tab,
                        "useCurrentFilters": use_current_filters,
                        "useCurrentDateRange": use_current_time_range,
                    },
                }));
            }
            DashiLinkConfig::External {
                url,
                label,
                open_in_new_tab,
                encode,
            } => {
                links.push(json!({
                    "id": link_id,
                    "type": "externalLink",
                    "label": label.clone().unwrap_or_default(),
                    "destination": url,
                    "order": order,
                    "options": {
                        "openInNewTab": open_in_new_tab,
                        "encodeUrl": encode,
                    },
                }));
            }
        }
    }

    json!({
        "attributes": {
            "layout": config.layout.as_str(),
            "links": links,
        },
    })
}
