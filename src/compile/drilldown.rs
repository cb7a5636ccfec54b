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

//! # Drilldown Compiler
//!
//! Compiles panel drilldowns into `dynamicActions` events stored in the
//! panel's `enhancements`. Dashboard drilldowns travel by reference; the
//! target dashboard id appears only in the dashboard's references array
//! under a name that encodes the panel, the factory, and the event.

use serde_json::{json, Value};

use crate::compile::DashiCompileContext;
use crate::config::{DashiDrilldownConfig, DashiDrilldownKind, DashiDrilldownTrigger};

const DASHBOARD_FACTORY: &str = "DASHBOARD_TO_DASHBOARD_DRILLDOWN";
const URL_FACTORY: &str = "URL_DRILLDOWN";

/// Compiles a panel's drilldowns into the `dynamicActions` enhancement
/// value. Returns `None` when the panel has no drilldowns.
pub fn compile(
    ctx: &mut DashiCompileContext,
    panel_index: &str,
    drilldowns: &[DashiDrilldownConfig],
) -> Option<Value> {
    if drilldowns.is_empty() {
        return None;
    }

    let mut events = Vec::with_capacity(drilldowns.len());
    for (order, drilldown) in drilldowns.iter().enumerate() {
        let event_id = ctx.stable_id(&format!("panel/{}/drilldown/{}", panel_index, order));

        let (factory_id, config, default_trigger) = match &drilldown.kind {
            DashiDrilldownKind::Dashboard {
                dashboard,
                use_current_filters,
                use_current_time_range,
                open_in_new_tab,
            } => {
                ctx.push_reference(
                    dashboard.clone(),
                    format!(
                        "{}:drilldown:{}:{}:dashboardId",
                        panel_index, DASHBOARD_FACTORY, event_id
                    ),
                    "dashboard",
                );
                (
                    DASHBOARD_FACTORY,
                    json!({
                        "useCurrentFilters": use_current_filters,
                        "useCurrentDateRange": use_current_time_range,
                        "openInNewTab": open_in_new_tab,
                    }),
                    DashiDrilldownTrigger::Filter,
                )
            }
            DashiDrilldownKind::Url {
                url,
                open_in_new_tab,
                encode,
            } => (
                URL_FACTORY,
                json!({
                    "url": { "template": url },
                    "openInNewTab": open_in_new_tab,
                    "encodeUrl": encode,
                }),
                DashiDrilldownTrigger::ValueClick,
            ),
        };

        let triggers: Vec<&str> = if drilldown.triggers.is_empty() {
            vec![default_trigger.as_str()]
        } else {
            drilldown.triggers.iter().map(|t| t.as_str()).collect()
        };

        events.push(json!({
            "eventId": event_id,
            "triggers": triggers,
            "action": {
                "factoryId": factory_id,
                "name": drilldown.name,
                "config": config,
            },
        }));
    }

    Some(json!({ "events": events }))
}
