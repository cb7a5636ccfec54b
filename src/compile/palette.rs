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

//! Palette output state shared by the chart compilers.

use serde_json::{json, Value};

use crate::config::DashiColorConfig;

/// Converts a palette selection to the visualization palette state: a
/// named registry palette, or a `custom` palette with explicit color
/// stops.
pub fn compile(config: &DashiColorConfig) -> Value {
    match config {
        DashiColorConfig::Palette(name) => json!({
            "type": "palette",
            "name": name,
        }),
        DashiColorConfig::Custom { custom } => {
            let stops: Vec<Value> = custom
                .iter()
                .map(|stop| json!({ "color": stop.color, "stop": stop.stop }))
                .collect();
            json!({
                "type": "palette",
                "name": "custom",
                "params": {
                    "name": "custom",
                    "colorStops": stops,
                    "steps": custom.len(),
                    "reverse": false,
                    "rangeType": "number",
                    "continuity": "above",
                },
            })
        }
    }
}
