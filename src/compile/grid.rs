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

//! # Grid Layout Module
//!
//! Positions panels on the 48-column dashboard grid. Panels with an
//! explicit position keep it; the rest flow left-to-right, top-to-bottom,
//! starting below the lowest explicitly positioned panel. A row wraps when
//! the next panel would cross the right edge, and the new row starts below
//! the tallest panel of the finished row.

use crate::config::DashiPanelConfig;
use crate::validate::GRID_COLUMNS;

/// Default panel width in grid columns (half the grid).
pub const DEFAULT_PANEL_WIDTH: u32 = 24;

/// Default panel height in grid rows.
pub const DEFAULT_PANEL_HEIGHT: u32 = 15;

/// A resolved panel rectangle: `(x, y, w, h)`.
pub type DashiRect = (u32, u32, u32, u32);

/// Resolves one rectangle per panel, in panel order.
///
/// Assumes validated input: explicit positions are inside the grid and
/// carry both coordinates.
pub fn layout(panels: &[DashiPanelConfig]) -> Vec<DashiRect> {
    // Auto-placed panels start below everything positioned explicitly.
    let mut cursor_y = panels
        .iter()
        .filter_map(|panel| {
            let grid = panel.grid.as_ref()?;
            let y = grid.y?;
            // Saturate: y and h are unbounded in the config model.
            Some(y.saturating_add(grid.h.unwrap_or(DEFAULT_PANEL_HEIGHT)))
        })
        .max()
        .unwrap_or(0);

    let mut cursor_x = 0u32;
    let mut row_height = 0u32;
    let mut rects = Vec::with_capacity(panels.len());

    for panel in panels {
        let grid = panel.grid.clone().unwrap_or_default();
        let w = grid.w.unwrap_or(DEFAULT_PANEL_WIDTH).min(GRID_COLUMNS);
        let h = grid.h.unwrap_or(DEFAULT_PANEL_HEIGHT);

        if let (Some(x), Some(y)) = (grid.x, grid.y) {
            rects.push((x, y, w, h));
            continue;
        }

        if cursor_x + w > GRID_COLUMNS {
            cursor_x = 0;
            cursor_y = cursor_y.saturating_add(row_height);
            row_height = 0;
        }

        rects.push((cursor_x, cursor_y, w, h));
        cursor_x += w;
        row_height = row_height.max(h);
    }

    rects
}
