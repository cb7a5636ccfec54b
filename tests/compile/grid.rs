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

//! # Dashi Grid Layout Tests
//!
//! Placement of panels on the 48-column grid: explicit positions, the
//! auto-layout flow, row wrapping, and the in-bounds property over
//! arbitrary panel sizes.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test compile_grid
//! ```

use dashix::compile::grid::{layout, DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH};
use dashix::config::{
    DashiGridConfig, DashiMarkdownPanel, DashiPanelConfig, DashiPanelKind,
};
use dashix::validate::GRID_COLUMNS;
use proptest::prelude::*;

fn panel(grid: Option<DashiGridConfig>) -> DashiPanelConfig {
    DashiPanelConfig {
        id: None,
        title: None,
        hide_title: false,
        description: String::new(),
        grid,
        drilldowns: Vec::new(),
        kind: DashiPanelKind::Markdown(DashiMarkdownPanel {
            content: "x".to_string(),
            font_size: None,
            open_links_in_new_tab: false,
        }),
    }
}

fn auto(w: Option<u32>, h: Option<u32>) -> DashiPanelConfig {
    panel(Some(DashiGridConfig {
        x: None,
        y: None,
        w,
        h,
    }))
}

/// Tests that a panel without grid config gets the default size at the
/// origin.
#[test]
fn test_default_placement() {
    let rects = layout(&[panel(None)]);
    assert_eq!(rects, vec![(0, 0, DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT)]);
}

/// Tests that two default-width panels share the first row and the
/// third wraps below it.
#[test]
fn test_row_wrap() {
    let rects = layout(&[panel(None), panel(None), panel(None)]);
    assert_eq!(rects[0], (0, 0, 24, 15));
    assert_eq!(rects[1], (24, 0, 24, 15));
    assert_eq!(rects[2], (0, 15, 24, 15));
}

/// Tests that an explicitly positioned panel keeps its rectangle.
#[test]
fn test_explicit_position_kept() {
    let explicit = panel(Some(DashiGridConfig {
        x: Some(12),
        y: Some(30),
        w: Some(10),
        h: Some(8),
    }));
    let rects = layout(&[explicit]);
    assert_eq!(rects, vec![(12, 30, 10, 8)]);
}

/// Tests that auto-placed panels start below the lowest explicit panel,
/// regardless of declaration order.
#[test]
fn test_auto_flows_below_explicit() {
    let explicit = panel(Some(DashiGridConfig {
        x: Some(0),
        y: Some(10),
        w: Some(48),
        h: Some(5),
    }));
    let rects = layout(&[auto(None, None), explicit]);
    // Explicit panel ends at y = 15; the auto panel starts there.
    assert_eq!(rects[0], (0, 15, 24, 15));
    assert_eq!(rects[1], (0, 10, 48, 5));
}

/// Tests that a new row starts below the tallest panel of the finished
/// row.
#[test]
fn test_row_height_is_max() {
    let rects = layout(&[auto(Some(24), Some(20)), auto(Some(24), Some(5)), auto(None, None)]);
    assert_eq!(rects[0], (0, 0, 24, 20));
    assert_eq!(rects[1], (24, 0, 24, 5));
    assert_eq!(rects[2], (0, 20, 24, 15));
}

/// Tests that an explicit position near the top of the `u32` range does
/// not overflow the auto-layout cursor.
#[test]
fn test_huge_explicit_y_saturates() {
    let explicit = panel(Some(DashiGridConfig {
        x: Some(0),
        y: Some(u32::MAX - 5),
        w: Some(10),
        h: Some(10),
    }));
    let rects = layout(&[explicit, auto(None, None)]);
    assert_eq!(rects[0], (0, u32::MAX - 5, 10, 10));
    assert_eq!(rects[1], (0, u32::MAX, 24, 15));
}

/// Tests that a full-width panel occupies a row of its own.
#[test]
fn test_full_width_panel() {
    let rects = layout(&[auto(Some(48), None), auto(None, None)]);
    assert_eq!(rects[0], (0, 0, 48, 15));
    assert_eq!(rects[1], (0, 15, 24, 15));
}

proptest! {
    /// Auto-layout keeps every panel inside the grid and never overlaps
    /// two panels, for arbitrary widths and heights.
    #[test]
    fn prop_auto_layout_in_bounds(sizes in prop::collection::vec((1u32..=48, 1u32..=20), 1..12)) {
        let panels: Vec<DashiPanelConfig> = sizes
            .iter()
            .map(|(w, h)| auto(Some(*w), Some(*h)))
            .collect();
        let rects = layout(&panels);

        for (x, _y, w, _h) in &rects {
            prop_assert!(x + w <= GRID_COLUMNS);
        }

        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let disjoint = a.0 + a.2 <= b.0
                    || b.0 + b.2 <= a.0
                    || a.1 + a.3 <= b.1
                    || b.1 + b.3 <= a.1;
                prop_assert!(disjoint, "{:?} overlaps {:?}", a, b);
            }
        }
    }
}
