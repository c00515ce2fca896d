// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated gesture layer driving a sheet.
//!
//! The sheet itself recognizes no gestures. This example plays that external
//! role: pointer deltas write the offset directly while a drag is in
//! progress, and on release the travel is compared against the sheet's
//! dismiss threshold to pick a transition. Frames are computed with
//! [`SheetSize::frame_in`] against a phone-sized viewport.
//!
//! Run:
//! - `cargo run -p overstory_examples --example sheet_drag`

use kurbo::Rect;
use overstory_sheet::{Sheet, SheetConfig, SheetSize};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

/// Commit a released drag. `travel` is the signed distance since the gesture
/// began; positive pulls the sheet down.
fn release(sheet: &mut Sheet, travel: f64) {
    // Span between the two resting positions; before measurement any travel
    // reads as a dismissal attempt, matching the escalation policy below.
    let span = match (sheet.collapsed_height(), sheet.expanded_height()) {
        (Some(collapsed), Some(expanded)) => expanded - collapsed,
        _ => VIEWPORT.height(),
    };
    let commit = sheet.dismiss_threshold() * span;
    println!("  release: travel={travel} commit=±{commit}");
    if travel > commit {
        if sheet.expanded() {
            sheet.collapse();
        } else {
            sheet.dismiss();
        }
    } else if travel < -commit {
        sheet.expand();
    } else {
        // Not far enough to commit: undo the in-progress drag.
        sheet.drag_by(-travel);
    }
}

fn drag(sheet: &mut Sheet, deltas: &[f64]) -> f64 {
    let mut travel = 0.0;
    for &delta in deltas {
        sheet.drag_by(delta);
        travel += delta;
        println!(
            "  drag {delta:+}: offset={} frame={:?}",
            sheet.offset(),
            sheet.size().frame_in(VIEWPORT)
        );
    }
    travel
}

fn main() {
    let mut sheet = Sheet::new(SheetConfig {
        collapsed_height: Some(120.0),
        on_expand: Some(Box::new(|| println!("  [callback] expanded"))),
        on_collapse: Some(Box::new(|| println!("  [callback] collapsed"))),
        on_dismiss: Some(Box::new(|| println!("  [callback] dismissed"))),
        ..Default::default()
    });
    sheet.set_expanded_height(600.0);

    println!("== Drag up past the threshold: commits to expand ==");
    let travel = drag(&mut sheet, &[-40.0, -40.0, -40.0]);
    release(&mut sheet, travel);
    // The host animates the offset back to zero after a commit; jump there.
    sheet.set_offset(0.0);
    assert_eq!(sheet.size(), SheetSize::FixedHeight(600.0));
    println!("  settled: frame={:?}", sheet.size().frame_in(VIEWPORT));

    println!("== Small downward drag: snaps back ==");
    let travel = drag(&mut sheet, &[18.0, 9.0]);
    release(&mut sheet, travel);
    assert_eq!(sheet.offset(), 0.0);
    println!("  settled: frame={:?}", sheet.size().frame_in(VIEWPORT));

    println!("== Long downward drag: commits to collapse ==");
    let travel = drag(&mut sheet, &[80.0, 80.0, 60.0]);
    release(&mut sheet, travel);
    sheet.set_offset(0.0);
    assert_eq!(sheet.size(), SheetSize::FixedHeight(120.0));
    println!("  settled: frame={:?}", sheet.size().frame_in(VIEWPORT));

    println!("== Collapse before measurement escalates to dismissal ==");
    // No collapsed mode and no measurement yet: the sheet reports Stretched
    // and counts as expanded, so a long downward drag asks for a collapse —
    // which, lacking a collapsed target, dismisses instead.
    let mut unmeasured = Sheet::new(SheetConfig {
        on_dismiss: Some(Box::new(|| println!("  [callback] dismissed"))),
        ..Default::default()
    });
    let travel = drag(&mut unmeasured, &[90.0]);
    release(&mut unmeasured, travel);
}
