// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet basics.
//!
//! This minimal example walks a sheet through its lifecycle: collapsed by
//! configuration, measured by the layout layer, expanded and collapsed by
//! explicit transitions, with the derived size printed at every step.
//!
//! Run:
//! - `cargo run -p overstory_examples --example sheet_basics`

use overstory_sheet::{Sheet, SheetConfig};

fn report(label: &str, sheet: &Sheet) {
    println!(
        "  {label}: expanded={} offset={} size={:?}",
        sheet.expanded(),
        sheet.offset(),
        sheet.size()
    );
}

fn main() {
    let mut sheet = Sheet::new(SheetConfig {
        collapsed_height: Some(120.0),
        on_expand: Some(Box::new(|| println!("  [callback] expanded"))),
        on_collapse: Some(Box::new(|| println!("  [callback] collapsed"))),
        on_dismiss: Some(Box::new(|| println!("  [callback] dismissed"))),
        ..Default::default()
    });

    println!("== Before measurement ==");
    report("initial", &sheet);

    // An expand before the first measurement is dropped silently.
    sheet.expand();
    report("after dropped expand", &sheet);

    println!("== Measured at 480.0 ==");
    sheet.set_expanded_height(480.0);
    report("measured", &sheet);

    println!("== Expand ==");
    sheet.expand();
    // The offset absorbed the 360.0 height jump; the host would now animate
    // it back to zero to reveal the full content.
    report("just expanded", &sheet);
    sheet.set_offset(0.0);
    report("settled", &sheet);

    println!("== Collapse ==");
    sheet.collapse();
    report("just collapsed", &sheet);
    sheet.set_offset(0.0);
    report("settled", &sheet);

    println!("== Dismiss ==");
    sheet.dismiss();
    report("dismissed (host tears down)", &sheet);
}
