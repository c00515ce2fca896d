// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use overstory_reactive::{Atom, Memo, stamp};
use overstory_sheet::{Sheet, SheetConfig};

fn measured_sheet() -> Sheet {
    let mut sheet = Sheet::new(SheetConfig {
        collapsed_height: Some(120.0),
        ..Default::default()
    });
    sheet.set_expanded_height(480.0);
    sheet
}

fn bench_sheet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_size");

    // Steady-state render loop: nothing changed since the last frame, every
    // read is a memo hit.
    group.bench_function("cached", |b| {
        let sheet = measured_sheet();
        let _ = sheet.size();
        b.iter(|| black_box(sheet.size()));
    });

    // Active drag: the offset changes before every read, so every read
    // recomputes.
    group.bench_function("invalidated", |b| {
        let mut sheet = measured_sheet();
        let mut offset = 0.0;
        b.iter(|| {
            offset += 1.0;
            sheet.set_offset(offset);
            black_box(sheet.size())
        });
    });

    group.finish();
}

fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo");

    group.bench_function("hit", |b| {
        let a = Atom::new(1.0_f64);
        let memo: Memo<f64> = Memo::new();
        let key = stamp([a.version()]);
        let _ = memo.read(key, || *a.get() * 2.0);
        b.iter(|| black_box(memo.read(key, || *a.get() * 2.0)));
    });

    group.bench_function("miss", |b| {
        let mut a = Atom::new(1.0_f64);
        let memo: Memo<f64> = Memo::new();
        b.iter(|| {
            a.update(|v| *v += 1.0);
            let key = stamp([a.version()]);
            black_box(memo.read(key, || *a.get() * 2.0))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sheet_size, bench_memo);
criterion_main!(benches);
