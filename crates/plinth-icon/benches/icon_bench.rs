// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for icon rasterization in the plinth-icon crate.
// Benchmarks adaptive-icon compositing at the stock 108x108 layer size.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};

use plinth_icon::{rasterize, IconSource};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark compositing a dual-layer adaptive icon onto a transparent
/// canvas. Both layers already match the intrinsic size, so this measures
/// the pure overlay path without the resize fallback.
fn bench_adaptive_composite(c: &mut Criterion) {
    let background = RgbaImage::from_pixel(108, 108, Rgba([240, 240, 240, 255]));
    let mut foreground = RgbaImage::from_pixel(108, 108, Rgba([0, 0, 0, 0]));
    for y in 30..78 {
        for x in 30..78 {
            foreground.put_pixel(x, y, Rgba([30, 90, 200, 255]));
        }
    }

    c.bench_function("adaptive_composite (108x108)", |b| {
        b.iter(|| {
            let source = IconSource::Adaptive {
                foreground: black_box(foreground.clone()),
                background: black_box(background.clone()),
                width: 108,
                height: 108,
            };
            black_box(rasterize(source).unwrap());
        });
    });
}

criterion_group!(benches, bench_adaptive_composite);
criterion_main!(benches);
