// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tooltip::placement::{PlacementRequest, resolve};
use understory_tooltip::types::Side;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Triggers scattered over a 1920x1080 viewport, so a share of them sit near
/// an edge and exercise the fallback path.
fn gen_requests(count: usize, overlay: Size) -> Vec<PlacementRequest> {
    let viewport = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let x = rng.next_f64() * (viewport.width() - 32.0);
        let y = rng.next_f64() * (viewport.height() - 32.0);
        let trigger = Rect::from_origin_size((x, y), (32.0, 32.0));
        out.push(
            PlacementRequest::new(trigger, viewport, overlay).with_preferred(Side::ALL[i % 4]),
        );
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for (name, overlay) in [
        ("small_overlay", Size::new(120.0, 28.0)),
        ("large_overlay", Size::new(640.0, 480.0)),
    ] {
        let reqs = gen_requests(4096, overlay);
        group.throughput(Throughput::Elements(reqs.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                for req in &reqs {
                    black_box(resolve(black_box(req)));
                }
            });
        });
    }
    group.finish();
}

fn bench_resolve_no_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_no_fit");
    // Overlay larger than the viewport: every candidate is scored by area.
    let req = PlacementRequest::new(
        Rect::from_origin_size((40.0, 40.0), (20.0, 20.0)),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Size::new(150.0, 150.0),
    );
    group.bench_function("oversized", |b| b.iter(|| black_box(resolve(black_box(&req)))));
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_resolve_no_fit);
criterion_main!(benches);
