// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_tooltip::scheduler::DelayScheduler;
use understory_tooltip::timer::ManualClock;
use understory_tooltip::types::{FixedLayout, TooltipConfig, TriggerEvent};

fn layout() -> FixedLayout {
    FixedLayout {
        trigger: Rect::from_origin_size((200.0, 200.0), (24.0, 24.0)),
        viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        overlay: Size::new(120.0, 28.0),
    }
}

fn bench_hover_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler");
    let l = layout();

    // Pointer sweeping across a trigger: enter/leave pairs that never show.
    group.bench_function("brief_hovers", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let tip = DelayScheduler::new(TooltipConfig::default(), clock.clone());
                (clock, tip)
            },
            |(clock, mut tip)| {
                for _ in 0..256 {
                    black_box(tip.handle(TriggerEvent::HoverStart, &l));
                    let _ = clock.advance_ms(50);
                    black_box(tip.handle(TriggerEvent::HoverEnd, &l));
                }
            },
            BatchSize::SmallInput,
        );
    });

    // Full show/hide cycles through the timer.
    group.bench_function("show_hide_cycles", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let tip = DelayScheduler::new(TooltipConfig::default(), clock.clone());
                (clock, tip)
            },
            |(clock, mut tip)| {
                for _ in 0..256 {
                    tip.handle(TriggerEvent::HoverStart, &l);
                    for id in clock.advance_ms(500) {
                        black_box(tip.timer_fired(id, &l));
                    }
                    black_box(tip.handle(TriggerEvent::HoverEnd, &l));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_hover_churn);
criterion_main!(benches);
