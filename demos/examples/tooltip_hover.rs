// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced hover and immediate focus.
//!
//! This example drives a `DelayScheduler` with a manual clock: a brief hover
//! that never shows, a sustained hover that shows at the delay, and keyboard
//! focus that shows at once. Transitions are traced; set `RUST_LOG=trace` to
//! see them.
//!
//! Run:
//! - `cargo run -p understory_tooltip_demos --example tooltip_hover`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_tooltip::scheduler::DelayScheduler;
use understory_tooltip::timer::ManualClock;
use understory_tooltip::types::{
    FixedLayout, Notification, TooltipConfig, TriggerEvent, Visibility,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn advance(
    clock: &ManualClock,
    tip: &mut DelayScheduler<ManualClock>,
    layout: &FixedLayout,
    ms: u64,
) -> Option<Notification> {
    let mut out = None;
    for id in clock.advance_ms(ms) {
        if let Some(n) = tip.timer_fired(id, layout) {
            out = Some(n);
        }
    }
    out
}

fn main() {
    init_tracing();

    let layout = FixedLayout {
        trigger: Rect::from_origin_size((120.0, 40.0), (24.0, 24.0)),
        viewport: Rect::new(0.0, 0.0, 320.0, 200.0),
        overlay: Size::new(96.0, 28.0),
    };
    let clock = ManualClock::new();
    let mut tip = DelayScheduler::new(TooltipConfig::default(), clock.clone());

    // Brief hover: leaves before the delay, nothing is shown.
    println!("== Brief hover ==");
    println!("  t={:?} hover start -> {:?}", clock.now(), tip.handle(TriggerEvent::HoverStart, &layout));
    println!("  t+300ms -> {:?}", advance(&clock, &mut tip, &layout, 300));
    println!("  hover end -> {:?}", tip.handle(TriggerEvent::HoverEnd, &layout));
    assert_eq!(tip.visibility(), Visibility::Hidden);

    // Sustained hover: shows exactly at the delay.
    println!("== Sustained hover ==");
    tip.handle(TriggerEvent::HoverStart, &layout);
    assert_eq!(advance(&clock, &mut tip, &layout, 499), None);
    let shown = advance(&clock, &mut tip, &layout, 1);
    println!("  t={:?} -> {:?}", clock.now(), shown);
    assert!(matches!(shown, Some(Notification::Show(_))));
    println!("  hover end -> {:?}", tip.handle(TriggerEvent::HoverEnd, &layout));

    // Keyboard focus: no delay.
    println!("== Focus ==");
    let shown = tip.handle(TriggerEvent::FocusGained, &layout);
    println!("  focus -> {:?}", shown);
    assert!(matches!(shown, Some(Notification::Show(_))));
    println!("  unmount -> {:?}", tip.unmount());
    assert_eq!(clock.pending_count(), 0);
}
