// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a deterministic, `no_std` core for tooltips and other hover overlays.
//!
//! ## Overview
//!
//! This crate decides *when* an overlay is visible and *where* it goes.
//! It does not render, measure, or read a clock.
//! Instead, a toolkit feeds it [`TriggerEvent`](crate::types::TriggerEvent)s, forwards due timers, and answers layout queries; it emits [`Notification`](crate::types::Notification)s the render layer acts on.
//!
//! ## Pieces
//!
//! - [`DelayScheduler`](crate::scheduler::DelayScheduler): one per trigger.
//!   A `Hidden` → `PendingShow` → `Visible` state machine. Hover shows after a
//!   debounce delay, keyboard focus shows at once, and leaving hides at once.
//! - [`resolve`](crate::placement::resolve): a pure function placing the overlay
//!   on one of four [`Side`](crate::types::Side)s, falling back to other sides
//!   when the preferred one would clip, and to the most visible side when none fit.
//! - [`Timer`](crate::timer::Timer): the injected timer capability.
//!   [`ManualClock`](crate::timer::ManualClock) implements it for tests and
//!   hosts that drive time themselves.
//! - [`LayoutSource`](crate::types::LayoutSource): the injected layout queries
//!   (trigger bounds, viewport, overlay size).
//!
//! ## Workflow
//!
//! 1) Mount — create a [`DelayScheduler`](crate::scheduler::DelayScheduler) with a
//!    [`TooltipConfig`](crate::types::TooltipConfig) and a timer.
//! 2) Events — translate pointer enter/leave and focus/blur into
//!    [`TriggerEvent`](crate::types::TriggerEvent)s and pass them to
//!    [`handle`](crate::scheduler::DelayScheduler::handle).
//! 3) Time — when the timer reports a due handle, pass it to
//!    [`timer_fired`](crate::scheduler::DelayScheduler::timer_fired).
//! 4) Render — on `Show(placement)` mount the overlay at `placement.origin`; on
//!    `Reposition` move it; on `Hide` remove it.
//! 5) Unmount — call [`unmount`](crate::scheduler::DelayScheduler::unmount) or drop
//!    the scheduler; a pending timer is cancelled either way.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_tooltip::scheduler::DelayScheduler;
//! use understory_tooltip::timer::ManualClock;
//! use understory_tooltip::types::{FixedLayout, Notification, Side, TooltipConfig, TriggerEvent};
//!
//! let layout = FixedLayout {
//!     trigger: Rect::from_origin_size((10.0, 10.0), (20.0, 20.0)),
//!     viewport: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     overlay: Size::new(30.0, 10.0),
//! };
//! let clock = ManualClock::new();
//! let config = TooltipConfig::default().with_offset(5.0);
//! let mut tip = DelayScheduler::new(config, clock.clone());
//!
//! // Keyboard focus shows without waiting for the delay.
//! match tip.handle(TriggerEvent::FocusGained, &layout) {
//!     Some(Notification::Show(placed)) => {
//!         assert_eq!(placed.side, Side::Bottom);
//!         assert_eq!(placed.origin, Point::new(5.0, 35.0));
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(tip.handle(TriggerEvent::Blur, &layout), Some(Notification::Hide));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `tracing`: trace visibility transitions and placement fallbacks.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod placement;
pub mod scheduler;
pub mod timer;
pub mod types;
