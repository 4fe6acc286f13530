// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the tooltip: sides, visibility, trigger events, configuration, and notifications.
//!
//! ## Overview
//!
//! These types describe the tooltip protocol and its inputs/outputs.
//! They are referenced by the [`scheduler`](crate::scheduler) and the
//! [`placement`](crate::placement) resolver, and used by downstream toolkits.

use core::time::Duration;

use kurbo::{Rect, Size};

use crate::placement::PlacementResult;

/// One of the four cardinal placements of an overlay relative to its trigger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// To the right of the trigger.
    Right,
    /// Below the trigger.
    #[default]
    Bottom,
    /// To the left of the trigger.
    Left,
}

impl Side {
    /// All sides in clockwise order, starting from [`Side::Top`].
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The mirrored side: top↔bottom, left↔right.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The next side in clockwise order (top → right → bottom → left → top).
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }

    /// Candidate order used when resolving a placement with `self` preferred.
    ///
    /// The preferred side comes first, then its opposite, then the two
    /// remaining sides in clockwise order starting from the preferred side's
    /// clockwise neighbor.
    ///
    /// ```
    /// use understory_tooltip::types::Side;
    /// assert_eq!(
    ///     Side::Bottom.candidates(),
    ///     [Side::Bottom, Side::Top, Side::Left, Side::Right]
    /// );
    /// ```
    pub const fn candidates(self) -> [Self; 4] {
        let cw = self.clockwise();
        [self, self.opposite(), cw, cw.opposite()]
    }

    /// Whether the overlay sits above or below the trigger on this side.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Visibility of an overlay as tracked by the [`DelayScheduler`](crate::scheduler::DelayScheduler).
///
/// `PendingShow` holds exactly when a show timer is live.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Visibility {
    /// Not shown, nothing scheduled.
    #[default]
    Hidden,
    /// A hover started; the show timer is running.
    PendingShow,
    /// Shown.
    Visible,
}

/// Interaction facts reported by a trigger.
///
/// Toolkits translate their own pointer and focus events into these. Only the
/// boolean facts matter to the scheduler; pointer positions and event objects
/// stay with the toolkit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TriggerEvent {
    /// The pointer entered the trigger.
    HoverStart,
    /// The pointer left the trigger.
    HoverEnd,
    /// The trigger gained keyboard focus.
    FocusGained,
    /// The trigger lost keyboard focus.
    Blur,
}

/// Instruction for the render layer.
///
/// Returned by the [`DelayScheduler`](crate::scheduler::DelayScheduler) whenever
/// what is on screen needs to change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Notification {
    /// Mount the overlay at the given placement.
    Show(PlacementResult),
    /// Move an already visible overlay to a new placement.
    Reposition(PlacementResult),
    /// Unmount or hide the overlay.
    Hide,
}

/// Tooltip options.
///
/// Every value is accepted as-is. A zero `delay` shows on hover without
/// scheduling a timer; a negative `offset` makes the overlay overlap its trigger.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Sustained hover required before the overlay shows (default 500 ms).
    pub delay: Duration,
    /// Gap between trigger and overlay (default 8).
    pub offset: f64,
    /// Side tried first when placing the overlay (default [`Side::Bottom`]).
    pub preferred_side: Side,
    /// When set, the overlay never shows.
    pub disabled: bool,
}

impl TooltipConfig {
    /// Default show delay.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
    /// Default gap between trigger and overlay.
    pub const DEFAULT_OFFSET: f64 = 8.0;

    /// Set the show delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn with_delay_ms(self, ms: u64) -> Self {
        self.with_delay(Duration::from_millis(ms))
    }

    /// Set the gap between trigger and overlay.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the side tried first when placing the overlay.
    #[must_use]
    pub fn with_preferred_side(mut self, side: Side) -> Self {
        self.preferred_side = side;
        self
    }

    /// Enable or disable the tooltip.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            offset: Self::DEFAULT_OFFSET,
            preferred_side: Side::Bottom,
            disabled: false,
        }
    }
}

/// Synchronous layout queries made when an overlay shows or repositions.
///
/// All rectangles are in viewport coordinates. Results may be stale if queried
/// off the toolkit's layout cycle; callers re-query via
/// [`DelayScheduler::reposition`](crate::scheduler::DelayScheduler::reposition)
/// after layout changes.
pub trait LayoutSource {
    /// Current bounds of the trigger.
    fn trigger_bounds(&self) -> Rect;
    /// Current bounds of the viewport.
    fn viewport(&self) -> Rect;
    /// Measured size of the overlay.
    fn overlay_size(&self) -> Size;
}

/// A [`LayoutSource`] backed by plain values.
///
/// Handy for tests and for hosts that already hold the measurements.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedLayout {
    /// Trigger bounds.
    pub trigger: Rect,
    /// Viewport bounds.
    pub viewport: Rect,
    /// Overlay size.
    pub overlay: Size,
}

impl LayoutSource for FixedLayout {
    #[inline]
    fn trigger_bounds(&self) -> Rect {
        self.trigger
    }

    #[inline]
    fn viewport(&self) -> Rect {
        self.viewport
    }

    #[inline]
    fn overlay_size(&self) -> Size {
        self.overlay
    }
}
