// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delay scheduler: a per-trigger state machine for debounced tooltip visibility.
//!
//! ## States
//!
//! [`Visibility::Hidden`] → [`Visibility::PendingShow`] → [`Visibility::Visible`].
//!
//! - Hover start while hidden schedules one show timer of `delay`. A zero delay
//!   shows at once.
//! - Focus gained while hidden or pending shows at once. Keyboard users get
//!   immediate feedback; a pending hover timer is cancelled.
//! - The timer firing while pending shows.
//! - Hover end while not focused, or blur while not hovered, hides. A pending
//!   show is cancelled without any notification, so brief hovers never flash.
//!   A visible overlay hides immediately.
//! - Repeated entry events while pending or visible do nothing.
//! - [`DelayScheduler::unmount`] (or dropping the scheduler) cancels the timer
//!   and ends the trigger's life; later calls do nothing.
//!
//! At most one timer is live per scheduler, and every exit from
//! `PendingShow` cancels it before anything else happens. A timer handle that
//! is not the live one is ignored by [`DelayScheduler::timer_fired`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_tooltip::scheduler::DelayScheduler;
//! use understory_tooltip::timer::ManualClock;
//! use understory_tooltip::types::{FixedLayout, Notification, TooltipConfig, TriggerEvent, Visibility};
//!
//! let layout = FixedLayout {
//!     trigger: Rect::new(10.0, 10.0, 30.0, 30.0),
//!     viewport: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     overlay: Size::new(30.0, 10.0),
//! };
//! let clock = ManualClock::new();
//! let mut tip = DelayScheduler::new(TooltipConfig::default(), clock.clone());
//!
//! assert_eq!(tip.handle(TriggerEvent::HoverStart, &layout), None);
//! assert_eq!(tip.visibility(), Visibility::PendingShow);
//!
//! for id in clock.advance_ms(500) {
//!     if let Some(Notification::Show(placed)) = tip.timer_fired(id, &layout) {
//!         assert_eq!(placed.origin.y, 38.0);
//!     }
//! }
//! assert_eq!(tip.visibility(), Visibility::Visible);
//!
//! assert_eq!(tip.handle(TriggerEvent::HoverEnd, &layout), Some(Notification::Hide));
//! ```

use crate::placement::{PlacementRequest, PlacementResult, resolve};
use crate::timer::Timer;
use crate::types::{LayoutSource, Notification, TooltipConfig, TriggerEvent, Visibility};

/// Debounced visibility for one trigger/overlay pair.
///
/// ## Usage
///
/// - Construct one per trigger when it mounts, with the toolkit's [`Timer`].
/// - Feed interaction events with [`handle`](Self::handle), or
///   [`handle_tick`](Self::handle_tick) when several arrive in the same tick.
/// - Forward due timer handles to [`timer_fired`](Self::timer_fired).
/// - Call [`reposition`](Self::reposition) after layout changes while visible.
/// - Call [`unmount`](Self::unmount) when the trigger goes away.
///
/// Every call returns an optional [`Notification`] for the render layer. The
/// scheduler updates its own state before returning, so whatever the render
/// layer does with the notification cannot leave it inconsistent.
pub struct DelayScheduler<T: Timer> {
    config: TooltipConfig,
    timer: T,
    hovered: bool,
    focused: bool,
    pending: Option<T::Handle>,
    visibility: Visibility,
    placement: Option<PlacementResult>,
    unmounted: bool,
}

impl<T: Timer> core::fmt::Debug for DelayScheduler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DelayScheduler")
            .field("config", &self.config)
            .field("hovered", &self.hovered)
            .field("focused", &self.focused)
            .field("pending", &self.pending)
            .field("visibility", &self.visibility)
            .field("placement", &self.placement)
            .field("unmounted", &self.unmounted)
            .finish_non_exhaustive()
    }
}

impl<T: Timer> DelayScheduler<T> {
    /// Create a hidden scheduler for a freshly mounted trigger.
    pub fn new(config: TooltipConfig, timer: T) -> Self {
        Self {
            config,
            timer,
            hovered: false,
            focused: false,
            pending: None,
            visibility: Visibility::Hidden,
            placement: None,
            unmounted: false,
        }
    }

    /// Create a scheduler with the default [`TooltipConfig`].
    pub fn with_timer(timer: T) -> Self {
        Self::new(TooltipConfig::default(), timer)
    }

    /// Current options.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// The timer this scheduler schedules on.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the pointer is over the trigger.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the trigger has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether [`unmount`](Self::unmount) has been called.
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Handle of the live show timer, if any.
    pub fn pending(&self) -> Option<T::Handle> {
        self.pending
    }

    /// Placement of the visible overlay.
    pub fn placement(&self) -> Option<PlacementResult> {
        self.placement
    }

    /// Process one interaction event.
    pub fn handle<L: LayoutSource + ?Sized>(
        &mut self,
        event: TriggerEvent,
        layout: &L,
    ) -> Option<Notification> {
        if self.unmounted {
            return None;
        }
        self.record(event);
        match event {
            TriggerEvent::HoverStart => self.enter(false, layout),
            TriggerEvent::FocusGained => self.enter(true, layout),
            TriggerEvent::HoverEnd | TriggerEvent::Blur => self.leave_if_idle(),
        }
    }

    /// Process events that arrived in the same tick.
    ///
    /// Hover and focus facts are folded in order, but a hide only happens if
    /// neither is still true at the end of the tick. A leave followed by a
    /// re-entry therefore keeps a visible overlay up (or a pending show
    /// pending) instead of hiding and showing again.
    pub fn handle_tick<L: LayoutSource + ?Sized>(
        &mut self,
        events: &[TriggerEvent],
        layout: &L,
    ) -> Option<Notification> {
        if self.unmounted {
            return None;
        }
        let mut entered = false;
        let mut focus_entered = false;
        for &event in events {
            self.record(event);
            match event {
                TriggerEvent::HoverStart => entered = true,
                TriggerEvent::FocusGained => {
                    entered = true;
                    focus_entered = true;
                }
                TriggerEvent::HoverEnd | TriggerEvent::Blur => {}
            }
        }
        if !self.is_engaged() {
            return self.leave_if_idle();
        }
        if entered {
            self.enter(focus_entered, layout)
        } else {
            None
        }
    }

    /// Process a due timer.
    ///
    /// Handles other than the live one (cancelled, already fired, or owned by
    /// another trigger sharing the timer) are ignored.
    pub fn timer_fired<L: LayoutSource + ?Sized>(
        &mut self,
        handle: T::Handle,
        layout: &L,
    ) -> Option<Notification> {
        if self.unmounted || self.pending != Some(handle) {
            return None;
        }
        self.pending = None;
        Some(self.show(layout))
    }

    /// Re-resolve the placement of a visible overlay.
    ///
    /// Returns [`Notification::Reposition`] only when the placement changed.
    pub fn reposition<L: LayoutSource + ?Sized>(&mut self, layout: &L) -> Option<Notification> {
        if self.unmounted || self.visibility != Visibility::Visible {
            return None;
        }
        let placed = resolve(&self.request(layout));
        if self.placement == Some(placed) {
            return None;
        }
        self.placement = Some(placed);
        Some(Notification::Reposition(placed))
    }

    /// Enable or disable the tooltip.
    ///
    /// Disabling cancels a pending show and hides a visible overlay.
    /// Re-enabling does not show anything until the next entry event.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<Notification> {
        self.config.disabled = disabled;
        if disabled && !self.unmounted {
            self.hide()
        } else {
            None
        }
    }

    /// Tear down the trigger.
    ///
    /// Cancels any pending show and returns [`Notification::Hide`] if the
    /// overlay was visible. Every later call on this scheduler is a no-op.
    pub fn unmount(&mut self) -> Option<Notification> {
        if self.unmounted {
            return None;
        }
        let out = self.hide();
        self.unmounted = true;
        self.hovered = false;
        self.focused = false;
        out
    }

    fn record(&mut self, event: TriggerEvent) {
        match event {
            TriggerEvent::HoverStart => self.hovered = true,
            TriggerEvent::HoverEnd => self.hovered = false,
            TriggerEvent::FocusGained => self.focused = true,
            TriggerEvent::Blur => self.focused = false,
        }
    }

    fn is_engaged(&self) -> bool {
        self.hovered || self.focused
    }

    fn enter<L: LayoutSource + ?Sized>(
        &mut self,
        immediate: bool,
        layout: &L,
    ) -> Option<Notification> {
        if self.config.disabled {
            return None;
        }
        match self.visibility {
            Visibility::Visible => None,
            Visibility::PendingShow if !immediate => None,
            Visibility::PendingShow => {
                self.cancel_pending();
                Some(self.show(layout))
            }
            Visibility::Hidden if immediate || self.config.delay.is_zero() => {
                Some(self.show(layout))
            }
            Visibility::Hidden => {
                self.start_timer();
                None
            }
        }
    }

    fn leave_if_idle(&mut self) -> Option<Notification> {
        if self.is_engaged() {
            return None;
        }
        self.hide()
    }

    fn start_timer(&mut self) {
        debug_assert!(
            self.pending.is_none(),
            "a show timer is already pending for this trigger"
        );
        let handle = self.timer.schedule(self.config.delay);
        self.pending = Some(handle);
        self.set_visibility(Visibility::PendingShow);
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }

    fn show<L: LayoutSource + ?Sized>(&mut self, layout: &L) -> Notification {
        let placed = resolve(&self.request(layout));
        self.placement = Some(placed);
        self.set_visibility(Visibility::Visible);
        Notification::Show(placed)
    }

    fn hide(&mut self) -> Option<Notification> {
        self.cancel_pending();
        let was = self.visibility;
        self.placement = None;
        self.set_visibility(Visibility::Hidden);
        (was == Visibility::Visible).then_some(Notification::Hide)
    }

    fn request<L: LayoutSource + ?Sized>(&self, layout: &L) -> PlacementRequest {
        PlacementRequest {
            trigger: layout.trigger_bounds(),
            preferred: self.config.preferred_side,
            offset: self.config.offset,
            viewport: layout.viewport(),
            overlay: layout.overlay_size(),
        }
    }

    fn set_visibility(&mut self, next: Visibility) {
        #[cfg(feature = "tracing")]
        if next != self.visibility {
            tracing::trace!(from = ?self.visibility, to = ?next, "tooltip visibility");
        }
        self.visibility = next;
    }
}

impl<T: Timer> Drop for DelayScheduler<T> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
