// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolver: pick a side and origin that keep an overlay inside the viewport.
//!
//! ## Algorithm
//!
//! 1. Walk the candidate sides from [`Side::candidates`]: preferred, opposite,
//!    then the remaining two clockwise from the preferred side's neighbor.
//! 2. For each side, place the overlay `offset` away from the trigger edge,
//!    centered on the trigger along the other axis, then clamp along that
//!    other axis so it does not cross the viewport edges. The main axis is
//!    never clamped, so the overlay does not slide over its trigger.
//! 3. The first candidate that lies fully inside the viewport wins.
//! 4. Otherwise the candidate with the largest visible area wins; ties go to
//!    the earlier candidate.
//!
//! [`resolve`] is a pure function of its [`PlacementRequest`]. It never fails.
//! Float inputs are assumed to be finite (no NaNs).
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_tooltip::placement::{resolve, PlacementRequest};
//! use understory_tooltip::types::Side;
//!
//! let req = PlacementRequest::new(
//!     Rect::from_origin_size((10.0, 10.0), (20.0, 20.0)),
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Size::new(30.0, 10.0),
//! )
//! .with_offset(5.0);
//!
//! let placed = resolve(&req);
//! assert_eq!(placed.side, Side::Bottom);
//! assert_eq!(placed.origin, Point::new(5.0, 35.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::types::{Side, TooltipConfig};

/// Inputs to [`resolve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Trigger bounds in viewport coordinates.
    pub trigger: Rect,
    /// Side tried first.
    pub preferred: Side,
    /// Gap between the trigger edge and the overlay.
    pub offset: f64,
    /// Viewport bounds.
    pub viewport: Rect,
    /// Measured overlay size.
    pub overlay: Size,
}

impl PlacementRequest {
    /// Build a request with the default side and offset.
    pub fn new(trigger: Rect, viewport: Rect, overlay: Size) -> Self {
        Self {
            trigger,
            preferred: Side::default(),
            offset: TooltipConfig::DEFAULT_OFFSET,
            viewport,
            overlay,
        }
    }

    /// Set the preferred side.
    #[must_use]
    pub fn with_preferred(mut self, side: Side) -> Self {
        self.preferred = side;
        self
    }

    /// Set the gap between trigger and overlay.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

/// Output of [`resolve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Side the overlay was placed on; may differ from the preferred side.
    pub side: Side,
    /// Top-left corner of the overlay.
    pub origin: Point,
    /// Overlay size the placement was computed for.
    pub size: Size,
    /// Whether the overlay lies fully inside the viewport.
    pub fits: bool,
}

impl PlacementResult {
    /// The overlay rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Resolve the side and origin for an overlay.
///
/// See the [module docs](self) for the algorithm.
pub fn resolve(request: &PlacementRequest) -> PlacementResult {
    let viewport = request.viewport;
    let candidates = request.preferred.candidates();

    let mut best_side = request.preferred;
    let mut best_rect = Rect::ZERO;
    let mut best_area = f64::NEG_INFINITY;

    for side in candidates {
        let rect = candidate_rect(request, side);
        if contains(viewport, rect) {
            return PlacementResult {
                side,
                origin: rect.origin(),
                size: request.overlay,
                fits: true,
            };
        }
        // Strict comparison keeps the earlier candidate on ties.
        let area = visible_area(viewport, rect);
        if area > best_area {
            best_side = side;
            best_rect = rect;
            best_area = area;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        preferred = ?request.preferred,
        side = ?best_side,
        visible_area = best_area,
        "no side fits the viewport; using the most visible one"
    );

    PlacementResult {
        side: best_side,
        origin: best_rect.origin(),
        size: request.overlay,
        fits: false,
    }
}

/// The overlay rectangle for `side`, before any containment check.
///
/// Useful for previewing a forced side. [`resolve`] evaluates this for every
/// candidate.
pub fn candidate_rect(request: &PlacementRequest, side: Side) -> Rect {
    let PlacementRequest {
        trigger,
        offset,
        viewport,
        overlay,
        ..
    } = *request;
    let center = trigger.center();

    let origin = if side.is_vertical() {
        let x = clamp_span(
            center.x - overlay.width / 2.0,
            overlay.width,
            viewport.x0,
            viewport.x1,
        );
        let y = match side {
            Side::Top => trigger.y0 - offset - overlay.height,
            _ => trigger.y1 + offset,
        };
        Point::new(x, y)
    } else {
        let y = clamp_span(
            center.y - overlay.height / 2.0,
            overlay.height,
            viewport.y0,
            viewport.y1,
        );
        let x = match side {
            Side::Left => trigger.x0 - offset - overlay.width,
            _ => trigger.x1 + offset,
        };
        Point::new(x, y)
    };

    Rect::from_origin_size(origin, overlay)
}

/// Clamp the start of a span of length `extent` into `[min, max]`.
///
/// A span longer than the range is pinned to `min`.
fn clamp_span(start: f64, extent: f64, min: f64, max: f64) -> f64 {
    start.min(max - extent).max(min)
}

fn contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

fn visible_area(viewport: Rect, rect: Rect) -> f64 {
    // `Rect::intersect` yields a zero-sized rect for disjoint inputs.
    viewport.intersect(rect).area()
}
