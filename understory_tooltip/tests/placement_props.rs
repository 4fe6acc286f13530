// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement resolver.
//!
//! 1. `resolve` is deterministic.
//! 2. The result always matches the candidate rectangle for its side.
//! 3. If any side fits the viewport, the result fits and is the first such side.
//! 4. If no side fits, no candidate shows more of the overlay than the result.
//! 5. Along the cross axis the overlay stays inside the viewport when it is
//!    small enough, and pins to the leading edge otherwise.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_tooltip::placement::{PlacementRequest, candidate_rect, resolve};
use understory_tooltip::types::Side;

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Right),
        Just(Side::Bottom),
        Just(Side::Left),
    ]
}

// Integer-valued coordinates keep the geometry exact.
fn request_strategy() -> impl Strategy<Value = PlacementRequest> {
    (
        (-50i32..=250, -50i32..=250, 1i32..=80, 1i32..=80),
        (0i32..=50, 0i32..=50, 20i32..=300, 20i32..=300),
        (1i32..=120, 1i32..=120),
        side_strategy(),
        0i32..=16,
    )
        .prop_map(|((tx, ty, tw, th), (vx, vy, vw, vh), (ow, oh), side, offset)| {
            let rect = |x: i32, y: i32, w: i32, h: i32| {
                Rect::from_origin_size(
                    (f64::from(x), f64::from(y)),
                    (f64::from(w), f64::from(h)),
                )
            };
            PlacementRequest::new(
                rect(tx, ty, tw, th),
                rect(vx, vy, vw, vh),
                Size::new(f64::from(ow), f64::from(oh)),
            )
            .with_preferred(side)
            .with_offset(f64::from(offset))
        })
}

fn inside(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.y0 >= outer.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

proptest! {
    #[test]
    fn resolve_is_deterministic(req in request_strategy()) {
        prop_assert_eq!(resolve(&req), resolve(&req));
    }

    #[test]
    fn result_matches_its_candidate(req in request_strategy()) {
        let r = resolve(&req);
        prop_assert_eq!(r.rect(), candidate_rect(&req, r.side));
        prop_assert_eq!(r.size, req.overlay);
    }

    #[test]
    fn first_fitting_side_wins(req in request_strategy()) {
        let r = resolve(&req);
        let first_fit = req
            .preferred
            .candidates()
            .into_iter()
            .find(|&s| inside(req.viewport, candidate_rect(&req, s)));
        match first_fit {
            Some(side) => {
                prop_assert!(r.fits);
                prop_assert_eq!(r.side, side);
                prop_assert!(inside(req.viewport, r.rect()));
            }
            None => prop_assert!(!r.fits),
        }
    }

    #[test]
    fn fallback_maximizes_visible_area(req in request_strategy()) {
        let r = resolve(&req);
        prop_assume!(!r.fits);
        let shown = req.viewport.intersect(r.rect()).area();
        for side in Side::ALL {
            let other = req.viewport.intersect(candidate_rect(&req, side)).area();
            prop_assert!(other <= shown);
        }
    }

    #[test]
    fn cross_axis_stays_in_viewport_when_it_can(req in request_strategy()) {
        let r = resolve(&req);
        let rect = r.rect();
        let vp = req.viewport;
        if r.side.is_vertical() {
            if req.overlay.width <= vp.width() {
                prop_assert!(rect.x0 >= vp.x0 && rect.x1 <= vp.x1);
            } else {
                prop_assert_eq!(rect.x0, vp.x0);
            }
        } else if req.overlay.height <= vp.height() {
            prop_assert!(rect.y0 >= vp.y0 && rect.y1 <= vp.y1);
        } else {
            prop_assert_eq!(rect.y0, vp.y0);
        }
    }
}
