// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement fallback.
//!
//! This example resolves the same trigger against shrinking viewports and
//! prints which side wins and where the overlay lands.
//!
//! Run:
//! - `cargo run -p understory_tooltip_demos --example tooltip_placement`

use kurbo::{Rect, Size};
use understory_tooltip::placement::{PlacementRequest, resolve};
use understory_tooltip::types::Side;

fn main() {
    let trigger = Rect::from_origin_size((10.0, 10.0), (20.0, 20.0));
    let overlay = Size::new(30.0, 10.0);

    for height in [100.0, 30.0, 12.0] {
        let viewport = Rect::new(0.0, 0.0, 100.0, height);
        let req = PlacementRequest::new(trigger, viewport, overlay)
            .with_preferred(Side::Bottom)
            .with_offset(5.0);
        let placed = resolve(&req);
        println!(
            "viewport height {height:>5}: side {:?} at ({}, {}) fits={}",
            placed.side, placed.origin.x, placed.origin.y, placed.fits
        );
    }

    // Every preferred side against a roomy viewport.
    let viewport = Rect::new(0.0, 0.0, 200.0, 200.0);
    let trigger = Rect::from_origin_size((90.0, 90.0), (20.0, 20.0));
    for side in Side::ALL {
        let req = PlacementRequest::new(trigger, viewport, overlay).with_preferred(side);
        let placed = resolve(&req);
        assert_eq!(placed.side, side);
        println!("preferred {side:?}: {:?}", placed.rect());
    }
}
