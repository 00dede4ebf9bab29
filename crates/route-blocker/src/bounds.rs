//! Bounding box construction for a single route segment

use crate::geodesy::longitude_displacement;
use crate::{Bounds, Waypoint};

/// Create a box whose length covers `a` and `b`, padded by `distance` meters on each side
///
/// The vertical extent is exactly `[min(lat), max(lat)]` with no padding.
/// Horizontal padding is computed at `a`'s latitude for both sides:
///
/// - `east` = smaller longitude moved by `-distance`
/// - `west` = larger longitude moved by `+distance`
///
/// For positive `distance` this makes `east` numerically west of `west`.
/// The labeling is part of the output contract and must not be swapped.
pub fn compute_bounds(a: &Waypoint, b: &Waypoint, distance: f64) -> Bounds {
    let start = Waypoint::new(a.latitude, pick_less(a.longitude, b.longitude));
    let end = Waypoint::new(a.latitude, pick_greater(a.longitude, b.longitude));

    Bounds {
        north: pick_greater(a.latitude, b.latitude),
        south: pick_less(a.latitude, b.latitude),
        east: longitude_displacement(&start, -distance),
        west: longitude_displacement(&end, distance),
    }
}

// Any comparison against NaN falls through to `y`. f64::min/max would
// discard a NaN `y` instead.
#[inline(always)]
fn pick_less(x: f64, y: f64) -> f64 {
    if x < y { x } else { y }
}

#[inline(always)]
fn pick_greater(x: f64, y: f64) -> f64 {
    if x > y { x } else { y }
}
