//! Extreme Point candidate generation.
//!
//! Extreme points are positions flush against a face of an already placed
//! box. Every placement contributes three of them:
//!
//! - just past its right face: `(x + length, y, z)`
//! - just past its back face: `(x, y + width, z)`
//! - on top of it: `(x, y, z + height)`
//!
//! The container origin is always a candidate. Interior gaps that touch no
//! placed face are never searched.
//!
//! # References
//!
//! - Crainic, T. G., Perboli, G., & Tadei, R. (2008). Extreme point-based heuristics
//!   for three-dimensional bin packing.

use std::cmp::Ordering;
use std::collections::HashSet;
use stowage_core::{Placement, Point};

/// Returns the value-deduplicated candidate points for the next item.
///
/// Points come back in first-seen order: origin first, then the three
/// extreme points of each placement in placement order. Use
/// [`sort_candidates`] to get search order.
pub fn candidate_points(placed: &[Placement]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(placed.len() * 3 + 1);
    let mut points = Vec::with_capacity(placed.len() * 3 + 1);

    let mut push = |p: Point| {
        if seen.insert(p) {
            points.push(p);
        }
    };

    push(Point::ORIGIN);

    for placement in placed {
        let pos = placement.position();
        let ext = placement.actual_extent();

        push(Point::new(pos.x + ext.length, pos.y, pos.z));
        push(Point::new(pos.x, pos.y + ext.width, pos.z));
        push(Point::new(pos.x, pos.y, pos.z + ext.height));
    }

    points
}

/// Orders candidates bottom-first, then left, then front: `(z, x, y)` ascending.
pub fn sort_candidates(points: &mut [Point]) {
    points.sort_by(compare_candidates);
}

fn compare_candidates(a: &Point, b: &Point) -> Ordering {
    a.z.partial_cmp(&b.z)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
