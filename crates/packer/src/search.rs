//! First-fit placement search for a single item.

use crate::extreme_point::{candidate_points, sort_candidates};
use crate::validator::{validate_box, Rejection};
use stowage_core::{Aabb3, Container, Item, Placement, Rotation};

/// Finds the first legal placement for `item` among the extreme points of
/// `placed`.
///
/// Candidates are visited in `(z, x, y)` order and, at each candidate, the
/// item's allowed rotations in their fixed order. The first pair that fits
/// the container and passes validation wins. Returns `None` when no pair is
/// legal.
pub fn find_first_fit(
    container: &Container,
    item: &Item,
    placed: &[Placement],
    tolerance: f64,
) -> Option<Placement> {
    let rotations = Rotation::trial_order(item.allows_rotation());
    let limits = container.extent();

    let mut candidates = candidate_points(placed);
    sort_candidates(&mut candidates);

    for position in candidates {
        for &rotation in rotations {
            let extent = item.extent().rotate(rotation);
            let occupied = Aabb3::new(position, extent);
            if !occupied.within(&limits, tolerance) {
                continue;
            }

            match validate_box(&occupied, item.priority(), placed, tolerance) {
                Ok(()) => return Some(Placement::new(item.clone(), position, rotation)),
                Err(Rejection::Overlap(_)) => {}
                Err(Rejection::Stacking(idx)) => {
                    log::trace!(
                        "'{}' at ({}, {}, {}) {:?} cannot rest on '{}'",
                        item.label(),
                        position.x,
                        position.y,
                        position.z,
                        rotation,
                        placed[idx].item().label()
                    );
                }
            }
        }
    }

    None
}
