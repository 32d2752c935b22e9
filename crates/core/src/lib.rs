//! # Stowage Core
//!
//! Core types and traits for the stowage container packing engine.
//!
//! ## Core Components
//!
//! - **Geometry kernel**: `Extent`, `Rotation`, `Point`, `Aabb3`, the `fits` and `overlaps` predicates
//! - **Records**: `Item`, `Priority`, `Container`
//! - **Results**: `Placement`, `Outcome`, `OutcomeSummary`
//! - **Strategy trait**: `PackingStrategy`, the seam for swapping the whole packing policy
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod item;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{fits, overlaps, Aabb3, Extent, Point, Rotation, DEFAULT_TOLERANCE};
pub use item::{Container, Item, ItemId, Priority};
pub use placement::{Placement, PlacementStats};
pub use result::{Outcome, OutcomeSummary};
pub use solver::{Config, PackingStrategy};
