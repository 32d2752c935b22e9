//! # Stowage Packer
//!
//! Extreme-point, first-fit-decreasing container packing.
//!
//! ```rust
//! use stowage_packer::{Container, ContainerOptimizer, Item, Priority};
//!
//! let container = Container::new(100.0, 100.0, 100.0, 1000.0)?;
//! let items = vec![Item::new("Box", 30.0, 20.0, 10.0, 5.0, Priority::Medium)?];
//!
//! let outcome = ContainerOptimizer::new().optimize(&container, &items)?;
//! assert!(outcome.is_fully_packed());
//! # Ok::<(), stowage_packer::Error>(())
//! ```

pub mod extreme_point;
pub mod ffd;
pub mod optimizer;
pub mod search;
pub mod validator;

// Re-exports
pub use ffd::FirstFitDecreasing;
pub use optimizer::ContainerOptimizer;
pub use stowage_core::{
    Config, Container, Error, Item, Outcome, PackingStrategy, Placement, Point, Priority, Result,
    Rotation,
};
