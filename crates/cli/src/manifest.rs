//! JSON manifest describing one packing job.

use serde::{Deserialize, Serialize};
use stowage_core::{Container, Error, Item, Priority, Result};

/// A packing job as read from disk.
///
/// Both fields are optional at the format level so that a missing one is
/// reported as [`Error::InvalidArgument`] instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Container definition.
    #[serde(default)]
    pub container: Option<ContainerRequest>,

    /// Items to pack.
    #[serde(default)]
    pub items: Option<Vec<ItemRequest>>,
}

/// Container definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRequest {
    /// Length (x).
    pub length: f64,
    /// Width (y).
    pub width: f64,
    /// Height (z).
    pub height: f64,
    /// Maximum total weight.
    pub max_weight: f64,
}

/// Item definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Display label.
    pub name: String,
    /// Length (x).
    pub length: f64,
    /// Width (y).
    pub width: f64,
    /// Height (z).
    pub height: f64,
    /// Weight.
    pub weight: f64,

    /// Priority tier.
    #[serde(default)]
    pub priority: Priority,

    /// Whether the item may be rotated.
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,

    /// Number of identical copies.
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

/// Upper bound on copies of a single entry.
pub const MAX_QUANTITY: usize = 10_000;

fn default_allow_rotation() -> bool {
    true
}

fn default_quantity() -> usize {
    1
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("Malformed manifest: {}", e)))
    }

    /// Builds validated records, expanding quantities.
    pub fn into_inputs(self) -> Result<(Container, Vec<Item>)> {
        let container = self
            .container
            .ok_or_else(|| Error::InvalidArgument("container is required".into()))?;
        let requests = self
            .items
            .ok_or_else(|| Error::InvalidArgument("items are required".into()))?;

        let container = Container::new(
            container.length,
            container.width,
            container.height,
            container.max_weight,
        )?;

        let mut items = Vec::new();
        for request in requests {
            if request.quantity == 0 || request.quantity > MAX_QUANTITY {
                return Err(Error::InvalidArgument(format!(
                    "Quantity of '{}' must be between 1 and {}, got {}",
                    request.name, MAX_QUANTITY, request.quantity
                )));
            }
            for _ in 0..request.quantity {
                let item = Item::new(
                    request.name.clone(),
                    request.length,
                    request.width,
                    request.height,
                    request.weight,
                    request.priority,
                )?
                .with_rotation(request.allow_rotation);
                items.push(item);
            }
        }

        Ok((container, items))
    }
}
