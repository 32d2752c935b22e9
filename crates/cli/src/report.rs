//! Console and JSON rendering of a packing outcome.

use serde::Serialize;
use std::fmt;
use stowage_core::OutcomeSummary;
use stowage_packer::{Outcome, Placement};

/// JSON document emitted with `--json`.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub summary: OutcomeSummary,
    pub outcome: &'a Outcome,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a Outcome) -> Self {
        Self {
            summary: outcome.summary(),
            outcome,
        }
    }
}

/// Human-readable report, rendered through [`fmt::Display`].
///
/// The layout is listed bottom-up, then left to right.
pub struct Report<'a> {
    outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a Outcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.outcome;
        let summary = outcome.summary();
        let container = outcome.container();
        let extent = container.extent();

        writeln!(f, "Packing Report")?;
        writeln!(f, "==============")?;
        writeln!(
            f,
            "Container:   {} x {} x {} (max {}kg)",
            extent.length,
            extent.width,
            extent.height,
            container.max_weight()
        )?;
        writeln!(
            f,
            "Packed:      {}/{} items",
            summary.total_packed, summary.total_requested
        )?;
        writeln!(f, "Utilization: {}", outcome.utilization_percent())?;
        writeln!(
            f,
            "Weight:      {:.1}/{}kg ({:.1}%)",
            summary.total_weight,
            container.max_weight(),
            summary.weight_ratio * 100.0
        )?;
        let status = if outcome.is_fully_packed() {
            "complete"
        } else {
            "partial"
        };
        writeln!(f, "Status:      {}", status)?;

        if !outcome.packed().is_empty() {
            let stats = outcome.placement_stats();
            writeln!(f, "\nLayout (stack height {:.1}):", stats.max_height)?;
            writeln!(f, "{:-<72}", "")?;
            for placement in layout_order(outcome.packed()) {
                let position = placement.position();
                let actual = placement.actual_extent();
                let item = placement.item();
                writeln!(
                    f,
                    "  {:<20} at ({:>6.1}, {:>6.1}, {:>6.1})  {} x {} x {}  {:?} [{}]",
                    item.label(),
                    position.x,
                    position.y,
                    position.z,
                    actual.length,
                    actual.width,
                    actual.height,
                    placement.rotation(),
                    item.priority()
                )?;
            }
            if stats.rotated_count > 0 {
                writeln!(f, "  ({} rotated)", stats.rotated_count)?;
            }
        }

        if !outcome.unpacked().is_empty() {
            writeln!(f, "\nUnpacked:")?;
            for item in outcome.unpacked() {
                let extent = item.extent();
                writeln!(
                    f,
                    "  - {} ({} x {} x {}, {}kg, {})",
                    item.label(),
                    extent.length,
                    extent.width,
                    extent.height,
                    item.weight(),
                    item.priority()
                )?;
            }
        }

        Ok(())
    }
}

fn layout_order(packed: &[Placement]) -> Vec<&Placement> {
    let mut ordered: Vec<&Placement> = packed.iter().collect();
    ordered.sort_by(|a, b| {
        let (pa, pb) = (a.position(), b.position());
        pa.z.total_cmp(&pb.z).then(pa.x.total_cmp(&pb.x))
    });
    ordered
}
