//! Collapsing of hazard markers sharing the exact same position.
//!

use std::collections::HashSet;

use tracing::trace;

use bousai_formats::HazardReport;

/// Keep only the first report for every `"{lat},{lng}"` key, in fetch order.
/// The store is queried newest-first, so the survivor is the most recent one.
///
pub fn dedup_by_coordinate_key(reports: Vec<HazardReport>) -> Vec<HazardReport> {
    let mut seen = HashSet::new();
    let before = reports.len();

    let out: Vec<HazardReport> = reports
        .into_iter()
        .filter(|r| seen.insert(r.coordinate_key()))
        .collect();

    trace!("{} markers collapsed into {}", before, out.len());
    out
}
