//! Pillar Engine
//!
//! Placeholder Four Pillars computation. This is NOT a calendrical engine:
//! it applies fixed index formulas to the civil date parts and reads the
//! stem/branch tables cyclically, so the output is deterministic demo data.

use crate::balance::{ElementBalance, ElementCounts};
use crate::pillar::{CivilTimestamp, FourPillars, PillarIndices};

/// Raw values behind a chart, kept for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDebug {
    pub indices: PillarIndices,
    pub raw_counts: ElementCounts,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaziChart {
    pub pillars: FourPillars,
    pub elements: ElementBalance,
    pub debug: ChartDebug,
}

/// Compute the placeholder chart for a civil timestamp.
///
/// `use_true_solar_time` is accepted for interface compatibility and has no
/// effect on the result.
pub fn compute(ts: &CivilTimestamp, _use_true_solar_time: bool) -> BaziChart {
    let indices = PillarIndices::from_timestamp(ts);
    let pillars = indices.to_pillars();
    let counts = ElementCounts::tally(&pillars);

    BaziChart {
        pillars,
        elements: ElementBalance::from(&counts),
        debug: ChartDebug {
            indices,
            raw_counts: counts,
        },
    }
}
