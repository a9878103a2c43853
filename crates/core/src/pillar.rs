//! Pillars and the index formulas that produce them

use crate::cycle::{EarthlyBranch, HeavenlyStem};

/// Civil (local) birth time, already resolved to a concrete offset.
///
/// Fields are deliberately unchecked: any integers produce a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilTimestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
}

impl CivilTimestamp {
    pub fn new(year: i32, month: i32, day: i32, hour: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub fn from_index(index: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_index(index),
            branch: EarthlyBranch::from_index(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PillarPosition::Year => "year",
            PillarPosition::Month => "month",
            PillarPosition::Day => "day",
            PillarPosition::Hour => "hour",
        }
    }
}

/// Raw cyclic indices, one per pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PillarIndices {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
}

impl PillarIndices {
    /// Year 4 CE is the 甲子 anchor of the placeholder cycle.
    pub fn from_timestamp(ts: &CivilTimestamp) -> Self {
        let year = i64::from(ts.year);
        let month = i64::from(ts.month);
        let day_index = year * 372 + month * 31 + i64::from(ts.day);

        Self {
            year: year - 4,
            month: year * 12 + month,
            day: day_index,
            hour: day_index * 24 + i64::from(ts.hour),
        }
    }

    pub fn get(&self, position: PillarPosition) -> i64 {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub fn to_pillars(&self) -> FourPillars {
        FourPillars {
            year: Pillar::from_index(self.year),
            month: Pillar::from_index(self.month),
            day: Pillar::from_index(self.day),
            hour: Pillar::from_index(self.hour),
        }
    }
}

/// The four labelled pillars in year/month/day/hour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        PillarPosition::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}
