//! Element tally and normalized balance scores

use crate::element::Element;
use crate::pillar::FourPillars;

/// Number of symbols tallied per chart: four pillars, two symbols each.
pub const SYMBOLS_PER_CHART: u32 = 8;

/// `count / 8` rounded to two decimals, round-half-to-even.
///
/// The rounding is done on the exact rational value, so `3/8 = 0.375`
/// becomes `0.38` and `1/8 = 0.125` becomes `0.12`.
pub fn balance_score(count: u32) -> f64 {
    round_ratio_half_even(count, SYMBOLS_PER_CHART, 2)
}

fn round_ratio_half_even(numerator: u32, denominator: u32, places: u32) -> f64 {
    let scale = 10u64.pow(places);
    let scaled = u64::from(numerator) * scale;
    let den = u64::from(denominator);
    let quotient = scaled / den;
    let twice_remainder = (scaled % den) * 2;

    let rounded = if twice_remainder > den || (twice_remainder == den && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };

    rounded as f64 / scale as f64
}

/// Per-element symbol counts, indexed by [`Element::ordinal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts([u32; Element::COUNT]);

impl ElementCounts {
    pub fn tally(pillars: &FourPillars) -> Self {
        let mut counts = Self::default();
        for (_, pillar) in pillars.iter() {
            counts.increment(pillar.stem.element());
            counts.increment(pillar.branch.element());
        }
        counts
    }

    fn increment(&mut self, element: Element) {
        self.0[element.ordinal()] += 1;
    }

    pub fn get(&self, element: Element) -> u32 {
        self.0[element.ordinal()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Element with the highest count; ties go to the earliest in
    /// declaration order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::ALL[0];
        for element in Element::ALL {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }

    pub fn scores(&self) -> ElementScores {
        let mut scores = [0.0; Element::COUNT];
        for (element, count) in self.iter() {
            scores[element.ordinal()] = balance_score(count);
        }
        ElementScores(scores)
    }
}

/// Normalized per-element scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementScores([f64; Element::COUNT]);

impl ElementScores {
    pub fn get(&self, element: Element) -> f64 {
        self.0[element.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}

/// Dominant element plus the normalized balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBalance {
    pub dominant: Element,
    pub balance: ElementScores,
}

impl From<&ElementCounts> for ElementBalance {
    fn from(counts: &ElementCounts) -> Self {
        Self {
            dominant: counts.dominant(),
            balance: counts.scores(),
        }
    }
}
