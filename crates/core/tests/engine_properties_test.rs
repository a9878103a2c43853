//! Property checks for the pillar engine over a sweep of inputs,
//! including negative and out-of-range date parts.

use soulchat_core::{
    compute, CivilTimestamp, EarthlyBranch, Element, HeavenlyStem, PillarPosition, TraitCatalog,
};

fn sample_inputs() -> Vec<CivilTimestamp> {
    let mut inputs = Vec::new();
    for year in [-10_000, -5, -4, -1, 0, 1, 4, 1900, 1992, 2024, 9_999, i32::MAX, i32::MIN] {
        for month in [-1, 0, 1, 6, 12, 13] {
            for day in [-31, 0, 1, 15, 31, 40] {
                for hour in [-1, 0, 11, 23, 24] {
                    inputs.push(CivilTimestamp::new(year, month, day, hour));
                }
            }
        }
    }
    inputs
}

#[test]
fn test_compute_is_deterministic() {
    for ts in sample_inputs() {
        assert_eq!(compute(&ts, false), compute(&ts, false), "input {:?}", ts);
    }
}

#[test]
fn test_counts_always_sum_to_eight() {
    for ts in sample_inputs() {
        let chart = compute(&ts, false);
        assert_eq!(chart.debug.raw_counts.total(), 8, "input {:?}", ts);
    }
}

#[test]
fn test_positions_within_table_bounds() {
    for ts in sample_inputs() {
        let chart = compute(&ts, false);
        for (_, pillar) in chart.pillars.iter() {
            assert!(pillar.stem.position() < HeavenlyStem::COUNT);
            assert!(pillar.branch.position() < EarthlyBranch::COUNT);
        }
    }
}

#[test]
fn test_dominant_is_first_maximal_element() {
    for ts in sample_inputs() {
        let chart = compute(&ts, false);
        let counts = chart.debug.raw_counts;
        let max = Element::ALL.iter().map(|e| counts.get(*e)).max().unwrap();
        let first_max = Element::ALL
            .into_iter()
            .find(|e| counts.get(*e) == max)
            .unwrap();
        assert_eq!(chart.elements.dominant, first_max, "input {:?}", ts);
    }
}

#[test]
fn test_indices_round_trip_through_tables() {
    for ts in sample_inputs() {
        let chart = compute(&ts, false);
        for position in PillarPosition::ALL {
            let index = chart.debug.indices.get(position);
            let pillar = chart.pillars.get(position);
            assert_eq!(HeavenlyStem::from_index(index).symbol(), pillar.stem.symbol());
            assert_eq!(EarthlyBranch::from_index(index).symbol(), pillar.branch.symbol());
        }
    }
}

#[test]
fn test_regression_year_index() {
    let chart = compute(&CivilTimestamp::new(1992, 3, 14, 23), false);
    assert_eq!(chart.debug.indices.year, 1988);
    assert_eq!(chart.pillars.year.stem.position(), 8);
    assert_eq!(chart.pillars.year.branch.position(), 8);
}

#[test]
fn test_trait_lookup_is_total() {
    let catalog = TraitCatalog::default();
    for element in Element::ALL {
        let summary = catalog.summarize(element);
        assert!(!summary.core_traits.is_empty());
        assert!(!summary.action_tip.is_empty());
    }
}
