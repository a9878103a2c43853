//! Chart service port
//!
//! The HTTP layer depends on this trait rather than on the engine functions
//! so the placeholder engine can be swapped for a real one.

use crate::engine::{self, BaziChart};
use crate::pillar::CivilTimestamp;
use crate::traits::{TraitCatalog, TraitSummary};

/// A computed chart together with its trait summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BaziAnalysis {
    pub chart: BaziChart,
    pub traits: TraitSummary,
}

pub trait ChartService: Send + Sync {
    fn analyze(&self, birth: &CivilTimestamp, use_true_solar_time: bool) -> BaziAnalysis;
}

/// Index-arithmetic engine plus the built-in trait catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderChartService {
    catalog: TraitCatalog,
}

impl PlaceholderChartService {
    pub fn new(catalog: TraitCatalog) -> Self {
        Self { catalog }
    }
}

impl ChartService for PlaceholderChartService {
    fn analyze(&self, birth: &CivilTimestamp, use_true_solar_time: bool) -> BaziAnalysis {
        let chart = engine::compute(birth, use_true_solar_time);
        let traits = self.catalog.summarize(chart.elements.dominant);
        BaziAnalysis { chart, traits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_traits_follow_dominant_element() {
        let service = PlaceholderChartService::default();
        let analysis = service.analyze(&CivilTimestamp::new(1992, 3, 14, 23), false);

        assert_eq!(analysis.chart.elements.dominant, Element::Metal);
        assert_eq!(analysis.traits.dominant_element, "金");
    }

    #[test]
    fn test_usable_as_trait_object() {
        let service: std::sync::Arc<dyn ChartService> =
            std::sync::Arc::new(PlaceholderChartService::default());
        let a = service.analyze(&CivilTimestamp::new(2024, 2, 10, 8), false);
        let b = service.analyze(&CivilTimestamp::new(2024, 2, 10, 8), false);
        assert_eq!(a, b);
    }
}
