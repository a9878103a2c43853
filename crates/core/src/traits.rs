//! Trait Summarizer
//!
//! Maps a dominant element to a canned personality summary.

use crate::element::Element;

/// Canned text attached to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitTemplate {
    pub element: &'static str,
    pub core_traits: [&'static str; 3],
    pub action_tip: &'static str,
}

const TEMPLATES: [TraitTemplate; Element::COUNT] = [
    TraitTemplate {
        element: "木",
        core_traits: ["成长导向", "重视原则", "富有创造力"],
        action_tip: "设立清晰里程碑，避免无限制地扩张目标。",
    },
    TraitTemplate {
        element: "火",
        core_traits: ["表达力强", "热情外向", "执行果断"],
        action_tip: "行动前列出两条备选方案，降低冲动决策风险。",
    },
    TraitTemplate {
        element: "土",
        core_traits: ["稳重务实", "可靠守信", "耐心细致"],
        action_tip: "给创新留出试错空间，避免过度保守。",
    },
    TraitTemplate {
        element: "金",
        core_traits: ["逻辑清晰", "重效率", "目标导向"],
        action_tip: "关注团队节奏，避免只看效率忽略情绪。",
    },
    TraitTemplate {
        element: "水",
        core_traits: ["思维灵活", "适应性强", "善于沟通"],
        action_tip: "为长期项目设置边界，防止频繁切换精力分散。",
    },
];

pub const FALLBACK_TIP: &str = "保持学习与复盘，持续微调策略。";
pub const DISCLAIMER: &str = "演示版性格摘要。正式版请接入真实八字推算引擎。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitSummary {
    pub dominant_element: String,
    pub core_traits: Vec<&'static str>,
    pub action_tip: &'static str,
    pub disclaimer: &'static str,
}

/// Lookup table of trait templates with a designated fallback entry.
#[derive(Debug, Clone, Copy)]
pub struct TraitCatalog {
    templates: &'static [TraitTemplate],
    fallback: &'static TraitTemplate,
    fallback_tip: &'static str,
    disclaimer: &'static str,
}

impl Default for TraitCatalog {
    fn default() -> Self {
        Self {
            templates: &TEMPLATES,
            fallback: &TEMPLATES[0],
            fallback_tip: FALLBACK_TIP,
            disclaimer: DISCLAIMER,
        }
    }
}

impl TraitCatalog {
    pub fn summarize(&self, dominant: Element) -> TraitSummary {
        self.summarize_symbol(dominant.symbol())
    }

    /// Exact-match lookup by element symbol.
    ///
    /// Unknown symbols get the fallback traits and the generic tip; the
    /// symbol is echoed back as given.
    pub fn summarize_symbol(&self, symbol: &str) -> TraitSummary {
        let (core_traits, action_tip) = match self.templates.iter().find(|t| t.element == symbol) {
            Some(template) => (template.core_traits, template.action_tip),
            None => (self.fallback.core_traits, self.fallback_tip),
        };

        TraitSummary {
            dominant_element: symbol.to_string(),
            core_traits: core_traits.to_vec(),
            action_tip,
            disclaimer: self.disclaimer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_a_template() {
        let catalog = TraitCatalog::default();
        for element in Element::ALL {
            let summary = catalog.summarize(element);
            assert_eq!(summary.dominant_element, element.symbol());
            assert_eq!(summary.core_traits.len(), 3);
            assert!(summary.core_traits.iter().all(|t| !t.is_empty()));
            assert!(!summary.action_tip.is_empty());
            assert_ne!(summary.action_tip, FALLBACK_TIP);
            assert_eq!(summary.disclaimer, DISCLAIMER);
        }
    }

    #[test]
    fn test_metal_summary() {
        let summary = TraitCatalog::default().summarize(Element::Metal);
        assert_eq!(summary.core_traits, vec!["逻辑清晰", "重效率", "目标导向"]);
        assert_eq!(summary.action_tip, "关注团队节奏，避免只看效率忽略情绪。");
    }

    #[test]
    fn test_unknown_symbol_falls_back() {
        let summary = TraitCatalog::default().summarize_symbol("风");
        assert_eq!(summary.dominant_element, "风");
        assert_eq!(summary.core_traits, vec!["成长导向", "重视原则", "富有创造力"]);
        assert_eq!(summary.action_tip, FALLBACK_TIP);
    }
}
