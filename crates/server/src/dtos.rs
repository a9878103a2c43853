//! Data Transfer Objects for the HTTP API
//!
//! Request/response shapes for `/bazi/analyze` and the service endpoints.
//! Element-keyed maps are plain structs with renamed fields so they always
//! serialize in 木, 火, 土, 金, 水 order.

use serde::{Deserialize, Serialize};
use soulchat_core::{
    BaziAnalysis, ChartDebug, EarthlyBranch, Element, ElementBalance, ElementCounts,
    ElementScores, FourPillars, HeavenlyStem, Pillar, TraitSummary,
};
use utoipa::ToSchema;

// --- Common ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// --- Analyze request ---

/// Birth data for a chart. Either `birth_datetime` or the
/// `birth_date` + `birth_time` pair must be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequestDto {
    /// Display name, echoed back unchanged
    #[serde(default)]
    pub name: Option<String>,
    /// ISO 8601 datetime, e.g. `1992-03-14T23:30` or `1992-03-14T23:30:00+08:00`
    #[serde(default)]
    pub birth_datetime: Option<String>,
    /// `YYYY-MM-DD`, used with `birth_time`
    #[serde(default)]
    pub birth_date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`, used with `birth_date`
    #[serde(default)]
    pub birth_time: Option<String>,
    /// IANA timezone id
    #[serde(default)]
    pub timezone: Option<String>,
    /// Accepted but currently has no effect on the chart
    #[serde(default)]
    pub use_true_solar_time: Option<bool>,
}

// --- Analyze response ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InputEchoDto {
    pub name: Option<String>,
    /// Birth moment in the resolved timezone, ISO 8601 with offset
    pub birth_iso: String,
    pub timezone: String,
    pub use_true_solar_time: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PillarDto {
    #[schema(value_type = String, example = "壬")]
    pub stem: HeavenlyStem,
    #[schema(value_type = String, example = "申")]
    pub branch: EarthlyBranch,
}

impl From<Pillar> for PillarDto {
    fn from(pillar: Pillar) -> Self {
        Self {
            stem: pillar.stem,
            branch: pillar.branch,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PillarsDto {
    pub year: PillarDto,
    pub month: PillarDto,
    pub day: PillarDto,
    pub hour: PillarDto,
}

impl From<FourPillars> for PillarsDto {
    fn from(pillars: FourPillars) -> Self {
        Self {
            year: pillars.year.into(),
            month: pillars.month.into(),
            day: pillars.day.into(),
            hour: pillars.hour.into(),
        }
    }
}

/// Normalized score per element.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ElementScoresDto {
    #[serde(rename = "木")]
    pub wood: f64,
    #[serde(rename = "火")]
    pub fire: f64,
    #[serde(rename = "土")]
    pub earth: f64,
    #[serde(rename = "金")]
    pub metal: f64,
    #[serde(rename = "水")]
    pub water: f64,
}

impl From<ElementScores> for ElementScoresDto {
    fn from(scores: ElementScores) -> Self {
        Self {
            wood: scores.get(Element::Wood),
            fire: scores.get(Element::Fire),
            earth: scores.get(Element::Earth),
            metal: scores.get(Element::Metal),
            water: scores.get(Element::Water),
        }
    }
}

/// Raw symbol count per element.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ElementCountsDto {
    #[serde(rename = "木")]
    pub wood: u32,
    #[serde(rename = "火")]
    pub fire: u32,
    #[serde(rename = "土")]
    pub earth: u32,
    #[serde(rename = "金")]
    pub metal: u32,
    #[serde(rename = "水")]
    pub water: u32,
}

impl From<ElementCounts> for ElementCountsDto {
    fn from(counts: ElementCounts) -> Self {
        Self {
            wood: counts.get(Element::Wood),
            fire: counts.get(Element::Fire),
            earth: counts.get(Element::Earth),
            metal: counts.get(Element::Metal),
            water: counts.get(Element::Water),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ElementsDto {
    #[schema(value_type = String, example = "金")]
    pub dominant: Element,
    pub balance: ElementScoresDto,
}

impl From<ElementBalance> for ElementsDto {
    fn from(elements: ElementBalance) -> Self {
        Self {
            dominant: elements.dominant,
            balance: elements.balance.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TraitsDto {
    pub dominant_element: String,
    pub core_traits: Vec<String>,
    pub action_tip: String,
    pub disclaimer: String,
}

impl From<TraitSummary> for TraitsDto {
    fn from(summary: TraitSummary) -> Self {
        Self {
            dominant_element: summary.dominant_element,
            core_traits: summary.core_traits.into_iter().map(String::from).collect(),
            action_tip: summary.action_tip.to_string(),
            disclaimer: summary.disclaimer.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DebugDto {
    pub year_idx: i64,
    pub month_idx: i64,
    pub day_idx: i64,
    pub hour_idx: i64,
    pub raw_counts: ElementCountsDto,
}

impl From<ChartDebug> for DebugDto {
    fn from(debug: ChartDebug) -> Self {
        Self {
            year_idx: debug.indices.year,
            month_idx: debug.indices.month,
            day_idx: debug.indices.day,
            hour_idx: debug.indices.hour,
            raw_counts: debug.raw_counts.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeResponseDto {
    pub input: InputEchoDto,
    pub pillars: PillarsDto,
    pub elements: ElementsDto,
    pub traits: TraitsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugDto>,
}

impl AnalyzeResponseDto {
    pub fn new(input: InputEchoDto, analysis: BaziAnalysis, include_debug: bool) -> Self {
        let BaziAnalysis { chart, traits } = analysis;
        Self {
            input,
            pillars: chart.pillars.into(),
            elements: chart.elements.into(),
            traits: traits.into(),
            debug: include_debug.then(|| chart.debug.into()),
        }
    }
}
