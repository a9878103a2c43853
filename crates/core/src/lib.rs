//! Domain Core - Placeholder Four Pillars Engine
//!
//! This crate holds the pure computation behind the BaZi service: the cyclic
//! stem/branch tables, the pillar index formulas, the element tally and the
//! canned trait summaries. Nothing here performs I/O.

pub mod balance;
pub mod cycle;
pub mod element;
pub mod engine;
pub mod error;
pub mod pillar;
pub mod service;
pub mod traits;

pub use crate::balance::{balance_score, ElementBalance, ElementCounts, ElementScores};
pub use crate::cycle::{cyc_index, EarthlyBranch, HeavenlyStem};
pub use crate::element::Element;
pub use crate::engine::{compute, BaziChart, ChartDebug};
pub use crate::error::DomainError;
pub use crate::pillar::{CivilTimestamp, FourPillars, Pillar, PillarIndices, PillarPosition};
pub use crate::service::{BaziAnalysis, ChartService, PlaceholderChartService};
pub use crate::traits::{TraitCatalog, TraitSummary, TraitTemplate};
