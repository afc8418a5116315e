//! Site classification and the calculators fed by the winning category.
//!
//! Every function here is synchronous, deterministic and free of I/O. The shared
//! [`CategoryRegistry`] is built once and only ever read.

pub mod costing;
pub mod domain;
pub mod feasibility;
pub mod purification;
pub mod registry;
pub mod scoring;
pub mod sizing;

#[cfg(test)]
mod tests;

pub use costing::{estimate_costs_and_payback, CostAnalysis, CostComponent, CostRequest};
pub use domain::{
    ComplexityPreference, SiteAttribute, SiteContext, SiteValue, UnknownAttribute,
    UnknownComplexity, UserPreferences,
};
pub use feasibility::{
    AssessmentRequest, FeasibilityAssessor, FeasibilityReport, FeasibilityStatus,
    HarvestingPotential, RechargeSafety,
};
pub use purification::{plan_purification, PurificationPlan, TreatmentTier};
pub use registry::{
    CategoryDefinition, CategoryId, CategoryRegistry, CriteriaMode, CriteriaSet, Criterion,
    CriterionKind, NumericRange, RegistryError,
};
pub use scoring::{
    CategoryRanking, CategoryRecommendation, CategorySummary, ScoreResult, ScoringEngine,
    ScoringPolicy, ToleranceBand, ToleranceTable,
};
pub use sizing::{dimension_structures, StructureDimensions};

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
