//! Composes ranking, sizing, costing and purification into one report.

mod potential;
mod report;
mod safety;

pub use potential::{
    annual_demand_liters, boosted_coverage, coverage_percentage, feasibility_percentage,
    priority_boost, runoff_coefficient, water_source_priority, FeasibilityStatus,
    HarvestingPotential, DEFAULT_RUNOFF_COEFFICIENT, LITERS_PER_PERSON_PER_DAY,
};
pub use report::{DemandCoverage, FeasibilityReport};
pub use safety::{check_recharge_safety, RechargeSafety};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::costing::{estimate_costs_and_payback, CostRequest};
use super::domain::{ComplexityPreference, SiteAttribute, SiteContext, UserPreferences};
use super::purification::{plan_purification, DEFAULT_INTENDED_USE};
use super::registry::CategoryRegistry;
use super::scoring::ScoringEngine;
use super::sizing::dimension_structures;
use crate::config::AssessmentConfig;

const LIMITED_OPEN_SPACE_M2: f64 = 20.0;

/// A site plus the owner's optional preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub site: SiteContext,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Clone)]
pub struct FeasibilityAssessor {
    engine: ScoringEngine,
    default_complexity: ComplexityPreference,
}

impl FeasibilityAssessor {
    pub fn new(engine: ScoringEngine, default_complexity: ComplexityPreference) -> Self {
        Self {
            engine,
            default_complexity,
        }
    }

    pub fn standard() -> Self {
        Self::new(ScoringEngine::standard(), ComplexityPreference::default())
    }

    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self::new(
            ScoringEngine::new(CategoryRegistry::shared(), config.policy.clone()),
            config.default_complexity,
        )
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn default_preferences(&self) -> UserPreferences {
        UserPreferences::new(self.default_complexity)
    }

    pub fn assess_request(&self, request: &AssessmentRequest) -> FeasibilityReport {
        self.assess(&request.site, request.preferences.as_ref())
    }

    pub fn assess(
        &self,
        site: &SiteContext,
        preferences: Option<&UserPreferences>,
    ) -> FeasibilityReport {
        let preferences = preferences
            .copied()
            .unwrap_or_else(|| self.default_preferences());
        let context = enrich(site);

        let roof_area = context.number(SiteAttribute::RoofAreaM2).unwrap_or(0.0);
        let rainfall = context
            .number(SiteAttribute::RainfallMmPerYear)
            .unwrap_or(0.0);
        let open_space = context.number(SiteAttribute::OpenSpaceM2).unwrap_or(0.0);
        let intended_use = context
            .text(SiteAttribute::IntendedUse)
            .unwrap_or(DEFAULT_INTENDED_USE);

        let harvesting_potential = HarvestingPotential::calculate(
            roof_area,
            rainfall,
            context.text(SiteAttribute::RoofType),
        );
        let recharge_safety = check_recharge_safety(&context);

        let ranking = self.engine.rank(&context, &preferences);
        let primary = ranking.primary().clone();
        let alternatives = ranking.alternatives().to_vec();

        let structure_dimensions = dimension_structures(
            harvesting_potential.annual_liters,
            open_space,
            primary.category.recharge_feasible,
        );

        let cost_analysis = estimate_costs_and_payback(&CostRequest {
            category_id: primary.category.id,
            location_type: context
                .text(SiteAttribute::LocationType)
                .unwrap_or_default()
                .to_string(),
            soil_type: context
                .text(SiteAttribute::SoilType)
                .unwrap_or_default()
                .to_string(),
            system_size_liters: f64::from(structure_dimensions.storage.capacity_liters),
            intended_use: Some(intended_use.to_string()),
        });

        let purification = plan_purification(intended_use);
        let demand = demand_coverage(&context, harvesting_potential.annual_liters);

        info!(
            category = %primary.category.id,
            confidence = primary.confidence,
            feasibility = demand.feasibility_percentage,
            status = demand.feasibility_label,
            "assessment complete"
        );

        FeasibilityReport {
            harvesting_potential,
            primary,
            alternatives,
            structure_dimensions,
            cost_analysis,
            purification,
            recharge_safety,
            demand,
        }
    }
}

impl Default for FeasibilityAssessor {
    fn default() -> Self {
        Self::standard()
    }
}

fn demand_coverage(context: &SiteContext, harvest_liters: f64) -> DemandCoverage {
    let household = context
        .number(SiteAttribute::HouseholdSize)
        .unwrap_or(0.0);
    let priority_points = context
        .text(SiteAttribute::ExistingWaterSources)
        .map(water_source_priority)
        .unwrap_or(0);
    DemandCoverage::new(harvest_liters, annual_demand_liters(household), priority_points)
}

/// Fills derived attributes the catalog reads but owners rarely state directly.
/// Values the site already carries are never replaced.
pub fn enrich(site: &SiteContext) -> SiteContext {
    let mut context = site.clone();

    if let Some(property) = site.text(SiteAttribute::PropertyType) {
        context.insert_if_absent(SiteAttribute::BuildingType, property.to_ascii_lowercase());
    }

    if let Some(usage) = site.text(SiteAttribute::IntendedUse) {
        let usage = usage.to_ascii_lowercase();
        context.insert_if_absent(SiteAttribute::WaterQualityRequired, usage.clone());
        context.insert_if_absent(SiteAttribute::WaterDemand, usage);
    }

    let aged = site
        .text(SiteAttribute::BuildingAge)
        .map(|age| age.trim().to_ascii_lowercase())
        .is_some_and(|age| age == "old" || age == "heritage");
    if aged {
        context.insert_if_absent(SiteAttribute::ModificationType, "retrofit");
    }

    if site
        .number(SiteAttribute::OpenSpaceM2)
        .is_some_and(|space| space < LIMITED_OPEN_SPACE_M2)
    {
        context.insert_if_absent(SiteAttribute::SpaceConstraints, "limited");
    }

    context
}
