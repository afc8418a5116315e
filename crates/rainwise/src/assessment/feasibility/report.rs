use serde::Serialize;

use crate::assessment::costing::CostAnalysis;
use crate::assessment::purification::PurificationPlan;
use crate::assessment::scoring::ScoreResult;
use crate::assessment::sizing::StructureDimensions;

use crate::assessment::round_to_tenth;

use super::potential::{boosted_coverage, priority_boost, FeasibilityStatus, HarvestingPotential};
use super::safety::RechargeSafety;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandCoverage {
    pub annual_demand_liters: f64,
    pub priority_points: u32,
    pub priority_boost: f64,
    pub feasibility_percentage: f64,
    pub feasibility_status: FeasibilityStatus,
    pub feasibility_label: &'static str,
}

impl DemandCoverage {
    pub fn new(harvest_liters: f64, annual_demand_liters: f64, priority_points: u32) -> Self {
        let coverage = boosted_coverage(harvest_liters, annual_demand_liters, priority_points);
        let status = FeasibilityStatus::from_percentage(coverage);

        Self {
            annual_demand_liters,
            priority_points,
            priority_boost: priority_boost(priority_points),
            feasibility_percentage: round_to_tenth(coverage),
            feasibility_status: status,
            feasibility_label: status.label(),
        }
    }
}

/// Everything an owner needs to pick and budget a harvesting system for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    pub harvesting_potential: HarvestingPotential,
    pub primary: ScoreResult,
    pub alternatives: Vec<ScoreResult>,
    pub structure_dimensions: StructureDimensions,
    pub cost_analysis: CostAnalysis,
    pub purification: PurificationPlan,
    pub recharge_safety: RechargeSafety,
    pub demand: DemandCoverage,
}

impl FeasibilityReport {
    pub fn feasibility_percentage(&self) -> f64 {
        self.demand.feasibility_percentage
    }

    pub fn feasibility_status(&self) -> FeasibilityStatus {
        self.demand.feasibility_status
    }
}
