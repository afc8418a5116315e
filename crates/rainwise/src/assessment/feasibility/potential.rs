use serde::Serialize;

use crate::assessment::round_to_tenth;

pub const DEFAULT_RUNOFF_COEFFICIENT: f64 = 0.85;
pub const LITERS_PER_PERSON_PER_DAY: f64 = 135.0;
const PEAK_MONTH_SHARE: f64 = 0.4;
const PRIORITY_POINT_CAP: u32 = 50;
const PRIORITY_WEIGHT: f64 = 0.4;
const PRIORITY_BOOST_CAP: f64 = 20.0;

const WATER_SOURCE_POINTS: [(&str, u32); 5] = [
    ("tanker", 40),
    ("borewell", 25),
    ("open well", 20),
    ("municipal", 10),
    ("private borewell", 5),
];

/// Fraction of rainfall a roof material turns into collectable runoff.
pub fn runoff_coefficient(roof_type: Option<&str>) -> f64 {
    let Some(roof_type) = roof_type else {
        return DEFAULT_RUNOFF_COEFFICIENT;
    };
    match roof_type.trim().to_ascii_lowercase().as_str() {
        "concrete" => 0.85,
        "metal" => 0.90,
        "tile" => 0.75,
        "shingles" => 0.80,
        "green" => 0.60,
        "flat" => 0.82,
        "pitched" => 0.88,
        "asbestos" => 0.80,
        _ => DEFAULT_RUNOFF_COEFFICIENT,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarvestingPotential {
    pub annual_liters: f64,
    /// Volume expected in the wettest monsoon month.
    pub peak_monthly_liters: f64,
    pub monthly_average_liters: f64,
    pub daily_average_liters: f64,
    pub runoff_coefficient: f64,
}

impl HarvestingPotential {
    pub fn calculate(roof_area_m2: f64, rainfall_mm: f64, roof_type: Option<&str>) -> Self {
        let runoff_coefficient = runoff_coefficient(roof_type);
        let annual_liters = roof_area_m2 * rainfall_mm * runoff_coefficient;

        Self {
            annual_liters,
            peak_monthly_liters: annual_liters * PEAK_MONTH_SHARE,
            monthly_average_liters: annual_liters / 12.0,
            daily_average_liters: annual_liters / 365.0,
            runoff_coefficient,
        }
    }
}

pub fn annual_demand_liters(household_size: f64) -> f64 {
    household_size * LITERS_PER_PERSON_PER_DAY * 365.0
}

/// Share of demand the harvest covers, capped at 100. Zero when there is no demand.
pub fn coverage_percentage(harvest_liters: f64, demand_liters: f64) -> f64 {
    if demand_liters > 0.0 {
        (harvest_liters / demand_liters * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Points for the alternative water sources a household already depends on. Sources are
/// comma separated; `_` and `-` count as spaces.
pub fn water_source_priority(existing_sources: &str) -> u32 {
    let points: u32 = existing_sources
        .split(',')
        .map(normalize_source)
        .filter_map(|source| {
            WATER_SOURCE_POINTS
                .iter()
                .find(|(name, _)| *name == source)
                .map(|(_, points)| *points)
        })
        .sum();
    points.min(PRIORITY_POINT_CAP)
}

fn normalize_source(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn priority_boost(priority_points: u32) -> f64 {
    (f64::from(priority_points) * PRIORITY_WEIGHT).min(PRIORITY_BOOST_CAP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityStatus {
    FullyFeasible,
    PartiallyFeasible,
    LimitedFeasible,
    NotFeasible,
}

impl FeasibilityStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::FullyFeasible
        } else if percentage >= 50.0 {
            Self::PartiallyFeasible
        } else if percentage >= 20.0 {
            Self::LimitedFeasible
        } else {
            Self::NotFeasible
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullyFeasible => "Fully Feasible",
            Self::PartiallyFeasible => "Partially Feasible",
            Self::LimitedFeasible => "Limited Feasible",
            Self::NotFeasible => "Not Feasible",
        }
    }
}

/// Coverage plus the water-source boost, capped at 100. Status tiers are picked from this
/// unrounded value.
pub fn boosted_coverage(harvest_liters: f64, demand_liters: f64, priority_points: u32) -> f64 {
    let boosted =
        coverage_percentage(harvest_liters, demand_liters) + priority_boost(priority_points);
    boosted.min(100.0)
}

/// [`boosted_coverage`] rounded to one decimal for display.
pub fn feasibility_percentage(
    harvest_liters: f64,
    demand_liters: f64,
    priority_points: u32,
) -> f64 {
    round_to_tenth(boosted_coverage(harvest_liters, demand_liters, priority_points))
}
