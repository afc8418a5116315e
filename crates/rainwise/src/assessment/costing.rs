//! Capital cost, subsidy, payback and ROI estimation.
//!
//! Only categories 1 through 6 carry a bill of materials. Any other category is costed with
//! the category-1 table and the analysis reports that the fallback was used.

use serde::{Deserialize, Serialize};

use super::registry::CategoryId;
use super::round_to_tenth;

pub const MATERIALS_PREMIUM: f64 = 1.20;
pub const CONTINGENCY: f64 = 1.15;
const ROI_HORIZON_YEARS: f64 = 20.0;

/// Category 1, also the fallback for categories without a table of their own.
const STORAGE_TANK_TABLE: CostTable = CostTable {
    components: &[
        ("storage_tank", 25_000.0),
        ("first_flush_diverter", 4_000.0),
        ("filtration_unit", 8_000.0),
        ("piping_and_gutters", 7_000.0),
        ("installation", 5_000.0),
    ],
    payback_years: 4.5,
    annual_savings: 10_000.0,
};

const COST_TABLES: [(u8, CostTable); 6] = [
    (1, STORAGE_TANK_TABLE),
    (
        2,
        CostTable {
            components: &[
                ("storage_tank", 30_000.0),
                ("recharge_pit", 15_000.0),
                ("filter_media", 6_000.0),
                ("piping_and_gutters", 8_000.0),
                ("installation", 8_000.0),
            ],
            payback_years: 5.0,
            annual_savings: 14_000.0,
        },
    ),
    (
        3,
        CostTable {
            components: &[
                ("storage_tank", 45_000.0),
                ("recharge_trench", 25_000.0),
                ("filtration_unit", 10_000.0),
                ("piping_and_gutters", 10_000.0),
                ("installation", 12_000.0),
            ],
            payback_years: 5.5,
            annual_savings: 19_000.0,
        },
    ),
    (
        4,
        CostTable {
            components: &[
                ("storage_tank", 60_000.0),
                ("recharge_shaft", 55_000.0),
                ("filtration_unit", 15_000.0),
                ("piping_and_gutters", 15_000.0),
                ("installation", 20_000.0),
            ],
            payback_years: 6.5,
            annual_savings: 26_000.0,
        },
    ),
    (
        5,
        CostTable {
            components: &[
                ("storage_tank", 150_000.0),
                ("percolation_pond", 120_000.0),
                ("check_dams", 60_000.0),
                ("filtration_unit", 20_000.0),
                ("piping_and_gutters", 25_000.0),
                ("installation", 40_000.0),
            ],
            payback_years: 8.0,
            annual_savings: 52_000.0,
        },
    ),
    (
        6,
        CostTable {
            components: &[
                ("small_storage_tank", 8_000.0),
                ("first_flush_diverter", 3_000.0),
                ("filtration_unit", 4_000.0),
                ("piping_and_gutters", 3_000.0),
                ("installation", 3_000.0),
            ],
            payback_years: 3.5,
            annual_savings: 6_000.0,
        },
    ),
];

#[derive(Debug, Clone, Copy)]
struct CostTable {
    components: &'static [(&'static str, f64)],
    payback_years: f64,
    annual_savings: f64,
}

impl CostTable {
    fn for_category(id: CategoryId) -> (Self, bool) {
        COST_TABLES
            .iter()
            .find(|(table_id, _)| *table_id == id.0)
            .map(|(_, table)| (*table, false))
            .unwrap_or((STORAGE_TANK_TABLE, true))
    }

    fn base_cost(&self) -> f64 {
        self.components.iter().map(|(_, cost)| cost).sum()
    }
}

/// Inputs to the estimator. Labels are matched case-insensitively; unknown labels are neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRequest {
    pub category_id: CategoryId,
    pub location_type: String,
    pub soil_type: String,
    /// Storage capacity in liters; only selects the subsidy tier.
    pub system_size_liters: f64,
    #[serde(default)]
    pub intended_use: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComponent {
    pub name: &'static str,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostModifiers {
    pub location: f64,
    pub soil: f64,
    pub materials_premium: f64,
    pub contingency: f64,
    pub intended_use: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis {
    pub category_id: CategoryId,
    /// True when the category had no table and category 1's was used.
    pub used_fallback_table: bool,
    pub base_cost: f64,
    pub base_components: Vec<CostComponent>,
    pub component_breakdown: Vec<CostComponent>,
    pub modifiers: CostModifiers,
    pub total_cost: f64,
    pub subsidy_amount: f64,
    pub net_investment: f64,
    /// Static per-category figure.
    pub payback_years: f64,
    /// Net investment divided by annual savings; consistent with `total_cost`.
    pub derived_payback_years: f64,
    pub annual_savings: f64,
    pub roi_percentage: f64,
}

pub fn location_modifier(location_type: &str) -> f64 {
    match normalize(location_type).as_str() {
        "urban" => 1.15,
        "rural" => 0.9,
        _ => 1.0,
    }
}

pub fn soil_modifier(soil_type: &str) -> f64 {
    match normalize(soil_type).as_str() {
        "hard" => 1.25,
        "clay" => 1.1,
        "soft" => 0.95,
        "sandy" => 0.9,
        _ => 1.0,
    }
}

pub fn intended_use_modifier(intended_use: Option<&str>) -> f64 {
    match intended_use.map(normalize).as_deref() {
        Some("potable" | "drinking" | "cooking") => 1.25,
        Some("gardening" | "irrigation" | "landscaping") => 0.9,
        _ => 1.0,
    }
}

pub fn subsidy_for(system_size_liters: f64) -> f64 {
    if system_size_liters <= 1_000.0 {
        10_000.0
    } else if system_size_liters <= 2_000.0 {
        20_000.0
    } else if system_size_liters <= 5_000.0 {
        35_000.0
    } else {
        50_000.0
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

pub fn estimate_costs_and_payback(request: &CostRequest) -> CostAnalysis {
    let (table, used_fallback_table) = CostTable::for_category(request.category_id);

    let location = location_modifier(&request.location_type);
    let soil = soil_modifier(&request.soil_type);
    let intended_use = intended_use_modifier(request.intended_use.as_deref());
    let total_modifier = location * soil * MATERIALS_PREMIUM * CONTINGENCY * intended_use;

    let base_cost = table.base_cost();
    let total_cost = base_cost * total_modifier;
    let subsidy_amount = subsidy_for(request.system_size_liters);
    let net_investment = total_cost - subsidy_amount;

    let roi_percentage = if net_investment > 0.0 {
        let lifetime_savings = table.annual_savings * ROI_HORIZON_YEARS;
        round_to_tenth((lifetime_savings - net_investment) / net_investment * 100.0)
    } else {
        0.0
    };
    let derived_payback_years = if net_investment > 0.0 {
        round_to_tenth(net_investment / table.annual_savings)
    } else {
        0.0
    };

    let base_components = components(&table, 1.0);
    let component_breakdown = components(&table, total_modifier);

    CostAnalysis {
        category_id: request.category_id,
        used_fallback_table,
        base_cost,
        base_components,
        component_breakdown,
        modifiers: CostModifiers {
            location,
            soil,
            materials_premium: MATERIALS_PREMIUM,
            contingency: CONTINGENCY,
            intended_use,
            total: total_modifier,
        },
        total_cost: round_to_tenth(total_cost),
        subsidy_amount,
        net_investment: round_to_tenth(net_investment),
        payback_years: table.payback_years,
        derived_payback_years,
        annual_savings: table.annual_savings,
        roi_percentage,
    }
}

fn components(table: &CostTable, modifier: f64) -> Vec<CostComponent> {
    table
        .components
        .iter()
        .map(|&(name, cost)| CostComponent {
            name,
            cost: round_to_tenth(cost * modifier),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: u8, location: &str, soil: &str, size: f64) -> CostRequest {
        CostRequest {
            category_id: CategoryId(category),
            location_type: location.to_string(),
            soil_type: soil.to_string(),
            system_size_liters: size,
            intended_use: None,
        }
    }

    #[test]
    fn urban_clay_storage_tank_matches_reference_figures() {
        let analysis = estimate_costs_and_payback(&request(1, "urban", "clay", 1_000.0));

        assert_eq!(analysis.base_cost, 49_000.0);
        assert!((analysis.total_cost - 85_539.3).abs() < 0.05);
        assert_eq!(analysis.subsidy_amount, 10_000.0);
        assert!((analysis.net_investment - 75_539.3).abs() < 0.05);
        assert_eq!(analysis.annual_savings, 10_000.0);
        assert_eq!(analysis.payback_years, 4.5);
        assert_eq!(analysis.roi_percentage, 164.8);
        assert_eq!(analysis.derived_payback_years, 7.6);
        assert!(!analysis.used_fallback_table);
    }

    #[test]
    fn uncosted_categories_fall_back_to_the_storage_tank_table() {
        let fallback = estimate_costs_and_payback(&request(9, "rural", "sandy", 3_000.0));
        let storage = estimate_costs_and_payback(&request(1, "rural", "sandy", 3_000.0));

        assert!(fallback.used_fallback_table);
        assert_eq!(fallback.base_components, storage.base_components);
        assert_eq!(fallback.total_cost, storage.total_cost);
        assert_eq!(fallback.category_id, CategoryId(9));
    }

    #[test]
    fn subsidy_tiers_include_their_upper_bound() {
        assert_eq!(subsidy_for(1_000.0), 10_000.0);
        assert_eq!(subsidy_for(1_000.5), 20_000.0);
        assert_eq!(subsidy_for(2_000.0), 20_000.0);
        assert_eq!(subsidy_for(5_000.0), 35_000.0);
        assert_eq!(subsidy_for(25_000.0), 50_000.0);
    }

    #[test]
    fn every_soil_and_location_has_its_modifier() {
        let soils = [
            ("hard", 1.25),
            ("Clay", 1.1),
            ("loamy", 1.0),
            ("soft", 0.95),
            (" sandy ", 0.9),
            ("peat", 1.0),
        ];
        for (soil, expected) in soils {
            assert_eq!(soil_modifier(soil), expected, "soil {soil:?}");
        }

        let locations = [("Urban", 1.15), ("semi-urban", 1.0), ("rural", 0.9), ("", 1.0)];
        for (location, expected) in locations {
            assert_eq!(location_modifier(location), expected, "location {location:?}");
        }
    }

    #[test]
    fn soil_modifier_flows_into_the_analysis() {
        let hard = estimate_costs_and_payback(&request(2, "semi-urban", "hard", 8_000.0));
        let soft = estimate_costs_and_payback(&request(2, "semi-urban", "soft", 8_000.0));
        let loamy = estimate_costs_and_payback(&request(2, "semi-urban", "loamy", 8_000.0));

        assert_eq!(hard.modifiers.soil, 1.25);
        assert_eq!(soft.modifiers.soil, 0.95);
        assert!(hard.total_cost > loamy.total_cost);
        assert!(soft.total_cost < loamy.total_cost);
    }

    #[test]
    fn intended_use_scales_the_total() {
        assert_eq!(intended_use_modifier(Some("Drinking")), 1.25);
        assert_eq!(intended_use_modifier(Some("irrigation")), 0.9);
        assert_eq!(intended_use_modifier(Some("general")), 1.0);
        assert_eq!(intended_use_modifier(None), 1.0);
    }

    #[test]
    fn non_positive_net_investment_yields_zero_roi() {
        // 21,000 × 0.9 × 0.9 × 1.38 × 0.9 leaves less than the 50,000 subsidy.
        let mut cheap = request(6, "rural", "sandy", 25_000.0);
        cheap.intended_use = Some("gardening".to_string());
        let analysis = estimate_costs_and_payback(&cheap);

        assert!(analysis.net_investment < 0.0);
        assert_eq!(analysis.roi_percentage, 0.0);
        assert_eq!(analysis.derived_payback_years, 0.0);
    }

    #[test]
    fn component_breakdown_applies_the_combined_modifier() {
        let analysis = estimate_costs_and_payback(&request(2, "semi-urban", "loamy", 8_000.0));
        let total: f64 = analysis
            .component_breakdown
            .iter()
            .map(|component| component.cost)
            .sum();

        assert!((analysis.modifiers.total - 1.38).abs() < 1e-9);
        assert!((total - analysis.total_cost).abs() < 0.5);
        assert_eq!(analysis.base_components[1].name, "recharge_pit");
    }
}
