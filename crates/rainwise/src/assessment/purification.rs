//! Treatment sequence selection by intended water use.

use serde::Serialize;

const BASE_SEQUENCE: [&str; 3] = [
    "Gutter mesh/screen - Remove leaves, twigs, debris",
    "First-flush diverter - Discard initial dirty runoff (5-10 min)",
    "Silt trap chamber - Allow heavy particles to settle",
];

pub const DEFAULT_INTENDED_USE: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentTier {
    Potable,
    Basic,
    Standard,
}

impl TreatmentTier {
    pub fn for_use(intended_use: &str) -> Self {
        match intended_use.trim().to_ascii_lowercase().as_str() {
            "drinking" | "potable" | "cooking" => Self::Potable,
            "gardening" | "toilet" | "non-potable" => Self::Basic,
            _ => Self::Standard,
        }
    }

    const fn extra_steps(self) -> &'static [&'static str] {
        match self {
            Self::Potable => &[
                "Multi-layer filter - Sand, gravel, activated charcoal",
                "UV disinfection or chlorination",
                "Optional: RO system for drinking water",
            ],
            Self::Basic => &["Simple sand-gravel filter", "Mesh filter for final screening"],
            Self::Standard => &["Sand-gravel-charcoal filter"],
        }
    }

    pub const fn maintenance_schedule(self) -> &'static str {
        match self {
            Self::Potable => "Monthly filter cleaning, quarterly media replacement",
            Self::Basic => "Quarterly cleaning, annual media check",
            Self::Standard => "Bi-monthly cleaning",
        }
    }

    pub const fn estimated_cost(self) -> &'static str {
        match self {
            Self::Potable => "₹15,000-30,000 for complete treatment",
            Self::Basic => "₹5,000-12,000 for basic treatment",
            Self::Standard => "₹8,000-18,000 for standard treatment",
        }
    }

    pub const fn quality_label(self) -> &'static str {
        match self {
            Self::Potable => "Potable",
            Self::Basic | Self::Standard => "Non-potable suitable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurificationPlan {
    pub tier: TreatmentTier,
    pub treatment_sequence: Vec<&'static str>,
    pub maintenance_schedule: &'static str,
    pub estimated_cost: &'static str,
    pub water_quality_expected: &'static str,
}

pub fn plan_purification(intended_use: &str) -> PurificationPlan {
    let tier = TreatmentTier::for_use(intended_use);
    let treatment_sequence = BASE_SEQUENCE
        .iter()
        .chain(tier.extra_steps())
        .copied()
        .collect();

    PurificationPlan {
        tier,
        treatment_sequence,
        maintenance_schedule: tier.maintenance_schedule(),
        estimated_cost: tier.estimated_cost(),
        water_quality_expected: tier.quality_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_plan_starts_with_screening_first_flush_and_silt_trap() {
        for usage in ["drinking", "toilet", "general", ""] {
            let plan = plan_purification(usage);
            assert_eq!(&plan.treatment_sequence[..3], &BASE_SEQUENCE[..]);
        }
    }

    #[test]
    fn potable_uses_add_disinfection() {
        let plan = plan_purification("Cooking");
        assert_eq!(plan.tier, TreatmentTier::Potable);
        assert_eq!(plan.treatment_sequence.len(), 6);
        assert!(plan
            .treatment_sequence
            .contains(&"UV disinfection or chlorination"));
        assert_eq!(plan.water_quality_expected, "Potable");
    }

    #[test]
    fn non_potable_uses_get_basic_filtration() {
        let plan = plan_purification("non-potable");
        assert_eq!(plan.tier, TreatmentTier::Basic);
        assert_eq!(plan.maintenance_schedule, "Quarterly cleaning, annual media check");
        assert_eq!(plan.water_quality_expected, "Non-potable suitable");
    }

    #[test]
    fn anything_else_gets_the_standard_filter() {
        let plan = plan_purification(DEFAULT_INTENDED_USE);
        assert_eq!(plan.tier, TreatmentTier::Standard);
        assert_eq!(
            plan.treatment_sequence.last(),
            Some(&"Sand-gravel-charcoal filter")
        );
        assert_eq!(plan.estimated_cost, "₹8,000-18,000 for standard treatment");
    }
}
