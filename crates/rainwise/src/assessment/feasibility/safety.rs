use serde::Serialize;

use crate::assessment::domain::{SiteAttribute, SiteContext};

const MIN_GROUNDWATER_DEPTH_M: f64 = 3.0;
const MIN_INFILTRATION_MM_PER_HR: f64 = 5.0;
const SAFE_ALTERNATIVES: [&str; 3] = [
    "Storage tank only",
    "Community structures",
    "Water conservation",
];

/// Whether artificial recharge is advisable at the site. Reported next to the category,
/// never used to override it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RechargeSafety {
    pub is_safe: bool,
    pub safety_issues: Vec<&'static str>,
    pub alternatives: Vec<&'static str>,
}

pub fn check_recharge_safety(context: &SiteContext) -> RechargeSafety {
    let mut issues = Vec::new();

    if context
        .number(SiteAttribute::GroundwaterDepthM)
        .is_some_and(|depth| depth < MIN_GROUNDWATER_DEPTH_M)
    {
        issues.push("Shallow groundwater (<3m) - Risk of waterlogging and contamination");
    }

    if context
        .text(SiteAttribute::GroundwaterQuality)
        .map(|quality| quality.trim().to_ascii_lowercase())
        .is_some_and(|quality| quality == "poor" || quality == "contaminated")
    {
        issues.push("Poor groundwater quality - Recharge may worsen contamination");
    }

    if context
        .number(SiteAttribute::InfiltrationRateMmPerHr)
        .is_some_and(|rate| rate < MIN_INFILTRATION_MM_PER_HR)
    {
        issues.push("Low soil infiltration (<5mm/hr) - Water will stagnate");
    }

    if context
        .text(SiteAttribute::AquiferRemarks)
        .map(str::to_ascii_lowercase)
        .is_some_and(|remarks| remarks.contains("overexploited") || remarks.contains("prohibited"))
    {
        issues.push("Regulatory restrictions - Check CGWA guidelines");
    }

    let is_safe = issues.is_empty();
    RechargeSafety {
        is_safe,
        safety_issues: issues,
        alternatives: if is_safe {
            Vec::new()
        } else {
            SAFE_ALTERNATIVES.to_vec()
        },
    }
}
