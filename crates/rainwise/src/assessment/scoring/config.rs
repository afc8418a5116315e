use serde::{Deserialize, Serialize};

/// Point weights applied by the criteria evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub any_of_match_points: i32,
    pub any_of_no_match_penalty: i32,
    pub strict_match_points: i32,
    pub close_match_points: i32,
    pub mismatch_penalty: i32,
    /// Deducted once per AllOf attribute the site does not describe.
    pub missing_attribute_penalty: i32,
    pub complete_match_bonus: i32,
    pub near_complete_bonus: i32,
    pub preference_bonus: i32,
    /// Fraction by which strict numeric ranges widen into tolerance bands.
    pub tolerance_expansion: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            any_of_match_points: 30,
            any_of_no_match_penalty: 50,
            strict_match_points: 25,
            close_match_points: 10,
            mismatch_penalty: 15,
            missing_attribute_penalty: 5,
            complete_match_bonus: 25,
            near_complete_bonus: 10,
            preference_bonus: 10,
            tolerance_expansion: 0.2,
        }
    }
}
