use serde::Serialize;

use crate::assessment::domain::SiteAttribute;
use crate::assessment::registry::CategoryId;

use super::{CategoryRanking, ScoreResult};

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedCategory {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub confidence_score: f64,
    pub recommendation_reason: String,
    pub structures: Vec<&'static str>,
    pub recharge_feasible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeCategory {
    pub id: CategoryId,
    pub name: &'static str,
    pub confidence_score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationLogic {
    /// Site attributes that at least one category criterion reads.
    pub scoring_factors: Vec<SiteAttribute>,
    pub user_preferences_considered: bool,
    pub total_categories_evaluated: usize,
}

/// Ranking reduced to the shape consumers display: a pick, two runners-up and the audit trail.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRecommendation {
    pub recommended_category: RecommendedCategory,
    pub alternative_categories: Vec<AlternativeCategory>,
    pub recommendation_logic: RecommendationLogic,
}

impl CategoryRecommendation {
    pub(crate) fn from_ranking(
        ranking: &CategoryRanking,
        scoring_factors: Vec<SiteAttribute>,
        user_preferences_considered: bool,
    ) -> Self {
        let primary = ranking.primary();

        Self {
            recommended_category: RecommendedCategory {
                id: primary.category.id,
                name: primary.category.name,
                description: primary.category.description,
                confidence_score: primary.confidence,
                recommendation_reason: primary.recommendation_reason.clone(),
                structures: primary.category.recommended_structures.clone(),
                recharge_feasible: primary.category.recharge_feasible,
            },
            alternative_categories: ranking.alternatives().iter().map(alternative).collect(),
            recommendation_logic: RecommendationLogic {
                scoring_factors,
                user_preferences_considered,
                total_categories_evaluated: ranking.all().len(),
            },
        }
    }
}

fn alternative(result: &ScoreResult) -> AlternativeCategory {
    AlternativeCategory {
        id: result.category.id,
        name: result.category.name,
        confidence_score: result.confidence,
        reason: result.recommendation_reason.clone(),
    }
}
