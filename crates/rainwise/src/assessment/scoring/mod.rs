//! Criteria evaluation and confidence ranking.

mod config;
mod reason;
mod rules;
mod tolerance;
pub mod views;

pub use config::ScoringPolicy;
pub use tolerance::{ToleranceBand, ToleranceTable};
pub use views::CategoryRecommendation;

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{SiteAttribute, SiteContext, UserPreferences};
use super::registry::{CategoryDefinition, CategoryId, CategoryRegistry};
use super::round_to_tenth;

const ALTERNATIVE_COUNT: usize = 2;

/// Scores every catalogued category against a site. Holds no per-call state and can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    registry: Arc<CategoryRegistry>,
    tolerance: ToleranceTable,
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(registry: Arc<CategoryRegistry>, policy: ScoringPolicy) -> Self {
        let tolerance = ToleranceTable::derive(&registry, policy.tolerance_expansion);
        Self {
            registry,
            tolerance,
            policy,
        }
    }

    /// Shared standard catalog with the default policy.
    pub fn standard() -> Self {
        Self::new(CategoryRegistry::shared(), ScoringPolicy::default())
    }

    pub fn with_tolerance(mut self, tolerance: ToleranceTable) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn tolerance(&self) -> &ToleranceTable {
        &self.tolerance
    }

    pub fn score(
        &self,
        category: &CategoryDefinition,
        context: &SiteContext,
        preferences: &UserPreferences,
    ) -> ScoreResult {
        let tally = rules::score_category(
            category,
            context,
            &self.tolerance,
            &self.policy,
            preferences,
        );
        debug!(category = %category.id, score = tally.score, "scored category");

        let recommendation_reason = reason::recommendation_reason(
            category.id,
            &tally.match_factors,
            &tally.mismatch_factors,
        );

        ScoreResult {
            category: CategorySummary::from(category),
            score: tally.score,
            confidence: confidence(tally.score),
            match_factors: tally.match_factors,
            mismatch_factors: tally.mismatch_factors,
            recommendation_reason,
        }
    }

    /// Full deterministic ordering: score descending, ties kept in registry order.
    pub fn rank(&self, context: &SiteContext, preferences: &UserPreferences) -> CategoryRanking {
        let mut scores: Vec<ScoreResult> = self
            .registry
            .categories()
            .iter()
            .map(|category| self.score(category, context, preferences))
            .collect();
        scores.sort_by(|left, right| right.score.cmp(&left.score));

        CategoryRanking { scores }
    }

    /// Ranks the site and reduces the outcome to a [`CategoryRecommendation`].
    pub fn recommend(
        &self,
        context: &SiteContext,
        preferences: Option<&UserPreferences>,
    ) -> CategoryRecommendation {
        let ranking = self.rank(context, &preferences.copied().unwrap_or_default());

        let read: BTreeSet<SiteAttribute> = self
            .registry
            .categories()
            .iter()
            .flat_map(|category| category.criteria.criteria())
            .map(|criterion| criterion.attribute)
            .collect();
        let factors = context
            .iter()
            .map(|(attribute, _)| attribute)
            .filter(|attribute| read.contains(attribute))
            .collect();

        CategoryRecommendation::from_ranking(&ranking, factors, preferences.is_some())
    }
}

/// Score normalised onto 0..=100 with one decimal.
fn confidence(score: i32) -> f64 {
    round_to_tenth(f64::from(score.clamp(0, 100)))
}

/// Category fields carried alongside a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub recommended_structures: Vec<&'static str>,
    pub recharge_feasible: bool,
}

impl From<&CategoryDefinition> for CategorySummary {
    fn from(category: &CategoryDefinition) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            recommended_structures: category.recommended_structures.clone(),
            recharge_feasible: category.recharge_feasible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub category: CategorySummary,
    pub score: i32,
    pub confidence: f64,
    pub match_factors: Vec<String>,
    pub mismatch_factors: Vec<String>,
    pub recommendation_reason: String,
}

/// Every category's result, best first. Never empty: registries always hold a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRanking {
    scores: Vec<ScoreResult>,
}

impl CategoryRanking {
    pub fn primary(&self) -> &ScoreResult {
        &self.scores[0]
    }

    pub fn alternatives(&self) -> &[ScoreResult] {
        let end = self.scores.len().min(1 + ALTERNATIVE_COUNT);
        &self.scores[1.min(end)..end]
    }

    pub fn all(&self) -> &[ScoreResult] {
        &self.scores
    }

    pub fn position(&self, id: CategoryId) -> Option<usize> {
        self.scores.iter().position(|result| result.category.id == id)
    }
}
