use crate::assessment::domain::{ComplexityPreference, SiteContext, UserPreferences};
use crate::assessment::registry::{CategoryDefinition, CriteriaSet, Criterion};

use super::config::ScoringPolicy;
use super::tolerance::ToleranceTable;

pub(crate) struct CategoryTally {
    pub score: i32,
    pub match_factors: Vec<String>,
    pub mismatch_factors: Vec<String>,
}

pub(crate) fn score_category(
    category: &CategoryDefinition,
    context: &SiteContext,
    tolerance: &ToleranceTable,
    policy: &ScoringPolicy,
    preferences: &UserPreferences,
) -> CategoryTally {
    let mut tally = match &category.criteria {
        CriteriaSet::AnyOf(criteria) => score_any_of(criteria, context, policy),
        CriteriaSet::AllOf(criteria) => {
            score_all_of(category, criteria, context, tolerance, policy)
        }
    };

    let preferred = match preferences.complexity {
        ComplexityPreference::Simple => !category.recharge_feasible,
        ComplexityPreference::Advanced => category.recharge_feasible,
        ComplexityPreference::Balanced => false,
    };
    if preferred {
        tally.score += policy.preference_bonus;
    }

    tally
}

fn score_any_of(
    criteria: &[Criterion],
    context: &SiteContext,
    policy: &ScoringPolicy,
) -> CategoryTally {
    let mut score = 0;
    let mut match_factors = Vec::new();
    let mut mismatch_factors = Vec::new();

    for criterion in criteria {
        let Some(value) = context.get(criterion.attribute) else {
            continue;
        };
        if criterion.holds(value) {
            score += policy.any_of_match_points;
            match_factors.push(format!("Critical factor: {}", criterion.attribute));
        }
    }

    if match_factors.is_empty() {
        score -= policy.any_of_no_match_penalty;
        mismatch_factors.push("No critical factors match".to_string());
    }

    CategoryTally {
        score,
        match_factors,
        mismatch_factors,
    }
}

fn score_all_of(
    category: &CategoryDefinition,
    criteria: &[Criterion],
    context: &SiteContext,
    tolerance: &ToleranceTable,
    policy: &ScoringPolicy,
) -> CategoryTally {
    let mut score = 0;
    let mut match_factors = Vec::new();
    let mut mismatch_factors = Vec::new();
    let mut matched = 0usize;
    let mut partial = 0usize;
    let mut failed = 0usize;

    for criterion in criteria {
        let Some(value) = context.get(criterion.attribute) else {
            score -= policy.missing_attribute_penalty;
            continue;
        };

        if criterion.holds(value) {
            matched += 1;
            score += policy.strict_match_points;
            match_factors.push(format!("{}: {value}", criterion.attribute));
            continue;
        }

        let close = value.as_number().is_some_and(|number| {
            tolerance
                .band(category.id, criterion.attribute)
                .is_some_and(|band| band.contains(number))
        });

        if close {
            partial += 1;
            score += policy.close_match_points;
            match_factors.push(format!("{}: {value} (close match)", criterion.attribute));
        } else {
            failed += 1;
            score -= policy.mismatch_penalty;
            mismatch_factors.push(format!(
                "{}: {value} (expected different range)",
                criterion.attribute
            ));
        }
    }

    let total = criteria.len();
    if matched == total && failed == 0 {
        score += policy.complete_match_bonus;
        match_factors.push("Complete criteria match".to_string());
    } else if matched + partial + 1 >= total && failed <= 1 {
        score += policy.near_complete_bonus;
        match_factors.push("Near-complete criteria match".to_string());
    }

    CategoryTally {
        score,
        match_factors,
        mismatch_factors,
    }
}
