use crate::assessment::registry::CategoryId;

const LISTED_FACTORS: usize = 2;

fn editorial(category: CategoryId) -> Option<&'static str> {
    match category.0 {
        1 => Some("Best for constrained spaces with limited recharge potential"),
        2 => Some("Balances storage with simple recharge for small to medium properties"),
        3 | 4 => {
            Some("Comprehensive system for medium to large properties with good recharge potential")
        }
        5 => Some("Large-scale solution for institutions or community use"),
        _ => None,
    }
}

/// Human-readable summary of why a category scored the way it did.
pub(crate) fn recommendation_reason(
    category: CategoryId,
    match_factors: &[String],
    mismatch_factors: &[String],
) -> String {
    let mut sentences = Vec::new();

    if !match_factors.is_empty() {
        sentences.push(format!(
            "Matches {} key criteria: {}",
            match_factors.len(),
            leading(match_factors)
        ));
    }

    if !mismatch_factors.is_empty() && mismatch_factors.len() <= LISTED_FACTORS {
        sentences.push(format!(
            "Some criteria don't match: {}",
            leading(mismatch_factors)
        ));
    }

    if let Some(line) = editorial(category) {
        sentences.push(line.to_string());
    }

    sentences.join(". ")
}

fn leading(factors: &[String]) -> String {
    factors
        .iter()
        .take(LISTED_FACTORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
