//! FAQ category selection and answer templating.

use std::collections::HashSet;

use dpm_core::faq::{
    CATEGORY_MULTIPLE_LOCATIONS, CATEGORY_PARKING, CATEGORY_WELCOME, DEFAULT_CATEGORY_IDS,
    MEMBERSHIP_TYPE_PLACEHOLDER, PRICE_PLACEHOLDER,
};
use dpm_core::{FaqCatalog, FaqCategory, MembershipType, Recommendation};

/// Categories relevant to this recommendation, in catalog order.
///
/// The defaults are always shown. `welcome` and `multiple-locations` follow
/// the recommended tier, and `parking` appears once any Science visit is planned.
#[must_use]
pub fn select_categories<'a>(
    catalog: &'a FaqCatalog,
    recommendation: Option<&Recommendation>,
) -> Vec<&'a FaqCategory> {
    let mut wanted: HashSet<&str> = DEFAULT_CATEGORY_IDS.iter().copied().collect();

    if let Some(rec) = recommendation {
        match rec.best_membership_type {
            MembershipType::Welcome => {
                wanted.insert(CATEGORY_WELCOME);
            }
            MembershipType::ScienceKids => {
                wanted.insert(CATEGORY_MULTIPLE_LOCATIONS);
            }
            _ => {}
        }
        if rec.science_visits > 0 {
            wanted.insert(CATEGORY_PARKING);
        }
    }

    let selected: Vec<&FaqCategory> = catalog
        .categories
        .iter()
        .filter(|category| wanted.contains(category.id.as_str()))
        .collect();

    tracing::debug!(
        selected = ?selected.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        "selected FAQ categories"
    );

    selected
}

/// Fill the placeholders in an answer template.
///
/// Without a recommendation the template is returned unchanged.
#[must_use]
pub fn render_answer(template: &str, recommendation: Option<&Recommendation>) -> String {
    let Some(rec) = recommendation else {
        return template.to_string();
    };

    let price = format!("${}", rec.promo_cost_or_zero().normalize());

    template
        .replace(
            MEMBERSHIP_TYPE_PLACEHOLDER,
            rec.best_membership_type.display_name(),
        )
        .replace(PRICE_PLACEHOLDER, &price)
}

/// Copy of `category` with every answer rendered for `recommendation`.
#[must_use]
pub fn render_category(
    category: &FaqCategory,
    recommendation: Option<&Recommendation>,
) -> FaqCategory {
    let mut rendered = category.clone();
    for question in &mut rendered.questions {
        question.answer = render_answer(&question.answer, recommendation);
    }
    rendered
}
