//! Promotional banner copy for the recommended membership.

use dpm_core::Recommendation;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::breakdown::SAVINGS_PERCENTAGE_CAP;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoBanner {
    pub headline: String,
    pub savings: Decimal,
    pub savings_percentage: u8,
    pub promo_cost: Option<Decimal>,
    pub family_members: u32,
    /// Copied verbatim from the recommendation.
    pub purchase_link: String,
}

/// Banner for a recommendation, or `None` when there is no membership to promote
/// or nothing saved.
#[must_use]
pub fn promo_banner(recommendation: &Recommendation) -> Option<PromoBanner> {
    let kind = recommendation.best_membership_type;
    if !kind.is_membership() || recommendation.best_membership_savings <= Decimal::ZERO {
        tracing::debug!(membership = %kind, "no promo banner for recommendation");
        return None;
    }

    let name = if recommendation.best_membership_label.trim().is_empty() {
        kind.display_name()
    } else {
        recommendation.best_membership_label.as_str()
    };

    let savings_percentage = clamp_percentage(recommendation.savings_percentage);

    let headline = if savings_percentage > 0 {
        format!("Save {savings_percentage}% with a {name} membership")
    } else {
        format!(
            "Save ${} with a {name} membership",
            recommendation.best_membership_savings.normalize()
        )
    };

    Some(PromoBanner {
        headline,
        savings: recommendation.best_membership_savings,
        savings_percentage,
        promo_cost: recommendation.best_membership_promo_cost,
        family_members: recommendation.total_family_members,
        purchase_link: recommendation.purchase_link.clone(),
    })
}

/// Whole percent in `[0, SAVINGS_PERCENTAGE_CAP]`; halves round up.
fn clamp_percentage(raw: Decimal) -> u8 {
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
        .to_u8()
        .unwrap_or(SAVINGS_PERCENTAGE_CAP)
        .min(SAVINGS_PERCENTAGE_CAP)
}
