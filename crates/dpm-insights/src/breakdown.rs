//! Cost breakdown aggregation.

use dpm_core::Breakdown;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Highest savings percentage the page will ever claim.
pub const SAVINGS_PERCENTAGE_CAP: u8 = 90;

/// Totals derived from a [`Breakdown`]. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// Sum of all non-negative line items.
    pub membership_cost: Decimal,
    /// Sum of the absolute values of all negative line items.
    pub guest_savings: Decimal,
    pub total_cost: Decimal,
    pub total_savings: Decimal,
    /// Whole percent in `[0, SAVINGS_PERCENTAGE_CAP]`.
    pub savings_percentage: u8,
}

impl CostSummary {
    /// `true` when there was nothing to aggregate; the page hides the table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == CostSummary::default()
    }
}

/// Aggregate a breakdown against what the family would pay in regular admission.
///
/// `total_cost` and `total_savings` are floored at zero and the savings
/// percentage is capped at [`SAVINGS_PERCENTAGE_CAP`]. A non-positive
/// `regular_admission_cost` always yields a percentage of 0.
#[must_use]
pub fn compute_summary(breakdown: &Breakdown, regular_admission_cost: Decimal) -> CostSummary {
    if breakdown.is_empty() {
        return CostSummary::default();
    }

    let membership_cost = breakdown
        .charges()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.cost));
    let guest_savings = breakdown
        .savings()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.display_amount()));

    let total_cost = membership_cost
        .saturating_sub(guest_savings)
        .max(Decimal::ZERO);
    let total_savings = regular_admission_cost
        .saturating_sub(total_cost)
        .max(Decimal::ZERO);
    let savings_percentage = savings_percentage(total_savings, regular_admission_cost);

    tracing::debug!(
        items = breakdown.items.len(),
        %membership_cost,
        %guest_savings,
        %total_cost,
        %total_savings,
        savings_percentage,
        "computed cost summary"
    );

    CostSummary {
        membership_cost,
        guest_savings,
        total_cost,
        total_savings,
        savings_percentage,
    }
}

fn savings_percentage(total_savings: Decimal, regular_admission_cost: Decimal) -> u8 {
    if regular_admission_cost <= Decimal::ZERO {
        return 0;
    }

    let Some(percent) = total_savings
        .checked_div(regular_admission_cost)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    else {
        return SAVINGS_PERCENTAGE_CAP;
    };

    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(SAVINGS_PERCENTAGE_CAP)
        .min(SAVINGS_PERCENTAGE_CAP)
}
