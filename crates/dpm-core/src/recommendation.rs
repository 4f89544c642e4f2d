use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::breakdown::Breakdown;
use crate::membership::MembershipType;
use crate::visits::VisitCounts;

/// The membership recommendation computed upstream for one family.
///
/// Read-only input: this crate never derives or mutates it, it only reads
/// the fields below when building page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub best_membership_type: MembershipType,
    #[serde(default)]
    pub best_membership_label: String,
    /// Promotional price of the recommended tier, if one is running.
    #[serde(default)]
    pub best_membership_promo_cost: Option<Decimal>,
    #[serde(default)]
    pub best_membership_savings: Decimal,
    /// Upstream figure, possibly fractional or out of range; consumers clamp it.
    #[serde(default)]
    pub savings_percentage: Decimal,
    #[serde(default)]
    pub regular_admission_cost: Decimal,
    #[serde(default)]
    pub total_family_members: u32,
    /// Passed through to the page unmodified.
    #[serde(default)]
    pub purchase_link: String,
    #[serde(default)]
    pub science_visits: u32,
    #[serde(default)]
    pub dpkh_visits: u32,
    #[serde(default)]
    pub dpkr_visits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl Recommendation {
    #[must_use]
    pub fn visit_counts(&self) -> VisitCounts {
        VisitCounts::new(self.science_visits, self.dpkh_visits, self.dpkr_visits)
    }

    /// Promo cost, or zero when no promotion applies.
    #[must_use]
    pub fn promo_cost_or_zero(&self) -> Decimal {
        self.best_membership_promo_cost.unwrap_or(Decimal::ZERO)
    }
}
