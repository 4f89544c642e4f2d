use serde::{Deserialize, Serialize};

/// Name used wherever a membership type has no dedicated label.
pub const GENERIC_BRAND_NAME: &str = "Discovery Place";

/// Membership tier recommended to a family.
///
/// Wire values match the upstream recommendation payload (`"Science"`,
/// `"DPKH"`, ...). Anything unrecognized deserializes as [`MembershipType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipType {
    Science,
    #[serde(rename = "DPKH")]
    Dpkh,
    #[serde(rename = "DPKR")]
    Dpkr,
    ScienceKids,
    Welcome,
    PayAsYouGo,
    #[serde(other)]
    Other,
}

impl MembershipType {
    /// Human-readable name substituted into customer-facing copy.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            MembershipType::Science => "Discovery Place Science",
            MembershipType::Dpkh => "Discovery Place Kids-Huntersville",
            MembershipType::Dpkr => "Discovery Place Kids-Rockingham",
            MembershipType::ScienceKids => "Discovery Place Science + Kids",
            MembershipType::Welcome => "Discovery Place Welcome Program",
            MembershipType::PayAsYouGo | MembershipType::Other => GENERIC_BRAND_NAME,
        }
    }

    /// `true` for tiers that are an actual membership product.
    #[must_use]
    pub fn is_membership(self) -> bool {
        !matches!(self, MembershipType::PayAsYouGo | MembershipType::Other)
    }
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Science => write!(f, "Science"),
            MembershipType::Dpkh => write!(f, "DPKH"),
            MembershipType::Dpkr => write!(f, "DPKR"),
            MembershipType::ScienceKids => write!(f, "ScienceKids"),
            MembershipType::Welcome => write!(f, "Welcome"),
            MembershipType::PayAsYouGo => write!(f, "PayAsYouGo"),
            MembershipType::Other => write!(f, "Other"),
        }
    }
}
