//! Content calculations for the membership recommendation page.
//!
//! Every function here is pure: it reads a breakdown, visit counts, or a
//! [`dpm_core::Recommendation`] and returns plain data for the presentation
//! layer to render. Nothing is cached and nothing can fail; empty inputs
//! produce the documented empty states.

pub mod banner;
pub mod breakdown;
pub mod distribution;
pub mod faq;
pub mod seasonal;

pub use banner::{promo_banner, PromoBanner};
pub use breakdown::{compute_summary, CostSummary, SAVINGS_PERCENTAGE_CAP};
pub use distribution::{
    analyze_distribution, DistributionEntry, DistributionInsight, VisitDistribution,
    PRIMARY_LOCATION_THRESHOLD,
};
pub use faq::{render_answer, render_category, select_categories};
pub use seasonal::{estimate_monthly, MonthlyVisits};
