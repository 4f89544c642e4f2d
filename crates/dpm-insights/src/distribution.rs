//! Per-location visit distribution and the one-line insight shown beside the pie chart.

use dpm_core::{Location, VisitCounts};
use serde::Serialize;

/// Share of visits at which one location counts as the family's primary venue.
pub const PRIMARY_LOCATION_THRESHOLD: u32 = 75;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub location: Location,
    pub location_name: &'static str,
    pub visits: u32,
    /// Whole percent of all visits, rounded half up.
    pub percentage_of_total: u32,
}

/// Which insight applies to a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionInsight {
    /// No visits entered yet.
    Empty,
    Exclusive { location: Location },
    Primary { location: Location, percentage: u32 },
    MultiLocation,
}

impl std::fmt::Display for DistributionInsight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionInsight::Empty => {
                write!(f, "Add your planned visits to see your visit distribution.")
            }
            DistributionInsight::Exclusive { location } => write!(
                f,
                "You exclusively visit {location}. \
                 A single-location membership is the most cost-effective option."
            ),
            DistributionInsight::Primary {
                location,
                percentage,
            } => write!(
                f,
                "You primarily visit {location} ({percentage}% of visits). \
                 A single-location membership with guest discounts at other locations is recommended."
            ),
            DistributionInsight::MultiLocation => write!(
                f,
                "You visit multiple locations regularly. \
                 A multi-location (Science + Kids) membership is recommended."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitDistribution {
    pub entries: Vec<DistributionEntry>,
    pub kind: DistributionInsight,
    pub insight: String,
}

impl VisitDistribution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split visit counts into per-location shares and pick the matching insight.
///
/// Locations with zero visits are omitted. When two locations tie for the
/// most visits the earlier one in [`Location::ALL`] wins.
#[must_use]
pub fn analyze_distribution(counts: &VisitCounts) -> VisitDistribution {
    let total = counts.total();
    if total == 0 {
        return build(Vec::new(), DistributionInsight::Empty);
    }

    let entries: Vec<DistributionEntry> = counts
        .iter()
        .filter(|&(_, visits)| visits > 0)
        .map(|(location, visits)| DistributionEntry {
            location,
            location_name: location.name(),
            visits,
            percentage_of_total: percent_of(u64::from(visits), total),
        })
        .collect();

    let kind = if let [only] = entries.as_slice() {
        DistributionInsight::Exclusive {
            location: only.location,
        }
    } else {
        match top_location(&entries) {
            Some(top) if top.percentage_of_total >= PRIMARY_LOCATION_THRESHOLD => {
                DistributionInsight::Primary {
                    location: top.location,
                    percentage: top.percentage_of_total,
                }
            }
            _ => DistributionInsight::MultiLocation,
        }
    };

    tracing::debug!(
        total_visits = total,
        locations = entries.len(),
        insight = ?kind,
        "analyzed visit distribution"
    );

    build(entries, kind)
}

/// Entry with the most visits; the earliest entry wins a tie.
fn top_location(entries: &[DistributionEntry]) -> Option<&DistributionEntry> {
    entries.iter().fold(None, |best, entry| match best {
        Some(b) if b.visits >= entry.visits => Some(b),
        _ => Some(entry),
    })
}

fn build(entries: Vec<DistributionEntry>, kind: DistributionInsight) -> VisitDistribution {
    VisitDistribution {
        entries,
        insight: kind.to_string(),
        kind,
    }
}

/// `round(part / whole * 100)` with halves rounded up, in integer arithmetic.
fn percent_of(part: u64, whole: u64) -> u32 {
    let scaled = (u128::from(part) * 200 + u128::from(whole)) / (u128::from(whole) * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
