//! Spreads an annual visit total across calendar months for the bar chart.

use chrono::Month;
use serde::Serialize;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Seasonal share of annual visits per month, in basis points (sum = 10 000).
///
/// Summer break peaks in July; December is the quietest month.
const MONTH_WEIGHTS_BP: [u32; 12] = [
    400, 400, 600, 800, 900, 1400, 1800, 1400, 800, 600, 600, 300,
];

/// Index of the month that absorbs a rounding shortfall.
const PEAK_MONTH: usize = 6;
/// Index of the month that gives back a rounding overshoot first.
const QUIETEST_MONTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyVisits {
    pub month: Month,
    pub visits: u64,
}

impl MonthlyVisits {
    /// Three-letter axis label, e.g. `"Jul"`.
    #[must_use]
    pub fn label(&self) -> &'static str {
        &self.month.name()[..3]
    }
}

/// Estimate visits per month for a year with `total_visits` visits.
///
/// Each month is rounded independently, then the rounding remainder is
/// corrected so the twelve values always sum to exactly `total_visits`:
/// a shortfall goes to July; an overshoot comes out of December first,
/// never below zero, and any rest from the next-quietest months in turn.
#[must_use]
pub fn estimate_monthly(total_visits: u64) -> Vec<MonthlyVisits> {
    let mut visits: [u64; 12] =
        std::array::from_fn(|i| weighted_share(total_visits, MONTH_WEIGHTS_BP[i]));

    let rounded_sum: u64 = visits.iter().sum();

    if rounded_sum < total_visits {
        let shortfall = total_visits - rounded_sum;
        visits[PEAK_MONTH] += shortfall;
        tracing::debug!(total_visits, shortfall, "added rounding shortfall to peak month");
    } else if rounded_sum > total_visits {
        let overshoot = rounded_sum - total_visits;
        let mut remaining = overshoot;
        for index in months_by_weight() {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(visits[index]);
            visits[index] -= taken;
            remaining -= taken;
        }
        tracing::debug!(total_visits, overshoot, "removed rounding overshoot from quiet months");
    }

    MONTHS
        .iter()
        .zip(visits)
        .map(|(&month, visits)| MonthlyVisits { month, visits })
        .collect()
}

/// `round(total * weight)` with halves rounded up.
fn weighted_share(total: u64, weight_bp: u32) -> u64 {
    let scaled = (u128::from(total) * u128::from(weight_bp) + 5_000) / 10_000;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Month indices from lowest to highest weight; ties keep calendar order.
fn months_by_weight() -> [usize; 12] {
    let mut order: [usize; 12] = std::array::from_fn(|i| i);
    order.sort_by_key(|&i| (MONTH_WEIGHTS_BP[i], i));
    debug_assert_eq!(order[0], QUIETEST_MONTH);
    order
}
