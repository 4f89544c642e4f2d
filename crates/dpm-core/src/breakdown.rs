use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a cost breakdown.
///
/// A non-negative `cost` is a charge. A negative `cost` is a guest-admission
/// saving; it is stored negative and shown as its absolute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LineItem {
    #[must_use]
    pub fn new(label: impl Into<String>, cost: Decimal) -> Self {
        Self {
            label: label.into(),
            cost,
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.cost < Decimal::ZERO
    }

    /// Amount as shown to the customer, always non-negative.
    #[must_use]
    pub fn display_amount(&self) -> Decimal {
        self.cost.abs()
    }
}

/// Per-guest detail row attached to a breakdown's savings section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSaving {
    pub label: String,
    pub saving: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guest_savings_details: Vec<GuestSaving>,
}

impl Breakdown {
    #[must_use]
    pub fn new(items: Vec<LineItem>) -> Self {
        Self {
            items,
            guest_savings_details: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Charge rows in insertion order; displayed before savings.
    pub fn charges(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| !item.is_saving())
    }

    /// Saving rows in insertion order.
    pub fn savings(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| item.is_saving())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Breakdown {
        Breakdown::new(vec![
            LineItem::new("Family membership", Decimal::from(189)),
            LineItem::new("Guest admission", Decimal::from(-24)).with_details("2 guests"),
            LineItem::new("Parking", Decimal::from(10)),
            LineItem::new("Member guest pass", Decimal::from(-12)),
        ])
    }

    #[test]
    fn charges_and_savings_keep_insertion_order() {
        let breakdown = sample();
        let charges: Vec<_> = breakdown.charges().map(|i| i.label.as_str()).collect();
        let savings: Vec<_> = breakdown.savings().map(|i| i.label.as_str()).collect();
        assert_eq!(charges, vec!["Family membership", "Parking"]);
        assert_eq!(savings, vec!["Guest admission", "Member guest pass"]);
    }

    #[test]
    fn zero_cost_counts_as_charge() {
        let item = LineItem::new("Free add-on", Decimal::ZERO);
        assert!(!item.is_saving());
    }

    #[test]
    fn saving_displays_absolute_value() {
        let item = LineItem::new("Guest admission", Decimal::from(-24));
        assert_eq!(item.display_amount(), Decimal::from(24));
    }

    #[test]
    fn missing_items_deserialize_as_empty() {
        let breakdown: Breakdown = serde_json::from_str("{}").unwrap();
        assert!(breakdown.is_empty());
        assert!(breakdown.guest_savings_details.is_empty());
    }

    #[test]
    fn deserializes_numeric_costs() {
        let breakdown: Breakdown = serde_json::from_str(
            r#"{
                "items": [
                    {"label": "A", "cost": 100},
                    {"label": "B", "cost": -20.5, "details": "guest"}
                ],
                "guestSavingsDetails": [{"label": "Adult guest", "saving": 20.5}]
            }"#,
        )
        .unwrap();
        assert_eq!(breakdown.items.len(), 2);
        assert_eq!(breakdown.items[1].cost, Decimal::new(-205, 1));
        assert_eq!(breakdown.items[1].details.as_deref(), Some("guest"));
        assert_eq!(breakdown.guest_savings_details[0].saving, Decimal::new(205, 1));
    }
}
