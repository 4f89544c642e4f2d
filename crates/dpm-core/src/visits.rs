use serde::{Deserialize, Serialize};

/// A Discovery Place venue covered by memberships.
///
/// Declaration order is the display order and the tie-break priority used
/// when two locations share the highest visit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Science,
    KidsHuntersville,
    KidsRockingham,
}

impl Location {
    pub const ALL: [Location; 3] = [
        Location::Science,
        Location::KidsHuntersville,
        Location::KidsRockingham,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Location::Science => "Discovery Place Science",
            Location::KidsHuntersville => "Discovery Place Kids-Huntersville",
            Location::KidsRockingham => "Discovery Place Kids-Rockingham",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Planned annual visits per location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitCounts {
    pub science_visits: u32,
    pub dpkh_visits: u32,
    pub dpkr_visits: u32,
}

impl VisitCounts {
    #[must_use]
    pub fn new(science_visits: u32, dpkh_visits: u32, dpkr_visits: u32) -> Self {
        Self {
            science_visits,
            dpkh_visits,
            dpkr_visits,
        }
    }

    #[must_use]
    pub fn get(&self, location: Location) -> u32 {
        match location {
            Location::Science => self.science_visits,
            Location::KidsHuntersville => self.dpkh_visits,
            Location::KidsRockingham => self.dpkr_visits,
        }
    }

    /// Sum across all locations, widened so it cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        Location::ALL
            .iter()
            .map(|&location| u64::from(self.get(location)))
            .sum()
    }

    /// `(location, visits)` pairs in declaration order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Location, u32)> + '_ {
        Location::ALL
            .iter()
            .map(move |&location| (location, self.get(location)))
    }
}
