//! Tube line identifiers.

use std::fmt;

/// One of the eleven London Underground lines served by the gateway.
///
/// Each line carries both its URL-safe identifier (as the upstream API
/// expects it in paths) and its display name (as the upstream API reports
/// it in payloads), so mapping between the two never needs fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubeLine {
    Bakerloo,
    Central,
    Circle,
    District,
    HammersmithCity,
    Jubilee,
    Metropolitan,
    Northern,
    Piccadilly,
    Victoria,
    WaterlooCity,
}

impl TubeLine {
    /// All lines, in vocabulary order.
    pub const ALL: [TubeLine; 11] = [
        TubeLine::Bakerloo,
        TubeLine::Central,
        TubeLine::Circle,
        TubeLine::District,
        TubeLine::HammersmithCity,
        TubeLine::Jubilee,
        TubeLine::Metropolitan,
        TubeLine::Northern,
        TubeLine::Piccadilly,
        TubeLine::Victoria,
        TubeLine::WaterlooCity,
    ];

    /// Lowercase, hyphenated identifier used in upstream paths.
    pub const fn id(self) -> &'static str {
        match self {
            TubeLine::Bakerloo => "bakerloo",
            TubeLine::Central => "central",
            TubeLine::Circle => "circle",
            TubeLine::District => "district",
            TubeLine::HammersmithCity => "hammersmith-city",
            TubeLine::Jubilee => "jubilee",
            TubeLine::Metropolitan => "metropolitan",
            TubeLine::Northern => "northern",
            TubeLine::Piccadilly => "piccadilly",
            TubeLine::Victoria => "victoria",
            TubeLine::WaterlooCity => "waterloo-city",
        }
    }

    /// Human-readable name as it appears in upstream payloads.
    pub const fn display_name(self) -> &'static str {
        match self {
            TubeLine::Bakerloo => "Bakerloo",
            TubeLine::Central => "Central",
            TubeLine::Circle => "Circle",
            TubeLine::District => "District",
            TubeLine::HammersmithCity => "Hammersmith & City",
            TubeLine::Jubilee => "Jubilee",
            TubeLine::Metropolitan => "Metropolitan",
            TubeLine::Northern => "Northern",
            TubeLine::Piccadilly => "Piccadilly",
            TubeLine::Victoria => "Victoria",
            TubeLine::WaterlooCity => "Waterloo & City",
        }
    }

    /// Look up a line by its exact identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|line| line.id() == id)
    }

    /// Look up a line by display name, ignoring ASCII case.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|line| line.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for TubeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
