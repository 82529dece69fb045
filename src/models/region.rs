use super::error::AppError;

/// Electricity regions reported by the carbon intensity API, plus the
/// `National` sentinel selecting the UK-wide view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    National,
    EastEngland,
    EastMidlands,
    London,
    NorthEastEngland,
    NorthScotland,
    NorthWestEngland,
    SouthEastEngland,
    SouthScotland,
    SouthWales,
    SouthWestEngland,
    WestMidlands,
    Yorkshire,
}

impl Region {
    /// Returns the canonical shortname used in API paths and query strings.
    pub fn shortname(&self) -> &'static str {
        match self {
            Region::National => "National",
            Region::EastEngland => "East England",
            Region::EastMidlands => "East Midlands",
            Region::London => "London",
            Region::NorthEastEngland => "North East England",
            Region::NorthScotland => "North Scotland",
            Region::NorthWestEngland => "North West England",
            Region::SouthEastEngland => "South East England",
            Region::SouthScotland => "South Scotland",
            Region::SouthWales => "South Wales",
            Region::SouthWestEngland => "South West England",
            Region::WestMidlands => "West Midlands",
            Region::Yorkshire => "Yorkshire",
        }
    }

    /// Name used in headings: the national view reads better as "UK".
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::National => "UK",
            other => other.shortname(),
        }
    }

    pub const fn is_national(&self) -> bool {
        matches!(self, Region::National)
    }

    /// All known regions, national sentinel first.
    pub fn all() -> &'static [Region] {
        &[
            Region::National,
            Region::EastEngland,
            Region::EastMidlands,
            Region::London,
            Region::NorthEastEngland,
            Region::NorthScotland,
            Region::NorthWestEngland,
            Region::SouthEastEngland,
            Region::SouthScotland,
            Region::SouthWales,
            Region::SouthWestEngland,
            Region::WestMidlands,
            Region::Yorkshire,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.shortname())
    }
}

impl std::str::FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .find(|r| r.shortname().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| AppError::ConfigError(format!("Unknown region: {s}")))
    }
}
