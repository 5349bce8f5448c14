//! Catalog of the macroeconomic variables the dashboard knows about.
//!
//! Each variable maps to a fixed World Bank indicator id. Lookups by name are
//! exact; an unknown name yields an empty code rather than an error, and callers
//! treat the empty code as "no data available".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A macroeconomic measure with a fixed World Bank indicator id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    Gdp,
    Inflation,
    UnemploymentRate,
    Population,
    GdpPerCapita,
}

impl Indicator {
    /// All indicators, in selector order.
    pub const ALL: [Indicator; 5] = [
        Indicator::Gdp,
        Indicator::Inflation,
        Indicator::UnemploymentRate,
        Indicator::Population,
        Indicator::GdpPerCapita,
    ];

    /// Human-readable name, as shown in selectors and chart titles.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::Inflation => "Inflation",
            Indicator::UnemploymentRate => "Unemployment Rate",
            Indicator::Population => "Population",
            Indicator::GdpPerCapita => "GDP per Capita",
        }
    }

    /// World Bank indicator id.
    pub fn code(self) -> &'static str {
        match self {
            Indicator::Gdp => "NY.GDP.MKTP.CD",
            Indicator::Inflation => "FP.CPI.TOTL.ZG",
            Indicator::UnemploymentRate => "SL.UEM.TOTL.ZS",
            Indicator::Population => "SP.POP.TOTL",
            Indicator::GdpPerCapita => "NY.GDP.PCAP.CD",
        }
    }

    /// Exact name lookup.
    pub fn from_name(name: &str) -> Option<Indicator> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a variable name to its indicator id, or `""` when the name is unknown.
pub fn resolve(name: &str) -> &'static str {
    Indicator::from_name(name).map(Indicator::code).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_fixed_codes() {
        assert_eq!(resolve("GDP"), "NY.GDP.MKTP.CD");
        assert_eq!(resolve("Inflation"), "FP.CPI.TOTL.ZG");
        assert_eq!(resolve("Unemployment Rate"), "SL.UEM.TOTL.ZS");
        assert_eq!(resolve("Population"), "SP.POP.TOTL");
        assert_eq!(resolve("GDP per Capita"), "NY.GDP.PCAP.CD");
        for ind in Indicator::ALL {
            assert!(!resolve(ind.name()).is_empty());
        }
    }

    #[test]
    fn unknown_names_resolve_to_empty() {
        assert_eq!(resolve("Exchange Rates"), "");
        assert_eq!(resolve("gdp"), "");
        assert_eq!(resolve(""), "");
    }
}
