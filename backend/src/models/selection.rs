//! UI selection state sent by the dashboard controls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value the dropdown uses for "every site".
pub const ALL_SITES: &str = "ALL";

/// Value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelector::from(name.into())
    }

    /// Whether a record launched from `launch_site` falls under this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        SiteSelector::from(value.to_string())
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> Self {
        match selector {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload-mass window in kilograms, serialized as `[low, high]`.
///
/// The slider never produces `low > high`; if such a range arrives anyway it
/// simply matches nothing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for (f64, f64) {
    fn from(range: PayloadRange) -> Self {
        (range.low, range.high)
    }
}

/// Current value of every input control on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    #[serde(default)]
    pub site: SiteSelector,
    pub payload_range: PayloadRange,
}

impl DashboardState {
    pub fn new(site: SiteSelector, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }
}
