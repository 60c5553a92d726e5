//! Launch site selection with the `"ALL"` sentinel.

use std::fmt;

use crate::launch::LaunchRecord;

/// Wire value of the "no site filter" sentinel.
pub const ALL_SITES_VALUE: &str = "ALL";

/// Fixed (value, label) pairs for the site dropdown.
///
/// The sentinel first, then the four launch sites by their literal names.
pub const SITE_OPTIONS: [(&str, &str); 5] = [
    (ALL_SITES_VALUE, "All Sites"),
    ("CCAFS LC-40", "CCAFS LC-40"),
    ("VAFB SLC-4E", "VAFB SLC-4E"),
    ("KSC LC-39A", "KSC LC-39A"),
    ("CCAFS SLC-40", "CCAFS SLC-40"),
];

/// The site dropdown's current value: all sites, or one literal site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. `"ALL"` is the all-sites sentinel; any
    /// other string is taken as a literal site name.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown wire value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether the record passes this selection's site filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_round_trip() {
        let all = SiteSelection::from_value("ALL");
        assert_eq!(all, SiteSelection::AllSites);
        assert_eq!(all.value(), "ALL");

        let site = SiteSelection::from_value("KSC LC-39A");
        assert_eq!(site, SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(site.value(), "KSC LC-39A");
    }

    #[test]
    fn test_dropdown_options_fixed() {
        assert_eq!(SITE_OPTIONS.len(), 5);
        assert_eq!(SITE_OPTIONS[0], ("ALL", "All Sites"));
    }
}
