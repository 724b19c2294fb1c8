//! Location models: the user's query and the geocoded place

use std::fmt;

use crate::{RainCheckError, Result};

/// A trimmed, non-empty place name typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Trim the raw input, rejecting it when nothing is left
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RainCheckError::BadInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One geocoding match, with coordinates already coerced
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub name: Option<String>,
    /// First-level administrative region (state, province)
    pub admin1: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeocodeCandidate {
    /// "name, admin1, country" with empty or missing parts dropped
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.name, &self.admin1, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Turn the candidate into a place, failing when a coordinate is unreadable
    pub fn resolve(self) -> Result<ResolvedPlace> {
        let display_name = self.display_name();
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(ResolvedPlace {
                display_name,
                latitude,
                longitude,
            }),
            (latitude, longitude) => Err(RainCheckError::geocoding(format!(
                "unreadable coordinates for '{display_name}': latitude={latitude:?}, longitude={longitude:?}"
            ))),
        }
    }
}

/// The geocoded place a forecast is requested for
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ResolvedPlace {
    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn candidate(
        name: Option<&str>,
        admin1: Option<&str>,
        country: Option<&str>,
    ) -> GeocodeCandidate {
        GeocodeCandidate {
            name: name.map(String::from),
            admin1: admin1.map(String::from),
            country: country.map(String::from),
            latitude: Some(-34.93),
            longitude: Some(138.60),
        }
    }

    #[rstest]
    #[case("Adelaide", "Adelaide")]
    #[case("  New York \t", "New York")]
    fn test_query_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(LocationQuery::parse(raw).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t ")]
    fn test_blank_query_is_bad_input(#[case] raw: &str) {
        assert!(matches!(
            LocationQuery::parse(raw),
            Err(RainCheckError::BadInput)
        ));
    }

    #[rstest]
    #[case(
        Some("Adelaide"),
        Some("South Australia"),
        Some("Australia"),
        "Adelaide, South Australia, Australia"
    )]
    #[case(Some("Adelaide"), None, Some("Australia"), "Adelaide, Australia")]
    #[case(Some("Adelaide"), Some(""), Some("Australia"), "Adelaide, Australia")]
    #[case(Some("Monaco"), None, None, "Monaco")]
    #[case(None, Some("Bavaria"), Some("Germany"), "Bavaria, Germany")]
    #[case(None, None, None, "")]
    fn test_display_name_join(
        #[case] name: Option<&str>,
        #[case] admin1: Option<&str>,
        #[case] country: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(candidate(name, admin1, country).display_name(), expected);
    }

    #[test]
    fn test_resolve_keeps_coordinates() {
        let place = candidate(Some("Adelaide"), Some("South Australia"), Some("Australia"))
            .resolve()
            .unwrap();
        assert_eq!(place.display_name, "Adelaide, South Australia, Australia");
        assert_eq!(place.latitude, -34.93);
        assert_eq!(place.longitude, 138.60);
        assert_eq!(place.format_coordinates(), "-34.9300, 138.6000");
    }

    #[test]
    fn test_resolve_rejects_missing_coordinate() {
        let mut broken = candidate(Some("Adelaide"), None, None);
        broken.longitude = None;
        assert!(matches!(
            broken.resolve(),
            Err(RainCheckError::GeocodingData { .. })
        ));
    }
}
