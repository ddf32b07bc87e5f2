use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Marker written in place of a report the upstream API could not deliver.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to fetch data";

/// The fixed set of bodies a report is fetched for, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Planet {
    Sun,
    Mars,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Sun,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Planet> {
        Planet::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What gets persisted for one planet after a fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanetReport {
    /// First element of the upstream `response` list.
    Fetched(Value),
    /// Serialized as `{"error": "Unable to fetch data"}`.
    Unavailable,
}

impl PlanetReport {
    pub fn is_fetched(&self) -> bool {
        matches!(self, PlanetReport::Fetched(_))
    }
}

impl Serialize for PlanetReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlanetReport::Fetched(payload) => payload.serialize(serializer),
            PlanetReport::Unavailable => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", UNAVAILABLE_MESSAGE)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_order_is_fixed() {
        let names: Vec<&str> = Planet::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, ["Sun", "Mars", "Jupiter", "Venus", "Saturn"]);
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Planet::from_name("Venus"), Some(Planet::Venus));
        assert_eq!(Planet::from_name("venus"), None);
        assert_eq!(Planet::from_name("Pluto"), None);
        assert_eq!(Planet::from_name("../User"), None);
    }

    #[test]
    fn test_unavailable_serializes_to_marker() {
        let value = serde_json::to_value(PlanetReport::Unavailable).unwrap();
        assert_eq!(value, json!({ "error": "Unable to fetch data" }));
    }

    #[test]
    fn test_fetched_serializes_payload_verbatim() {
        let payload = json!({ "planet_considered": "Sun", "qualities_long": "..." });
        let value = serde_json::to_value(PlanetReport::Fetched(payload.clone())).unwrap();
        assert_eq!(value, payload);
    }
}
