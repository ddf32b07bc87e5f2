use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single stored birth-data record, persisted as `User.json`.
///
/// Values are kept exactly as submitted, whatever their JSON type. Fields
/// missing from a submission are stored as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub tob: Value,
    #[serde(default)]
    pub dob: Value,
    #[serde(default)]
    pub gender: Value,
    #[serde(default)]
    pub city: Value,
    #[serde(default)]
    pub state: Value,
}

/// Body of `POST /`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSubmission {
    pub name: Value,
    pub dob: Value,
    #[serde(rename = "timeOfBirth")]
    pub time_of_birth: Value,
    pub gender: Value,
    pub city: Value,
    pub state: Value,
}

impl From<ProfileSubmission> for Profile {
    fn from(s: ProfileSubmission) -> Self {
        Profile {
            name: s.name,
            tob: s.time_of_birth,
            dob: s.dob,
            gender: s.gender,
            city: s.city,
            state: s.state,
        }
    }
}

/// Renders a submitted value the way it is sent upstream: strings as-is,
/// `null` as absent, anything else as its JSON text.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_time_of_birth_is_stored_as_tob() {
        let submission: ProfileSubmission = serde_json::from_value(json!({
            "name": "A",
            "dob": "2000-01-01",
            "timeOfBirth": "10:00",
            "gender": "M",
            "city": "X",
            "state": "Y"
        }))
        .unwrap();

        let stored = serde_json::to_value(Profile::from(submission)).unwrap();
        assert_eq!(
            stored,
            json!({
                "name": "A",
                "tob": "10:00",
                "dob": "2000-01-01",
                "gender": "M",
                "city": "X",
                "state": "Y"
            })
        );
    }

    #[test]
    fn test_missing_fields_become_null() {
        let submission: ProfileSubmission =
            serde_json::from_value(json!({ "name": "Only" })).unwrap();
        let stored = serde_json::to_value(Profile::from(submission)).unwrap();
        assert_eq!(stored["name"], "Only");
        assert!(stored["tob"].is_null());
        assert!(stored["state"].is_null());
    }

    #[test]
    fn test_non_string_values_pass_through() {
        let submission: ProfileSubmission = serde_json::from_value(json!({
            "name": 42,
            "timeOfBirth": 1000,
            "gender": false
        }))
        .unwrap();
        let stored = serde_json::to_value(Profile::from(submission)).unwrap();
        assert_eq!(stored["name"], 42);
        assert_eq!(stored["tob"], 1000);
        assert_eq!(stored["gender"], false);
    }

    #[test]
    fn test_field_text() {
        assert_eq!(field_text(&json!("10:00")), Some("10:00".to_string()));
        assert_eq!(field_text(&json!(1000)), Some("1000".to_string()));
        assert_eq!(field_text(&Value::Null), None);
    }
}
