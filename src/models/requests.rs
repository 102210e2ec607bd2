use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// User profile submitted with a recommendation request
///
/// The profile carries whatever fields the client sends (risk tolerance,
/// age band, holdings, ...). Scoring does not condition on any of them
/// yet, so the shape is an open mapping rather than a fixed schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl UserProfile {
    /// Look up a profile field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_a_valid_profile() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_arbitrary_fields_are_captured() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"risk_tolerance": "high", "age": 34}"#).unwrap();

        assert_eq!(profile.get("risk_tolerance").unwrap(), "high");
        assert_eq!(profile.get("age").unwrap(), 34);
        assert!(profile.get("missing").is_none());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_str::<UserProfile>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<UserProfile>("\"profile\"").is_err());
    }
}
