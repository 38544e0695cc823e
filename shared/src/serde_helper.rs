//! Lenient deserializers for fields whose representation drifts between
//! backend versions.

use serde::{Deserialize, Deserializer};

/// Accepts an id as a JSON number or a numeric string, mapping anything
/// unparseable (or null/absent) to `None`.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_id")]
        id: Option<i64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let n: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(n.id, Some(7));
        let s: Probe = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(s.id, Some(42));
    }

    #[test]
    fn missing_null_or_garbage_becomes_none() {
        let missing: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.id, None);
        let null: Probe = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(null.id, None);
        let garbage: Probe = serde_json::from_str(r#"{"id": "n/a"}"#).unwrap();
        assert_eq!(garbage.id, None);
    }
}
