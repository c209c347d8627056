//! Tolerant decoding for fields Claude sometimes writes as `null`.

use serde::{Deserialize, Deserializer};

/// Decode a field, treating an explicit `null` like a missing key.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "or_default")]
        name: String,
        #[serde(deserialize_with = "or_default")]
        count: u64,
    }

    #[test]
    fn null_missing_and_present() {
        let s: Sample = serde_json::from_str(r#"{"name": null, "count": null}"#).unwrap();
        assert_eq!(s.name, "");
        assert_eq!(s.count, 0);

        let s: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(s.name, "");

        let s: Sample = serde_json::from_str(r#"{"name": "x", "count": 3}"#).unwrap();
        assert_eq!(s.name, "x");
        assert_eq!(s.count, 3);
    }

    #[test]
    fn wrong_type_still_fails() {
        assert!(serde_json::from_str::<Sample>(r#"{"name": 7}"#).is_err());
    }
}
