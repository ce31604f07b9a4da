//! Serde helpers for partial-update DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a patch so that "absent" and "null" stay
/// distinguishable.
///
/// Use together with `#[serde(default)]`:
///
/// - field absent   -> `None` (leave the column alone)
/// - field `null`   -> `Some(None)` (clear the column)
/// - field present  -> `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        image_url: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.image_url, None);

        let null: Patch = serde_json::from_str(r#"{"image_url":null}"#).unwrap();
        assert_eq!(null.image_url, Some(None));

        let set: Patch = serde_json::from_str(r#"{"image_url":"/uploads/a.png"}"#).unwrap();
        assert_eq!(set.image_url, Some(Some("/uploads/a.png".to_string())));
    }
}
