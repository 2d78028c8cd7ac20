//! Normalization applied to request fields before validation.

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub fn trim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Unlike a blank-to-`None` trim, `"  "` stays `Some("")` so a PATCH with a
/// blank value still fails validation.
pub fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.map(|s| s.trim().to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdOrString {
    Int(i64),
    String(String),
}

fn parse_id<E: serde::de::Error>(raw: IdOrString) -> Result<i64, E> {
    match raw {
        IdOrString::Int(id) => Ok(id),
        IdOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("Incorrect type. Expected pk value, received \"{}\".", s))),
    }
}

/// Parent ids arrive either as numbers or as numeric strings.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_id(IdOrString::deserialize(deserializer)?)
}

pub fn flexible_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdOrString>::deserialize(deserializer)?
        .map(parse_id::<D::Error>)
        .transpose()
}

/// Postgres text columns cannot hold NUL.
pub fn no_null_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut err = ValidationError::new("null_characters");
        err.message = Some("Null characters are not allowed.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "trim_string")]
        text: String,
        #[serde(default, deserialize_with = "trim_optional_string")]
        note: Option<String>,
        #[serde(deserialize_with = "flexible_id")]
        parent: i64,
        #[serde(default, deserialize_with = "flexible_optional_id")]
        other: Option<i64>,
    }

    #[test]
    fn strings_are_trimmed() {
        let s: Sample =
            serde_json::from_value(json!({ "text": "  T ", "note": "\t", "parent": 1 })).unwrap();
        assert_eq!(s.text, "T");
        assert_eq!(s.note.as_deref(), Some(""));
        assert_eq!(s.other, None);
    }

    #[test]
    fn numeric_string_ids_are_accepted() {
        let s: Sample =
            serde_json::from_value(json!({ "text": "T", "parent": "7", "other": "8" })).unwrap();
        assert_eq!(s.parent, 7);
        assert_eq!(s.other, Some(8));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let result = serde_json::from_value::<Sample>(json!({ "text": "T", "parent": "seven" }));
        assert!(result.is_err());
    }

    #[test]
    fn nul_is_rejected() {
        assert!(no_null_chars("a\0b").is_err());
        assert!(no_null_chars("ab").is_ok());
    }
}
