//! Identifier deserialization helper.
//!
//! The backend emits ids as JSON numbers in some responses and as strings in others;
//! route parameters are always strings. Ids are normalized to `String`.

use serde::{Deserialize, Deserializer};

/// Deserializes an id from a JSON string or integer.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        I64(i64),
        U64(u64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::I64(n) => n.to_string(),
        StringOrNumber::U64(n) => n.to_string(),
    })
}
