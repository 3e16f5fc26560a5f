pub mod stream;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Twitch sends `_id` as a string for users and as a number for streams
/// and channels; both end up as a `String` here.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {}",
            other
        ))),
    }
}
