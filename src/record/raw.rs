use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One input line as read from the source dataset.
///
/// Every field is optional on the wire. A missing field and an explicit
/// `null` both collapse to the empty value, so downstream code only ever
/// checks for emptiness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub similar_books: Vec<String>,
}

impl RawRecord {
    /// Parse a single JSON object line.
    ///
    /// The line goes through a plain object first so a repeated key keeps
    /// its last value instead of failing as a duplicate field.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_str(line)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Records without a title never reach the merger
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
