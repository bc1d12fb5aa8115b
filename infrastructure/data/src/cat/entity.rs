use serde::{Deserialize, Deserializer};
use serde_json::Value;

use business::domain::cat::model::Cat;

/// Cat record as the CATAAS API sends it.
///
/// The list endpoint spells the timestamp `createdAt`, the detail endpoint
/// `created_at`; both are accepted here and collapsed by `into_domain`.
/// A field of the wrong type is treated as missing, so one odd record
/// never fails a whole page.
#[derive(Debug, Default, Deserialize)]
pub struct CatDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Option<Vec<String>>,
    #[serde(default, rename = "createdAt", deserialize_with = "lenient_text")]
    pub created_at_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

/// Strings pass through, numbers are rendered, anything else is dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Keeps the string entries of an array.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

impl CatDto {
    /// Missing fields become empty values, never an error.
    pub fn into_domain(self) -> Cat {
        let created_at = self
            .created_at_camel
            .filter(|date| !date.is_empty())
            .or(self.created_at)
            .unwrap_or_default();

        Cat::from_repository(
            self.id.unwrap_or_default(),
            self.tags.unwrap_or_default(),
            created_at,
            self.url,
        )
    }
}
