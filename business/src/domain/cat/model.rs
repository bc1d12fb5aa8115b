use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const CATAAS_CAT_URL: &str = "https://cataas.com/cat";

/// Canonical cat record, identical whichever endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    pub id: String,
    pub tags: Vec<String>,
    /// ISO-8601 timestamp, or empty when the API sent none.
    pub created_at: String,
    pub url: Option<String>,
}

impl Cat {
    /// Constructor for records already normalized by the data layer (no validation).
    pub fn from_repository(
        id: String,
        tags: Vec<String>,
        created_at: String,
        url: Option<String>,
    ) -> Self {
        Self {
            id,
            tags,
            created_at,
            url,
        }
    }

    /// Full-size image, used by the detail view.
    pub fn image_url(&self) -> String {
        format!("{}?id={}", CATAAS_CAT_URL, self.id)
    }

    /// Square thumbnail, used by the list view.
    pub fn thumbnail_url(&self) -> String {
        format!("{}?id={}&width=200&height=200", CATAAS_CAT_URL, self.id)
    }

    /// Creation date for display, e.g. "March 24, 2025".
    pub fn formatted_creation_date(&self) -> String {
        match parse_timestamp(&self.created_at) {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => "Unknown date".to_string(),
        }
    }

    pub fn tag_list(&self) -> String {
        self.tags.join(", ")
    }

    /// Creation instant used for ordering. Unparseable dates count as the epoch.
    pub fn created_at_timestamp(&self) -> DateTime<Utc> {
        parse_timestamp(&self.created_at).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
