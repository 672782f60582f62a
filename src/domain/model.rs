use serde::{Deserialize, Deserializer, Serialize};

/// Caller-facing filters for a single `retrieve` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(ColorFilter::Multiple(
            colors.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors = Some(ColorFilter::Single(color.into()));
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }
}

/// A color filter is either one bare value or a list of values.
///
/// Only the list form is expanded into repeated `color[]` pairs; a bare value
/// goes out as the scalar `colors=<value>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorFilter {
    Single(String),
    Multiple(Vec<String>),
}

/// A record as returned by the `/records` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub color: String,
    pub disposition: String,
}

/// A record annotated with whether its color is a primary one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedRecord {
    pub id: String,
    pub color: String,
    pub disposition: String,
    pub is_primary: bool,
}

/// Shaped result of one `retrieve` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub ids: Vec<String>,
    pub open: Vec<ClassifiedRecord>,
    pub closed_primary_count: usize,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
