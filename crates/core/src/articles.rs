//! Upstream article records and their normalised projection.
//!
//! The upstream API returns loosely populated article objects: any field may be missing,
//! `null` or of an unexpected type, and `source` is a nested object. [`clean_articles`] flattens each record into an
//! [`api_shared::CleanArticle`] one-to-one, in input order, without ever failing on absent
//! data.

use crate::{NewsError, NewsResult};
use api_shared::CleanArticle;
use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// Body of a successful upstream response, reduced to the fields this service reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPayload {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<RawArticle>>,
}

impl UpstreamPayload {
    /// Parses a raw upstream body.
    pub fn parse(body: &str) -> NewsResult<Self> {
        serde_json::from_str(body).map_err(NewsError::InvalidPayload)
    }

    /// Takes the article list, treating a missing or `null` list as empty.
    pub fn take_articles(&mut self) -> Vec<RawArticle> {
        self.articles.take().unwrap_or_default()
    }
}

/// One article as returned by the upstream API. Unknown fields are ignored, and a text field
/// holding a non-string value reads as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrOther {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountOrOther {
    Count(u64),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrOther>::deserialize(deserializer)? {
        Some(TextOrOther::Text(text)) => Some(text),
        Some(TextOrOther::Other(_)) | None => None,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<CountOrOther>::deserialize(deserializer)? {
        Some(CountOrOther::Count(count)) => Some(count),
        Some(CountOrOther::Other(_)) | None => None,
    })
}

/// The `source` member of an upstream article.
///
/// Upstream sends an object such as `{"id": "cnn", "name": "CNN"}`. A bare string is accepted
/// as the name so that already-normalised records pass through unchanged; any other shape is
/// kept as `Unrecognised` and yields no name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSource {
    Object {
        #[serde(default)]
        name: Option<String>,
    },
    Name(String),
    Unrecognised(IgnoredAny),
}

impl RawSource {
    pub fn name(&self) -> Option<&str> {
        match self {
            RawSource::Object { name } => name.as_deref(),
            RawSource::Name(name) => Some(name),
            RawSource::Unrecognised(_) => None,
        }
    }
}

impl From<RawArticle> for CleanArticle {
    fn from(raw: RawArticle) -> Self {
        CleanArticle {
            source: raw
                .source
                .as_ref()
                .and_then(RawSource::name)
                .map(str::to_owned),
            title: raw.title,
            published_at: raw.published_at,
            url: raw.url,
            description: raw.description,
        }
    }
}

/// Projects upstream articles onto the fixed [`CleanArticle`] field set.
///
/// The output has exactly one entry per input record, in the same order.
pub fn clean_articles(articles: Vec<RawArticle>) -> Vec<CleanArticle> {
    articles.into_iter().map(CleanArticle::from).collect()
}
