use mime::Mime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::provider::Provider;

/// A single favorited submission as stored upstream.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmissionDetail {
    /// The ID of the upstream record.
    #[serde(rename = "_id")]
    pub id: String,

    /// The provider the submission comes from.
    pub provider: Provider,

    /// The numeric ID of the artist on the provider, if known.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Lenient<u64>>,

    /// The artist's name on the provider.
    pub username: String,

    /// The ID of the submission on the provider.
    pub submission_id: u64,

    /// The ID of the file within the submission.
    pub file_id: u64,

    /// The name of the file as served by the provider.
    pub file_name: String,

    /// The MIME type reported for the file.
    pub mimetype: String,

    pub width: u32,
    pub height: u32,

    /// The creation time, human-readable.
    pub create_datetime: String,

    /// The creation time as a Unix timestamp.
    pub create_timestamp: i64,

    pub md5: String,

    pub title: String,
    pub description: String,
    pub tags: Vec<String>,

    /// The pools the submission belongs to, if any.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub pools: Option<Lenient<Vec<String>>>,

    /// Upstream fields this type doesn't know about, kept as given.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An optional field as it arrived: typed when it has the expected
/// shape, otherwise the raw JSON value, `null` included.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Lenient::Typed(t) => Some(t),
            Lenient::Raw(_) => None,
        }
    }
}

/// Deserializes a field that is present, `null` or not, as `Some`.
/// Absent fields fall back to `None` through `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where D: Deserializer<'de>, T: Deserialize<'de> {
    T::deserialize(deserializer).map(Some)
}

impl SubmissionDetail {
    /// Parses `mimetype`. Returns `None` rather than rejecting the
    /// submission when it isn't a valid media type.
    pub fn media_type(&self) -> Option<Mime> {
        self.mimetype.parse().ok()
    }
}
