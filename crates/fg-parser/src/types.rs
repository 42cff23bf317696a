//! Output types for the streaming-reference parser.

use fg_core::StreamMetadata;
use serde::{Deserialize, Serialize};

/// Placeholder for a heuristic field that was searched for and not found.
pub const UNKNOWN: &str = "unknown";

/// Everything recovered from a streaming reference.
///
/// `quality` and `media` are always fully populated; a field the filename
/// heuristics could not match holds [`UNKNOWN`]. Only `manifest_url`,
/// `imdb_id` and (when the addon sent no `url`) `decoded_url` can be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStreamingData {
    /// The JSON object embedded in the payload.
    pub metadata: StreamMetadata,

    /// Copy of `metadata.url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoded_url: Option<String>,

    pub quality: Quality,

    pub media: MediaInfo,

    /// Percent-decoded second path segment of the reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,

    /// IMDB identifier (`tt` followed by digits).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

/// Video quality markers taken from the release filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    /// e.g. `"1080p"`.
    pub resolution: String,
    /// e.g. `"WEB"`, `"BRRip"`.
    pub format: String,
    /// `"x264"` or `"x265"`.
    pub codec: String,
    /// e.g. `"700MB"`.
    pub size: String,
}

impl Quality {
    /// A quality record with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self {
            resolution: UNKNOWN.to_string(),
            format: UNKNOWN.to_string(),
            codec: UNKNOWN.to_string(),
            size: UNKNOWN.to_string(),
        }
    }
}

/// Title information taken from the release filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    /// First dot-delimited token of the filename.
    pub title: String,
    pub year: String,
    pub release_group: String,
}

impl MediaInfo {
    /// A media record with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            year: UNKNOWN.to_string(),
            release_group: UNKNOWN.to_string(),
        }
    }
}
