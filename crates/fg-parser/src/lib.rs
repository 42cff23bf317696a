//! fg-parser: decoder for addon streaming references.
//!
//! A streaming reference is the opaque tail of a player route. Its first
//! path segment is a percent-encoded, base64-encoded blob holding a Stremio
//! stream object; further segments may carry a manifest URL and an IMDB id.
//!
//! # Quick start
//!
//! ```
//! use fg_core::StreamMetadata;
//!
//! let metadata: StreamMetadata = serde_json::from_str(
//!     r#"{"url":"https://cdn.example/v.mkv",
//!         "behaviorHints":{"filename":"Movie.Title.2021.1080p.WEB.x264-GROUP.mkv"}}"#,
//! )
//! .unwrap();
//! let reference = fg_parser::encode_reference(&metadata, &[]);
//!
//! let r = fg_parser::parse(&reference).unwrap();
//! assert_eq!(r.quality.resolution, "1080p");
//! assert_eq!(r.quality.codec, "x264");
//! assert_eq!(r.media.year, "2021");
//! assert_eq!(r.media.release_group, "GROUP");
//! assert!(r.manifest_url.is_none());
//! ```

mod encode;
mod filename;
mod payload;
mod reference;
pub mod types;

pub use encode::encode_reference;
pub use fg_core::{Error, Result, StreamMetadata};
pub use types::{MediaInfo, ParsedStreamingData, Quality, UNKNOWN};

/// Parse a streaming reference.
///
/// Decodes the payload segment into its stream metadata, then derives quality
/// and title markers from `behaviorHints.filename` and scans the reference's
/// path segments for a manifest URL and an IMDB id.
///
/// # Errors
///
/// Returns an encoding error when percent or base64 decoding fails and a
/// structural error when no JSON object can be recovered. Filename heuristics
/// never fail.
pub fn parse(reference: &str) -> Result<ParsedStreamingData> {
    let (metadata, tail) = decode_reference(reference)?;
    let (quality, media) = filename::extract(metadata.filename());
    let manifest_url = reference::manifest_url(tail)?;
    let imdb_id = reference::imdb_id(reference);

    tracing::debug!(
        resolution = %quality.resolution,
        title = %media.title,
        imdb_id = ?imdb_id,
        "Parsed streaming reference"
    );

    Ok(ParsedStreamingData {
        decoded_url: metadata.url().map(str::to_string),
        metadata,
        quality,
        media,
        manifest_url,
        imdb_id,
    })
}

/// Decode the payload, widening it segment by segment while decoding fails.
///
/// Returns the metadata and whatever follows the payload. When no split
/// decodes, the error from segment 0 is reported.
fn decode_reference(reference: &str) -> Result<(StreamMetadata, Option<&str>)> {
    let mut first_err = None;
    for (payload, tail) in reference::payload_splits(reference) {
        match payload::decode_payload(payload) {
            Ok(metadata) => {
                if first_err.is_some() {
                    tracing::debug!("Payload contains {} unescaped '/'", payload.matches('/').count());
                }
                return Ok((metadata, tail));
            }
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err.unwrap_or(Error::NoJsonObject))
}

/// Like [`parse`], but reports failure as `None`.
///
/// The cause is logged at `warn` level; callers treat `None` as "nothing to
/// display".
pub fn safe_parse(reference: &str) -> Option<ParsedStreamingData> {
    match parse(reference) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("Failed to parse streaming reference: {e}");
            None
        }
    }
}
