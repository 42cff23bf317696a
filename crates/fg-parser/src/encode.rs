//! Building streaming references, the inverse of [`crate::parse`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fg_core::StreamMetadata;

/// Encode stream metadata into a streaming reference.
///
/// The metadata is serialized to JSON, base64-encoded with the standard
/// padded alphabet and percent-encoded. Each entry of `segments` is
/// percent-encoded and appended after a `/`. By convention the first extra
/// segment is the manifest URL; an IMDB id may follow it.
///
/// # Examples
///
/// ```
/// use fg_core::StreamMetadata;
///
/// let metadata: StreamMetadata =
///     serde_json::from_str(r#"{"url":"https://cdn.example/v.mkv"}"#).unwrap();
/// let reference =
///     fg_parser::encode_reference(&metadata, &["https://cdn.example/m.mpd"]);
///
/// let parsed = fg_parser::parse(&reference).unwrap();
/// assert_eq!(parsed.decoded_url.as_deref(), Some("https://cdn.example/v.mkv"));
/// assert_eq!(parsed.manifest_url.as_deref(), Some("https://cdn.example/m.mpd"));
/// ```
pub fn encode_reference(metadata: &StreamMetadata, segments: &[&str]) -> String {
    // A string-keyed JSON map always serializes.
    let json = serde_json::to_vec(metadata).expect("stream metadata serializes to JSON");

    let mut reference = urlencoding::encode(&STANDARD.encode(json)).into_owned();
    for segment in segments {
        reference.push('/');
        reference.push_str(&urlencoding::encode(segment));
    }

    reference
}
