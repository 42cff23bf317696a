//! Payload decoding: percent-encoding, then base64, then brace-matched JSON.
//!
//! The decoded buffer may carry arbitrary bytes around the JSON object, so
//! the object is located by counting braces from the first `{` rather than by
//! parsing the whole buffer. The count is not string-aware; JSON parsing of
//! the candidate is the final validator.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use fg_core::{EncodingStage, Error, Result, StreamMetadata};
use serde_json::{Map, Value};

/// Standard alphabet, padding optional.
const STANDARD_ANY_PAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the payload segment of a streaming reference into its metadata.
pub(crate) fn decode_payload(segment: &str) -> Result<StreamMetadata> {
    let text = percent_decode(segment)?;

    let raw = STANDARD_ANY_PAD
        .decode(text.as_bytes())
        .map_err(|e| Error::encoding(EncodingStage::Base64, e))?;
    tracing::trace!("Payload decoded to {} bytes", raw.len());

    let candidate = find_json_candidate(&raw)?;
    let fields = match serde_json::from_slice::<Map<String, Value>>(candidate.bytes) {
        Ok(fields) => fields,
        Err(source) if candidate.open_depth > 0 => {
            return Err(Error::UnclosedJson {
                depth: candidate.open_depth,
                source,
            });
        }
        Err(source) => return Err(Error::MalformedJson { source }),
    };

    if candidate.open_depth > 0 {
        tracing::debug!(
            "JSON candidate parsed although brace depth ended at {}",
            candidate.open_depth
        );
    }

    Ok(StreamMetadata::from_map(fields))
}

/// Decode a URL component.
///
/// `%XX` becomes the byte `0xXX` and `+` is kept literally. A `%` that is not
/// followed by two hex digits, or an escape sequence that does not form
/// UTF-8, is an error.
pub(crate) fn percent_decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    if let Some(pos) = bytes.iter().enumerate().position(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    }) {
        return Err(Error::encoding(
            EncodingStage::Percent,
            format!("invalid escape sequence at offset {pos}"),
        ));
    }

    urlencoding::decode(input)
        .map(Cow::into_owned)
        .map_err(|e| Error::encoding(EncodingStage::Percent, e))
}

/// The brace-matched slice of a decoded buffer.
#[derive(Debug, PartialEq)]
struct JsonCandidate<'a> {
    bytes: &'a [u8],
    /// Brace depth when the scan stopped; zero when the object closed.
    open_depth: usize,
}

fn find_json_candidate(raw: &[u8]) -> Result<JsonCandidate<'_>> {
    let start = raw
        .iter()
        .position(|&b| b == b'{')
        .ok_or(Error::NoJsonObject)?;

    let mut depth = 0usize;
    let mut end = raw.len();
    for (offset, &b) in raw[start..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    end = start + offset + 1;
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(JsonCandidate {
        bytes: &raw[start..end],
        open_depth: depth,
    })
}
