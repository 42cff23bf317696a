//! Path-segment scanning of the original (still encoded) reference.

use std::sync::LazyLock;

use fg_core::Result;
use regex::Regex;

use crate::payload::percent_decode;

static IMDB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tt[0-9]+").expect("IMDB id pattern is valid"));

/// Candidate `(payload, tail)` splits of a reference, narrowest first.
///
/// The payload is normally segment 0, but a base64 blob that was not
/// percent-encoded may carry literal `/` characters, so each wider prefix is
/// offered in turn. The last split is the whole reference with no tail.
pub(crate) fn payload_splits(reference: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    reference
        .match_indices('/')
        .map(|(i, _)| (&reference[..i], Some(&reference[i + 1..])))
        .chain(std::iter::once((reference, None)))
}

/// Percent-decoded first segment of the tail after the payload.
pub(crate) fn manifest_url(tail: Option<&str>) -> Result<Option<String>> {
    tail.map(|t| t.split_once('/').map_or(t, |(segment, _)| segment))
        .map(percent_decode)
        .transpose()
}

/// The `tt<digits>` id inside the first segment that contains `tt`.
///
/// Only that first segment is searched; a later segment holding a proper id
/// is not consulted.
pub(crate) fn imdb_id(reference: &str) -> Option<String> {
    let segment = reference.split('/').find(|s| s.contains("tt"))?;
    IMDB_ID.find(segment).map(|m| m.as_str().to_string())
}
