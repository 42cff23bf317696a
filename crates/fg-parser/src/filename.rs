//! Heuristic extraction of quality and title markers from a scene-release
//! filename such as `Movie.Title.2021.1080p.WEB.x264-GROUP.mkv`.
//!
//! The filename is split on `.` and each field takes the first token that
//! matches its marker. Nothing here fails: a field with no match is
//! [`UNKNOWN`].

use crate::types::{MediaInfo, Quality, UNKNOWN};

const CODECS: [&str; 2] = ["x264", "x265"];
const FORMAT_MARKERS: [&str; 2] = ["WEB", "Rip"];

/// Extract quality and media fields from an optional release filename.
pub(crate) fn extract(filename: Option<&str>) -> (Quality, MediaInfo) {
    let Some(filename) = filename.filter(|f| !f.is_empty()) else {
        tracing::debug!("Stream metadata carries no behaviorHints.filename");
        return (Quality::unknown(), MediaInfo::unknown());
    };

    let tokens: Vec<&str> = filename.split('.').collect();

    let quality = Quality {
        resolution: or_unknown(first_token(&tokens, |t| t.contains('p'))),
        format: or_unknown(first_token(&tokens, |t| {
            FORMAT_MARKERS.iter().any(|m| t.contains(m))
        })),
        codec: or_unknown(
            tokens
                .iter()
                .find_map(|t| CODECS.into_iter().find(|c| t.contains(c))),
        ),
        size: or_unknown(first_token(&tokens, |t| t.contains("MB"))),
    };

    // Positional: the first token is taken as the title whatever it holds.
    let media = MediaInfo {
        title: tokens[0].to_string(),
        year: or_unknown(first_token(&tokens, is_year)),
        release_group: or_unknown(release_group(filename)),
    };

    (quality, media)
}

fn first_token<'a>(tokens: &[&'a str], pred: impl Fn(&str) -> bool) -> Option<&'a str> {
    tokens.iter().copied().find(|t| pred(t))
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Text after the last `-` of the whole filename, minus a `.mkv` suffix.
fn release_group(filename: &str) -> Option<&str> {
    let (_, tail) = filename.rsplit_once('-')?;
    let group = tail.strip_suffix(".mkv").unwrap_or(tail);
    (!group.is_empty()).then_some(group)
}

fn or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}
