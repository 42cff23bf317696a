//! Public-API tests for fg-parser: decoding real-looking addon references
//! end to end.

use assert_matches::assert_matches;
use fg_parser::{encode_reference, parse, safe_parse, Error, StreamMetadata, UNKNOWN};
use serde_json::json;

fn metadata(value: serde_json::Value) -> StreamMetadata {
    serde_json::from_value(value).unwrap()
}

fn stream(filename: &str) -> StreamMetadata {
    metadata(json!({
        "url": "https://debrid.example/dl/7f3a/video.mkv",
        "name": "[RD+] Addon\n1080p",
        "description": filename,
        "behaviorHints": {
            "filename": filename,
            "bingeGroup": "addon|WEB|1080p"
        }
    }))
}

#[test]
fn scenario_scene_release_filename() {
    let reference =
        encode_reference(&stream("Movie.Title.2021.1080p.WEB.x264-GROUP.mkv"), &[]);
    let r = parse(&reference).unwrap();

    assert_eq!(r.quality.resolution, "1080p");
    assert_eq!(r.quality.format, "WEB");
    assert_eq!(r.quality.codec, "x264");
    assert_eq!(r.quality.size, UNKNOWN);
    assert_eq!(r.media.year, "2021");
    assert_eq!(r.media.title, "Movie");
    assert_eq!(r.media.release_group, "GROUP");
}

#[test]
fn round_trip_recovers_decoded_url() {
    let urls = [
        "https://debrid.example/dl/7f3a/video.mkv",
        "http://10.0.0.2:8080/stream?id=a+b&x=%20",
        "magnet-free/ünïcödé/path.mp4",
    ];
    for url in urls {
        let reference = encode_reference(&metadata(json!({ "url": url })), &[]);
        let r = parse(&reference).unwrap();
        assert_eq!(r.decoded_url.as_deref(), Some(url));
        assert_eq!(r.metadata.url(), Some(url));
    }
}

#[test]
fn unrecognized_filename_degrades_to_sentinels() {
    let reference = encode_reference(&stream("holiday_recording"), &[]);
    let r = parse(&reference).unwrap();

    assert_eq!(r.quality.resolution, UNKNOWN);
    assert_eq!(r.quality.format, UNKNOWN);
    assert_eq!(r.quality.codec, UNKNOWN);
    assert_eq!(r.quality.size, UNKNOWN);
    assert_eq!(r.media.title, "holiday_recording");
    assert_eq!(r.media.year, UNKNOWN);
    assert_eq!(r.media.release_group, UNKNOWN);
}

#[test]
fn every_heuristic_field_is_populated() {
    let names = [
        "Movie.Title.2021.1080p.WEB.x264-GROUP.mkv",
        "A",
        ".",
        "-",
        "Show.S01E01.720p.HDTV",
        "Film.1999.700MB.BRRip-",
    ];
    for name in names {
        let r = parse(&encode_reference(&stream(name), &[])).unwrap();
        for field in [
            &r.quality.resolution,
            &r.quality.format,
            &r.quality.codec,
            &r.quality.size,
            &r.media.title,
            &r.media.year,
            &r.media.release_group,
        ] {
            assert!(!field.is_empty(), "empty field for {name:?}");
        }
    }
}

#[test]
fn parse_is_idempotent() {
    let reference = encode_reference(
        &stream("Movie.Title.2021.1080p.WEB.x264-GROUP.mkv"),
        &["https://cdn.example/{quality}/manifest.mpd"],
    );
    assert_eq!(parse(&reference).unwrap(), parse(&reference).unwrap());
}

#[test]
fn payload_without_brace_fails_and_safe_parse_returns_none() {
    // base64("plain text, no object")
    let reference = "cGxhaW4gdGV4dCwgbm8gb2JqZWN0";
    assert_matches!(parse(reference), Err(Error::NoJsonObject));
    assert!(safe_parse(reference).is_none());
}

#[test]
fn decode_failures_are_distinguishable() {
    let errors = [
        parse("%E0%A4%A").unwrap_err(),
        parse("@@@@").unwrap_err(),
        parse("cGxhaW4gdGV4dCwgbm8gb2JqZWN0").unwrap_err(),
    ];
    for err in errors {
        assert!(err.is_decode_failure(), "{err}");
    }
}

#[test]
fn single_segment_has_no_manifest_url() {
    let reference = encode_reference(&stream("A.2020.1080p"), &[]);
    assert!(!reference.contains('/'));
    let r = parse(&reference).unwrap();
    assert!(r.manifest_url.is_none());
    assert!(r.imdb_id.is_none());
}

#[test]
fn manifest_and_imdb_segments() {
    let payload = encode_reference(&metadata(json!({ "url": "u" })), &[]);

    let r = parse(&format!("{payload}/tt0133093/extra")).unwrap();
    assert_eq!(r.imdb_id.as_deref(), Some("tt0133093"));

    let r = parse(&format!("{payload}/dash%2Fmain.mpd/tt0133093")).unwrap();
    assert_eq!(r.manifest_url.as_deref(), Some("dash/main.mpd"));
    assert_eq!(r.imdb_id.as_deref(), Some("tt0133093"));

    let r = parse(&format!("{payload}/dash%2Fmain.mpd")).unwrap();
    assert!(r.imdb_id.is_none());
}

#[test]
fn serialized_output_uses_camel_case() {
    let reference = encode_reference(
        &stream("Movie.Title.2021.1080p.WEB.x264-GROUP.mkv"),
        &["dash.mpd"],
    );
    let value = serde_json::to_value(parse(&reference).unwrap()).unwrap();

    assert_eq!(value["decodedUrl"], json!("https://debrid.example/dl/7f3a/video.mkv"));
    assert_eq!(value["manifestUrl"], json!("dash.mpd"));
    assert_eq!(value["media"]["releaseGroup"], json!("GROUP"));
    assert_eq!(
        value["metadata"]["behaviorHints"]["bingeGroup"],
        json!("addon|WEB|1080p")
    );
    assert!(value.get("imdbId").is_none());
}
