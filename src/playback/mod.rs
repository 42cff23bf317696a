//! Playback resolution: turning a parsed streaming reference into the URL the
//! player should open.
//!
//! Addons flagged `bypass` have their decoded stream URL played as-is. Every
//! other stream goes through a manifest template (the reference's own manifest
//! segment, or `player.manifest_template`) with the playback parameters
//! substituted into it.

mod template;

pub use template::TemplateContext;

use anyhow::{Context, Result};
use fg_parser::ParsedStreamingData;
use serde::Serialize;

use crate::config::{AddonConfig, Config};

/// Values substituted into a manifest template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackParams {
    pub format: String,
    pub quality: String,
    pub audio_codec: String,
    pub audio: String,
    pub subtitles: String,
}

impl PlaybackParams {
    /// Combine filename-derived quality markers with addon settings.
    /// Addon overrides win over what the filename says.
    pub fn from_parsed(parsed: &ParsedStreamingData, addon: &AddonConfig) -> Self {
        Self {
            format: addon
                .format
                .clone()
                .unwrap_or_else(|| parsed.quality.format.clone()),
            quality: addon
                .quality
                .clone()
                .unwrap_or_else(|| parsed.quality.resolution.clone()),
            audio_codec: addon.audio_codec.clone(),
            audio: addon.audio.clone(),
            subtitles: addon.subtitles.clone(),
        }
    }

    pub fn template_context(&self) -> TemplateContext {
        TemplateContext::new()
            .with_var("format", &self.format)
            .with_var("quality", &self.quality)
            .with_var("audioCodec", &self.audio_codec)
            .with_var("audio", &self.audio)
            .with_var("subtitles", &self.subtitles)
    }
}

/// How the playable URL was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamSource {
    /// The decoded stream URL, untouched.
    Direct,
    /// A manifest template with playback parameters substituted.
    Manifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStream {
    pub addon: String,
    pub url: String,
    pub source: StreamSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<PlaybackParams>,
}

/// The addon a stream came from: the explicit id if given, otherwise the
/// first `|`-separated field of `behaviorHints.bingeGroup`.
pub fn addon_id<'a>(parsed: &'a ParsedStreamingData, explicit: Option<&'a str>) -> Option<&'a str> {
    explicit
        .or_else(|| {
            parsed
                .metadata
                .binge_group()
                .and_then(|group| group.split('|').next())
        })
        .filter(|id| !id.is_empty())
}

/// Resolve the URL the player should open for a parsed reference.
pub fn resolve_stream(
    parsed: &ParsedStreamingData,
    config: &Config,
    explicit_addon: Option<&str>,
) -> Result<ResolvedStream> {
    let id = addon_id(parsed, explicit_addon).unwrap_or_default();
    let addon = config
        .addon(id)
        .cloned()
        .unwrap_or_else(|| AddonConfig::for_id(id));

    let template = parsed
        .manifest_url
        .as_deref()
        .filter(|t| !t.is_empty())
        .or(config.player.manifest_template.as_deref());

    match template {
        Some(template) if !addon.bypass => {
            let params = PlaybackParams::from_parsed(parsed, &addon);
            let url = params.template_context().substitute(template);
            tracing::debug!("Resolved manifest for addon '{}': {}", addon.id, url);
            Ok(ResolvedStream {
                addon: addon.id,
                url,
                source: StreamSource::Manifest,
                params: Some(params),
            })
        }
        _ => {
            if !addon.bypass {
                tracing::debug!("No manifest template available; playing stream URL directly");
            }
            let url = parsed
                .decoded_url
                .clone()
                .context("Stream metadata has no url and no manifest template is available")?;
            Ok(ResolvedStream {
                addon: addon.id,
                url,
                source: StreamSource::Direct,
                params: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fg_parser::{MediaInfo, Quality, StreamMetadata};
    use serde_json::json;

    fn parsed(metadata: serde_json::Value, manifest_url: Option<&str>) -> ParsedStreamingData {
        let metadata: StreamMetadata = serde_json::from_value(metadata).unwrap();
        ParsedStreamingData {
            decoded_url: metadata.url().map(str::to_string),
            metadata,
            quality: Quality {
                resolution: "1080p".into(),
                format: "WEB".into(),
                codec: "x264".into(),
                size: "unknown".into(),
            },
            media: MediaInfo::unknown(),
            manifest_url: manifest_url.map(str::to_string),
            imdb_id: None,
        }
    }

    fn config_with(addon: AddonConfig, template: Option<&str>) -> Config {
        let mut config = Config::default();
        config.player.manifest_template = template.map(str::to_string);
        config.addons.push(addon);
        config
    }

    #[test]
    fn test_bypass_plays_decoded_url() {
        let mut addon = AddonConfig::for_id("debrid");
        addon.bypass = true;
        let config = config_with(addon, Some("https://cdn.example/{quality}.mpd"));
        let p = parsed(json!({ "url": "https://dl.example/v.mkv" }), None);

        let resolved = resolve_stream(&p, &config, Some("debrid")).unwrap();
        assert_eq!(resolved.url, "https://dl.example/v.mkv");
        assert_eq!(resolved.source, StreamSource::Direct);
        assert!(resolved.params.is_none());
    }

    #[test]
    fn test_reference_manifest_wins_over_config_template() {
        let config = config_with(
            AddonConfig::for_id("torrentio"),
            Some("https://fallback.example/{quality}.mpd"),
        );
        let p = parsed(
            json!({ "url": "u" }),
            Some("https://cdn.example/{format}/{quality}/{audioCodec}-{audio}-{subtitles}.mpd"),
        );

        let resolved = resolve_stream(&p, &config, Some("torrentio")).unwrap();
        assert_eq!(
            resolved.url,
            "https://cdn.example/WEB/1080p/aac-original-none.mpd"
        );
        assert_eq!(resolved.source, StreamSource::Manifest);
    }

    #[test]
    fn test_addon_overrides_parsed_quality() {
        let mut addon = AddonConfig::for_id("torrentio");
        addon.quality = Some("720p".into());
        addon.subtitles = "eng".into();
        let config = config_with(addon, Some("https://cdn.example/{quality}/{subtitles}.mpd"));
        let p = parsed(json!({ "url": "u" }), None);

        let resolved = resolve_stream(&p, &config, Some("torrentio")).unwrap();
        assert_eq!(resolved.url, "https://cdn.example/720p/eng.mpd");
    }

    #[test]
    fn test_addon_inferred_from_binge_group() {
        let mut addon = AddonConfig::for_id("debrid");
        addon.bypass = true;
        let config = config_with(addon, None);
        let p = parsed(
            json!({ "url": "https://dl.example/v.mkv", "behaviorHints": { "bingeGroup": "debrid|1080p" } }),
            Some("https://cdn.example/{quality}.mpd"),
        );

        assert_eq!(addon_id(&p, None), Some("debrid"));
        let resolved = resolve_stream(&p, &config, None).unwrap();
        assert_eq!(resolved.addon, "debrid");
        assert_eq!(resolved.source, StreamSource::Direct);
    }

    #[test]
    fn test_without_template_falls_back_to_stream_url() {
        let p = parsed(json!({ "url": "https://dl.example/v.mkv" }), None);
        let resolved = resolve_stream(&p, &Config::default(), None).unwrap();
        assert_eq!(resolved.url, "https://dl.example/v.mkv");
        assert_eq!(resolved.source, StreamSource::Direct);
        assert_eq!(resolved.addon, "");
    }

    #[test]
    fn test_nothing_to_play_is_an_error() {
        let p = parsed(json!({ "name": "no url" }), None);
        let err = resolve_stream(&p, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("no url"));
    }

    #[test]
    fn test_params_serialize_camel_case() {
        let p = parsed(json!({ "url": "u" }), None);
        let params = PlaybackParams::from_parsed(&p, &AddonConfig::for_id("x"));
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["audioCodec"], json!("aac"));
        assert_eq!(value["quality"], json!("1080p"));
    }
}
