use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub addons: Vec<AddonConfig>,
}

impl Config {
    /// Look up the settings for an addon by id.
    pub fn addon(&self, id: &str) -> Option<&AddonConfig> {
        self.addons.iter().find(|a| a.id == id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Manifest URL template used when a reference carries no manifest
    /// segment. Placeholders: `{format}`, `{quality}`, `{audioCodec}`,
    /// `{audio}`, `{subtitles}`.
    #[serde(default)]
    pub manifest_template: Option<String>,
}

/// Per-addon playback settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddonConfig {
    pub id: String,

    /// Play the decoded stream URL directly instead of going through the
    /// manifest template
    #[serde(default)]
    pub bypass: bool,

    /// Overrides the format parsed from the release filename
    #[serde(default)]
    pub format: Option<String>,

    /// Overrides the resolution parsed from the release filename
    #[serde(default)]
    pub quality: Option<String>,

    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Audio track language
    #[serde(default = "default_audio")]
    pub audio: String,

    /// Subtitle track language, or "none"
    #[serde(default = "default_subtitles")]
    pub subtitles: String,
}

impl AddonConfig {
    /// Default settings for an addon with no config entry.
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bypass: false,
            format: None,
            quality: None,
            audio_codec: default_audio_codec(),
            audio: default_audio(),
            subtitles: default_subtitles(),
        }
    }
}

fn default_audio_codec() -> String {
    "aac".to_string()
}
fn default_audio() -> String {
    "original".to_string()
}
fn default_subtitles() -> String {
    "none".to_string()
}
