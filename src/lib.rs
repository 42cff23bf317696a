//! Flixgate - streaming-reference decoder for Stremio-compatible addons
//!
//! This library crate exposes configuration and playback resolution for
//! integration testing; decoding itself lives in `fg-parser`.

pub mod config;
pub mod playback;
