//! Server configuration from environment variables.

use crate::logic::{fallback_tracks, TrackSource};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where to listen and where track data lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Served as static files under /data.
    pub data_dir: PathBuf,
    pub tracks_path: PathBuf,
    pub tracks_fallback_path: PathBuf,
}

impl ServerConfig {
    /// Read HOST, PORT, DATA_DIR, TRACKS_PATH, TRACKS_FALLBACK_PATH.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; an unparsable PORT uses the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let data_dir = get("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let tracks_path = get("TRACKS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("tracks.json"));
        let tracks_fallback_path = get("TRACKS_FALLBACK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("tracks-fallback.json"));

        Self {
            host,
            port,
            data_dir,
            tracks_path,
            tracks_fallback_path,
        }
    }

    /// Loader chain: primary file, fallback file, built-in list.
    pub fn track_sources(&self) -> Vec<TrackSource> {
        vec![
            TrackSource::JsonFile(self.tracks_path.clone()),
            TrackSource::JsonFile(self.tracks_fallback_path.clone()),
            TrackSource::Static(fallback_tracks()),
        ]
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
