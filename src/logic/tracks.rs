//! Track lists for the picker: normalization into wheel items and loading from an
//! ordered chain of sources with fallback.

use crate::models::{PickerItem, TrackRecord};
use serde::Deserialize;
use std::path::PathBuf;

/// Golden ratio conjugate; stepping the hue by this fraction of a turn spreads colors evenly.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

pub const DEFAULT_SATURATION: u32 = 70;
pub const DEFAULT_LIGHTNESS: u32 = 60;

/// Errors from a single track source. Never surfaced past [`load_tracks`].
#[derive(Debug)]
pub enum DataLoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// The source parsed but held no tracks.
    Empty,
}

impl std::fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::Io(e) => write!(f, "Could not read track data: {}", e),
            DataLoadError::Parse(e) => write!(f, "Malformed track data: {}", e),
            DataLoadError::Empty => write!(f, "Track data contains no tracks"),
        }
    }
}

impl std::error::Error for DataLoadError {}

impl From<std::io::Error> for DataLoadError {
    fn from(e: std::io::Error) -> Self {
        DataLoadError::Io(e)
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(e: serde_json::Error) -> Self {
        DataLoadError::Parse(e)
    }
}

/// Lowercase the label and replace every character outside [a-z0-9] with '-'.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect()
}

/// Deterministic, well-spread HSL color for the item at `index`.
pub fn generate_color_from_index(index: usize, saturation: u32, lightness: u32) -> String {
    let hue = (index as f64 * GOLDEN_RATIO_CONJUGATE * 360.0) % 360.0;
    format!("hsl({}, {}%, {}%)", hue.floor() as u32, saturation, lightness)
}

/// Turn raw track records into wheel items with stable ids and positional colors.
pub fn normalize_tracks(records: &[TrackRecord]) -> Vec<PickerItem> {
    records
        .iter()
        .enumerate()
        .map(|(i, track)| {
            PickerItem::new(slugify(&track.name), track.name.clone())
                .with_color(generate_color_from_index(i, DEFAULT_SATURATION, DEFAULT_LIGHTNESS))
        })
        .collect()
}

/// A track document is either `{"tracks": [...]}` or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum TrackDocument {
    Wrapped { tracks: Vec<TrackRecord> },
    List(Vec<TrackRecord>),
}

/// Parse a track document; an empty list is an error so the chain moves on.
pub fn parse_track_document(json: &str) -> Result<Vec<TrackRecord>, DataLoadError> {
    let tracks = match serde_json::from_str::<TrackDocument>(json)? {
        TrackDocument::Wrapped { tracks } | TrackDocument::List(tracks) => tracks,
    };
    if tracks.is_empty() {
        return Err(DataLoadError::Empty);
    }
    Ok(tracks)
}

/// Small built-in list used when no data file can be read.
pub fn fallback_tracks() -> Vec<TrackRecord> {
    vec![
        TrackRecord::base("Mario Kart Stadium"),
        TrackRecord::base("Water Park"),
        TrackRecord::base("Sweet Sweet Canyon"),
        TrackRecord::base("Thwomp Ruins"),
        TrackRecord::base("Rainbow Road"),
        TrackRecord::bonus("Paris Promenade"),
        TrackRecord::bonus("Tokyo Blur"),
        TrackRecord::bonus("Ninja Hideaway"),
    ]
}

/// One attempt in the loading chain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrackSource {
    /// JSON document on disk.
    JsonFile(PathBuf),
    /// Fixed list compiled into the binary.
    Static(Vec<TrackRecord>),
}

impl TrackSource {
    /// Short label for logs.
    pub fn describe(&self) -> String {
        match self {
            TrackSource::JsonFile(path) => path.display().to_string(),
            TrackSource::Static(_) => "built-in list".to_string(),
        }
    }

    pub async fn load(&self) -> Result<Vec<TrackRecord>, DataLoadError> {
        match self {
            TrackSource::JsonFile(path) => {
                let data = tokio::fs::read_to_string(path).await?;
                parse_track_document(&data)
            }
            TrackSource::Static(tracks) if tracks.is_empty() => Err(DataLoadError::Empty),
            TrackSource::Static(tracks) => Ok(tracks.clone()),
        }
    }
}

/// Try each source in order and normalize the first one that yields tracks. Bonus tracks
/// are dropped unless `include_bonus` is set; a source left empty by that filter counts
/// as failed. Failures are logged and skipped; if every source fails the result is empty.
pub async fn load_tracks(sources: &[TrackSource], include_bonus: bool) -> Vec<PickerItem> {
    for source in sources {
        let records = match source.load().await {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Track source {} failed: {}", source.describe(), e);
                continue;
            }
        };
        let records: Vec<TrackRecord> = records
            .into_iter()
            .filter(|t| include_bonus || !t.is_bonus)
            .collect();
        if records.is_empty() {
            log::warn!("Track source {} has only bonus tracks, skipping", source.describe());
            continue;
        }
        log::info!("Loaded {} tracks from {}", records.len(), source.describe());
        return normalize_tracks(&records);
    }
    log::warn!("All track sources failed, using an empty track list");
    Vec::new()
}
