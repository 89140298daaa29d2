//! Bracket and picker logic: seeding, bracket generation, simulation, spinner, tracks.

mod bracket;
mod picker;
mod roster;
mod seeding;
mod simulate;
mod tracks;

pub use bracket::{generate_double_elimination_bracket, generate_single_elimination_bracket};
pub use picker::{
    calculate_spin_rotation, create_spin_animation, default_picker_items,
    select_random_item, select_weighted_random_item, spin, DEFAULT_SPINS,
    DEFAULT_SPIN_DURATION_MS, SPIN_EASING,
};
pub use roster::{create_sample_players, parse_players_csv, ImportError};
pub use seeding::{is_power_of_two, round_title, round_titles, seed_players};
pub use simulate::{simulate_matches, FAVORITE_WIN_CHANCE};
pub use tracks::{
    fallback_tracks, generate_color_from_index, load_tracks, normalize_tracks,
    parse_track_document, slugify, DataLoadError, TrackSource, DEFAULT_LIGHTNESS,
    DEFAULT_SATURATION, GOLDEN_RATIO_CONJUGATE,
};
