//! Party picker: library with bracket generation, spinner selection, and track loading.

pub mod config;
pub mod logic;
pub mod models;

pub use config::ServerConfig;
pub use logic::{
    calculate_spin_rotation, create_sample_players, create_spin_animation, default_picker_items,
    generate_color_from_index, generate_double_elimination_bracket,
    generate_single_elimination_bracket, load_tracks, normalize_tracks, parse_players_csv,
    select_random_item, select_weighted_random_item, simulate_matches, slugify, spin,
    DataLoadError, ImportError, TrackSource, DEFAULT_SPINS,
};
pub use models::{
    Bracket, BracketError, BracketFormat, BracketSide, GameMatch, MatchId, MatchStatus,
    PickerItem, Player, PlayerId, Round, SpinAnimation, SpinnerState, TrackRecord,
};
