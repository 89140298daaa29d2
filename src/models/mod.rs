//! Data structures for brackets and the spinner: players, matches, rounds, picker items.

mod bracket;
mod game;
mod picker;
mod player;

pub use bracket::{Bracket, BracketError, BracketFormat, Round};
pub use game::{BracketSide, GameMatch, MatchId, MatchStatus};
pub use picker::{PickerItem, SpinAnimation, SpinnerState, TrackRecord};
pub use player::{Player, PlayerId};
