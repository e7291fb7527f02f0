//! Scorekeeping over recorded frames.
//!
//! - `reconstruct`: replays a frame's throws to recover the standing rack.
//! - `score`: strike/spare lookahead scoring and game completion.
//! - `split`: first-ball split detection over the pin-adjacency graph.
//! - `symbols`: traditional scoresheet notation.

pub mod reconstruct;
pub mod score;
pub mod split;
pub mod symbols;

pub use reconstruct::{is_fresh_rack, knocked_count, standing_pins_after, standing_pins_before};
pub use score::{
    calculate_cumulative_scores, calculate_frame_score, calculate_total_score, is_frame_complete,
    is_game_complete,
};
pub use split::{is_split_converted, is_split_leave, split_leave};
pub use symbols::frame_symbols;
