pub mod game_state;
pub mod serialization;
pub mod stats;
