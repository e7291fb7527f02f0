use std::path::Path;

use bowlnet_core::game::game_state::Game;
use bowlnet_core::game::stats::GameStats;
use bowlnet_core::scoring::{frame_symbols, is_fresh_rack, is_split_converted, split_leave};
use serde::Serialize;

/// One JSONL row per scored game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRow {
    pub game_index: usize,
    pub source: String,
    pub date: String,
    pub total_score: u32,
    pub is_complete: bool,
    pub cumulative_scores: Vec<u32>,
    pub symbols: Vec<Vec<String>>,
    pub splits: Vec<SplitRow>,
    pub stats: GameStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    pub frame: u8,
    pub throw_index: usize,
    pub leave: String,
    pub converted: bool,
}

impl GameRow {
    pub fn build(game_index: usize, source: &Path, game: &Game, stats: &GameStats) -> Self {
        let splits = game
            .frames()
            .iter()
            .flat_map(|frame| {
                (0..frame.throws().len())
                    .filter(move |&index| is_fresh_rack(frame, index))
                    .filter_map(move |index| {
                        split_leave(frame, index).map(|leave| SplitRow {
                            frame: frame.number(),
                            throw_index: index,
                            leave: leave.to_string(),
                            converted: is_split_converted(frame, index),
                        })
                    })
            })
            .collect();

        Self {
            game_index,
            source: source.display().to_string(),
            date: game.date().to_rfc3339(),
            total_score: game.total_score(),
            is_complete: game.is_complete(),
            cumulative_scores: game.cumulative_scores(),
            symbols: game.frames().iter().map(frame_symbols).collect(),
            splits,
            stats: *stats,
        }
    }
}
