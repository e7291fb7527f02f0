use std::fs;
use std::path::Path;

use bowlnet_core::game::game_state::Game;
use bowlnet_core::game::stats::GameStats;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("no games were recorded")]
    Empty,
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
struct Average {
    sum: f64,
    count: usize,
}

impl Average {
    fn new() -> Self {
        Self { sum: 0.0, count: 0 }
    }

    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Accumulates per-game statistics across a series of games.
pub struct SeriesAnalytics {
    bowler: Option<String>,
    games: usize,
    completed: usize,
    average: Average,
    high_game: Option<u32>,
    low_game: Option<u32>,
    pins: u32,
    stats: GameStats,
}

impl SeriesAnalytics {
    pub fn new(bowler: Option<String>) -> Self {
        Self {
            bowler,
            games: 0,
            completed: 0,
            average: Average::new(),
            high_game: None,
            low_game: None,
            pins: 0,
            stats: GameStats::default(),
        }
    }

    /// Only completed games count towards average and high/low; counting
    /// stats include every recorded throw.
    pub fn record_game(&mut self, game: &Game, stats: &GameStats) {
        self.games += 1;
        self.stats.merge(stats);

        if !game.is_complete() {
            return;
        }

        let score = game.total_score();
        self.completed += 1;
        self.pins += score;
        self.average.add(f64::from(score));
        self.high_game = Some(self.high_game.map_or(score, |high| high.max(score)));
        self.low_game = Some(self.low_game.map_or(score, |low| low.min(score)));
    }

    pub fn finalize(self) -> Result<SeriesSummary, AnalyticsError> {
        if self.games == 0 {
            return Err(AnalyticsError::Empty);
        }

        Ok(SeriesSummary {
            bowler: self.bowler,
            games: self.games,
            completed_games: self.completed,
            series_pins: self.pins,
            average: self.average.mean(),
            high_game: self.high_game,
            low_game: self.low_game,
            strike_rate: self.stats.strike_rate(),
            spare_rate: self.stats.spare_rate(),
            first_ball_average: self.stats.first_ball_average(),
            pocket_rate: self.stats.pocket_rate(),
            stats: self.stats,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub bowler: Option<String>,
    pub games: usize,
    pub completed_games: usize,
    pub series_pins: u32,
    pub average: Option<f64>,
    pub high_game: Option<u32>,
    pub low_game: Option<u32>,
    pub strike_rate: Option<f64>,
    pub spare_rate: Option<f64>,
    pub first_ball_average: Option<f64>,
    pub pocket_rate: Option<f64>,
    pub stats: GameStats,
}

impl SeriesSummary {
    pub fn to_markdown(&self, run_id: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Series summary: {run_id}\n\n"));
        if let Some(bowler) = &self.bowler {
            out.push_str(&format!("Bowler: {bowler}\n\n"));
        }
        out.push_str("| Metric | Value |\n|---|---|\n");

        let rows: [(&str, String); 14] = [
            ("Games", self.games.to_string()),
            ("Completed games", self.completed_games.to_string()),
            ("Series pins", self.series_pins.to_string()),
            ("Average", fmt_number(self.average)),
            ("High game", fmt_score(self.high_game)),
            ("Low game", fmt_score(self.low_game)),
            ("Strike %", fmt_percent(self.strike_rate)),
            ("Spare %", fmt_percent(self.spare_rate)),
            ("First-ball average", fmt_number(self.first_ball_average)),
            ("Pocket %", fmt_percent(self.pocket_rate)),
            ("Open frames", self.stats.open_frames.to_string()),
            (
                "Splits (converted)",
                format!("{} ({})", self.stats.splits, self.stats.splits_converted),
            ),
            ("Fouls", self.stats.fouls.to_string()),
            ("Gutter balls", self.stats.gutter_balls.to_string()),
        ];
        for (label, value) in rows {
            out.push_str(&format!("| {label} | {value} |\n"));
        }
        out
    }

    pub fn write_markdown(&self, path: &Path, run_id: &str) -> Result<(), AnalyticsError> {
        fs::write(path, self.to_markdown(run_id)).map_err(|source| AnalyticsError::Io {
            context: "writing summary markdown",
            source,
        })
    }
}

fn fmt_number(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn fmt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v * 100.0))
}

fn fmt_score(value: Option<u32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bowlnet_core::model::pins::PinSet;
    use bowlnet_core::model::throw::Throw;
    use chrono::{TimeZone, Utc};

    fn game_of(throws: &[Throw]) -> Game {
        let date = Utc
            .with_ymd_and_hms(2024, 2, 2, 19, 0, 0)
            .single()
            .expect("valid date");
        let mut game = Game::new(date);
        for throw in throws {
            game.record_next(*throw).unwrap();
        }
        game
    }

    fn record(analytics: &mut SeriesAnalytics, game: &Game) {
        analytics.record_game(game, &GameStats::from_frames(game.frames()));
    }

    #[test]
    fn empty_series_is_an_error() {
        let analytics = SeriesAnalytics::new(None);
        assert!(matches!(analytics.finalize(), Err(AnalyticsError::Empty)));
    }

    #[test]
    fn average_ignores_unfinished_games() {
        let mut analytics = SeriesAnalytics::new(Some("Pat".into()));
        record(&mut analytics, &game_of(&[Throw::new(PinSet::full()); 12]));
        record(&mut analytics, &game_of(&[Throw::miss(); 20]));
        record(&mut analytics, &game_of(&[Throw::new(PinSet::full()); 3]));

        let summary = analytics.finalize().expect("summary");
        assert_eq!(summary.games, 3);
        assert_eq!(summary.completed_games, 2);
        assert_eq!(summary.series_pins, 300);
        assert_eq!(summary.average, Some(150.0));
        assert_eq!(summary.high_game, Some(300));
        assert_eq!(summary.low_game, Some(0));
        assert_eq!(summary.stats.strikes, 15);
    }

    #[test]
    fn markdown_lists_metrics() {
        let mut analytics = SeriesAnalytics::new(None);
        record(&mut analytics, &game_of(&[Throw::miss(); 20]));
        let markdown = analytics.finalize().unwrap().to_markdown("week1");
        assert!(markdown.starts_with("# Series summary: week1"));
        assert!(markdown.contains("| Average | 0.00 |"));
        assert!(markdown.contains("| Strike % | 0.0% |"));
        assert!(markdown.contains("| Gutter balls | 20 |"));
    }
}
