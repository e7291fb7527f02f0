mod rows;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bowlnet_core::game::game_state::Game;
use bowlnet_core::game::serialization::GameData;
use bowlnet_core::game::stats::GameStats;
use thiserror::Error;
use tracing::{Level, event};

use crate::analytics::{AnalyticsError, SeriesAnalytics, SeriesSummary};
use crate::config::{ResolvedOutputs, SheetConfig};
use crate::render::render_scoresheet;

pub use rows::{GameRow, SplitRow};

/// A stored game together with the file it came from.
pub struct LoadedGame {
    pub source: PathBuf,
    pub game: Game,
}

/// Scores every configured game and writes the series artifacts.
pub struct SheetRunner {
    config: SheetConfig,
    outputs: ResolvedOutputs,
    games: Vec<LoadedGame>,
    logging_enabled: bool,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub games_scored: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub series: SeriesSummary,
}

impl SheetRunner {
    /// Build a runner from a validated configuration, reading every game file.
    pub fn new(config: SheetConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let games = config
            .games
            .iter()
            .map(|path| load_game(path))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
            games,
        })
    }

    pub fn games(&self) -> &[LoadedGame] {
        &self.games
    }

    /// Text scoresheets for every loaded game, in configuration order.
    pub fn scoresheets(&self) -> Vec<(PathBuf, String)> {
        self.games
            .iter()
            .map(|loaded| (loaded.source.clone(), render_scoresheet(&loaded.game)))
            .collect()
    }

    /// Score the series, streaming one JSONL row per game to disk.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut analytics = SeriesAnalytics::new(self.config.bowler.clone());
        let mut rows_written = 0usize;

        for (index, loaded) in self.games.iter().enumerate() {
            let stats = GameStats::from_frames(loaded.game.frames());
            let row = GameRow::build(index, &loaded.source, &loaded.game, &stats);

            if self.logging_enabled && tracing::enabled!(Level::INFO) {
                event!(
                    target: "bowlnet_sheet::game_scored",
                    Level::INFO,
                    run_id = %self.config.run_id,
                    game_index = index as u64,
                    source = %loaded.source.display(),
                    total_score = row.total_score,
                    is_complete = row.is_complete,
                    scored_frames = row.cumulative_scores.len() as u64,
                    strikes = stats.strikes,
                    spares = stats.spares,
                    splits = row.splits.len() as u64
                );
            }
            if !loaded.game.is_complete() {
                event!(
                    Level::WARN,
                    source = %loaded.source.display(),
                    "game is still in progress; excluded from average"
                );
            }

            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
            analytics.record_game(&loaded.game, &stats);
        }

        writer.flush()?;

        let series = analytics.finalize()?;
        series.write_markdown(&self.outputs.summary_md, &self.config.run_id)?;

        Ok(RunSummary {
            games_scored: self.games.len(),
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            series,
        })
    }
}

/// Reads a stored game in its JSON storage form.
pub fn load_game(path: &Path) -> Result<LoadedGame, RunnerError> {
    let json = fs::read_to_string(path).map_err(|source| RunnerError::ReadGame {
        path: path.to_path_buf(),
        source,
    })?;
    let data = GameData::from_json(&json).map_err(|source| RunnerError::ParseGame {
        path: path.to_path_buf(),
        source,
    })?;
    event!(Level::DEBUG, path = %path.display(), frames = data.frames.len() as u64, "loaded game");
    Ok(LoadedGame {
        source: path.to_path_buf(),
        game: data.restore(),
    })
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = parent {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to read game {path:?}: {source}")]
    ReadGame {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse game {path:?}: {source}")]
    ParseGame {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}
