use std::path::PathBuf;

use clap::Parser;

use bowlnet_sheet::config::{ResolvedOutputs, SheetConfig};
use bowlnet_sheet::logging::init_logging;
use bowlnet_sheet::runner::SheetRunner;

/// Scoresheet harness for stored bowling games.
#[derive(Debug, Parser)]
#[command(
    name = "bowlnet-sheet",
    author,
    version,
    about = "Score stored bowling games and summarise a series"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "sheets/sheet.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Additional game file to score; may be repeated.
    #[arg(long = "game", value_name = "FILE")]
    games: Vec<PathBuf>,

    /// Exit after validating the configuration and loading games.
    #[arg(long)]
    validate_only: bool,

    /// Print a text scoresheet for every game.
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SheetConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    config.games.extend(cli.games);
    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let game_count = config.games.len();
    let run_id = config.run_id.clone();

    println!(
        "Loaded configuration '{run_id}' with {game_count} game{}",
        if game_count == 1 { "" } else { "s" }
    );

    let logging_guard = init_logging(&config.logging, &outputs, &run_id)?;
    let runner = SheetRunner::new(config, outputs)?;

    if cli.print {
        for (source, sheet) in runner.scoresheets() {
            println!("\n{}\n{sheet}", source.display());
        }
    }

    if cli.validate_only {
        println!("Validation-only mode: scoring skipped.");
        return Ok(());
    }

    let summary = runner.run()?;
    println!(
        "Series complete for '{run_id}': {} games → {} rows at {}",
        summary.games_scored,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary table: {}", summary.summary_path.display());
    match summary.series.average {
        Some(average) => println!(
            "  Average {:.2} over {} completed game{}",
            average,
            summary.series.completed_games,
            if summary.series.completed_games == 1 { "" } else { "s" }
        ),
        None => println!("  No completed games; average unavailable"),
    }
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}
