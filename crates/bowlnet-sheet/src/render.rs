use std::fmt::Write as _;

use bowlnet_core::game::game_state::Game;
use bowlnet_core::scoring::frame_symbols;

const CELL_WIDTH: usize = 5;
const TENTH_CELL_WIDTH: usize = 7;

/// Fixed-width scoresheet: frame numbers, marks, then running totals.
pub fn render_scoresheet(game: &Game) -> String {
    let cumulative = game.cumulative_scores();
    let mut header = String::from("|");
    let mut marks = String::from("|");
    let mut totals = String::from("|");

    for (index, frame) in game.frames().iter().enumerate() {
        let width = if frame.is_tenth() {
            TENTH_CELL_WIDTH
        } else {
            CELL_WIDTH
        };
        let symbols = frame_symbols(frame)
            .iter()
            .map(|symbol| if symbol.is_empty() { " " } else { symbol.as_str() })
            .collect::<Vec<_>>()
            .join(" ");
        let total = cumulative
            .get(index)
            .map(u32::to_string)
            .unwrap_or_default();

        let _ = write!(header, "{:^width$}|", frame.number());
        let _ = write!(marks, "{:^width$}|", symbols);
        let _ = write!(totals, "{:^width$}|", total);
    }

    let status = if game.is_complete() {
        "final"
    } else {
        "in progress"
    };
    format!(
        "{header}\n{marks}\n{totals}\nTotal: {} ({status})\n",
        game.total_score()
    )
}
