use crate::model::frame::{FRAMES_PER_GAME, Frame, FrameError};
use crate::model::throw::Throw;
use crate::scoring::score::{calculate_cumulative_scores, calculate_total_score, is_game_complete};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Lane details carried alongside a game. The engine never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameMetadata {
    pub lane: Option<String>,
    pub oil_pattern: Option<String>,
    pub lane_condition: Option<String>,
    pub game_type: Option<String>,
}

/// Slot a throw was (or will be) recorded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowPosition {
    pub frame_index: usize,
    pub throw_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("frame index {0} is out of range")]
    NoSuchFrame(usize),
    #[error("game is already complete")]
    GameComplete,
    #[error(transparent)]
    Frame(#[from] FrameError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    date: DateTime<Utc>,
    frames: Vec<Frame>,
    metadata: GameMetadata,
    is_complete: bool,
    total_score: u32,
}

impl Game {
    /// Ten empty frames numbered 1 through 10.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self::with_metadata(date, GameMetadata::default())
    }

    pub fn with_metadata(date: DateTime<Utc>, metadata: GameMetadata) -> Self {
        let frames = (1..=FRAMES_PER_GAME as u8).map(Frame::new).collect();
        Self::from_parts(date, frames, metadata)
    }

    /// Builds a game from stored frames; the cached total and completion
    /// flag are recomputed rather than trusted. Frames are numbered by
    /// position, so the tenth entry is always frame 10.
    pub fn from_parts(date: DateTime<Utc>, frames: Vec<Frame>, metadata: GameMetadata) -> Self {
        let frames = frames
            .into_iter()
            .enumerate()
            .map(|(index, frame)| {
                frame.renumbered(u8::try_from(index + 1).unwrap_or(u8::MAX))
            })
            .collect();
        let mut game = Self {
            date,
            frames,
            metadata,
            is_complete: false,
            total_score: 0,
        };
        game.refresh();
        game
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn metadata(&self) -> &GameMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut GameMetadata {
        &mut self.metadata
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, frame_index: usize) -> Option<&Frame> {
        self.frames.get(frame_index)
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn cumulative_scores(&self) -> Vec<u32> {
        calculate_cumulative_scores(&self.frames)
    }

    /// The slot the next throw belongs in, or `None` once the game is over.
    pub fn next_position(&self) -> Option<ThrowPosition> {
        if self.is_complete {
            return None;
        }
        self.frames
            .iter()
            .position(|frame| !frame.is_complete())
            .map(|frame_index| ThrowPosition {
                frame_index,
                throw_index: self.frames[frame_index].throws().len(),
            })
    }

    pub fn record_throw(
        &mut self,
        frame_index: usize,
        throw: Throw,
    ) -> Result<ThrowPosition, GameError> {
        let frame = self
            .frames
            .get_mut(frame_index)
            .ok_or(GameError::NoSuchFrame(frame_index))?;
        let throw_index = frame.record(throw)?;
        self.refresh();
        Ok(ThrowPosition {
            frame_index,
            throw_index,
        })
    }

    pub fn record_next(&mut self, throw: Throw) -> Result<ThrowPosition, GameError> {
        let position = self.next_position().ok_or(GameError::GameComplete)?;
        self.record_throw(position.frame_index, throw)
    }

    pub fn set_pocket_hit(&mut self, frame_index: usize, pocket_hit: bool) -> Result<(), GameError> {
        self.frames
            .get_mut(frame_index)
            .ok_or(GameError::NoSuchFrame(frame_index))?
            .set_pocket_hit(pocket_hit);
        Ok(())
    }

    fn refresh(&mut self) {
        self.total_score = calculate_total_score(&self.frames);
        self.is_complete = is_game_complete(&self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameError};
    use crate::model::frame::FrameError;
    use crate::model::pins::PinSet;
    use crate::model::throw::Throw;
    use chrono::{TimeZone, Utc};

    fn date() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 19, 30, 0)
            .single()
            .expect("valid date")
    }

    fn strike() -> Throw {
        Throw::new(PinSet::full())
    }

    #[test]
    fn new_game_has_ten_empty_frames() {
        let game = Game::new(date());
        assert_eq!(game.frames().len(), 10);
        assert_eq!(game.frames()[0].number(), 1);
        assert_eq!(game.frames()[9].number(), 10);
        assert_eq!(game.total_score(), 0);
        assert!(!game.is_complete());
        assert!(game.cumulative_scores().is_empty());
    }

    #[test]
    fn record_next_walks_through_a_perfect_game() {
        let mut game = Game::new(date());
        for _ in 0..12 {
            game.record_next(strike()).expect("throw accepted");
        }
        assert!(game.is_complete());
        assert_eq!(game.total_score(), 300);
        assert_eq!(game.next_position(), None);
        assert_eq!(game.record_next(strike()), Err(GameError::GameComplete));
    }

    #[test]
    fn cached_total_tracks_every_throw() {
        let mut game = Game::new(date());
        game.record_next(strike()).unwrap();
        assert_eq!(game.total_score(), 0);
        game.record_next(Throw::new(PinSet::from_pins([1, 2, 3]))).unwrap();
        game.record_next(Throw::new(PinSet::from_pins([4]))).unwrap();
        assert_eq!(game.total_score(), 18);
        assert_eq!(game.cumulative_scores(), vec![14, 18]);
    }

    #[test]
    fn next_position_moves_past_strikes() {
        let mut game = Game::new(date());
        let position = game.record_next(strike()).unwrap();
        assert_eq!((position.frame_index, position.throw_index), (0, 0));
        let next = game.next_position().expect("game in progress");
        assert_eq!((next.frame_index, next.throw_index), (1, 0));
    }

    #[test]
    fn rejects_throws_into_closed_or_missing_frames() {
        let mut game = Game::new(date());
        game.record_throw(2, strike()).unwrap();
        assert_eq!(
            game.record_throw(2, Throw::miss()),
            Err(GameError::Frame(FrameError::FrameComplete(3)))
        );
        assert_eq!(
            game.record_throw(10, Throw::miss()),
            Err(GameError::NoSuchFrame(10))
        );
    }

    #[test]
    fn pocket_hit_flag_is_independent_of_score() {
        let mut game = Game::new(date());
        game.set_pocket_hit(0, true).unwrap();
        assert!(game.frames()[0].is_pocket_hit());
        assert_eq!(game.total_score(), 0);
        assert!(game.set_pocket_hit(11, true).is_err());
    }
}
