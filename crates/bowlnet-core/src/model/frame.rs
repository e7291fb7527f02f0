use crate::model::throw::Throw;
use crate::scoring::reconstruct::standing_pins_before;
use crate::scoring::score::is_frame_complete;
use thiserror::Error;

pub const FRAMES_PER_GAME: usize = 10;
pub const TENTH_FRAME: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    number: u8,
    throws: Vec<Throw>,
    is_pocket_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame {0} is already complete")]
    FrameComplete(u8),
}

impl Frame {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            throws: Vec::with_capacity(3),
            is_pocket_hit: false,
        }
    }

    /// Builds a frame from stored parts without any normalization.
    pub fn from_parts(number: u8, throws: Vec<Throw>, is_pocket_hit: bool) -> Self {
        Self {
            number,
            throws,
            is_pocket_hit,
        }
    }

    /// Same throws under a new frame number.
    pub fn renumbered(self, number: u8) -> Self {
        Self { number, ..self }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn is_tenth(&self) -> bool {
        self.number == TENTH_FRAME
    }

    pub fn max_throws(&self) -> usize {
        if self.is_tenth() { 3 } else { 2 }
    }

    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    pub fn throw(&self, index: usize) -> Option<&Throw> {
        self.throws.get(index)
    }

    pub fn is_pocket_hit(&self) -> bool {
        self.is_pocket_hit
    }

    pub fn set_pocket_hit(&mut self, pocket_hit: bool) {
        self.is_pocket_hit = pocket_hit;
    }

    pub fn is_complete(&self) -> bool {
        is_frame_complete(self)
    }

    /// Appends a throw, clipped to the pins standing in front of it.
    pub fn record(&mut self, throw: Throw) -> Result<usize, FrameError> {
        if self.is_complete() || self.throws.len() >= self.max_throws() {
            return Err(FrameError::FrameComplete(self.number));
        }
        let index = self.throws.len();
        let standing = standing_pins_before(self, index);
        self.throws.push(throw.clip_to_standing(standing));
        Ok(index)
    }
}
