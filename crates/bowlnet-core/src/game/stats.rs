use crate::model::frame::Frame;
use crate::scoring::reconstruct::{is_fresh_rack, knocked_count, standing_pins_after};
use crate::scoring::split::{is_split_converted, is_split_leave};
use serde::Serialize;

/// Per-game counting statistics derived purely from the recorded throws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub frames_bowled: u32,
    pub strikes: u32,
    /// Throws rolled at a freshly set rack.
    pub strike_chances: u32,
    pub spares: u32,
    /// Fresh-rack balls short of a strike that were followed by another throw.
    pub spare_chances: u32,
    pub open_frames: u32,
    pub splits: u32,
    pub splits_converted: u32,
    pub fouls: u32,
    pub gutter_balls: u32,
    pub pocket_hits: u32,
    pub first_ball_pins: u32,
    pub first_balls: u32,
}

impl GameStats {
    pub fn from_frames(frames: &[Frame]) -> Self {
        let mut stats = Self::default();
        for frame in frames {
            stats.record_frame(frame);
        }
        stats
    }

    fn record_frame(&mut self, frame: &Frame) {
        if frame.throws().is_empty() {
            return;
        }
        self.frames_bowled += 1;
        if frame.is_pocket_hit() {
            self.pocket_hits += 1;
        }

        for (index, throw) in frame.throws().iter().enumerate() {
            let fresh = is_fresh_rack(frame, index);
            let count = knocked_count(frame, index);
            let cleared = standing_pins_after(frame, index).is_empty();

            if throw.is_foul() {
                self.fouls += 1;
            } else if count == 0 {
                self.gutter_balls += 1;
            }

            if fresh {
                self.strike_chances += 1;
                self.first_balls += 1;
                self.first_ball_pins += count;
                if count == 10 && !throw.is_foul() {
                    self.strikes += 1;
                } else if frame.throw(index + 1).is_some() {
                    self.spare_chances += 1;
                }
            } else if cleared && count > 0 {
                self.spares += 1;
            }

            // A 10th-frame second ball at a partial rack is a spare attempt.
            if fresh && is_split_leave(frame, index) {
                self.splits += 1;
                if is_split_converted(frame, index) {
                    self.splits_converted += 1;
                }
            }
        }

        if is_open_frame(frame) {
            self.open_frames += 1;
        }
    }

    pub fn strike_rate(&self) -> Option<f64> {
        ratio(self.strikes, self.strike_chances)
    }

    pub fn spare_rate(&self) -> Option<f64> {
        ratio(self.spares, self.spare_chances)
    }

    pub fn first_ball_average(&self) -> Option<f64> {
        ratio(self.first_ball_pins, self.first_balls)
    }

    pub fn pocket_rate(&self) -> Option<f64> {
        ratio(self.pocket_hits, self.frames_bowled)
    }

    pub fn merge(&mut self, other: &GameStats) {
        self.frames_bowled += other.frames_bowled;
        self.strikes += other.strikes;
        self.strike_chances += other.strike_chances;
        self.spares += other.spares;
        self.spare_chances += other.spare_chances;
        self.open_frames += other.open_frames;
        self.splits += other.splits;
        self.splits_converted += other.splits_converted;
        self.fouls += other.fouls;
        self.gutter_balls += other.gutter_balls;
        self.pocket_hits += other.pocket_hits;
        self.first_ball_pins += other.first_ball_pins;
        self.first_balls += other.first_balls;
    }
}

/// Two balls thrown without a mark in the frame's first two slots.
fn is_open_frame(frame: &Frame) -> bool {
    if frame.throws().len() < 2 {
        return false;
    }
    let first = knocked_count(frame, 0);
    let second = knocked_count(frame, 1);
    first < 10 && first + second < 10
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(f64::from(numerator) / f64::from(denominator))
    }
}
