use crate::model::adjacency::count_clusters;
use crate::model::frame::Frame;
use crate::model::pins::PinSet;
use crate::scoring::reconstruct::{knocked_count, standing_pins_after};

const HEADPIN: u8 = 1;

fn is_split_position(frame: &Frame, throw_index: usize) -> bool {
    if frame.is_tenth() {
        throw_index <= 1
    } else {
        throw_index == 0
    }
}

/// The leave after throw `throw_index` when it is a split: at least two
/// pins, headpin down, and two or more disconnected groups.
pub fn split_leave(frame: &Frame, throw_index: usize) -> Option<PinSet> {
    if !is_split_position(frame, throw_index) {
        return None;
    }
    let throw = frame.throw(throw_index)?;
    if throw.is_foul() || knocked_count(frame, throw_index) == 0 {
        return None;
    }

    let leave = standing_pins_after(frame, throw_index);
    if leave.len() < 2 || leave.contains(HEADPIN) || count_clusters(leave) < 2 {
        return None;
    }
    Some(leave)
}

pub fn is_split_leave(frame: &Frame, throw_index: usize) -> bool {
    split_leave(frame, throw_index).is_some()
}

/// True when the throw after a split leave cleared the remaining pins.
pub fn is_split_converted(frame: &Frame, throw_index: usize) -> bool {
    if !is_split_leave(frame, throw_index) {
        return false;
    }
    let next = throw_index + 1;
    frame.throw(next).is_some() && standing_pins_after(frame, next).is_empty()
}
