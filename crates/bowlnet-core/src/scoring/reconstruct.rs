use crate::model::frame::Frame;
use crate::model::pins::PinSet;
use crate::model::throw::Throw;

fn throw_at(frame: &Frame, index: usize) -> Throw {
    frame.throw(index).copied().unwrap_or_else(Throw::miss)
}

/// Pins standing immediately before throw `throw_index` of `frame`, derived
/// only from the throws recorded ahead of it. Unrecorded throws count as
/// misses.
pub fn standing_pins_before(frame: &Frame, throw_index: usize) -> PinSet {
    if frame.is_tenth() {
        return tenth_frame_before(frame, throw_index);
    }

    frame
        .throws()
        .iter()
        .take(throw_index)
        .fold(PinSet::full(), |standing, throw| standing.apply_throw(throw))
}

/// The 10th frame resets the rack after a strike or a cleared pair.
fn tenth_frame_before(frame: &Frame, throw_index: usize) -> PinSet {
    let full = PinSet::full();
    match throw_index {
        0 => full,
        1 => {
            let first = throw_at(frame, 0);
            if first.is_strike_on(full) {
                full
            } else {
                full.apply_throw(&first)
            }
        }
        2 => {
            let second_rack = tenth_frame_before(frame, 1);
            let after_second = second_rack.apply_throw(&throw_at(frame, 1));
            if after_second.is_empty() {
                full
            } else {
                after_second
            }
        }
        _ => full,
    }
}

/// Pins left after throw `throw_index`. Full rack when the throw has not
/// been recorded.
pub fn standing_pins_after(frame: &Frame, throw_index: usize) -> PinSet {
    match frame.throw(throw_index) {
        Some(throw) => standing_pins_before(frame, throw_index).apply_throw(throw),
        None => PinSet::full(),
    }
}

/// Whether throw `throw_index` is rolled at a freshly set rack.
pub fn is_fresh_rack(frame: &Frame, throw_index: usize) -> bool {
    if throw_index == 0 {
        return true;
    }
    if !frame.is_tenth() {
        return false;
    }

    let full = PinSet::full();
    let first = throw_at(frame, 0);
    match throw_index {
        1 => first.is_strike_on(full),
        2 => {
            if first.is_strike_on(full) {
                throw_at(frame, 1).is_strike_on(full)
            } else {
                knocked_count(frame, 0) + knocked_count(frame, 1) == 10
            }
        }
        _ => false,
    }
}

/// Scoring pin count of a throw, clipped to the rack it was rolled at.
pub fn knocked_count(frame: &Frame, throw_index: usize) -> u32 {
    frame
        .throw(throw_index)
        .map(|throw| {
            let standing = standing_pins_before(frame, throw_index);
            u32::from(throw.clip_to_standing(standing).pin_count())
        })
        .unwrap_or(0)
}
