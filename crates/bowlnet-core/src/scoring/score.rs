use crate::model::frame::{FRAMES_PER_GAME, Frame};
use crate::scoring::reconstruct::knocked_count;

const TENTH_INDEX: usize = FRAMES_PER_GAME - 1;

/// Score of a single frame, or `None` while it still waits on throws that
/// have not happened yet.
pub fn calculate_frame_score(frames: &[Frame], frame_index: usize) -> Option<u32> {
    let frame = frames.get(frame_index)?;

    if frame_index == TENTH_INDEX {
        return tenth_frame_score(frame);
    }

    let first = frame.throw(0).map(|_| knocked_count(frame, 0))?;
    if first == 10 {
        let bonus = bonus_throws(frames, frame_index, 2)?;
        return Some(10 + bonus);
    }

    let second = frame.throw(1).map(|_| knocked_count(frame, 1))?;
    if first + second == 10 {
        let bonus = bonus_throws(frames, frame_index, 1)?;
        return Some(10 + bonus);
    }

    Some(first + second)
}

fn tenth_frame_score(frame: &Frame) -> Option<u32> {
    if frame.throws().len() < 2 {
        return None;
    }
    let first = knocked_count(frame, 0);
    let second = knocked_count(frame, 1);

    if first == 10 || first + second >= 10 {
        frame.throw(2)?;
        return Some(first + second + knocked_count(frame, 2));
    }

    Some(first + second)
}

/// Sum of the next `count` throws recorded after `frame_index`, walking
/// across frame boundaries.
fn bonus_throws(frames: &[Frame], frame_index: usize, count: usize) -> Option<u32> {
    let counts: Vec<u32> = frames
        .iter()
        .skip(frame_index + 1)
        .flat_map(|frame| (0..frame.throws().len()).map(move |index| knocked_count(frame, index)))
        .take(count)
        .collect();

    if counts.len() < count {
        None
    } else {
        Some(counts.iter().sum())
    }
}

/// Running totals for every scorable frame. The sequence stops at the first
/// frame that cannot be scored yet, so a short result means the game is in
/// progress.
pub fn calculate_cumulative_scores(frames: &[Frame]) -> Vec<u32> {
    let mut running = 0;
    let mut totals = Vec::with_capacity(FRAMES_PER_GAME);
    for index in 0..frames.len().min(FRAMES_PER_GAME) {
        let Some(score) = calculate_frame_score(frames, index) else {
            break;
        };
        running += score;
        totals.push(running);
    }
    totals
}

pub fn calculate_total_score(frames: &[Frame]) -> u32 {
    calculate_cumulative_scores(frames)
        .last()
        .copied()
        .unwrap_or(0)
}

pub fn is_game_complete(frames: &[Frame]) -> bool {
    if frames.len() < FRAMES_PER_GAME {
        return false;
    }
    tenth_frame_complete(&frames[TENTH_INDEX])
}

fn tenth_frame_complete(frame: &Frame) -> bool {
    let thrown = frame.throws().len();
    if thrown < 2 {
        return false;
    }
    let first = knocked_count(frame, 0);
    let second = knocked_count(frame, 1);
    if first == 10 || first + second == 10 {
        thrown >= 3
    } else {
        true
    }
}

/// Frames 1-9 close on a strike or a second ball; the 10th follows the
/// bonus-ball rules.
pub fn is_frame_complete(frame: &Frame) -> bool {
    if frame.is_tenth() {
        return tenth_frame_complete(frame);
    }
    match frame.throws().len() {
        0 => false,
        1 => knocked_count(frame, 0) == 10,
        _ => true,
    }
}
