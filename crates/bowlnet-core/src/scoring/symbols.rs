use crate::model::frame::Frame;
use crate::scoring::reconstruct::{is_fresh_rack, knocked_count, standing_pins_after};

pub const STRIKE: &str = "X";
pub const SPARE: &str = "/";
pub const MISS: &str = "-";
pub const FOUL: &str = "F";

/// Scoresheet marks for every slot of the frame: two for frames 1-9, three
/// for the 10th. Unthrown slots are empty strings.
pub fn frame_symbols(frame: &Frame) -> Vec<String> {
    let slots = if frame.is_tenth() { 3 } else { 2 };
    (0..slots)
        .map(|index| throw_symbol(frame, index))
        .collect()
}

/// Mark for a single throw; empty when it has not been rolled.
pub fn throw_symbol(frame: &Frame, throw_index: usize) -> String {
    let Some(throw) = frame.throw(throw_index) else {
        return String::new();
    };
    if throw.is_foul() {
        return FOUL.to_string();
    }

    let count = knocked_count(frame, throw_index);
    let fresh = is_fresh_rack(frame, throw_index);
    if fresh && count == 10 {
        STRIKE.to_string()
    } else if !fresh && count > 0 && standing_pins_after(frame, throw_index).is_empty() {
        SPARE.to_string()
    } else if count == 0 {
        MISS.to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::frame_symbols;
    use crate::model::frame::Frame;
    use crate::model::pins::PinSet;
    use crate::model::throw::Throw;

    fn pins(list: &[u8]) -> Throw {
        Throw::new(PinSet::from_pins(list.iter().copied()))
    }

    fn strike() -> Throw {
        Throw::new(PinSet::full())
    }

    fn symbols(number: u8, throws: Vec<Throw>) -> Vec<String> {
        frame_symbols(&Frame::from_parts(number, throws, false))
    }

    #[test]
    fn empty_frames_render_blank_slots() {
        assert_eq!(symbols(1, vec![]), vec!["", ""]);
        assert_eq!(symbols(10, vec![]), vec!["", "", ""]);
    }

    #[test]
    fn strike_leaves_second_slot_blank() {
        assert_eq!(symbols(4, vec![strike()]), vec!["X", ""]);
    }

    #[test]
    fn spare_and_open_marks() {
        assert_eq!(
            symbols(2, vec![pins(&[1, 2, 3, 4, 5, 6, 7]), pins(&[8, 9, 10])]),
            vec!["7", "/"]
        );
        assert_eq!(symbols(2, vec![pins(&[]), pins(&[7])]), vec!["-", "1"]);
        assert_eq!(symbols(2, vec![pins(&[1, 2]), pins(&[])]), vec!["2", "-"]);
    }

    #[test]
    fn foul_then_all_ten_is_a_spare() {
        assert_eq!(symbols(5, vec![Throw::foul(), strike()]), vec!["F", "/"]);
    }

    #[test]
    fn partially_played_frame() {
        assert_eq!(symbols(6, vec![pins(&[1, 2, 3])]), vec!["3", ""]);
    }

    #[test]
    fn tenth_frame_three_strikes() {
        assert_eq!(
            symbols(10, vec![strike(), strike(), strike()]),
            vec!["X", "X", "X"]
        );
    }

    #[test]
    fn tenth_frame_strike_then_spare() {
        assert_eq!(
            symbols(10, vec![strike(), pins(&[1, 2, 3]), pins(&[4, 5, 6, 7, 8, 9, 10])]),
            vec!["X", "3", "/"]
        );
    }

    #[test]
    fn tenth_frame_spare_then_strike() {
        assert_eq!(
            symbols(
                10,
                vec![pins(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), pins(&[10]), strike()]
            ),
            vec!["9", "/", "X"]
        );
    }

    #[test]
    fn tenth_frame_strike_foul_then_clear() {
        assert_eq!(
            symbols(10, vec![strike(), Throw::foul(), strike()]),
            vec!["X", "F", "/"]
        );
    }

    #[test]
    fn tenth_frame_open() {
        assert_eq!(symbols(10, vec![pins(&[1, 2, 3, 4]), pins(&[5])]), vec!["4", "1", ""]);
    }
}
