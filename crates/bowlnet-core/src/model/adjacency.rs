use crate::model::pins::PinSet;
use std::collections::VecDeque;

/// Physical neighbours on the pin deck, indexed by `pin - 1`.
///
/// ```text
/// 7 8 9 10
///  4 5 6
///   2 3
///    1
/// ```
pub const ADJACENT_PINS: [&[u8]; 10] = [
    &[2, 3, 5],
    &[1, 3, 4, 5, 8],
    &[1, 2, 5, 6, 9],
    &[2, 5, 7, 8],
    &[1, 2, 3, 4, 6, 8, 9],
    &[3, 5, 9, 10],
    &[4, 8],
    &[2, 4, 5, 7, 9],
    &[3, 5, 6, 8, 10],
    &[6, 9],
];

pub fn neighbours(pin: u8) -> PinSet {
    if !PinSet::is_valid_pin(pin) {
        return PinSet::EMPTY;
    }
    PinSet::from_pins(ADJACENT_PINS[usize::from(pin - 1)].iter().copied())
}

pub fn are_adjacent(a: u8, b: u8) -> bool {
    neighbours(a).contains(b)
}

/// Number of connected groups among `standing`, walking the adjacency table
/// breadth-first.
pub fn count_clusters(standing: PinSet) -> usize {
    let mut visited = PinSet::EMPTY;
    let mut clusters = 0;

    for start in standing.iter() {
        if visited.contains(start) {
            continue;
        }
        clusters += 1;
        visited.insert(start);

        let mut queue = VecDeque::from([start]);
        while let Some(pin) = queue.pop_front() {
            let unvisited = neighbours(pin).intersection(standing).difference(visited);
            for next in unvisited.iter() {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::{ADJACENT_PINS, are_adjacent, count_clusters, neighbours};
    use crate::model::pins::PinSet;

    #[test]
    fn table_is_symmetric() {
        for pin in 1..=10u8 {
            for &other in ADJACENT_PINS[usize::from(pin - 1)] {
                assert!(
                    are_adjacent(other, pin),
                    "{other} should list {pin} as a neighbour"
                );
            }
        }
    }

    #[test]
    fn corner_and_centre_neighbours() {
        assert_eq!(neighbours(7).to_vec(), vec![4, 8]);
        assert_eq!(neighbours(5).to_vec(), vec![1, 2, 3, 4, 6, 8, 9]);
        assert!(neighbours(0).is_empty());
    }

    #[test]
    fn counts_disjoint_groups() {
        assert_eq!(count_clusters(PinSet::EMPTY), 0);
        assert_eq!(count_clusters(PinSet::from_pins([7, 10])), 2);
        assert_eq!(count_clusters(PinSet::from_pins([8, 9])), 1);
        assert_eq!(count_clusters(PinSet::from_pins([4, 6, 7, 10])), 2);
        assert_eq!(count_clusters(PinSet::from_pins([7, 9, 10])), 2);
        assert_eq!(count_clusters(PinSet::full()), 1);
    }
}
