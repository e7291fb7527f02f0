use crate::model::pins::PinSet;

/// One roll of the ball. `knocked_pins` holds only the pins this roll
/// knocked down, never a running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Throw {
    knocked_pins: PinSet,
    is_foul: bool,
}

impl Throw {
    pub const fn new(knocked_pins: PinSet) -> Self {
        Self {
            knocked_pins,
            is_foul: false,
        }
    }

    /// A foul scores zero regardless of what went down.
    pub const fn foul() -> Self {
        Self {
            knocked_pins: PinSet::EMPTY,
            is_foul: true,
        }
    }

    /// A non-foul throw that knocked nothing down.
    pub const fn miss() -> Self {
        Self::new(PinSet::EMPTY)
    }

    /// Raw constructor for stored data. Nothing is normalized here; use
    /// [`Throw::clip_to_standing`] before trusting the pins.
    pub const fn from_parts(knocked_pins: PinSet, is_foul: bool) -> Self {
        Self {
            knocked_pins,
            is_foul,
        }
    }

    pub const fn knocked_pins(&self) -> PinSet {
        self.knocked_pins
    }

    pub const fn is_foul(&self) -> bool {
        self.is_foul
    }

    /// Pins that count for scoring: zero for a foul.
    pub const fn pin_count(&self) -> u8 {
        if self.is_foul {
            0
        } else {
            self.knocked_pins.len()
        }
    }

    /// Restricts the knocked pins to those actually standing. Fouls clip to
    /// an empty set.
    pub const fn clip_to_standing(&self, standing: PinSet) -> Self {
        if self.is_foul {
            Self::foul()
        } else {
            Self::new(self.knocked_pins.intersection(standing))
        }
    }

    /// True when this throw clears a full rack.
    pub const fn is_strike_on(&self, standing: PinSet) -> bool {
        standing.is_full() && self.clip_to_standing(standing).knocked_pins.is_full()
    }
}
