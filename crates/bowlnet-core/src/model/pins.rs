use crate::model::throw::Throw;
use core::fmt;

pub const PIN_COUNT: u8 = 10;

const FULL_MASK: u16 = (1 << PIN_COUNT) - 1;

/// Bit-mask over pins 1..=10; bit `n - 1` is set when pin `n` is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PinSet(u16);

impl PinSet {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(FULL_MASK);

    /// All ten pins standing. Every frame starts from this rack.
    pub const fn full() -> Self {
        Self::FULL
    }

    pub const fn empty() -> Self {
        Self::EMPTY
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & FULL_MASK)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds a set from pin numbers, ignoring anything outside 1..=10.
    pub fn from_pins<I>(pins: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        pins.into_iter().fold(Self::EMPTY, |set, pin| set.with(pin))
    }

    pub const fn is_valid_pin(pin: u8) -> bool {
        pin >= 1 && pin <= PIN_COUNT
    }

    pub const fn contains(self, pin: u8) -> bool {
        Self::is_valid_pin(pin) && self.0 & (1 << (pin - 1)) != 0
    }

    pub const fn with(self, pin: u8) -> Self {
        if Self::is_valid_pin(pin) {
            Self(self.0 | (1 << (pin - 1)))
        } else {
            self
        }
    }

    pub const fn without(self, pin: u8) -> Self {
        if Self::is_valid_pin(pin) {
            Self(self.0 & !(1 << (pin - 1)))
        } else {
            self
        }
    }

    pub fn insert(&mut self, pin: u8) {
        *self = self.with(pin);
    }

    pub fn remove(&mut self, pin: u8) {
        *self = self.without(pin);
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == FULL_MASK
    }

    /// Pins in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=PIN_COUNT).filter(move |&pin| self.contains(pin))
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Removes the pins `throw` knocks down once clipped to this rack.
    pub fn apply_throw(self, throw: &Throw) -> Self {
        self.difference(throw.clip_to_standing(self).knocked_pins())
    }
}

impl FromIterator<u8> for PinSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Self::from_pins(iter)
    }
}

impl fmt::Display for PinSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let mut first = true;
        for pin in self.iter() {
            if !first {
                write!(f, "-")?;
            }
            write!(f, "{pin}")?;
            first = false;
        }
        Ok(())
    }
}
