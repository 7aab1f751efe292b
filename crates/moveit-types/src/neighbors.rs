use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Which orthogonal neighbors of a wall cell are also walls.
    ///
    /// The bit order is fixed (up, down, left, right from high to low), so
    /// `bits()` is always a valid index into a 16-entry tile table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct Neighbors: u8 {
        const UP    = 0b1000;
        const DOWN  = 0b0100;
        const LEFT  = 0b0010;
        const RIGHT = 0b0001;
    }
}

impl Neighbors {
    /// Number of distinct adjacency masks.
    pub const COMBINATIONS: usize = 16;

    pub fn from_flags(up: bool, down: bool, left: bool, right: bool) -> Self {
        let mut n = Self::empty();
        n.set(Self::UP, up);
        n.set(Self::DOWN, down);
        n.set(Self::LEFT, left);
        n.set(Self::RIGHT, right);
        n
    }

    /// Table index in `0..16`; undefined bits are ignored.
    pub const fn index(self) -> usize {
        (self.bits() & Self::all().bits()) as usize
    }
}
