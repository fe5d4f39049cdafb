//! Minimal 2D grid geometry for the lighting crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Neg, Sub};
use serde::Deserialize;

pub mod line;

pub use line::Line;

/// Integer tile coordinate. `+x` is east, `+y` is south.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const ZERO: IVec2 = IVec2 { x: 0, y: 0 };
    pub const EAST: IVec2 = IVec2 { x: 1, y: 0 };
    pub const SOUTH: IVec2 = IVec2 { x: 0, y: 1 };
    pub const WEST: IVec2 = IVec2 { x: -1, y: 0 };
    pub const NORTH: IVec2 = IVec2 { x: 0, y: -1 };

    /// Axis neighbors in east, south, west, north order.
    pub const CARDINALS: [IVec2; 4] = [IVec2::EAST, IVec2::SOUTH, IVec2::WEST, IVec2::NORTH];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn abs(self) -> IVec2 {
        IVec2::new(self.x.abs(), self.y.abs())
    }

    /// Chessboard length: the larger of the two axis magnitudes.
    #[inline]
    pub fn chebyshev(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }
}

impl From<(i32, i32)> for IVec2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        IVec2::new(x, y)
    }
}

impl core::fmt::Display for IVec2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for IVec2 {
    type Output = IVec2;
    #[inline]
    fn add(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for IVec2 {
    #[inline]
    fn add_assign(&mut self, rhs: IVec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for IVec2 {
    type Output = IVec2;
    #[inline]
    fn sub(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for IVec2 {
    type Output = IVec2;
    #[inline]
    fn neg(self) -> IVec2 {
        IVec2::new(-self.x, -self.y)
    }
}
