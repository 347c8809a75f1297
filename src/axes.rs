use std::fmt;

/// One reading of a 3-axis sensor, in raw device units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Axes {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for Axes {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Axes {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Elementwise minimum.
    pub fn min(self, other: Axes) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Elementwise maximum.
    pub fn max(self, other: Axes) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Floor of the per-axis midpoint between `self` and `other`.
    ///
    /// Sums are widened to i64 so extreme readings cannot overflow, and
    /// negative odd sums round toward negative infinity (-5 / 2 == -3).
    pub fn floor_midpoint(self, other: Axes) -> Self {
        let mid = |a: i32, b: i32| (i64::from(a) + i64::from(b)).div_euclid(2) as i32;
        Self::new(
            mid(self.x, other.x),
            mid(self.y, other.y),
            mid(self.z, other.z),
        )
    }
}
