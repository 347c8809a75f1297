use std::fmt;

use crate::axes::Axes;

/// Per-axis extremes observed so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Axes,
    pub max: Axes,
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min: {}, max: {}", self.min, self.max)
    }
}

impl Bounds {
    /// Bounds of a single sample.
    pub fn of(sample: Axes) -> Self {
        Self {
            min: sample,
            max: sample,
        }
    }

    /// Widen to include `sample`.
    pub fn include(&mut self, sample: Axes) {
        self.min = self.min.min(sample);
        self.max = self.max.max(sample);
    }

    pub fn contains(&self, sample: Axes) -> bool {
        self.min.min(sample) == self.min && self.max.max(sample) == self.max
    }

    /// Hard-iron offset: floor of the midpoint of min and max on each axis.
    pub fn offset(&self) -> Axes {
        self.min.floor_midpoint(self.max)
    }
}

/// Running min/max reduction over magnetometer samples.
///
/// Starts empty; the first sample populates both extremes so no sentinel
/// value is ever compared against real data.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    bounds: Option<Bounds>,
    samples: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, sample: Axes) -> Bounds {
        let bounds = match self.bounds.as_mut() {
            Some(bounds) => {
                bounds.include(sample);
                *bounds
            }
            None => *self.bounds.insert(Bounds::of(sample)),
        };
        self.samples += 1;
        bounds
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// `None` until at least one sample has been folded.
    pub fn offset(&self) -> Option<Axes> {
        self.bounds.map(|b| b.offset())
    }
}

impl Extend<Axes> for Accumulator {
    fn extend<T: IntoIterator<Item = Axes>>(&mut self, iter: T) {
        for sample in iter {
            self.fold(sample);
        }
    }
}

impl FromIterator<Axes> for Accumulator {
    fn from_iter<T: IntoIterator<Item = Axes>>(iter: T) -> Self {
        let mut acc = Accumulator::new();
        acc.extend(iter);
        acc
    }
}
