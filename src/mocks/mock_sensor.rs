// This file is only compiled during tests

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::axes::Axes;
use crate::device::{Reading, SensorSource};
use crate::error::DeviceError;

/// Scripted sensor: serves queued readings, then reports end of stream.
pub struct MockSensor {
    script: VecDeque<Result<Reading, io::ErrorKind>>,
    reads: Rc<Cell<usize>>,
    closed: Rc<Cell<bool>>,
    channels: Rc<RefCell<Vec<String>>>,
}

impl MockSensor {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            reads: Rc::new(Cell::new(0)),
            closed: Rc::new(Cell::new(false)),
            channels: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_samples<I: IntoIterator<Item = Axes>>(samples: I) -> Self {
        let mut sensor = Self::new();
        sensor
            .script
            .extend(samples.into_iter().map(|s| Ok(Reading::Sample(s))));
        sensor
    }

    pub fn then_end_of_stream(mut self) -> Self {
        self.script.push_back(Ok(Reading::EndOfStream));
        self
    }

    pub fn then_fail(mut self, kind: io::ErrorKind) -> Self {
        self.script.push_back(Err(kind));
        self
    }

    /// Shared counter of read calls, still readable after the sensor is consumed.
    pub fn read_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }

    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }

    /// Channel names requested so far.
    pub fn channel_log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.channels)
    }
}

impl SensorSource for MockSensor {
    fn read_sensor(&mut self, channel: &str) -> Result<Reading, DeviceError> {
        self.reads.set(self.reads.get() + 1);
        self.channels.borrow_mut().push(channel.to_string());
        match self.script.pop_front() {
            Some(Ok(reading)) => Ok(reading),
            Some(Err(kind)) => Err(DeviceError::Io(io::Error::from(kind))),
            None => Ok(Reading::EndOfStream),
        }
    }

    fn close(self) -> Result<(), DeviceError> {
        self.closed.set(true);
        Ok(())
    }
}
