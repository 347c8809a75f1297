// This file is only compiled during tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parity {
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Queue {
    Both,
}

enum MockRead {
    Data(Vec<u8>),
    Error(io::ErrorKind),
}

#[derive(Default)]
struct MockPort {
    opened: Option<PathBuf>,
    baud_rate: u32,
    reads: VecDeque<MockRead>,
    written: Vec<u8>,
    drained: bool,
}

thread_local! {
    static MOCK_PORT: RefCell<MockPort> = RefCell::new(MockPort::default());
}

pub struct Uart;

impl Uart {
    pub fn with_path<P: AsRef<Path>>(
        path: P,
        line_speed: u32,
        _parity: Parity,
        _data_bits: u8,
        _stop_bits: u8,
    ) -> io::Result<Self> {
        MOCK_PORT.with(|port| {
            let mut port = port.borrow_mut();
            port.opened = Some(path.as_ref().to_path_buf());
            port.baud_rate = line_speed;
        });
        Ok(Uart)
    }

    pub fn set_read_mode(&mut self, _min_length: u8, _timeout: Duration) -> io::Result<()> {
        Ok(())
    }

    pub fn set_write_mode(&mut self, _blocking: bool) -> io::Result<()> {
        Ok(())
    }

    pub fn flush(&self, _queue: Queue) -> io::Result<()> {
        Ok(())
    }

    pub fn drain(&self) -> io::Result<()> {
        MOCK_PORT.with(|port| port.borrow_mut().drained = true);
        Ok(())
    }

    pub fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        MOCK_PORT.with(|port| port.borrow_mut().written.extend_from_slice(buffer));
        Ok(buffer.len())
    }

    /// Serves queued chunks; an empty queue behaves like a read timeout.
    pub fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        MOCK_PORT.with(|port| {
            let mut port = port.borrow_mut();
            match port.reads.pop_front() {
                None => Ok(0),
                Some(MockRead::Error(kind)) => Err(io::Error::from(kind)),
                Some(MockRead::Data(mut data)) => {
                    let n = data.len().min(buffer.len());
                    buffer[..n].copy_from_slice(&data[..n]);
                    if n < data.len() {
                        port.reads.push_front(MockRead::Data(data.split_off(n)));
                    }
                    Ok(n)
                }
            }
        })
    }
}

// test helper to queue bytes for the next read
pub fn queue_read(bytes: &[u8]) {
    MOCK_PORT.with(|port| {
        port.borrow_mut()
            .reads
            .push_back(MockRead::Data(bytes.to_vec()))
    });
}

// test helper to make a read fail
pub fn queue_read_error(kind: io::ErrorKind) {
    MOCK_PORT.with(|port| port.borrow_mut().reads.push_back(MockRead::Error(kind)));
}

pub fn written() -> Vec<u8> {
    MOCK_PORT.with(|port| port.borrow().written.clone())
}

pub fn opened_path() -> Option<PathBuf> {
    MOCK_PORT.with(|port| port.borrow().opened.clone())
}

pub fn baud_rate() -> u32 {
    MOCK_PORT.with(|port| port.borrow().baud_rate)
}

pub fn was_drained() -> bool {
    MOCK_PORT.with(|port| port.borrow().drained)
}

// test helper to reset the port
pub fn reset_mock_port() {
    MOCK_PORT.with(|port| *port.borrow_mut() = MockPort::default());
}
