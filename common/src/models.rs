//! # Probe Models
//!
//! An [`Entry`] is one `(name, address)` pair read from the input workbook.
//! A [`ProbeResult`] is the outcome of pinging exactly one entry.
//! Both are immutable once created.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name of the host. May be empty when the sheet has no name column.
    pub name: String,
    /// The address handed to `ping`. Never empty.
    pub address: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Up,
    Down,
}

impl From<bool> for Status {
    fn from(reachable: bool) -> Self {
        if reachable { Status::Up } else { Status::Down }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Up => f.write_str("UP"),
            Status::Down => f.write_str("DOWN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub name: String,
    pub address: String,
    pub reachable: bool,
}

impl ProbeResult {
    pub fn new(entry: &Entry, reachable: bool) -> Self {
        Self {
            name: entry.name.clone(),
            address: entry.address.clone(),
            reachable,
        }
    }

    pub fn status(&self) -> Status {
        Status::from(self.reachable)
    }
}
