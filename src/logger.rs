//! User-facing output, routed per channel.
//!
//! Diagnostics go through `tracing`. This is for the things a person running
//! a pipeline is meant to read: which program is running, what it produced,
//! and what went wrong.

use std::io::{self, Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    Stdout,
    Stderr,
    Silent,
}

pub struct Policies {
    /// Whether to print a line like "--- /srv/site ---" before each program.
    pub opheader: Policy,

    /// Where the listing of each finished program goes.
    pub summary: Policy,

    /// Where the report of a failed program goes.
    pub failure: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            opheader: Policy::Stdout,
            summary: Policy::Stdout,
            failure: Policy::Stderr,
        }
    }
}

impl Policies {
    /// Headers and summaries off. Failures still get reported.
    pub fn quiet() -> Self {
        Self {
            opheader: Policy::Silent,
            summary: Policy::Silent,
            ..Self::default()
        }
    }
}

/// A destination for output: a real stdio stream, or a buffer for tests.
pub enum Channel {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Vec(Vec<u8>),
}

impl Channel {
    /// Everything written so far, if this is a buffer.
    pub fn recorded(&self) -> Option<String> {
        match self {
            Self::Vec(v) => Some(String::from_utf8_lossy(v).into_owned()),
            _ => None,
        }
    }
}

impl Write for Channel {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
            Self::Vec(w) => w.write(bytes),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Vec(w) => w.flush(),
        }
    }
}

pub enum LogWriter<'a> {
    Channel(&'a mut Channel),
    Silent,
}

impl Write for LogWriter<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Channel(c) => c.write(bytes),
            Self::Silent => Ok(bytes.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Channel(c) => c.flush(),
            Self::Silent => Ok(()),
        }
    }
}

pub struct Logger {
    pub stdout: Channel,
    pub stderr: Channel,
    pub pol: Policies,
}

impl Logger {
    pub fn new(stdout: Channel, stderr: Channel) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    pub fn new_real() -> Self {
        Self::new(Channel::Stdout(io::stdout()), Channel::Stderr(io::stderr()))
    }

    pub fn new_vec() -> Self {
        Self::new(Channel::Vec(vec![]), Channel::Vec(vec![]))
    }

    /// What was written to (stdout, stderr). Empty for real streams.
    pub fn recorded(&self) -> (String, String) {
        (
            self.stdout.recorded().unwrap_or_default(),
            self.stderr.recorded().unwrap_or_default(),
        )
    }

    fn lw_for(&mut self, pol: Policy) -> LogWriter<'_> {
        match pol {
            Policy::Stdout => LogWriter::Channel(&mut self.stdout),
            Policy::Stderr => LogWriter::Channel(&mut self.stderr),
            Policy::Silent => LogWriter::Silent,
        }
    }

    pub fn opheader(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.opheader)
    }

    pub fn summary(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.summary)
    }

    pub fn failure(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.failure)
    }
}
