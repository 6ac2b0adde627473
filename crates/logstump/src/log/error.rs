use std::io;

use core::fmt::{self, Display, Formatter};

use compact_str::CompactString;

/// A sink that could not be opened, written or closed.
#[derive(Debug)]
pub struct SinkFailure {
    pub sink: CompactString,
    pub err: io::Error,
}

impl SinkFailure {

    #[inline(always)]
    pub fn new(sink: impl AsRef<str>, err: io::Error) -> Self {
        Self {
            sink: CompactString::new(sink),
            err,
        }
    }
}

impl Display for SinkFailure {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sink, self.err)
    }
}

#[derive(Debug)]
pub enum LogError {
    /// Paths that failed to open during init. The remaining sinks stay active.
    Open(Vec<SinkFailure>),
    /// Sinks that failed a write and were dropped from the active set.
    Write(Vec<SinkFailure>),
    /// Sinks that failed to flush on close.
    Close(Vec<SinkFailure>),
    /// A message argument failed to format.
    Format,
    Color(io::Error),
}

impl LogError {

    /// Sinks involved in the error, empty for errors not tied to a sink.
    pub fn failures(&self) -> &[SinkFailure] {
        match self {
            Self::Open(failures) | Self::Write(failures) | Self::Close(failures) => failures,
            _ => &[],
        }
    }
}

fn write_failures(f: &mut Formatter<'_>, what: &str, failures: &[SinkFailure]) -> fmt::Result {
    write!(f, "failed to {} log sinks", what)?;
    let mut sep = ": ";
    for failure in failures {
        write!(f, "{}{}", sep, failure.sink)?;
        sep = ", ";
    }
    Ok(())
}

impl Display for LogError {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(failures) => write_failures(f, "open", failures),
            Self::Write(failures) => write_failures(f, "write to", failures),
            Self::Close(failures) => write_failures(f, "close", failures),
            Self::Format => write!(f, "formatting error"),
            Self::Color(_) => write!(f, "failed to render color spec"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Open(failures) | Self::Write(failures) | Self::Close(failures) => {
                failures.first().map(|failure| &failure.err as &(dyn core::error::Error + 'static))
            },
            Self::Format => None,
            Self::Color(err) => Some(err),
        }
    }
}
