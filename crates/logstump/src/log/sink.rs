use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use core::fmt::{self, Debug, Formatter};

use termcolor::{ColorChoice, StandardStream};

use compact_str::{CompactString, format_compact};

/// An open destination lines are written to.
///
/// Files and writers are owned by the logger and released on close. The console is
/// the process stdout, which the logger only borrows: closing flushes it and leaves
/// it open.
pub enum Sink {
    File {
        path: PathBuf,
        file: File,
    },
    Console(StandardStream),
    Writer(Box<dyn Write + Send>),
}

impl Sink {

    /// Creates or truncates the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Stdout without any color handling of its own, color codes are written as
    /// configured.
    #[inline(always)]
    pub fn console() -> Self {
        Self::Console(StandardStream::stdout(ColorChoice::Never))
    }

    #[inline(always)]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::Writer(Box::new(writer))
    }

    #[inline(always)]
    pub fn is_owned(&self) -> bool {
        !matches!(self, Self::Console(_))
    }

    pub fn describe(&self) -> CompactString {
        match self {
            Self::File { path, .. } => format_compact!("{}", path.display()),
            Self::Console(_) => CompactString::const_new("console"),
            Self::Writer(_) => CompactString::const_new("writer"),
        }
    }

    pub(crate) fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.write_all(line)?;
        self.flush()
    }

    /// Flushes and releases the sink.
    pub(crate) fn close(mut self) -> io::Result<()> {
        self.flush()?;
        if let Self::File { file, .. } = &self {
            file.sync_data()?;
        }
        Ok(())
    }
}

impl Write for Sink {

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File { file, .. } => file.write(buf),
            Self::Console(stdout) => stdout.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File { file, .. } => file.flush(),
            Self::Console(stdout) => stdout.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }
}

impl Debug for Sink {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, .. } => write!(f, "Sink::File({})", path.display()),
            Self::Console(_) => write!(f, "Sink::Console"),
            Self::Writer(_) => write!(f, "Sink::Writer"),
        }
    }
}

#[cfg(test)]
mod tests {

    use std::fs;

    use super::*;

    #[test]
    fn open_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.log");
        fs::write(&path, "stale contents\n").unwrap();
        let mut sink = Sink::open(&path).unwrap();
        sink.write_line(b"fresh\n").unwrap();
        sink.close().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn console_is_borrowed() {
        let console = Sink::console();
        assert!(!console.is_owned());
        assert_eq!(console.describe(), "console");
        assert!(Sink::writer(io::sink()).is_owned());
    }

    #[test]
    fn closing_console_keeps_stdout_usable() {
        Sink::console().close().unwrap();
        let mut console = Sink::console();
        console.write_line(b"stdout still open\n").unwrap();
        console.close().unwrap();
        assert!(io::stdout().flush().is_ok());
    }

    #[test]
    fn open_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Sink::open(dir.path().join("missing").join("x.log")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
