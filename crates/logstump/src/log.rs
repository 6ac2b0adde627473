mod config;
mod error;
mod fmt;
mod level;
mod sink;

use std::{
    path::Path,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use compact_str::CompactString;

use crate::Result;

pub use config::Config;
pub use error::{LogError, SinkFailure};
pub use fmt::{ColorCodes, Prefixes, DEFAULT_COLOR_CODES, DEFAULT_PREFIXES, color_code, reset_code};
pub use level::{Level, ParseLevelError};
pub use sink::Sink;

/// Sinks, threshold and the color code and prefix tables of one logger.
///
/// Every emitted line has the form
/// `<color if enabled><prefix><message><reset if enabled>\n` and is written to
/// every sink in the order the sinks were added.
#[derive(Debug)]
pub struct Logger {
    sinks: Vec<Sink>,
    level: Level,
    color_coding: bool,
    color_codes: ColorCodes,
    prefixes: Prefixes,
}

impl Logger {

    /// Logger without sinks, color coding off, default tables.
    #[inline(always)]
    pub fn new(level: Level) -> Self {
        Self {
            sinks: Vec::new(),
            level,
            color_coding: false,
            color_codes: ColorCodes::default(),
            prefixes: Prefixes::default(),
        }
    }

    /// Builds an initialized logger, failing if any configured path fails to open.
    ///
    /// Use [`Logger::new`] with [`Logger::init_with`] to keep the sinks that did open.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut logger = Self::new(config.threshold());
        logger.init_with(config)?;
        Ok(logger)
    }

    /// Opens every path as a file sink, adds the console if requested and resets
    /// the color code and prefix tables to their defaults.
    ///
    /// Sinks are appended to the ones already open, call [`Logger::close`] first
    /// for a fresh start. Every path is attempted, and the paths that failed to
    /// open are returned as [`LogError::Open`] after the rest of the
    /// initialization has been applied.
    pub fn init<P: AsRef<Path>>(
        &mut self,
        paths: impl IntoIterator<Item = P>,
        console: bool,
        color_coding: bool,
        level: Level,
    ) -> Result<()>
    {
        let mut failures = Vec::new();
        for path in paths {
            let path = path.as_ref();
            match Sink::open(path) {
                Ok(sink) => self.sinks.push(sink),
                Err(err) => failures.push(SinkFailure::new(path.to_string_lossy(), err)),
            }
        }
        if console {
            self.sinks.push(Sink::console());
        }
        self.color_coding = color_coding;
        self.color_codes = ColorCodes::default();
        self.prefixes = Prefixes::default();
        self.level = level;
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::Open(failures))
        }
    }

    #[inline(always)]
    pub fn init_with(&mut self, config: &Config) -> Result<()> {
        self.init(
            config.paths(),
            config.has_console(),
            config.has_color_coding(),
            config.threshold(),
        )
    }

    #[inline(always)]
    pub fn add_sink(&mut self, sink: Sink) {
        self.sinks.push(sink);
    }

    /// Flushes and releases every sink, leaving the collection empty.
    ///
    /// The console is flushed but stays open. Calling this with no sinks does
    /// nothing.
    pub fn close(&mut self) -> Result<()> {
        let mut failures = Vec::new();
        for sink in self.sinks.drain(..) {
            let name = sink.describe();
            if let Err(err) = sink.close() {
                failures.push(SinkFailure::new(name, err));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::Close(failures))
        }
    }

    #[inline(always)]
    pub fn set_color_codes(
        &mut self,
        error: impl AsRef<str>,
        warn: impl AsRef<str>,
        info: impl AsRef<str>,
        debug: impl AsRef<str>,
        reset: impl AsRef<str>,
    ) {
        self.color_codes = ColorCodes::new(error, warn, info, debug, reset);
    }

    #[inline(always)]
    pub fn set_color_codes_array<S: AsRef<str>>(&mut self, codes: [S; 5]) {
        self.color_codes = ColorCodes::from_array(codes);
    }

    #[inline(always)]
    pub fn set_prefixes(
        &mut self,
        error: impl AsRef<str>,
        warn: impl AsRef<str>,
        info: impl AsRef<str>,
        debug: impl AsRef<str>,
    ) {
        self.prefixes = Prefixes::new(error, warn, info, debug);
    }

    #[inline(always)]
    pub fn set_prefixes_array<S: AsRef<str>>(&mut self, prefixes: [S; 4]) {
        self.prefixes = Prefixes::from_array(prefixes);
    }

    #[inline(always)]
    pub fn color_codes(&self) -> &ColorCodes {
        &self.color_codes
    }

    #[inline(always)]
    pub fn prefixes(&self) -> &Prefixes {
        &self.prefixes
    }

    #[inline(always)]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline(always)]
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    #[inline(always)]
    pub fn color_coding(&self) -> bool {
        self.color_coding
    }

    #[inline(always)]
    pub fn set_color_coding(&mut self, color_coding: bool) {
        self.color_coding = color_coding;
    }

    #[inline(always)]
    pub fn enabled(&self, level: Level) -> bool {
        self.level >= level
    }

    #[inline(always)]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    #[inline(always)]
    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// Formats `args` once and writes `prefix`, the message, the reset code (when
    /// color coding is on) and a newline to every sink.
    ///
    /// A sink that fails the write is dropped, the line still reaches the others
    /// and the dropped sinks are returned as [`LogError::Write`].
    pub fn write(&mut self, prefix: &str, args: core::fmt::Arguments) -> Result<()> {
        let reset = if self.color_coding {
            self.color_codes.reset()
        } else {
            ""
        };
        let mut line = String::with_capacity(prefix.len() + reset.len() + 64);
        line.push_str(prefix);
        core::fmt::write(&mut line, args).map_err(|_| LogError::Format)?;
        line.push_str(reset);
        line.push('\n');
        let mut failures = Vec::new();
        self.sinks.retain_mut(|sink| match sink.write_line(line.as_bytes()) {
            Ok(()) => true,
            Err(err) => {
                failures.push(SinkFailure::new(sink.describe(), err));
                false
            },
        });
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::Write(failures))
        }
    }

    /// Writes with the color code and prefix of `level` if the threshold allows it.
    ///
    /// Returns whether the message passed the threshold.
    pub fn log(&mut self, level: Level, args: core::fmt::Arguments) -> Result<bool> {
        if !self.enabled(level) {
            return Ok(false)
        }
        let prefix = self.level_prefix(level);
        self.write(&prefix, args)?;
        Ok(true)
    }

    #[inline(always)]
    pub fn error(&mut self, args: core::fmt::Arguments) -> Result<bool> {
        self.log(Level::Error, args)
    }

    #[inline(always)]
    pub fn warn(&mut self, args: core::fmt::Arguments) -> Result<bool> {
        self.log(Level::Warn, args)
    }

    #[inline(always)]
    pub fn info(&mut self, args: core::fmt::Arguments) -> Result<bool> {
        self.log(Level::Info, args)
    }

    #[inline(always)]
    pub fn debug(&mut self, args: core::fmt::Arguments) -> Result<bool> {
        self.log(Level::Debug, args)
    }

    fn level_prefix(&self, level: Level) -> CompactString {
        let mut prefix = CompactString::default();
        if self.color_coding {
            prefix.push_str(self.color_codes.level(level));
        }
        prefix.push_str(self.prefixes.level(level));
        prefix
    }
}

impl Default for Logger {

    fn default() -> Self {
        Self::new(Level::Info)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn logger() -> MutexGuard<'static, Logger> {
    LOGGER
        .get_or_init(|| Mutex::new(Logger::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with exclusive access to the process-wide logger.
#[inline(always)]
pub fn with_logger<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    f(&mut logger())
}

/// Initializes the process-wide logger, see [`Logger::init`].
#[inline(always)]
pub fn init<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    console: bool,
    color_coding: bool,
    level: Level,
) -> Result<()>
{
    logger().init(paths, console, color_coding, level)
}

#[inline(always)]
pub fn init_with(config: &Config) -> Result<()> {
    logger().init_with(config)
}

#[inline(always)]
pub fn add_sink(sink: Sink) {
    logger().add_sink(sink)
}

/// Closes the process-wide logger, see [`Logger::close`].
#[inline(always)]
pub fn close() -> Result<()> {
    logger().close()
}

#[inline(always)]
pub fn set_color_codes(
    error: impl AsRef<str>,
    warn: impl AsRef<str>,
    info: impl AsRef<str>,
    debug: impl AsRef<str>,
    reset: impl AsRef<str>,
) {
    logger().set_color_codes(error, warn, info, debug, reset)
}

#[inline(always)]
pub fn set_color_codes_array<S: AsRef<str>>(codes: [S; 5]) {
    logger().set_color_codes_array(codes)
}

#[inline(always)]
pub fn set_prefixes(
    error: impl AsRef<str>,
    warn: impl AsRef<str>,
    info: impl AsRef<str>,
    debug: impl AsRef<str>,
) {
    logger().set_prefixes(error, warn, info, debug)
}

#[inline(always)]
pub fn set_prefixes_array<S: AsRef<str>>(prefixes: [S; 4]) {
    logger().set_prefixes_array(prefixes)
}

#[inline(always)]
pub fn level() -> Level {
    logger().level()
}

#[inline(always)]
pub fn set_level(level: Level) {
    logger().set_level(level)
}

#[inline(always)]
pub fn set_color_coding(color_coding: bool) {
    logger().set_color_coding(color_coding)
}

#[inline(always)]
pub fn enabled(level: Level) -> bool {
    logger().enabled(level)
}

#[inline(always)]
pub fn write(prefix: &str, args: core::fmt::Arguments) -> Result<()> {
    logger().write(prefix, args)
}

#[inline(always)]
pub fn log(level: Level, args: core::fmt::Arguments) -> Result<bool> {
    logger().log(level, args)
}

/// Runs `f` only if `level` passes the threshold of the process-wide logger.
///
/// The lock is released before `f` runs, so message arguments may call back into
/// the logger. Backs the level macros, errors count as not emitted.
#[doc(hidden)]
#[inline(always)]
pub fn log_enabled(level: Level, f: impl FnOnce() -> Result<bool>) -> bool {
    enabled(level) && f().unwrap_or(false)
}

/// Writes a line with an explicit prefix to every sink of the process-wide logger,
/// regardless of the threshold. Evaluates to `true` if every sink took the line.
#[macro_export]
macro_rules! log {
    ($prefix:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::write($prefix, format_args!($fmt, $($arg),*)).is_ok()
    };
}

/// Logs at [`Level::Error`](crate::Level::Error). The arguments are only
/// evaluated when the threshold lets the message through.
#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_enabled($crate::Level::Error, || {
            $crate::log($crate::Level::Error, format_args!($fmt, $($arg),*))
        })
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_enabled($crate::Level::Warn, || {
            $crate::log($crate::Level::Warn, format_args!($fmt, $($arg),*))
        })
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_enabled($crate::Level::Info, || {
            $crate::log($crate::Level::Info, format_args!($fmt, $($arg),*))
        })
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_enabled($crate::Level::Debug, || {
            $crate::log($crate::Level::Debug, format_args!($fmt, $($arg),*))
        })
    };
}
