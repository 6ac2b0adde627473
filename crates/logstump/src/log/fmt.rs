use termcolor::{Ansi, ColorSpec, WriteColor};

use compact_str::CompactString;

use super::{Level, LogError, Result};

/// Color codes used when nothing else is configured: red, yellow, none, green and reset.
pub const DEFAULT_COLOR_CODES: [&str; 5] = ["\x1b[31m", "\x1b[33m", "", "\x1b[32m", "\x1b[0m"];

pub const DEFAULT_PREFIXES: [&str; 4] = ["Error: ", "Warning: ", "Info: ", "Debug: "];

/// Color code table indexed by error, warn, info, debug and reset.
///
/// Codes are opaque strings. They are written verbatim in front of the prefix of
/// each message, and the reset code after the message, whenever color coding is on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ColorCodes {
    codes: [CompactString; 5],
}

impl ColorCodes {

    #[inline(always)]
    pub fn new(
        error: impl AsRef<str>,
        warn: impl AsRef<str>,
        info: impl AsRef<str>,
        debug: impl AsRef<str>,
        reset: impl AsRef<str>,
    ) -> Self
    {
        Self {
            codes: [
                CompactString::new(error),
                CompactString::new(warn),
                CompactString::new(info),
                CompactString::new(debug),
                CompactString::new(reset),
            ],
        }
    }

    #[inline(always)]
    pub fn from_array<S: AsRef<str>>(codes: [S; 5]) -> Self {
        Self {
            codes: codes.map(CompactString::new),
        }
    }

    #[inline(always)]
    pub fn level(&self, level: Level) -> &str {
        &self.codes[level.index()]
    }

    #[inline(always)]
    pub fn reset(&self) -> &str {
        &self.codes[4]
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[CompactString; 5] {
        &self.codes
    }
}

impl Default for ColorCodes {

    fn default() -> Self {
        Self::from_array(DEFAULT_COLOR_CODES)
    }
}

/// Prefix table indexed by error, warn, info and debug.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Prefixes {
    prefixes: [CompactString; 4],
}

impl Prefixes {

    #[inline(always)]
    pub fn new(
        error: impl AsRef<str>,
        warn: impl AsRef<str>,
        info: impl AsRef<str>,
        debug: impl AsRef<str>,
    ) -> Self
    {
        Self {
            prefixes: [
                CompactString::new(error),
                CompactString::new(warn),
                CompactString::new(info),
                CompactString::new(debug),
            ],
        }
    }

    #[inline(always)]
    pub fn from_array<S: AsRef<str>>(prefixes: [S; 4]) -> Self {
        Self {
            prefixes: prefixes.map(CompactString::new),
        }
    }

    #[inline(always)]
    pub fn level(&self, level: Level) -> &str {
        &self.prefixes[level.index()]
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[CompactString; 4] {
        &self.prefixes
    }
}

impl Default for Prefixes {

    fn default() -> Self {
        Self::from_array(DEFAULT_PREFIXES)
    }
}

/// Renders `spec` as the ANSI escape sequence a terminal needs to switch to it.
///
/// `ColorSpec` resets by default, which prepends the reset sequence. Use
/// [`ColorSpec::set_reset`] with `false` to get only the color itself.
pub fn color_code(spec: &ColorSpec) -> Result<CompactString> {
    let mut ansi = Ansi::new(Vec::new());
    ansi.set_color(spec).map_err(LogError::Color)?;
    Ok(CompactString::new(String::from_utf8_lossy(&ansi.into_inner())))
}

pub fn reset_code() -> Result<CompactString> {
    let mut ansi = Ansi::new(Vec::new());
    ansi.reset().map_err(LogError::Color)?;
    Ok(CompactString::new(String::from_utf8_lossy(&ansi.into_inner())))
}
