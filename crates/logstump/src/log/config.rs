use std::path::{Path, PathBuf};

use super::Level;

/// Describes one initialization of a [`Logger`](super::Logger).
///
/// ```
/// use logstump::{Config, Level};
///
/// let config = Config::new(Level::Warn)
///     .file("app.log")
///     .console(true)
///     .color_coding(true);
/// assert_eq!(config.paths().len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    paths: Vec<PathBuf>,
    console: bool,
    color_coding: bool,
    level: Level,
}

impl Config {

    /// No files, no console and no color coding.
    #[inline(always)]
    pub fn new(level: Level) -> Self {
        Self {
            paths: Vec::new(),
            console: false,
            color_coding: false,
            level,
        }
    }

    #[inline(always)]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.paths.push(path.as_ref().to_path_buf());
        self
    }

    pub fn files<P: AsRef<Path>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.paths.extend(paths.into_iter().map(|path| path.as_ref().to_path_buf()));
        self
    }

    #[inline(always)]
    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    #[inline(always)]
    pub fn color_coding(mut self, color_coding: bool) -> Self {
        self.color_coding = color_coding;
        self
    }

    #[inline(always)]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[inline(always)]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    #[inline(always)]
    pub fn has_console(&self) -> bool {
        self.console
    }

    #[inline(always)]
    pub fn has_color_coding(&self) -> bool {
        self.color_coding
    }

    #[inline(always)]
    pub fn threshold(&self) -> Level {
        self.level
    }
}

impl Default for Config {

    /// Console only at [`Level::Info`].
    fn default() -> Self {
        Self::new(Level::Info).console(true)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn builder_collects_paths_in_order() {
        let config = Config::new(Level::Error)
            .file("a.log")
            .files(["b.log", "c.log"])
            .level(Level::Debug)
            .color_coding(true);
        let paths: Vec<_> = config.paths().iter().map(|path| path.to_str().unwrap()).collect();
        assert_eq!(paths, ["a.log", "b.log", "c.log"]);
        assert_eq!(config.threshold(), Level::Debug);
        assert!(config.has_color_coding());
        assert!(!config.has_console());
    }

    #[test]
    fn default_logs_info_to_console() {
        let config = Config::default();
        assert!(config.paths().is_empty());
        assert!(config.has_console());
        assert!(!config.has_color_coding());
        assert_eq!(config.threshold(), Level::Info);
    }
}
