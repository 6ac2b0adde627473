//! Multi-sink, level-filtered logging.
//!
//! Lines go to any mix of files, the console and custom writers, are gated by a
//! [`Level`] threshold and can be color coded per level.
//!
//! ```no_run
//! use logstump::{Level, error, info};
//!
//! logstump::init(["app.log"], true, true, Level::Info).ok();
//! info!("listening on port {}", 8080);
//! error!("connection lost");
//! logstump::close().ok();
//! ```

mod log;

pub use log::*;

pub use termcolor::{Color, ColorSpec};

pub type Result<T> = core::result::Result<T, LogError>;
