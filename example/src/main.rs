use std::path::PathBuf;

use logstump::{Color, ColorSpec, Level, debug, error, info, log, warn};

fn opening_and_writing_to_log_files() -> logstump::Result<()> {
    let path = PathBuf::from("testOpeningAndWritingToLogfiles.log");
    logstump::init([&path], false, false, Level::Debug)?;
    log!("Test: ", "Writing to file works like a charm.");
    logstump::close()
}

fn toggling_console_log() -> logstump::Result<()> {
    logstump::init(Vec::<PathBuf>::new(), false, false, Level::Debug)?;
    log!("Test: ", "This should not be printed.");
    logstump::close()?;

    logstump::init(Vec::<PathBuf>::new(), true, false, Level::Debug)?;
    log!("Test: ", "This should be printed.");
    logstump::close()
}

fn color_coding() -> logstump::Result<()> {
    logstump::init(Vec::<PathBuf>::new(), true, true, Level::Debug)?;

    error!("This should be red.");
    warn!("This should be yellow.");
    info!("This should be standard.");
    debug!("This should be green.");

    let bold = |color| {
        let mut spec = ColorSpec::new();
        spec.set_reset(false).set_bold(true).set_fg(Some(color));
        logstump::color_code(&spec)
    };
    logstump::set_color_codes(
        bold(Color::Magenta)?,
        bold(Color::Cyan)?,
        bold(Color::Blue)?,
        bold(Color::White)?,
        logstump::reset_code()?,
    );
    error!("This should be bold magenta.");
    debug!("This should be bold white.");

    logstump::close()
}

fn log_mode() -> logstump::Result<()> {
    logstump::init(Vec::<PathBuf>::new(), true, true, Level::Error)?;
    for level in Level::ALL {
        logstump::set_level(level);
        error!("error message at threshold {}", level);
        warn!("warn message at threshold {}", level);
        info!("info message at threshold {}", level);
        debug!("debug message at threshold {}", level);
    }
    logstump::close()
}

fn main() -> logstump::Result<()> {
    opening_and_writing_to_log_files()?;
    toggling_console_log()?;
    color_coding()?;
    log_mode()
}
