//! Console Logging
//!
//! Routes the `log` facade to the browser console.

use log::Level;

pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::Info)
}

/// Install the console logger. Later calls keep the first logger.
pub fn init(level: &str) {
    let level = parse_level(level);
    if console_log::init_with_level(level).is_err() {
        log::debug!("[INIT] console logger already installed");
    }
}
