use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Configure env_logger: warnings only from dependencies, this crate at info
/// (debug when verbose).
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME").cyan();
            let line = match record.level() {
                Level::Error => format!("[{} {}] {}", name, "ERROR".red(), record.args()),
                Level::Warn => format!("[{} {}] {}", name, "WARN".yellow(), record.args()),
                _ => format!("[{}] {}", name, record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
