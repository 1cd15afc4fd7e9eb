use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::{IsTerminal, Write};

pub const LOG_LEVEL_ENV: &str = "TREE2TXT_LOG_LEVEL";

fn default_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "31",
        Level::Warn => "33",
        Level::Info => "32",
        Level::Debug => "36",
        Level::Trace => "35",
    }
}

/// Renders the `[LEVEL]` tag, with ANSI color only when asked for.
fn level_tag(level: Level, colored: bool) -> String {
    if colored {
        format!("\x1B[{}m[{}]\x1B[0m", level_color(level), level)
    } else {
        format!("[{}]", level)
    }
}

/// Logs go to stderr so they never mix with the per-file confirmations on
/// stdout. At debug verbosity each line also names the emitting module.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = default_level(verbosity);
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level.as_str());
    let colored = std::io::stderr().is_terminal();
    let show_target = level >= LevelFilter::Debug;

    Builder::from_env(env)
        .format(move |buf, record| {
            let tag = level_tag(record.level(), colored);
            if show_target {
                writeln!(
                    buf,
                    "{} [{}] {}: {}",
                    tag,
                    buf.timestamp(),
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(buf, "{} [{}] {}", tag, buf.timestamp(), record.args())
            }
        })
        .format_timestamp_secs()
        .try_init()
}
