use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::error::CodecError;

pub const FIXBIN_VERSION: i32 = 1;
pub const LOG_LEVEL_ENV: &str = "FIXBIN_LOG";

pub fn fixbin_version_code() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), FIXBIN_VERSION)
}

pub fn log_level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

///
/// Routes `log` records to stderr.
/// Fails if a logger is already installed.
///
pub fn init_logging(level: LevelFilter) -> Result<(), CodecError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| CodecError::LoggerInit(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| CodecError::LoggerInit(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let first = init_logging(LevelFilter::Warn);
        let second = init_logging(LevelFilter::Warn);
        assert!(first.is_ok());
        assert!(matches!(second, Err(CodecError::LoggerInit(_))));
    }
}
