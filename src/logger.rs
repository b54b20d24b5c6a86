use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::huffman::frequency::FrequencyTable;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const LOG_PATTERN: &str = "{d} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // stdout carries the report, so the fallback only ever logs to stderr
    if let Some(config) = create_fallback_config() {
        let _ = log4rs::init_config(config);
    }
}

fn create_fallback_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .ok()
}

pub fn log_frequencies(frequencies: &FrequencyTable) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let entries: Vec<String> = frequencies
        .to_symbol_frequencies()
        .iter()
        .map(|sf| format!("{:02X}:{}", sf.symbol, sf.frequency))
        .collect();
    log::debug!("frequencies {:?}", entries);
}
