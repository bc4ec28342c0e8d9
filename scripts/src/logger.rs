use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

pub fn setup_simple_logger(verbose: bool) -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("collective_vault")
        .add_filter_allow_str("vault_scripts")
        .build();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Ok(SimpleLogger::init(level, logger_config)?)
}
