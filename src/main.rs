use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use migration_routes::config::{RouteConfig, Settings};
use migration_routes::output::print_summary;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
        return Ok(());
    }

    // no log4rs.yml next to the binary, warnings to stderr only
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l:<8} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    let settings = Settings::parse();
    log::info!("#Start main() {settings:?}");

    match migration_routes::run(&settings, &RouteConfig::default()) {
        Ok(report) => {
            print_summary(&report.registry, &report.stats);
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    }
}
