// Picks a game filter at runtime and prints the available games it keeps.
//
// stdout carries only the matching games, one per line. Logs and
// diagnostics go to stderr.

use std::process::ExitCode;

use chrono::Datelike;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use gamefilter::config::{CliOverrides, Settings};
use gamefilter::{catalog, cli, find_by, select_strategy, Result};

fn main() -> ExitCode {
    let matches = cli::build_command().get_matches();

    init_logging(cli::log_level(&matches));

    match run(cli::overrides(&matches)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: LevelFilter) {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // A logger can only fail to install if one is already set.
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("WARNING: logger already initialized.");
    }
}

fn run(overrides: CliOverrides) -> Result<()> {
    // The only clock read. Everything downstream takes the year as a value.
    let clock_year = chrono::Local::now().year();

    let Settings {
        filter: mode,
        search_word,
        current_year,
    } = Settings::resolve(overrides, clock_year)?;
    log::info!("filter: {mode}, search word: {search_word:?}, current year: {current_year}");

    let games = catalog::sample_catalog()?;
    let strategy = select_strategy(mode, &search_word, current_year);

    let mut found = 0;
    for game in find_by(strategy, &games) {
        println!("{game}");
        found += 1;
    }
    log::debug!("{found} of {} games matched", games.len());

    Ok(())
}
