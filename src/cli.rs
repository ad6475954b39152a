use std::path::PathBuf;

use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command, ValueHint};
use simplelog::LevelFilter;

use crate::config::CliOverrides;

pub fn build_command() -> Command {
    command!().args([
        Arg::new("filter")
            .short('f')
            .long("filter")
            .alias("mode")
            .required(false)
            .value_name("MODE")
            .help("Filtering mode: by-title, best-game or games-of-this-year."),
        Arg::new("search")
            .short('s')
            .long("search")
            .required(false)
            .value_name("WORD")
            .help("Case-sensitive title substring used by the by-title mode."),
        Arg::new("year")
            .short('y')
            .long("year")
            .required(false)
            .value_name("YEAR")
            .value_parser(value_parser!(i32))
            .allow_negative_numbers(true)
            .help("Year treated as the current one by games-of-this-year."),
        Arg::new("config")
            .short('c')
            .long("config-file")
            .alias("config")
            .required(false)
            .value_hint(ValueHint::FilePath)
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .help("Path to the YAML config file."),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log more to stderr. Repeat for debug output."),
    ])
}

pub fn overrides(matches: &ArgMatches) -> CliOverrides {
    CliOverrides {
        filter: matches.get_one::<String>("filter").cloned(),
        search: matches.get_one::<String>("search").cloned(),
        year: matches.get_one::<i32>("year").copied(),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
    }
}

pub fn log_level(matches: &ArgMatches) -> LevelFilter {
    match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn collects_overrides() {
        let matches = build_command()
            .try_get_matches_from([
                "gamefilter",
                "--mode",
                "by-title",
                "-s",
                "Dead",
                "--year",
                "2018",
                "--config",
                "filters.yaml",
            ])
            .unwrap();
        let cli = overrides(&matches);

        assert_eq!(cli.filter.as_deref(), Some("by-title"));
        assert_eq!(cli.search.as_deref(), Some("Dead"));
        assert_eq!(cli.year, Some(2018));
        assert_eq!(cli.config_path, Some(PathBuf::from("filters.yaml")));
    }

    #[test]
    fn everything_is_optional() {
        let matches = build_command().try_get_matches_from(["gamefilter"]).unwrap();
        let cli = overrides(&matches);

        assert!(cli.filter.is_none());
        assert!(cli.search.is_none());
        assert!(cli.year.is_none());
        assert!(cli.config_path.is_none());
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert!(build_command()
            .try_get_matches_from(["gamefilter", "--year", "soon"])
            .is_err());
    }

    #[rstest]
    #[case(&["gamefilter"], LevelFilter::Warn)]
    #[case(&["gamefilter", "-v"], LevelFilter::Info)]
    #[case(&["gamefilter", "-vv"], LevelFilter::Debug)]
    #[case(&["gamefilter", "-v", "-v", "-v"], LevelFilter::Debug)]
    fn verbosity_maps_to_level(#[case] args: &[&str], #[case] expected: LevelFilter) {
        let matches = build_command().try_get_matches_from(args.iter().copied()).unwrap();
        assert_eq!(log_level(&matches), expected);
    }
}
