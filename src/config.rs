use std::path::{Path, PathBuf};

use yaml_rust2::{Yaml, YamlLoader};

use crate::error::{Error, Result};
use crate::strategy::FilteringType;

pub const DEFAULT_FILTER: FilteringType = FilteringType::BestGame;
pub const DEFAULT_SEARCH_WORD: &str = "Red";

/// Values read from the optional YAML config file. Every key may be absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub filter: Option<FilteringType>,
    pub search: Option<String>,
    pub year: Option<i32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let docs = YamlLoader::load_from_str(text).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })?;

        // An empty file has no documents at all.
        let Some(doc) = docs.first() else {
            return Ok(Self::default());
        };

        if !matches!(doc, Yaml::Hash(_) | Yaml::Null) {
            return Err(Error::ConfigParse {
                message: "expected a mapping at the top level".to_owned(),
            });
        }

        let filter = optional_str(doc, "filter")?
            .map(str::parse::<FilteringType>)
            .transpose()?;
        let search = optional_str(doc, "search")?.map(str::to_owned);
        let year = match &doc["year"] {
            Yaml::BadValue | Yaml::Null => None,
            Yaml::Integer(n) => Some(i32::try_from(*n).map_err(|_| Error::ConfigParse {
                message: format!("year {n} is out of range"),
            })?),
            other => {
                return Err(Error::ConfigParse {
                    message: format!("year must be an integer, found {other:?}"),
                })
            }
        };

        Ok(Self {
            filter,
            search,
            year,
        })
    }
}

fn optional_str<'a>(doc: &'a Yaml, key: &str) -> Result<Option<&'a str>> {
    match &doc[key] {
        Yaml::BadValue | Yaml::Null => Ok(None),
        Yaml::String(s) => Ok(Some(s.as_str())),
        other => Err(Error::ConfigParse {
            message: format!("{key} must be a string, found {other:?}"),
        }),
    }
}

/// Overrides collected from the command line.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub filter: Option<String>,
    pub search: Option<String>,
    pub year: Option<i32>,
    pub config_path: Option<PathBuf>,
}

/// Fully resolved run parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub filter: FilteringType,
    pub search_word: String,
    pub current_year: i32,
}

impl Settings {
    /// Command line wins over the config file, which wins over defaults.
    /// `clock_year` is only used when neither source names a year.
    pub fn resolve(cli: CliOverrides, clock_year: i32) -> Result<Self> {
        let file = match &cli.config_path {
            Some(path) => {
                log::info!("reading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        let filter = match cli.filter {
            Some(name) => name.parse()?,
            None => file.filter.unwrap_or(DEFAULT_FILTER),
        };

        Ok(Self {
            filter,
            search_word: cli
                .search
                .or(file.search)
                .unwrap_or_else(|| DEFAULT_SEARCH_WORD.to_owned()),
            current_year: cli.year.or(file.year).unwrap_or(clock_year),
        })
    }
}
