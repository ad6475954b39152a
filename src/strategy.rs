//! Runtime choice of the predicate used to filter games.

use std::str::FromStr;

use chrono::Datelike;

use crate::error::{Error, Result};
use crate::game::Game;

/// Ratings strictly above this count as a best game.
pub const BEST_GAME_RATING: f64 = 95.0;

pub type Strategy = Box<dyn Fn(&Game) -> bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilteringType {
    ByTitle,
    BestGame,
    GamesOfThisYear,
}

impl FilteringType {
    pub const ALL: [Self; 3] = [Self::ByTitle, Self::BestGame, Self::GamesOfThisYear];

    pub const fn name(self) -> &'static str {
        match self {
            Self::ByTitle => "by-title",
            Self::BestGame => "best-game",
            Self::GamesOfThisYear => "games-of-this-year",
        }
    }
}

impl std::fmt::Display for FilteringType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FilteringType {
    type Err = Error;

    /// Accepts kebab, snake and Pascal case, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "bytitle" => Ok(Self::ByTitle),
            "bestgame" => Ok(Self::BestGame),
            "gamesofthisyear" => Ok(Self::GamesOfThisYear),
            _ => Err(Error::InvalidArgument {
                value: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<u8> for FilteringType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| Error::InvalidArgument {
                value: value.to_string(),
            })
    }
}

/// Maps a mode to its predicate. `search_word` only matters for
/// [`FilteringType::ByTitle`], `current_year` only for
/// [`FilteringType::GamesOfThisYear`].
pub fn select_strategy(mode: FilteringType, search_word: &str, current_year: i32) -> Strategy {
    log::debug!("selecting {mode} strategy (search word {search_word:?}, year {current_year})");

    match mode {
        FilteringType::ByTitle => {
            let search_word = search_word.to_owned();
            Box::new(move |game: &Game| game.title.contains(&search_word))
        }
        FilteringType::BestGame => Box::new(|game: &Game| game.rating > BEST_GAME_RATING),
        FilteringType::GamesOfThisYear => {
            Box::new(move |game: &Game| game.release_date.year() == current_year)
        }
    }
}

/// Like [`select_strategy`], but takes the mode by name.
pub fn select_strategy_named(
    mode_name: &str,
    search_word: &str,
    current_year: i32,
) -> Result<Strategy> {
    let mode = mode_name.parse()?;
    Ok(select_strategy(mode, search_word, current_year))
}
