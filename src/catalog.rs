use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::game::{Game, Price};

fn released(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

/// The built-in dataset every run filters.
pub fn sample_catalog() -> Result<Vec<Game>> {
    Ok(vec![
        Game::new(
            "Stardew Valley",
            Price::from_cents(1999),
            68.0,
            released(2016, 2, 26)?,
            true,
        ),
        Game::new(
            "Red Dead Redemption II",
            Price::from_cents(6099),
            72.0,
            released(2018, 12, 26)?,
            true,
        ),
        Game::new(
            "Packman",
            Price::from_cents(199),
            98.0,
            released(1980, 1, 15)?,
            true,
        ),
        Game::new(
            "Mario",
            Price::from_cents(999),
            96.0,
            released(1975, 11, 16)?,
            true,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_four_available_games_in_order() {
        let games = sample_catalog().unwrap();
        let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();

        assert_eq!(
            titles,
            ["Stardew Valley", "Red Dead Redemption II", "Packman", "Mario"]
        );
        assert!(games.iter().all(|g| g.is_available));
    }

    #[test]
    fn impossible_date_is_an_error() {
        assert!(matches!(
            released(2018, 2, 30),
            Err(Error::InvalidDate {
                year: 2018,
                month: 2,
                day: 30
            })
        ));
    }
}
