use chrono::NaiveDate;

/// Currency amount held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub title: String,
    pub price: Price,
    /// 0 to 100.
    pub rating: f64,
    pub release_date: NaiveDate,
    pub is_available: bool,
}

impl Game {
    pub fn new(
        title: impl Into<String>,
        price: Price,
        rating: f64,
        release_date: NaiveDate,
        is_available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            rating,
            release_date,
            is_available,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Game {{ Title = {}, Price = {}, Rating = {}, ReleaseDate = {}, IsAvailable = {} }}",
            self.title, self.price, self.rating, self.release_date, self.is_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packman() -> Game {
        let released = NaiveDate::from_ymd_opt(1980, 1, 15).unwrap();
        Game::new("Packman", Price::from_cents(199), 98.0, released, true)
    }

    #[test]
    fn price_renders_two_decimal_places() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(6005).to_string(), "60.05");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::from_cents(199).cents(), 199);
    }

    #[test]
    fn game_renders_fields_in_declaration_order() {
        assert_eq!(
            packman().to_string(),
            "Game { Title = Packman, Price = 1.99, Rating = 98, ReleaseDate = 1980-01-15, IsAvailable = true }"
        );
    }

    #[test]
    fn games_compare_structurally() {
        assert_eq!(packman(), packman());

        let mut sold_out = packman();
        sold_out.is_available = false;
        assert_ne!(packman(), sold_out);
    }
}
