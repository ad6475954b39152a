use crate::game::Game;

/// Lazily yields the available games that satisfy `strategy`, in input order.
///
/// Availability is checked first, so `strategy` never sees an unavailable game.
pub fn find_by<'a, I, F>(strategy: F, games: I) -> impl Iterator<Item = &'a Game>
where
    I: IntoIterator<Item = &'a Game>,
    F: Fn(&Game) -> bool,
{
    games
        .into_iter()
        .filter(move |&game| game.is_available && strategy(game))
}
