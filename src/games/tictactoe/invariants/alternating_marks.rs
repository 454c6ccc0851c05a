//! Alternating marks invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: the mark placed to reach entry k belongs to
/// X when k is odd and O when k is even.
///
/// This is the same parity rule that derives the next player
/// from the cursor.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry.last_move().is_some_and(|cell| {
                    entry.board().get(cell) == Ok(Square::Occupied(Player::for_step(step - 1)))
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
