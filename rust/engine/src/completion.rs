//! Decides whether betting on the current street is closed.

use crate::player::Player;
use crate::seat::{Seat, SEAT_COUNT};
use crate::street::{Phase, Street};

/// Returns `true` when no further betting action is owed on this street.
///
/// `next_actor` is the seat that would act next if the street stayed open;
/// betting closes once action returns to the last aggressor.
pub fn is_street_complete(
    players: &[Player; SEAT_COUNT],
    street: &Street,
    next_actor: Option<Seat>,
) -> bool {
    let active = players.iter().filter(|p| p.is_active()).count();
    if active <= 1 {
        return true;
    }

    let mut actable = players.iter().filter(|p| p.can_act()).peekable();
    if actable.peek().is_none() {
        return true;
    }
    if !actable.all(|p| p.acted_this_street) {
        return false;
    }

    // all-in seats are exempt from matching
    let all_matched = players
        .iter()
        .filter(|p| p.can_act())
        .all(|p| p.contributed >= street.current_bet);
    if !all_matched {
        return false;
    }

    let bb = &players[Seat::Bb.index()];
    if street.phase == Phase::Preflop && street.raise_count == 0 && !bb.folded {
        return bb.acted_this_street || bb.is_all_in();
    }

    match street.last_aggressor {
        None => true,
        Some(aggressor) => players[aggressor.index()].is_all_in() || next_actor == Some(aggressor),
    }
}
