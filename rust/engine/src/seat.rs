use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of seats at a six-max table
pub const SEAT_COUNT: usize = 6;

/// Canonical six-max positions in clockwise order.
///
/// The ring is fixed for the whole hand: SB always follows BTN and the
/// blinds are always posted by `Sb` and `Bb`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Seat {
    /// Small blind
    Sb,
    /// Big blind
    Bb,
    /// Under the gun
    Utg,
    /// Hijack
    Hj,
    /// Cutoff
    Co,
    /// Button
    Btn,
}

impl Seat {
    /// All seats in clockwise order starting at the small blind
    pub const ALL: [Seat; SEAT_COUNT] = [Seat::Sb, Seat::Bb, Seat::Utg, Seat::Hj, Seat::Co, Seat::Btn];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Seat {
        Self::ALL[index % SEAT_COUNT]
    }

    /// The seat immediately clockwise of `self`
    pub fn next(self) -> Seat {
        Self::from_index(self.index() + 1)
    }

    /// The seat immediately counter-clockwise of `self`
    pub fn prev(self) -> Seat {
        Self::from_index(self.index() + SEAT_COUNT - 1)
    }

    /// One full clockwise revolution starting after `self` and ending on `self`.
    ///
    /// Always yields exactly [`SEAT_COUNT`] seats, so any search over it
    /// terminates.
    ///
    /// ```
    /// use sixmax_engine::seat::Seat;
    ///
    /// let order: Vec<Seat> = Seat::Co.revolution().collect();
    /// assert_eq!(order, vec![Seat::Btn, Seat::Sb, Seat::Bb, Seat::Utg, Seat::Hj, Seat::Co]);
    /// ```
    pub fn revolution(self) -> impl Iterator<Item = Seat> {
        (1..=SEAT_COUNT).map(move |step| Self::from_index(self.index() + step))
    }

    /// Seats strictly clockwise of `self` up to but excluding `to`.
    ///
    /// Empty when `to` is the seat right after `self`; when `to == self`
    /// it covers the other five seats.
    pub fn between(self, to: Seat) -> impl Iterator<Item = Seat> {
        self.revolution().take_while(move |s| *s != to)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::Sb => "SB",
            Seat::Bb => "BB",
            Seat::Utg => "UTG",
            Seat::Hj => "HJ",
            Seat::Co => "CO",
            Seat::Btn => "BTN",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown seat '{0}' (expected one of SB, BB, UTG, HJ, CO, BTN)")]
pub struct ParseSeatError(pub String);

impl FromStr for Seat {
    type Err = ParseSeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SB" => Ok(Seat::Sb),
            "BB" => Ok(Seat::Bb),
            "UTG" => Ok(Seat::Utg),
            "HJ" | "MP" => Ok(Seat::Hj),
            "CO" => Ok(Seat::Co),
            "BTN" | "BU" => Ok(Seat::Btn),
            _ => Err(ParseSeatError(s.to_string())),
        }
    }
}
