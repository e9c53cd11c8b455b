use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Chip amount in hundredths of a big blind.
///
/// All engine arithmetic is integral, so "all-in" is exactly `stack == 0`
/// and there is no tolerance to carry around.
///
/// # Examples
///
/// ```
/// use sixmax_engine::chips::Chips;
///
/// let open: Chips = "2.5".parse().unwrap();
/// assert_eq!(open, Chips(250));
/// assert_eq!(open.to_string(), "2.5");
/// assert_eq!(Chips::from_bb(3).to_string(), "3");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);
    /// Minor units per big blind
    pub const PER_BB: u64 = 100;
    pub const SMALL_BLIND: Chips = Chips(50);
    pub const BIG_BLIND: Chips = Chips(100);
    /// Default starting stack (100 bb)
    pub const DEFAULT_STACK: Chips = Chips(10_000);

    pub const fn from_bb(bb: u64) -> Self {
        Chips(bb * Self::PER_BB)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_sub(self, rhs: Chips) -> Chips {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Chips {
    type Output = Chips;
    fn add(self, rhs: Chips) -> Chips {
        Chips(self.0 + rhs.0)
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 += rhs.0;
    }
}

impl Sub for Chips {
    type Output = Chips;
    fn sub(self, rhs: Chips) -> Chips {
        Chips(self.0 - rhs.0)
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 -= rhs.0;
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Chips {
        iter.fold(Chips::ZERO, Add::add)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::PER_BB;
        let frac = self.0 % Self::PER_BB;
        match frac {
            0 => write!(f, "{}", whole),
            f10 if f10 % 10 == 0 => write!(f, "{}.{}", whole, f10 / 10),
            _ => write!(f, "{}.{:02}", whole, frac),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChipsError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount '{0}'")]
    Invalid(String),
    #[error("amount '{0}' has more than two decimal places")]
    TooPrecise(String),
    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Parses a big-blind amount such as `"3"`, `"2.5"` or `"0.25"`.
impl FromStr for Chips {
    type Err = ParseChipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseChipsError::Empty);
        }
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if (whole.is_empty() && frac.is_empty())
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseChipsError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(ParseChipsError::TooPrecise(s.to_string()));
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| ParseChipsError::Overflow(s.to_string()))?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().unwrap_or(0) * 10,
            _ => frac.parse::<u64>().unwrap_or(0),
        };
        whole
            .checked_mul(Self::PER_BB)
            .and_then(|w| w.checked_add(frac))
            .map(Chips)
            .ok_or_else(|| ParseChipsError::Overflow(s.to_string()))
    }
}
