use std::fmt::Display;

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    #[default]
    Black = 0,
    White = 1,
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Black => f.write_str("Black"),
            PlayerId::White => f.write_str("White"),
        }
    }
}

impl PlayerId {
    pub const VALUES: [PlayerId; 2] = [PlayerId::Black, PlayerId::White];

    #[inline]
    pub fn opposite(self) -> PlayerId {
        match self {
            PlayerId::Black => PlayerId::White,
            PlayerId::White => PlayerId::Black,
        }
    }

    #[inline]
    pub fn select<T>(self, tuple: (T, T)) -> T {
        match self {
            PlayerId::Black => tuple.0,
            PlayerId::White => tuple.1,
        }
    }

    /// The side to move on the given turn number.
    #[inline]
    pub fn for_turn(turn: u16) -> PlayerId {
        if turn % 2 == 0 {
            PlayerId::Black
        } else {
            PlayerId::White
        }
    }
}
