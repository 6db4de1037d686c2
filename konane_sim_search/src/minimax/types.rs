use konane_sim::types::PlayerId;

/// Whose point of view the heuristic takes when the depth limit is reached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Perspective {
    /// The player the search maximizes for.
    #[default]
    Agent,
    /// The opponent of the player the search maximizes for.
    Opponent,
}

impl Perspective {
    #[inline]
    pub fn player(self, agent: PlayerId) -> PlayerId {
        match self {
            Perspective::Agent => agent,
            Perspective::Opponent => agent.opposite(),
        }
    }
}

pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimaxConfig {
    pub depth: u8,
    pub cutoff_perspective: Perspective,
    pub debug: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MinimaxConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            cutoff_perspective: Perspective::Agent,
            debug: false,
        }
    }
}
