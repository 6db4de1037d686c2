use crate::{Eval, MAX_VALUE, MIN_VALUE};

/// Score range `[alpha, beta]` of a resolved node, inside `[MIN_VALUE, MAX_VALUE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub alpha: Eval,
    pub beta: Eval,
}

impl Bounds {
    pub const FULL: Bounds = Bounds {
        alpha: MIN_VALUE,
        beta: MAX_VALUE,
    };

    pub const WIN: Bounds = Bounds::exact(MAX_VALUE);

    pub const LOSS: Bounds = Bounds::exact(MIN_VALUE);

    #[inline]
    pub const fn exact(value: Eval) -> Bounds {
        Bounds {
            alpha: value,
            beta: value,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.alpha == self.beta
    }

    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.alpha <= self.beta && self.alpha >= MIN_VALUE && self.beta <= MAX_VALUE
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL
    }
}

/// Outcome of one decision: every explored root move paired with the bounds of the position it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDecision<A> {
    /// In enumeration order. Root moves are never pruned, so this holds every legal move.
    pub entries: Vec<(A, Bounds)>,
    pub bounds: Bounds,
}

impl<A: Copy + PartialEq> RootDecision<A> {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            entries: Vec::new(),
            bounds,
        }
    }

    /// Move whose resulting position has the greatest `alpha`. The first one wins ties.
    pub fn best(&self) -> Option<(A, Bounds)> {
        let mut best: Option<(A, Bounds)> = None;
        for (action, bounds) in self.entries.iter().copied() {
            if best.map_or(true, |(_, b)| bounds.alpha > b.alpha) {
                best = Some((action, bounds));
            }
        }
        best
    }

    pub fn bound_for(&self, action: A) -> Option<Bounds> {
        self.entries.iter().find(|(a, _)| *a == action).map(|(_, b)| *b)
    }
}
