use crate::cost::TURN_PENALTY;

/// Default cap on search states expanded per search.
pub const DEFAULT_MAX_EXPANSIONS: u32 = 10_000;

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// A search that expands more (cell, heading) states than this fails with
    /// [`PathError::BudgetExceeded`](crate::PathError::BudgetExceeded).
    pub max_expansions: u32,
    /// Extra cost charged whenever a step changes direction.
    pub turn_penalty: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            turn_penalty: TURN_PENALTY as u32,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    #[must_use]
    pub fn with_turn_penalty(mut self, turn_penalty: u32) -> Self {
        self.turn_penalty = turn_penalty;
        self
    }

    /// Turn penalty in path-cost units.
    #[inline]
    pub(crate) fn penalty(&self) -> i32 {
        i32::try_from(self.turn_penalty).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SearchConfig::default();
        assert_eq!(c.max_expansions, 10_000);
        assert_eq!(c.turn_penalty, 10);
    }

    #[test]
    fn builders() {
        let c = SearchConfig::default()
            .with_max_expansions(5)
            .with_turn_penalty(0);
        assert_eq!(c.max_expansions, 5);
        assert_eq!(c.penalty(), 0);
        assert_eq!(
            SearchConfig::default().with_turn_penalty(u32::MAX).penalty(),
            i32::MAX
        );
    }
}
