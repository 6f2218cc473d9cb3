/// Number of distinct cell types a world can hold.
pub const MAX_CELL_TYPES: usize = 16;

/// Per-cell-type traversal costs for one class of agent.
///
/// A cost of `0` makes the cell type impassable for the agent, `1` is the
/// cheapest terrain and larger values are proportionally more expensive.
/// Step costs multiply these values by the orthogonal/diagonal move cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentProfile {
    costs: [u8; MAX_CELL_TYPES],
}

impl Default for AgentProfile {
    /// Cell type `0` blocks, every other type costs `1`.
    fn default() -> Self {
        Self::uniform(1).with_cost(0, 0)
    }
}

impl AgentProfile {
    /// Create a profile from a full cost table.
    pub const fn new(costs: [u8; MAX_CELL_TYPES]) -> Self {
        Self { costs }
    }

    /// Every cell type costs `cost`.
    pub const fn uniform(cost: u8) -> Self {
        Self {
            costs: [cost; MAX_CELL_TYPES],
        }
    }

    /// Return a copy with `cell_type` set to `cost`. Out-of-range types are
    /// ignored.
    #[must_use]
    pub fn with_cost(mut self, cell_type: u8, cost: u8) -> Self {
        if let Some(c) = self.costs.get_mut(cell_type as usize) {
            *c = cost;
        }
        self
    }

    /// Traversal cost of `cell_type`; `0` for unknown types.
    #[inline]
    pub fn cost(&self, cell_type: u8) -> u8 {
        self.costs.get(cell_type as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_passable(&self, cell_type: u8) -> bool {
        self.cost(cell_type) != 0
    }

    /// The full cost table.
    pub fn costs(&self) -> &[u8; MAX_CELL_TYPES] {
        &self.costs
    }
}
