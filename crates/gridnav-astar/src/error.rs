use std::fmt;

use gridnav_core::Point;

/// Errors raised when building, editing or validating a [`GridWorld`].
///
/// [`GridWorld`]: crate::GridWorld
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Width or height is zero.
    EmptyGrid,
    /// The cell buffer does not hold `width * height` entries.
    CellCountMismatch { expected: usize, actual: usize },
    /// Scale is zero, negative or not finite.
    InvalidScale(f32),
    /// Offset has a non-finite component.
    InvalidOffset,
    /// A cell type is outside `0..MAX_CELL_TYPES`.
    InvalidCellType { pos: Point, value: u8 },
    /// Edit targeted a cell outside the grid.
    OutOfBounds(Point),
    /// A character in a textual map is not a hexadecimal cell type.
    InvalidChar { ch: char, pos: Point },
    /// Width or height does not fit the grid's `u16` extents.
    TooLarge,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "world grid has zero width or height"),
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "world expects {expected} cells, got {actual}")
            }
            Self::InvalidScale(s) => write!(f, "world scale must be finite and positive, got {s}"),
            Self::InvalidOffset => write!(f, "world offset must be finite"),
            Self::InvalidCellType { pos, value } => {
                write!(f, "invalid cell type {value} at {pos}")
            }
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the world grid"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge => write!(f, "world grid exceeds {} cells per side", u16::MAX),
        }
    }
}

impl std::error::Error for WorldError {}

/// Why a path search failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// The open list ran dry: no passable route connects start and goal
    /// for this agent.
    Unreachable,
    /// More search states were expanded than the budget allows. The goal may
    /// still be reachable with a larger budget.
    BudgetExceeded { expanded: u32, budget: u32 },
    /// The world failed its precondition checks.
    InvalidWorld(WorldError),
}

impl PathError {
    /// Whether retrying with a larger budget could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable => write!(f, "no path exists between start and goal"),
            Self::BudgetExceeded { expanded, budget } => write!(
                f,
                "search too expensive: expanded {expanded} cells with a budget of {budget}"
            ),
            Self::InvalidWorld(e) => write!(f, "invalid world: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWorld(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WorldError> for PathError {
    fn from(e: WorldError) -> Self {
        Self::InvalidWorld(e)
    }
}
