//! Agent-aware A* pathfinding over cell-typed grids.
//!
//! A [`GridWorld`] tags every cell with a small terrain type (`0..16`) and
//! maps world-space positions onto the grid. An [`AgentProfile`] turns those
//! types into traversal costs for one class of agent, with `0` meaning
//! impassable, so the same world can route walkers, boats and fliers
//! differently.
//!
//! [`Pathfinder::find_path`] runs an 8-connected A* search between two world
//! points and writes a compressed [`Path`]: only the endpoints and the cells
//! where the direction of travel changes are kept.
//!
//! ```
//! use gridnav_astar::{AgentProfile, GridWorld, Path, Pathfinder};
//! use gridnav_core::Vec2;
//!
//! let world = GridWorld::from_rows(&[
//!     "1111",
//!     "1001",
//!     "1111",
//! ]).unwrap();
//! let mut pathfinder = Pathfinder::new();
//! let mut path = Path::new();
//! pathfinder
//!     .find_path(
//!         &world,
//!         &AgentProfile::default(),
//!         Vec2::new(0.0, 1.0),
//!         Vec2::new(3.0, 1.0),
//!         &mut path,
//!     )
//!     .unwrap();
//! assert_eq!(path.first(), Some(Vec2::new(0.0, 1.0)));
//! assert_eq!(path.last(), Some(Vec2::new(3.0, 1.0)));
//! ```
//!
//! # Costs
//!
//! | Move | Cost |
//! |---|---|
//! | orthogonal step | `agent cost × 10` |
//! | diagonal step | `agent cost × 14` |
//! | change of direction | `+ turn_penalty` (default 10) |
//!
//! Searches are bounded by [`SearchConfig::max_expansions`]; a search that
//! expands more (cell, heading) states fails with [`PathError::BudgetExceeded`].

mod agent;
mod config;
mod cost;
mod error;
mod path;
mod scratch;
mod search;
mod world;

pub use agent::{AgentProfile, MAX_CELL_TYPES};
pub use config::{DEFAULT_MAX_EXPANSIONS, SearchConfig};
pub use cost::{DIAGONAL_COST, ORTHOGONAL_COST, TURN_PENALTY, heuristic, step_cost};
pub use error::{PathError, WorldError};
pub use path::Path;
pub use search::{Pathfinder, find_path};
pub use world::GridWorld;
