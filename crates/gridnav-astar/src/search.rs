use gridnav_core::Vec2;

use crate::agent::AgentProfile;
use crate::config::SearchConfig;
use crate::cost::{DIRECTIONS, heuristic, step_cost};
use crate::error::PathError;
use crate::path::Path;
use crate::scratch::{Scratch, Status};
use crate::world::GridWorld;

/// A reusable A* search context.
///
/// `Pathfinder` owns the scratch memory and the [`SearchConfig`] for a
/// sequence of searches. Scratch grows to the largest world searched and is
/// then reused, so repeated queries do not allocate. Use one context per
/// thread; worlds and agent profiles can be shared freely.
#[derive(Default)]
pub struct Pathfinder {
    config: SearchConfig,
    scratch: Scratch,
    last_expanded: u32,
}

impl Pathfinder {
    /// A context with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Cap the number of search states expanded by every subsequent search.
    pub fn set_search_budget(&mut self, max_expansions: u32) {
        self.config.max_expansions = max_expansions;
    }

    /// Search states expanded by the most recent search. A cell counts once
    /// per heading it was expanded with.
    #[inline]
    pub fn last_expanded(&self) -> u32 {
        self.last_expanded
    }

    /// Find the cheapest path for `agent` from `start` to `end` and write its
    /// waypoints into `out`.
    ///
    /// Both points are mapped to their nearest grid cell; points off the
    /// grid are clamped onto its border. `out` is cleared on entry, so after
    /// a failure it is empty. When start and end share a cell the path is
    /// that single cell. The terrain under the start cell is never charged.
    ///
    /// Among several equally cheap paths the one returned is unspecified.
    pub fn find_path(
        &mut self,
        world: &GridWorld,
        agent: &AgentProfile,
        start: Vec2,
        end: Vec2,
        out: &mut Path,
    ) -> Result<(), PathError> {
        out.clear();
        self.last_expanded = 0;
        world.validate()?;

        let from = world.to_grid(start);
        let to = world.to_grid(end);
        log::trace!("astar: {start} -> {end} mapped to cells {from} -> {to}");

        if from == to {
            out.push(world.to_world(to));
            return Ok(());
        }

        // Both points were clamped into the grid.
        let (Some(start_idx), Some(goal_idx)) = (world.index(from), world.index(to)) else {
            return Err(PathError::Unreachable);
        };

        let budget = self.config.max_expansions;
        let penalty = self.config.penalty();
        let mut expanded: u32 = 0;

        let mut scope = self.scratch.begin(world.cell_count());
        scope.seed(start_idx, heuristic(from, to));

        // States are (cell, heading it was entered with), so a turn penalty
        // always charges the route that actually led into the cell.
        let outcome = loop {
            let Some((ci, heading)) = scope.pop() else {
                break Err(PathError::Unreachable);
            };
            if ci == goal_idx {
                break Ok(heading);
            }

            scope.close(ci, heading);
            expanded += 1;

            let current_g = scope.g(ci, heading);
            let cp = world.point(ci);

            for (i, &dir) in DIRECTIONS.iter().enumerate() {
                let np = cp + dir;
                let Some(ni) = world.index(np) else {
                    continue;
                };
                let terrain = agent.cost(world.cell_at(ni));
                let next = i as u8;
                if terrain == 0 || scope.status(ni, next) == Status::Closed {
                    continue;
                }
                let mut g = current_g.saturating_add(step_cost(terrain, i >= 4));
                if next != heading {
                    g = g.saturating_add(penalty);
                }
                scope.relax(ni, next, heading, g, heuristic(np, to));
            }

            if expanded > budget {
                break Err(PathError::BudgetExceeded { expanded, budget });
            }
        };

        self.last_expanded = expanded;
        match outcome {
            Ok(heading) => {
                out.rebuild(world, &scope, goal_idx, heading);
                log::debug!(
                    "astar: path {from} -> {to} found after {expanded} expansions, {} waypoints",
                    out.len()
                );
                Ok(())
            }
            Err(e) => {
                log::debug!("astar: path {from} -> {to} failed after {expanded} expansions: {e}");
                Err(e)
            }
        }
    }
}

/// One-shot search with a temporary [`Pathfinder`]. Returns whether a path
/// was found; on failure `out` is empty.
///
/// Prefer a long-lived `Pathfinder` when searching repeatedly.
pub fn find_path(
    world: &GridWorld,
    agent: &AgentProfile,
    start: Vec2,
    end: Vec2,
    out: &mut Path,
    config: SearchConfig,
) -> bool {
    Pathfinder::with_config(config)
        .find_path(world, agent, start, end, out)
        .is_ok()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::error::WorldError;

    #[test]
    fn deserialized_world_is_validated() {
        let json = r#"{"width":0,"height":2,"cells":[],"offset":{"x":0.0,"y":0.0},"scale":1.0}"#;
        let w: GridWorld = serde_json::from_str(json).unwrap();
        let mut path = Path::new();
        let r = Pathfinder::new().find_path(
            &w,
            &AgentProfile::default(),
            Vec2::ZERO,
            Vec2::new(1.0, 1.0),
            &mut path,
        );
        assert_eq!(r, Err(PathError::InvalidWorld(WorldError::EmptyGrid)));
    }

    #[test]
    fn config_from_json() {
        let c: SearchConfig =
            serde_json::from_str(r#"{"max_expansions": 3, "turn_penalty": 0}"#).unwrap();
        let pf = Pathfinder::with_config(c);
        assert_eq!(pf.config().max_expansions, 3);
        assert_eq!(pf.config().turn_penalty, 0);
    }
}
