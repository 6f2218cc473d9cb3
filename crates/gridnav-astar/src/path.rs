//! The caller-owned waypoint buffer and the parent walk that fills it.

use gridnav_core::Vec2;

use crate::cost::DIRECTIONS;
use crate::scratch::{START, Scratch};
use crate::world::GridWorld;

/// Waypoints of a path in world space, start first.
///
/// Straight runs are compressed: only the endpoints and the cells where the
/// direction of travel changes are kept. The buffer is reused across
/// searches, so its allocation survives [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty path with room for `capacity` waypoints.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec2> {
        self.points.iter()
    }

    /// Remove all waypoints, keeping the allocation.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn into_vec(self) -> Vec<Vec2> {
        self.points
    }

    pub(crate) fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// Rewrite the path from the state chain ending at `goal`, entered
    /// with `heading`.
    ///
    /// Walks goal → start, emitting a cell whenever its heading differs from
    /// the one after it, then reverses.
    pub(crate) fn rebuild(
        &mut self,
        world: &GridWorld,
        scratch: &Scratch,
        goal: usize,
        heading: u8,
    ) {
        self.clear();
        let mut ci = goal;
        let mut heading = heading;
        let mut last = START;
        while heading != START {
            let cp = world.point(ci);
            if heading != last {
                self.push(world.to_world(cp));
                last = heading;
            }
            let Some(pi) = world.index(cp - DIRECTIONS[heading as usize]) else {
                break;
            };
            heading = scratch.parent(ci, heading);
            ci = pi;
        }
        // `ci` is now the start cell.
        if last != START {
            self.push(world.to_world(world.point(ci)));
        }
        self.points.reverse();
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Vec2;
    type IntoIter = std::slice::Iter<'a, Vec2>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
