//! Step costs, the turn penalty and the octile heuristic.
//!
//! Costs are integers in units where an orthogonal step over cheapest
//! terrain costs [`ORTHOGONAL_COST`]. The heuristic is measured in whole
//! grid steps, so it never exceeds the real remaining cost.

use gridnav_core::Point;

/// Base cost of a horizontal or vertical step.
pub const ORTHOGONAL_COST: i32 = 10;
/// Base cost of a diagonal step (≈ 10·√2).
pub const DIAGONAL_COST: i32 = 14;
/// Default extra cost for changing direction between two steps.
pub const TURN_PENALTY: i32 = 10;

/// Neighbour offsets in expansion order: N, E, S, W, then NE, SE, SW, NW.
pub(crate) const DIRECTIONS: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, -1),
    Point::new(1, 1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Octile distance between two cells in grid steps.
///
/// Diagonal moves cover one unit on both axes at once, so the estimate is
/// `diag + ortho` where `diag = min(dx, dy)` and `ortho = |dx - dy|`.
#[inline]
pub fn heuristic(a: Point, b: Point) -> i32 {
    let d = (a - b).abs();
    let ortho = (d.x - d.y).abs();
    let diag = d.x.min(d.y);
    diag + ortho
}

/// Cost of stepping onto terrain with agent cost `terrain`.
#[inline]
pub fn step_cost(terrain: u8, diagonal: bool) -> i32 {
    let base = if diagonal {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    };
    terrain as i32 * base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_counts_grid_steps() {
        let o = Point::ZERO;
        assert_eq!(heuristic(o, o), 0);
        assert_eq!(heuristic(o, Point::new(5, 0)), 5);
        assert_eq!(heuristic(o, Point::new(3, 3)), 3);
        assert_eq!(heuristic(o, Point::new(2, 7)), 7);
        assert_eq!(heuristic(Point::new(4, -1), Point::new(-2, 1)), 6);
    }

    #[test]
    fn heuristic_is_symmetric_and_consistent() {
        let goal = Point::new(6, 2);
        for p in gridnav_core::Range::new(-3, -3, 9, 9) {
            assert_eq!(heuristic(p, goal), heuristic(goal, p));
            for d in DIRECTIONS {
                let step = step_cost(1, d.x != 0 && d.y != 0);
                assert!(heuristic(p, goal) <= step + heuristic(p + d, goal));
            }
        }
    }

    #[test]
    fn step_cost_scales_by_terrain() {
        assert_eq!(step_cost(1, false), 10);
        assert_eq!(step_cost(1, true), 14);
        assert_eq!(step_cost(3, true), 42);
        assert_eq!(step_cost(0, false), 0);
    }

    #[test]
    fn orthogonal_directions_come_first() {
        for (i, d) in DIRECTIONS.iter().enumerate() {
            let diagonal = d.x != 0 && d.y != 0;
            assert_eq!(diagonal, i >= 4);
        }
    }
}
