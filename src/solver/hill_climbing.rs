use crate::cell::Role;
use crate::error::SearchError;
use crate::heuristic::euclidean;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::search_context::SearchContext;
use crate::solver::{finish, prepare, report_progress, Outcome};
use grid_util::point::Point;
use log::{debug, trace};

/// Local search without a frontier. From the current cell it steps to the unvisited neighbour
/// closest to the end, the first one in neighbour order winning ties, and succeeds as soon as
/// the end is adjacent.
///
/// There is no backtracking: when every neighbour has been visited the search gives up, even
/// if a route exists elsewhere. The walk is marked Open as it goes and becomes the path on
/// success.
pub fn hill_climbing(
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    const NAME: &str = "Hill Climbing";
    let (start_ix, end_ix) = prepare(NAME, grid, start, end)?;
    let goal = grid.point(end_ix);

    let mut ct = SearchContext::new(start_ix);
    let mut current = start_ix;
    ct.expand(current);

    while current != end_ix {
        let neighbors = grid.cell_ix(current).neighbors.clone();
        if neighbors.contains(&end_ix) {
            ct.discover(end_ix, current);
            ct.expand(end_ix);
            return Ok(finish(NAME, grid, ct, Some(end_ix)));
        }
        let next = neighbors
            .iter()
            .copied()
            .filter(|&n| !ct.visited(n) && !grid.cell_ix(n).is_barrier())
            .map(|n| (n, euclidean(&grid.point(n), &goal)))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((next, distance)) = next else {
            debug!("{NAME}: stuck at {:?}", grid.point(current));
            return Ok(finish(NAME, grid, ct, None));
        };
        trace!("{NAME}: stepping to {:?} ({distance} from end)", grid.point(next));
        ct.discover(next, current);
        grid.cell_ix_mut(next).mark_explored(Role::Open);
        current = next;
        ct.expand(current);
        report_progress(NAME, progress)?;
    }
    Ok(finish(NAME, grid, ct, Some(end_ix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Counter;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn solve_simple_problem() {
        let mut grid = PathingGrid::new(3, 30).unwrap();
        let mut counter = Counter::default();
        let outcome = hill_climbing(&mut counter, &mut grid, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(
            outcome.path,
            Some(vec![p(0, 0), p(1, 0), p(1, 1), p(2, 1), p(2, 2)])
        );
        assert_eq!(outcome.expanded, outcome.path.clone().unwrap());
        assert_eq!(counter.0, 3);
        assert_eq!(grid.to_string(), "...\n**.\n.*.\n");
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let mut grid = PathingGrid::new(2, 2).unwrap();
        let outcome = hill_climbing(&mut || {}, &mut grid, p(1, 1), p(1, 1)).unwrap();
        assert_eq!(outcome.path, Some(vec![p(1, 1)]));
    }

    /// One step short of the gap the walk turns back along the top row and runs out of
    /// unvisited neighbours.
    #[test]
    fn stuck_in_pocket() {
        // S....
        // .....
        // ####.
        // .....
        // E....
        let mut grid = PathingGrid::new(5, 50).unwrap();
        for y in 0..4 {
            grid.cell_mut(p(2, y)).unwrap().mark_barrier();
        }
        let mut counter = Counter::default();
        let outcome = hill_climbing(&mut counter, &mut grid, p(0, 0), p(4, 0)).unwrap();
        assert!(!outcome.found());
        assert_eq!(
            outcome.expanded,
            vec![
                p(0, 0),
                p(1, 0),
                p(1, 1),
                p(1, 2),
                p(1, 3),
                p(0, 3),
                p(0, 2),
                p(0, 1)
            ]
        );
        assert_eq!(counter.0, 7);
    }
}
