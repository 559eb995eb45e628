use crate::cell::Role;
use crate::error::SearchError;
use crate::heuristic::euclidean;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::search_context::{SearchContext, StableHeap};
use crate::solver::{finish, prepare, report_progress, Outcome};
use grid_util::point::Point;
use log::trace;

/// Best-first search on the [euclidean] distance to the end alone, ignoring the cost
/// accumulated so far. Fast, but routes can be much longer than necessary.
pub fn greedy_best_first(
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    const NAME: &str = "Greedy Best First";
    let (start_ix, end_ix) = prepare(NAME, grid, start, end)?;
    let goal = grid.point(end_ix);

    let mut ct = SearchContext::new(start_ix);
    let mut open = StableHeap::new();
    open.push(euclidean(&start, &goal), start_ix);

    while let Some(current) = open.pop() {
        ct.expand(current);
        trace!("{NAME}: expanding {:?}", grid.point(current));
        if current == end_ix {
            return Ok(finish(NAME, grid, ct, Some(end_ix)));
        }
        let neighbors = grid.cell_ix(current).neighbors.clone();
        for n in neighbors {
            if ct.discover(n, current) {
                open.push(euclidean(&grid.point(n), &goal), n);
                grid.cell_ix_mut(n).mark_explored(Role::Open);
            }
        }
        grid.cell_ix_mut(current).mark_explored(Role::Closed);
        report_progress(NAME, progress)?;
    }
    Ok(finish(NAME, grid, ct, None))
}
