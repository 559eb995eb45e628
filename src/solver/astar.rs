use crate::cell::Role;
use crate::error::SearchError;
use crate::heuristic::euclidean;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::search_context::{SearchContext, StableHeap};
use crate::solver::{finish, prepare, report_progress, Outcome};
use grid_util::point::Point;
use log::trace;

/// A* ordered by `f = g + h` with unit step cost and the [euclidean] heuristic, equal `f`
/// values popping in insertion order.
///
/// A cell is closed to relaxation as soon as it is first reached: a cheaper route found
/// later is ignored and the cell is never reopened. Together with the heuristic, which can
/// overestimate, this means the route is not guaranteed to be shortest.
pub fn astar(
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    const NAME: &str = "A*";
    let (start_ix, end_ix) = prepare(NAME, grid, start, end)?;
    let goal = grid.point(end_ix);

    let mut g_score = vec![f64::INFINITY; grid.len()];
    let mut f_score = vec![f64::INFINITY; grid.len()];
    g_score[start_ix] = 0.0;
    f_score[start_ix] = euclidean(&start, &goal);

    let mut ct = SearchContext::new(start_ix);
    let mut open = StableHeap::new();
    open.push(f_score[start_ix], start_ix);

    while let Some(current) = open.pop() {
        ct.expand(current);
        trace!("{NAME}: expanding {:?} (f = {})", grid.point(current), f_score[current]);
        if current == end_ix {
            return Ok(finish(NAME, grid, ct, Some(end_ix)));
        }
        let neighbors = grid.cell_ix(current).neighbors.clone();
        for n in neighbors {
            if ct.visited(n) {
                continue;
            }
            let tentative_g = g_score[current] + 1.0;
            if tentative_g < g_score[n] {
                g_score[n] = tentative_g;
                f_score[n] = tentative_g + euclidean(&grid.point(n), &goal);
                open.push(f_score[n], n);
                ct.discover(n, current);
                grid.cell_ix_mut(n).mark_explored(Role::Open);
            }
        }
        grid.cell_ix_mut(current).mark_explored(Role::Closed);
        report_progress(NAME, progress)?;
    }
    Ok(finish(NAME, grid, ct, None))
}
