//! Breadth-first and depth-first search. Both mark cells visited when they are enqueued, so
//! no cell enters the frontier twice; they differ only in the order the frontier is drained.
use crate::cell::Role;
use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::search_context::SearchContext;
use crate::solver::{finish, prepare, report_progress, Outcome};
use grid_util::point::Point;
use log::trace;
use std::collections::VecDeque;

trait Frontier: Default {
    fn put(&mut self, index: usize);
    fn take(&mut self) -> Option<usize>;
}

/// First in, first out.
impl Frontier for VecDeque<usize> {
    fn put(&mut self, index: usize) {
        self.push_back(index);
    }
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Last in, first out: of the Down, Up, Right, Left pushes, Left is expanded first.
impl Frontier for Vec<usize> {
    fn put(&mut self, index: usize) {
        self.push(index);
    }
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

fn blind_search<F: Frontier>(
    name: &str,
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    let (start_ix, end_ix) = prepare(name, grid, start, end)?;
    let mut ct = SearchContext::new(start_ix);
    let mut frontier = F::default();
    frontier.put(start_ix);

    while let Some(current) = frontier.take() {
        ct.expand(current);
        trace!("{name}: expanding {:?}", grid.point(current));
        if current == end_ix {
            return Ok(finish(name, grid, ct, Some(end_ix)));
        }
        let neighbors = grid.cell_ix(current).neighbors.clone();
        for n in neighbors {
            if ct.discover(n, current) {
                grid.cell_ix_mut(n).mark_explored(Role::Open);
                frontier.put(n);
            }
        }
        grid.cell_ix_mut(current).mark_explored(Role::Closed);
        report_progress(name, progress)?;
    }
    Ok(finish(name, grid, ct, None))
}

/// Level-order search. The route found is a shortest one in hops.
pub fn bfs(
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    blind_search::<VecDeque<usize>>("BFS", progress, grid, start, end)
}

/// Stack-based search with no optimality guarantee.
pub fn dfs(
    progress: &mut dyn ProgressSink,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<Outcome, SearchError> {
    blind_search::<Vec<usize>>("DFS", progress, grid, start, end)
}
