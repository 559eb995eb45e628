use crate::cell::Role;
use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::search_context::SearchContext;
use core::fmt;
use core::str::FromStr;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::{info, warn};

pub mod astar;
pub mod greedy;
pub mod hill_climbing;
pub mod uninformed;

/// Uniform shape shared by every strategy so callers can swap them without branching.
///
/// Adjacency is recomputed before the search starts. Running two searches on the same grid
/// at once is impossible through this signature; callers sharing a grid across threads must
/// serialize access themselves.
pub type SearchFn = fn(
    &mut dyn ProgressSink,
    &mut PathingGrid,
    Point,
    Point,
) -> Result<Outcome, SearchError>;

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Route from start to end, both included, when one was found.
    pub path: Option<Vec<Point>>,
    /// Cells in the order they were expanded.
    pub expanded: Vec<Point>,
}

impl Outcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
    /// Number of moves along the route.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// The available strategies, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Astar,
    HillClimbing,
    GreedyBestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Astar,
        Algorithm::HillClimbing,
        Algorithm::GreedyBestFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Astar => "A*",
            Algorithm::HillClimbing => "Hill Climbing",
            Algorithm::GreedyBestFirst => "Greedy Best First",
        }
    }

    pub fn search_fn(self) -> SearchFn {
        match self {
            Algorithm::Bfs => uninformed::bfs,
            Algorithm::Dfs => uninformed::dfs,
            Algorithm::Astar => astar::astar,
            Algorithm::HillClimbing => hill_climbing::hill_climbing,
            Algorithm::GreedyBestFirst => greedy::greedy_best_first,
        }
    }

    /// Whether the strategy finds a path whenever one exists.
    pub fn is_complete(self) -> bool {
        self != Algorithm::HillClimbing
    }

    pub fn run(
        self,
        progress: &mut dyn ProgressSink,
        grid: &mut PathingGrid,
        start: Point,
        end: Point,
    ) -> Result<Outcome, SearchError> {
        (self.search_fn())(progress, grid, start, end)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SearchError::config(format!("unknown algorithm {s:?}")))
    }
}

/// Strategies selectable by name, iterated in registration order.
#[derive(Clone)]
pub struct Registry {
    entries: IndexMap<&'static str, SearchFn, FxBuildHasher>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Default for Registry {
    fn default() -> Registry {
        let mut registry = Registry::empty();
        for algorithm in Algorithm::ALL {
            registry.register(algorithm.name(), algorithm.search_fn());
        }
        registry
    }
}

impl Registry {
    pub fn empty() -> Registry {
        Registry {
            entries: IndexMap::default(),
        }
    }
    /// Adds or replaces a strategy. A replaced entry keeps its position.
    pub fn register(&mut self, name: &'static str, search: SearchFn) {
        self.entries.insert(name, search);
    }
    pub fn get(&self, name: &str) -> Option<SearchFn> {
        self.entries.get(name).copied()
    }
    pub fn get_index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }
    pub fn get_index(&self, index: usize) -> Option<(&'static str, SearchFn)> {
        self.entries.get_index(index).map(|(name, f)| (*name, *f))
    }
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates the endpoints and rebuilds adjacency. Returns the flat indices of start and end.
pub(crate) fn prepare(
    name: &str,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> Result<(usize, usize), SearchError> {
    let start_ix = grid
        .index(start)
        .ok_or_else(|| SearchError::config(format!("start {start:?} is outside the grid")))?;
    let end_ix = grid
        .index(end)
        .ok_or_else(|| SearchError::config(format!("end {end:?} is outside the grid")))?;
    info!("{name}: searching from {start:?} to {end:?}");
    grid.update_neighbors();
    Ok((start_ix, end_ix))
}

/// Hands control to the progress sink after an expansion.
pub(crate) fn report_progress(
    name: &str,
    progress: &mut dyn ProgressSink,
) -> Result<(), SearchError> {
    if progress.progress().is_break() {
        warn!("{name}: interrupted by progress sink");
        return Err(SearchError::Interrupted);
    }
    Ok(())
}

/// Marks the route strictly between its endpoints as [Role::Path] and assembles the outcome.
pub(crate) fn finish(
    name: &str,
    grid: &mut PathingGrid,
    ct: SearchContext,
    end: Option<usize>,
) -> Outcome {
    let path = end.map(|end| {
        let route = ct.reverse_path(end);
        for &ix in route.iter().skip(1).take(route.len().saturating_sub(2)) {
            grid.cell_ix_mut(ix).mark_explored(Role::Path);
        }
        route.into_iter().map(|ix| grid.point(ix)).collect::<Vec<_>>()
    });
    let expanded: Vec<Point> = ct
        .into_expanded()
        .into_iter()
        .map(|ix| grid.point(ix))
        .collect();
    match &path {
        Some(p) => info!(
            "{name}: path of {} hops found after expanding {} cells",
            p.len() - 1,
            expanded.len()
        ),
        None => info!("{name}: no path found after expanding {} cells", expanded.len()),
    }
    Outcome { path, expanded }
}
