//! # grid_search
//!
//! Step-by-step search on a square grid, meant to drive a visualizer. Five strategies share
//! one calling convention ([SearchFn]) and can be swapped by name through a [Registry]:
//!
//! - breadth-first search, shortest in hops;
//! - depth-first search;
//! - A* with a Euclidean heuristic and visit-once relaxation;
//! - greedy best-first search;
//! - hill climbing, which can get stuck and is kept that way on purpose.
//!
//! Searches mark the cells they touch (Open, Closed, then Path) and call a [ProgressSink]
//! after every expansion so the caller can redraw. Moves are limited to the four cardinal
//! directions with unit cost, enumerated Down, Up, Right, Left; this order fixes exploration
//! order and tie-breaks, which makes every search deterministic.
//!
//! Positions are [Point]s with `x` the row and `y` the column.
//!
//! ```
//! use grid_search::{Algorithm, Board};
//!
//! let mut board = Board::parse(
//!     "S..
//!      .#.
//!      ..E",
//! )
//! .unwrap();
//! board.select(Algorithm::Bfs.name()).unwrap();
//! let outcome = board.run(&mut || {}).unwrap();
//! assert_eq!(outcome.hops(), Some(4));
//! ```
mod board;
pub mod cell;
mod error;
pub mod heuristic;
pub mod pathing_grid;
pub mod progress;
mod search_context;
pub mod solver;

pub use board::Board;
pub use cell::{Cell, Role};
pub use error::SearchError;
pub use grid_util::point::Point;
pub use pathing_grid::PathingGrid;
pub use progress::{Cancellable, Counter, ProgressSink};
pub use solver::{Algorithm, Outcome, Registry, SearchFn};

/// Rows of the visualizer's grid.
pub const DEFAULT_ROWS: usize = 50;
/// Side length in pixels of the visualizer's grid.
pub const DEFAULT_WIDTH: usize = 800;

/// Creates an empty `rows × rows` grid drawn `pixel_width` pixels wide.
pub fn make_grid(rows: usize, pixel_width: usize) -> Result<PathingGrid, SearchError> {
    PathingGrid::new(rows, pixel_width)
}
