use crate::cell::{Cell, Role};
use crate::error::SearchError;
use crate::pathing_grid::PathingGrid;
use crate::progress::ProgressSink;
use crate::solver::{Outcome, Registry};
use crate::DEFAULT_WIDTH;
use grid_util::point::Point;
use log::info;

/// Everything an interactive front end needs: the grid, the selectable strategies and the
/// current Start, End and strategy choice.
#[derive(Clone, Debug)]
pub struct Board {
    grid: PathingGrid,
    registry: Registry,
    start: Option<Point>,
    end: Option<Point>,
    selected: Option<usize>,
}

impl Board {
    pub fn new(rows: usize, pixel_width: usize) -> Result<Board, SearchError> {
        Ok(Board::with_grid(PathingGrid::new(rows, pixel_width)?))
    }

    fn with_grid(grid: PathingGrid) -> Board {
        Board {
            grid,
            registry: Registry::default(),
            start: None,
            end: None,
            selected: None,
        }
    }

    /// Builds a board from a square text layout, one line per row: `.` empty, `#` barrier,
    /// `S` start, `E` end. Blank lines and surrounding whitespace are ignored.
    pub fn parse(layout: &str) -> Result<Board, SearchError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let mut board = Board::new(rows, DEFAULT_WIDTH.max(rows))?;
        for (x, line) in lines.iter().enumerate() {
            if line.chars().count() != rows {
                return Err(SearchError::config(format!(
                    "row {x} has {} cells, expected {rows}",
                    line.chars().count()
                )));
            }
            for (y, c) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match Role::from_symbol(c) {
                    Some(Role::Empty) => {}
                    Some(Role::Barrier) => board.set_barrier(pos)?,
                    Some(Role::Start) if board.start.is_none() => board.set_start(pos)?,
                    Some(Role::End) if board.end.is_none() => board.set_end(pos)?,
                    Some(Role::Start | Role::End) => {
                        return Err(SearchError::config(format!("duplicate {c:?} at {pos:?}")))
                    }
                    _ => {
                        return Err(SearchError::config(format!(
                            "unexpected {c:?} at {pos:?}"
                        )))
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    /// Direct access to the cells. Changing Start or End roles through it bypasses the
    /// board's bookkeeping.
    pub fn grid_mut(&mut self) -> &mut PathingGrid {
        &mut self.grid
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    fn checked_cell(&mut self, pos: Point) -> Result<&mut Cell, SearchError> {
        self.grid
            .cell_mut(pos)
            .ok_or_else(|| SearchError::config(format!("{pos:?} is outside the grid")))
    }

    /// Moves the Start to `pos`, resetting the previous one.
    pub fn set_start(&mut self, pos: Point) -> Result<(), SearchError> {
        self.checked_cell(pos)?;
        if let Some(old) = self.start.take() {
            self.erase(old)?;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        self.checked_cell(pos)?.mark_start();
        self.start = Some(pos);
        Ok(())
    }

    /// Moves the End to `pos`, resetting the previous one.
    pub fn set_end(&mut self, pos: Point) -> Result<(), SearchError> {
        self.checked_cell(pos)?;
        if let Some(old) = self.end.take() {
            self.erase(old)?;
        }
        if self.start == Some(pos) {
            self.start = None;
        }
        self.checked_cell(pos)?.mark_end();
        self.end = Some(pos);
        Ok(())
    }

    /// Turns `pos` into a Barrier unless it is the Start or the End.
    pub fn set_barrier(&mut self, pos: Point) -> Result<(), SearchError> {
        if self.start == Some(pos) || self.end == Some(pos) {
            return Ok(());
        }
        self.checked_cell(pos)?.mark_barrier();
        Ok(())
    }

    /// Primary click: places the Start first, then the End, then Barriers. Returns the role
    /// the cell ends up with.
    pub fn place(&mut self, pos: Point) -> Result<Role, SearchError> {
        if self.start.is_none() && self.end != Some(pos) {
            self.set_start(pos)?;
        } else if self.end.is_none() && self.start != Some(pos) {
            self.set_end(pos)?;
        } else {
            self.set_barrier(pos)?;
        }
        Ok(self.checked_cell(pos)?.role())
    }

    /// Secondary click: empties the cell and forgets it as Start or End.
    pub fn erase(&mut self, pos: Point) -> Result<(), SearchError> {
        self.checked_cell(pos)?.reset();
        if self.start == Some(pos) {
            self.start = None;
        } else if self.end == Some(pos) {
            self.end = None;
        }
        Ok(())
    }

    /// Empties every cell and forgets Start and End. The strategy choice is kept.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.start = None;
        self.end = None;
    }

    /// Removes the marks of previous searches, keeping Start, End and Barriers.
    pub fn clear_search(&mut self) {
        self.grid.clear_search_marks();
    }

    /// Cell under a pixel position.
    pub fn cell_at_pixel(&self, px: usize, py: usize) -> Option<Point> {
        self.grid.cell_at_pixel(px, py)
    }

    pub fn select(&mut self, name: &str) -> Result<(), SearchError> {
        let index = self
            .registry
            .get_index_of(name)
            .ok_or_else(|| SearchError::config(format!("unknown algorithm {name:?}")))?;
        self.selected = Some(index);
        Ok(())
    }
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
            .and_then(|ix| self.registry.get_index(ix))
            .map(|(name, _)| name)
    }

    /// Runs the selected strategy between Start and End.
    pub fn run(&mut self, progress: &mut dyn ProgressSink) -> Result<Outcome, SearchError> {
        let (name, search) = self
            .selected
            .and_then(|ix| self.registry.get_index(ix))
            .ok_or_else(|| SearchError::config("no algorithm selected"))?;
        let start = self
            .start
            .ok_or_else(|| SearchError::config("no start cell placed"))?;
        let end = self
            .end
            .ok_or_else(|| SearchError::config("no end cell placed"))?;
        let rows = self.grid.rows();
        info!("Running {name} on {rows}x{rows} board");
        search(progress, &mut self.grid, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut board = Board::new(3, 30).unwrap();
        assert_eq!(board.place(p(0, 0)), Ok(Role::Start));
        assert_eq!(board.place(p(0, 0)), Ok(Role::Start));
        assert_eq!(board.place(p(2, 2)), Ok(Role::End));
        assert_eq!(board.place(p(1, 1)), Ok(Role::Barrier));
        assert_eq!(board.place(p(2, 2)), Ok(Role::End));
        assert_eq!(board.start(), Some(p(0, 0)));
        assert_eq!(board.end(), Some(p(2, 2)));
        assert!(board.place(p(3, 0)).is_err());
    }

    #[test]
    fn erasing_start_frees_it() {
        let mut board = Board::new(3, 30).unwrap();
        board.place(p(0, 0)).unwrap();
        board.place(p(2, 2)).unwrap();
        board.erase(p(0, 0)).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.grid().role(p(0, 0)), Some(Role::Empty));
        assert_eq!(board.place(p(1, 0)), Ok(Role::Start));
        board.reset();
        assert_eq!((board.start(), board.end()), (None, None));
    }

    #[test]
    fn moving_endpoints_resets_old_cells() {
        let mut board = Board::parse("S..\n...\n..E").unwrap();
        board.set_start(p(1, 1)).unwrap();
        board.set_end(p(1, 1)).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.end(), Some(p(1, 1)));
        assert_eq!(board.grid().to_string(), "...\n.E.\n...\n");
    }

    #[test]
    fn run_needs_selection_and_endpoints() {
        let mut board = Board::new(3, 30).unwrap();
        assert!(matches!(
            board.run(&mut || {}),
            Err(SearchError::InvalidConfiguration(_))
        ));
        board.select("BFS").unwrap();
        board.place(p(0, 0)).unwrap();
        assert!(matches!(
            board.run(&mut || {}),
            Err(SearchError::InvalidConfiguration(_))
        ));
        board.place(p(2, 2)).unwrap();
        assert!(board.run(&mut || {}).unwrap().found());
        assert!(board.select("Dijkstra").is_err());
        assert_eq!(board.selected(), Some("BFS"));
    }

    #[test]
    fn parse_layout() {
        let board = Board::parse(
            "
            S.#
            .#.
            ..E
            ",
        )
        .unwrap();
        assert_eq!(board.start(), Some(p(0, 0)));
        assert_eq!(board.end(), Some(p(2, 2)));
        assert_eq!(board.grid().to_string(), "S.#\n.#.\n..E\n");
        assert!(Board::parse("S.\n.").is_err());
        assert!(Board::parse("SS\n..").is_err());
        assert!(Board::parse("S?\n..").is_err());
        assert!(Board::parse("").is_err());
    }

    #[test]
    fn clear_search_allows_rerun() {
        let mut board = Board::parse("S..\n.#.\n..E").unwrap();
        board.select("DFS").unwrap();
        let first = board.run(&mut || {}).unwrap();
        board.clear_search();
        assert_eq!(board.grid().to_string(), "S..\n.#.\n..E\n");
        let second = board.run(&mut || {}).unwrap();
        assert_eq!(first, second);
    }
}
