use crate::cell::{Cell, Role};
use crate::error::SearchError;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Offsets in neighbour enumeration order: Down, Up, Right, Left. The order decides
/// exploration order and tie-breaks of every search, so it must not change.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A square `rows × rows` grid of [Cell]s stored row-major, together with the
/// connected components of its passable cells.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cell_size: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a grid of empty cells. `pixel_width` only determines the cell size used
    /// when mapping pixels to cells.
    pub fn new(rows: usize, pixel_width: usize) -> Result<PathingGrid, SearchError> {
        if rows == 0 {
            return Err(SearchError::config("grid needs at least one row"));
        }
        if pixel_width < rows {
            return Err(SearchError::config(format!(
                "pixel width {pixel_width} is too small for {rows} rows"
            )));
        }
        let cells = (0..rows)
            .flat_map(|row| (0..rows).map(move |col| Cell::new(row, col)))
            .collect();
        Ok(PathingGrid {
            rows,
            cell_size: pixel_width / rows,
            cells,
            components: UnionFind::new(rows * rows),
            components_dirty: true,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Side length of a cell in pixels.
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.rows && (pos.y as usize) < self.rows
    }
    /// Flat index of a position, [None] when outside the grid.
    pub fn index(&self, pos: Point) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.x as usize * self.rows + pos.y as usize)
    }
    pub fn point(&self, ix: usize) -> Point {
        self.cells[ix].pos()
    }

    pub fn cell(&self, pos: Point) -> Option<&Cell> {
        self.index(pos).map(|ix| &self.cells[ix])
    }
    /// Mutable access to a cell. The components are marked dirty since the role may change.
    pub fn cell_mut(&mut self, pos: Point) -> Option<&mut Cell> {
        let ix = self.index(pos)?;
        self.components_dirty = true;
        Some(&mut self.cells[ix])
    }
    /// Role of the cell at `pos`, [None] when outside the grid.
    pub fn role(&self, pos: Point) -> Option<Role> {
        self.cell(pos).map(Cell::role)
    }
    pub(crate) fn cell_ix(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_ix_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Recomputes every cell's neighbour list from scratch. A candidate is a neighbour iff it
    /// lies inside the grid and is not a Barrier. Barriers themselves get no neighbours.
    pub fn update_neighbors(&mut self) {
        debug!("Recomputing adjacency for {0}x{0} grid", self.rows);
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_barrier() {
                self.cells[ix].neighbors.clear();
                continue;
            }
            let pos = self.cells[ix].pos();
            let neighbors = NEIGHBOR_OFFSETS
                .iter()
                .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
                .filter_map(|p| self.index(p))
                .filter(|&n| !self.cells[n].is_barrier())
                .collect();
            self.cells[ix].neighbors = neighbors;
        }
        self.components_dirty = true;
    }

    /// Cached neighbour positions of `pos`, in enumeration order.
    pub fn neighbor_points(&self, pos: Point) -> Vec<Point> {
        self.cell(pos)
            .map(|c| c.neighbors().iter().map(|&n| self.point(n)).collect())
            .unwrap_or_default()
    }

    /// Resets every cell to [Role::Empty].
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
        self.components_dirty = true;
    }

    /// Resets Open, Closed and Path cells, keeping Start, End and Barriers.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.role().is_search_mark() {
                cell.reset();
            }
        }
    }

    /// Maps a pixel position to the cell under it. Rows run along the horizontal axis.
    pub fn cell_at_pixel(&self, px: usize, py: usize) -> Option<Point> {
        let (row, col) = (px / self.cell_size, py / self.cell_size);
        if row >= self.rows || col >= self.rows {
            return None;
        }
        Some(Point::new(i32::try_from(row).ok()?, i32::try_from(col).ok()?))
    }

    /// Checks that consecutive positions are distinct neighbours under the cached adjacency.
    pub fn is_route(&self, route: &[Point]) -> bool {
        route
            .iter()
            .tuple_windows()
            .all(|(a, b)| self.neighbor_points(*a).contains(b))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure from the current roles, joining every passable
    /// cell with its passable cardinal neighbours. The neighbour cache is not consulted.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            if cell.is_barrier() {
                continue;
            }
            let pos = cell.pos();
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                if let Some(n) = self.index(Point::new(pos.x + dx, pos.y + dy)) {
                    if !self.cells[n].is_barrier() {
                        components.union(ix, n);
                    }
                }
            }
        }
        self.components = components;
        self.components_dirty = false;
    }

    /// Retrieves the component id of a position.
    pub fn get_component(&self, pos: Point) -> Option<usize> {
        self.index(pos).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        match (self.index(start), self.index(goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows) {
            writeln!(f, "{}", row.iter().map(|c| c.role().symbol()).join(""))?;
        }
        Ok(())
    }
}
