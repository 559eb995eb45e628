use core::fmt;
use core::hash::{Hash, Hasher};
use grid_util::point::Point;
use smallvec::SmallVec;

/// The mutually exclusive state of a [Cell].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Open,
    Closed,
    Path,
}

impl Role {
    /// Single character used by the text rendering of a grid.
    pub fn symbol(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Barrier => '#',
            Role::Open => 'o',
            Role::Closed => 'x',
            Role::Path => '*',
        }
    }

    /// Inverse of [symbol](Self::symbol).
    pub fn from_symbol(c: char) -> Option<Role> {
        Some(match c {
            '.' => Role::Empty,
            'S' => Role::Start,
            'E' => Role::End,
            '#' => Role::Barrier,
            'o' => Role::Open,
            'x' => Role::Closed,
            '*' => Role::Path,
            _ => return None,
        })
    }

    /// Roles a search leaves alone when marking its progress.
    pub fn is_fixed(self) -> bool {
        matches!(self, Role::Start | Role::End | Role::Barrier)
    }

    /// Roles written by a search.
    pub fn is_search_mark(self) -> bool {
        matches!(self, Role::Open | Role::Closed | Role::Path)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single grid position. Identity (equality and hashing) is the `(row, col)` pair only.
///
/// `neighbors` holds flat indices into the owning
/// [PathingGrid](crate::pathing_grid::PathingGrid) and is only meaningful after
/// [update_neighbors](crate::pathing_grid::PathingGrid::update_neighbors).
#[derive(Clone, Debug)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    role: Role,
    pub(crate) neighbors: SmallVec<[usize; 4]>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            role: Role::Empty,
            neighbors: SmallVec::new(),
        }
    }
    pub fn pos(&self) -> Point {
        Point::new(self.row as i32, self.col as i32)
    }
    pub fn role(&self) -> Role {
        self.role
    }
    /// Cached passable neighbours in Down, Up, Right, Left order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Back to [Role::Empty] whatever the previous role. Callers tracking this cell as
    /// Start or End must drop their own reference.
    pub fn reset(&mut self) {
        self.role = Role::Empty;
    }
    pub fn mark_start(&mut self) {
        self.role = Role::Start;
    }
    pub fn mark_end(&mut self) {
        self.role = Role::End;
    }
    pub fn mark_barrier(&mut self) {
        self.role = Role::Barrier;
    }
    pub fn mark_open(&mut self) {
        self.role = Role::Open;
    }
    pub fn mark_closed(&mut self) {
        self.role = Role::Closed;
    }
    pub fn mark_path(&mut self) {
        self.role = Role::Path;
    }

    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }
    pub fn is_open(&self) -> bool {
        self.role == Role::Open
    }
    pub fn is_closed(&self) -> bool {
        self.role == Role::Closed
    }
    pub fn is_path(&self) -> bool {
        self.role == Role::Path
    }

    /// Applies a search mark unless the cell is Start, End or a Barrier.
    pub(crate) fn mark_explored(&mut self, role: Role) {
        debug_assert!(role.is_search_mark());
        if !self.role.is_fixed() {
            self.role = role;
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}
