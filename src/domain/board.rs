// Circular-board geometry for the snake game. The playable area is the
// largest circle inscribed in the square grid; per-row and per-column valid
// index ranges are precomputed once from the circle equation and reused for
// wraparound.

use std::sync::LazyLock;

use crate::domain::raster::GRID_SIZE;

const BOARD_CENTER: f64 = (GRID_SIZE as f64 - 1.0) / 2.0;
const BOARD_RADIUS: f64 = (GRID_SIZE as f64 - 1.0) / 2.0;
/// Tolerance on the boundary test so cells grazing the circle still count.
const EDGE_EPSILON: f64 = 0.25;

/// Integer grid coordinate, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn within_grid(&self) -> bool {
        (0..GRID_SIZE as i32).contains(&self.x) && (0..GRID_SIZE as i32).contains(&self.y)
    }

    /// Membership test for the inscribed circular board.
    pub fn inside_circle(&self) -> bool {
        if !self.within_grid() {
            return false;
        }
        let dx = self.x as f64 - BOARD_CENTER;
        let dy = self.y as f64 - BOARD_CENTER;
        dx * dx + dy * dy <= BOARD_RADIUS * BOARD_RADIUS + EDGE_EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn step(&self, point: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        let (dx, dy) = self.offset();
        let (ox, oy) = other.offset();
        dx == -ox && dy == -oy
    }
}

/// Inclusive valid-index range along one axis of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounds {
    pub min: i32,
    pub max: i32,
}

// Rows and columns share one chord table: the circle is centered, so the
// valid span at row i equals the valid span at column i.
static CHORD_BOUNDS: LazyLock<[AxisBounds; GRID_SIZE]> =
    LazyLock::new(|| std::array::from_fn(|i| chord_bounds(i as i32)));

fn chord_bounds(index: i32) -> AxisBounds {
    let d = index as f64 - BOARD_CENTER;
    let span = (BOARD_RADIUS * BOARD_RADIUS - d * d).max(0.0).sqrt();
    AxisBounds {
        min: ((BOARD_CENTER - span).ceil() as i32).clamp(0, GRID_SIZE as i32 - 1),
        max: ((BOARD_CENTER + span).floor() as i32).clamp(0, GRID_SIZE as i32 - 1),
    }
}

/// Valid column range for a row of the board.
pub fn row_bounds(y: i32) -> AxisBounds {
    CHORD_BOUNDS[y.clamp(0, GRID_SIZE as i32 - 1) as usize]
}

/// Valid row range for a column of the board.
pub fn column_bounds(x: i32) -> AxisBounds {
    CHORD_BOUNDS[x.clamp(0, GRID_SIZE as i32 - 1) as usize]
}

fn wrap_index(value: i32) -> i32 {
    if value < 0 {
        GRID_SIZE as i32 - 1
    } else if value >= GRID_SIZE as i32 {
        0
    } else {
        value
    }
}

/// Resolves a raw move onto the circular board: wrap at the square edge on
/// the axis of travel first, then wrap to the opposite valid bound of the
/// current row/column when the move left the circle. This keeps the board
/// topologically continuous instead of merely clipped.
pub fn wrap_within_circle(candidate: Point, direction: Direction) -> Point {
    let mut x = candidate.x;
    let mut y = candidate.y;
    match direction {
        Direction::Right => {
            y = wrap_index(y);
            let bounds = row_bounds(y);
            if x >= GRID_SIZE as i32 {
                x = 0;
            }
            if x < bounds.min {
                x = bounds.max;
            }
            if x > bounds.max {
                x = bounds.min;
            }
        }
        Direction::Left => {
            y = wrap_index(y);
            let bounds = row_bounds(y);
            if x < 0 {
                x = GRID_SIZE as i32 - 1;
            }
            if x < bounds.min {
                x = bounds.max;
            }
            if x > bounds.max {
                x = bounds.min;
            }
        }
        Direction::Up => {
            x = wrap_index(x);
            let bounds = column_bounds(x);
            if y < 0 {
                y = GRID_SIZE as i32 - 1;
            }
            if y < bounds.min {
                y = bounds.max;
            }
            if y > bounds.max {
                y = bounds.min;
            }
        }
        Direction::Down => {
            x = wrap_index(x);
            let bounds = column_bounds(x);
            if y >= GRID_SIZE as i32 {
                y = 0;
            }
            if y < bounds.min {
                y = bounds.max;
            }
            if y > bounds.max {
                y = bounds.min;
            }
        }
    }
    Point::new(
        x.clamp(0, GRID_SIZE as i32 - 1),
        y.clamp(0, GRID_SIZE as i32 - 1),
    )
}
