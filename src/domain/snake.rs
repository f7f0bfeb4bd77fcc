// Circular-board snake simulation: queued direction changes, wraparound
// movement, growth on food, self-collision.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::domain::board::{self, Direction, Point};
use crate::domain::raster::GRID_SIZE;
use crate::domain::tuning::SnakeTuning;

/// Result of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head moved, tail followed.
    Moved,
    /// Food reached: the body grew by one and the food relocated.
    Ate,
    /// The head left the board or bit the body.
    Collided,
}

#[derive(Debug)]
pub struct SnakeWorld {
    /// Body cells, head first. No two cells are equal while alive.
    pub body: VecDeque<Point>,
    pub direction: Direction,
    /// Direction queued by input, applied at the start of the next tick.
    pub pending_direction: Option<Direction>,
    pub food: Point,
    pub tuning: SnakeTuning,
    rng: SmallRng,
}

impl SnakeWorld {
    pub fn new(tuning: SnakeTuning, rng: SmallRng) -> Self {
        let mut world = Self {
            body: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: None,
            food: Point::new(0, 0),
            tuning,
            rng,
        };
        world.reset();
        world
    }

    /// Head cell; the board center if the body was somehow emptied.
    pub fn head(&self) -> Point {
        self.body
            .front()
            .copied()
            .unwrap_or(Point::new(GRID_SIZE as i32 / 2, GRID_SIZE as i32 / 2))
    }

    /// Queues a direction change for the next tick. Requests matching the
    /// effective direction or reversing it outright are ignored.
    pub fn queue_direction(&mut self, direction: Direction) {
        let active = self.pending_direction.unwrap_or(self.direction);
        if direction == active || direction.is_opposite(active) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances one tick: applies the queued direction, moves the head with
    /// circular wraparound, then grows or trails.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let candidate = self.direction.step(self.head());
        let new_head = board::wrap_within_circle(candidate, self.direction);
        if !new_head.inside_circle() || self.body.contains(&new_head) {
            return StepOutcome::Collided;
        }

        self.body.push_front(new_head);
        if new_head == self.food {
            self.food = self.spawn_food();
            StepOutcome::Ate
        } else {
            self.body.pop_back();
            StepOutcome::Moved
        }
    }

    /// Picks a uniformly random open cell inside the circle. Falls back to
    /// the head cell when the board is completely covered.
    fn spawn_food(&mut self) -> Point {
        let open: Vec<Point> = (0..GRID_SIZE as i32)
            .flat_map(|y| (0..GRID_SIZE as i32).map(move |x| Point::new(x, y)))
            .filter(|p| p.inside_circle() && !self.body.contains(p))
            .collect();
        match open.choose(&mut self.rng) {
            Some(point) => *point,
            None => self.head(),
        }
    }

    /// Re-seeds the snake through the middle of the board, heading right.
    pub fn reset(&mut self) {
        self.body.clear();
        let start_y = GRID_SIZE as i32 / 2;
        let start_x = GRID_SIZE as i32 / 2 - self.tuning.initial_length as i32 / 2;
        for i in 0..self.tuning.initial_length as i32 {
            self.body.push_front(Point::new(start_x + i, start_y));
        }
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.food = self.spawn_food();
    }
}
