// Snake engine: the shared state machine, speed ramp and rasterized
// rendering on top of the circular-board world.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::domain::raster::{self, FrameBuffer, GLYPH_HEIGHT, GRID_SIZE};
use crate::domain::snake::{SnakeWorld, StepOutcome};
use crate::domain::tuning::SnakeTuning;
use crate::interface_adapters::input;
use crate::interface_adapters::sink::FrameSink;
use crate::use_cases::engine::TickGame;
use crate::use_cases::types::{GameState, TiltSample};

fn head_brightness() -> u16 {
    raster::scale_brightness(255)
}

fn body_brightness() -> u16 {
    raster::scale_brightness(128)
}

fn dim_brightness() -> u16 {
    raster::scale_brightness(32)
}

fn food_brightness() -> u16 {
    raster::scale_brightness(768)
}

fn pause_overlay_brightness() -> u16 {
    raster::scale_brightness(24)
}

pub struct SnakeEngine {
    world: SnakeWorld,
    state: GameState,
    sink: Option<FrameSink>,
    score: u32,
    high_score: u32,
    blink: bool,
}

impl SnakeEngine {
    pub fn new() -> Self {
        Self::with_world(SnakeWorld::new(SnakeTuning::default(), SmallRng::from_os_rng()))
    }

    /// Builds the engine around a prepared world; lets callers seed the rng
    /// or stage a specific body layout.
    pub fn with_world(world: SnakeWorld) -> Self {
        Self {
            world,
            state: GameState::Home,
            sink: None,
            score: 0,
            high_score: 0,
            blink: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn world(&self) -> &SnakeWorld {
        &self.world
    }

    /// Renders whatever the current state shows.
    pub fn render(&self) {
        match self.state {
            GameState::Home => self.render_home(),
            GameState::Playing => self.render_board(head_brightness(), body_brightness(), false),
            GameState::Paused => self.render_board(body_brightness(), dim_brightness(), true),
            GameState::GameOver => self.render_game_over(),
        }
    }

    fn start_game(&mut self) {
        self.blink = false;
        self.state = GameState::Playing;
        debug!(game = "snake", "run started");
    }

    fn pause_game(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.state = GameState::Paused;
        debug!(game = "snake", "paused");
        // Last frame again, dimmed, with the pause bar on top.
        self.render_board(body_brightness(), dim_brightness(), true);
    }

    fn resume_game(&mut self) {
        if self.state != GameState::Paused {
            return;
        }
        self.state = GameState::Playing;
        debug!(game = "snake", "resumed");
    }

    fn restart_to_home(&mut self) {
        self.world.reset();
        self.score = 0;
        self.state = GameState::Home;
        self.blink = false;
        self.render_home();
    }

    fn render_home(&self) {
        let head = if self.blink {
            head_brightness()
        } else {
            dim_brightness()
        };
        self.render_board(head, dim_brightness(), false);
    }

    fn render_board(&self, head_brightness: u16, body_brightness: u16, pause_overlay: bool) {
        let Some(sink) = &self.sink else { return };
        let mut frame = FrameBuffer::new();

        raster::paint_point(&mut frame, self.world.food.x, self.world.food.y, food_brightness());
        for (index, point) in self.world.body.iter().enumerate() {
            let brightness = if index == 0 {
                head_brightness
            } else {
                body_brightness
            };
            raster::paint_point(&mut frame, point.x, point.y, brightness);
        }
        if pause_overlay {
            paint_pause_overlay(&mut frame);
        }
        sink.push(frame.into_cells());
    }

    fn render_game_over(&self) {
        info!(
            game = "snake",
            score = self.score,
            high_score = self.high_score,
            "game over"
        );
        let Some(sink) = &self.sink else { return };
        let mut frame = FrameBuffer::new();
        let text = self.score.min(999_999).to_string();
        let row = (GRID_SIZE - GLYPH_HEIGHT) as i32 / 2;
        raster::paint_digits(&mut frame, &text, row, head_brightness());
        sink.push(frame.into_cells());
    }
}

impl Default for SnakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical bar through the middle of the board.
fn paint_pause_overlay(frame: &mut FrameBuffer) {
    let mid = GRID_SIZE as i32 / 2;
    for x in mid - 1..=mid + 1 {
        for y in mid - 4..=mid + 4 {
            raster::paint_point(frame, x, y, pause_overlay_brightness());
        }
    }
}

impl TickGame for SnakeEngine {
    fn state(&self) -> GameState {
        self.state
    }

    fn handle_long_press(&mut self) {
        match self.state {
            GameState::Home => self.start_game(),
            GameState::Playing => self.pause_game(),
            GameState::Paused => self.resume_game(),
            GameState::GameOver => self.restart_to_home(),
        }
    }

    fn handle_tilt(&mut self, sample: TiltSample) {
        if self.state != GameState::Playing {
            return;
        }
        if let Some(direction) = input::direction_from_tilt(sample.x, sample.y) {
            self.world.queue_direction(direction);
        }
    }

    fn advance(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        match self.world.step() {
            StepOutcome::Ate => {
                self.score += self.world.tuning.food_score;
                if self.score > self.high_score {
                    self.high_score = self.score;
                }
                debug!(game = "snake", score = self.score, "food eaten");
                self.render_board(head_brightness(), body_brightness(), false);
            }
            StepOutcome::Moved => {
                self.render_board(head_brightness(), body_brightness(), false);
            }
            StepOutcome::Collided => {
                self.state = GameState::GameOver;
                self.render_game_over();
            }
        }
    }

    fn render_idle(&mut self) {
        self.render_home();
        self.blink = !self.blink;
    }

    fn tick_delay(&self) -> Duration {
        self.world.tuning.update_delay(self.score)
    }

    fn idle_delay(&self) -> Duration {
        self.world.tuning.home_blink_delay
    }

    fn bind_sink(&mut self, sink: FrameSink) {
        self.sink = Some(sink);
        self.render();
    }

    fn release_sink(&mut self) {
        self.sink = None;
    }
}
