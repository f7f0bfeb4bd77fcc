// Platformer engine: the shared state machine, monotonic scoring and
// rasterized rendering on top of the jump world.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::domain::jump::{JumpWorld, PlatformKind};
use crate::domain::raster::{self, FrameBuffer, GLYPH_HEIGHT, GRID_SIZE, MAX_BRIGHTNESS};
use crate::domain::tuning::JumpTuning;
use crate::interface_adapters::input;
use crate::interface_adapters::settings::{SharedSettings, sensitivity};
use crate::interface_adapters::sink::FrameSink;
use crate::use_cases::engine::TickGame;
use crate::use_cases::types::{GameState, TiltSample};

const BRIGHTNESS_FULL: u16 = MAX_BRIGHTNESS;

fn brightness_dim() -> u16 {
    raster::scale_brightness(100)
}

fn platform_brightness(kind: PlatformKind) -> u16 {
    match kind {
        PlatformKind::Normal | PlatformKind::Moving => raster::scale_brightness(100),
        PlatformKind::Bouncy => raster::scale_brightness(511),
    }
}

pub struct JumpEngine {
    world: JumpWorld,
    state: GameState,
    sink: Option<FrameSink>,
    settings: SharedSettings,
    score: u32,
    high_score: u32,
    blink: bool,
}

impl JumpEngine {
    pub fn new(settings: SharedSettings) -> Self {
        Self::with_world(
            JumpWorld::new(JumpTuning::default(), SmallRng::from_os_rng()),
            settings,
        )
    }

    /// Builds the engine around a prepared world; lets callers seed the rng
    /// or stage a specific platform layout.
    pub fn with_world(world: JumpWorld, settings: SharedSettings) -> Self {
        Self {
            world,
            state: GameState::Home,
            sink: None,
            settings,
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

    pub fn world(&self) -> &JumpWorld {
        &self.world
    }

    /// Renders whatever the current state shows.
    pub fn render(&self) {
        match self.state {
            GameState::Home => self.render_home(),
            GameState::Playing => self.render_scene(BRIGHTNESS_FULL),
            GameState::Paused => self.render_scene(brightness_dim()),
            GameState::GameOver => self.render_game_over(),
        }
    }

    fn start_game(&mut self) {
        if self.state == GameState::Playing {
            return;
        }
        self.blink = false;
        if self.state == GameState::GameOver {
            self.world.reset();
        }
        self.score = 0;
        self.state = GameState::Playing;
        debug!(game = "jump", "run started");
        self.render_scene(BRIGHTNESS_FULL);
    }

    fn pause_game(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        self.state = GameState::Paused;
        debug!(game = "jump", "paused");
        // Last frame again, with the player dimmed.
        self.render_scene(brightness_dim());
    }

    fn resume_game(&mut self) {
        if self.state != GameState::Paused {
            return;
        }
        self.state = GameState::Playing;
        debug!(game = "jump", "resumed");
    }

    fn restart_to_home(&mut self) {
        self.world.reset();
        self.score = 0;
        self.state = GameState::Home;
        self.blink = false;
        self.render_home();
    }

    fn update_score(&mut self) {
        // Derived from height each tick, but never allowed to drop mid-run.
        let new_score = self.world.current_score();
        if new_score > self.score {
            self.score = new_score;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
        }
    }

    fn render_home(&self) {
        let player_brightness = if self.blink {
            BRIGHTNESS_FULL
        } else {
            brightness_dim()
        };
        self.render_scene(player_brightness);
    }

    fn render_scene(&self, player_brightness: u16) {
        let Some(sink) = &self.sink else { return };
        let mut frame = FrameBuffer::new();

        for platform in &self.world.platforms {
            let on_screen_y = platform.position.y - self.world.camera_offset;
            // Skip platforms fully off screen, with one cell of slack.
            if on_screen_y > GRID_SIZE as f32 + 1.0 || on_screen_y + platform.size.y < -1.0 {
                continue;
            }
            raster::paint_rect(
                &mut frame,
                platform.position.x,
                on_screen_y,
                platform.size.x,
                platform.size.y,
                platform_brightness(platform.kind),
            );
        }

        let player = &self.world.player;
        raster::paint_rect(
            &mut frame,
            player.position.x,
            player.position.y - self.world.camera_offset,
            player.size.x,
            player.size.y,
            player_brightness,
        );
        sink.push(frame.into_cells());
    }

    fn render_game_over(&self) {
        info!(
            game = "jump",
            score = self.score,
            high_score = self.high_score,
            "game over"
        );
        let Some(sink) = &self.sink else { return };
        let mut frame = FrameBuffer::new();
        let text = self.score.min(999_999).to_string();
        let row = (GRID_SIZE - GLYPH_HEIGHT) as i32 / 2;
        raster::paint_digits(&mut frame, &text, row, BRIGHTNESS_FULL);
        sink.push(frame.into_cells());
    }
}

impl TickGame for JumpEngine {
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
        let sensitivity = sensitivity::get(self.settings.as_ref());
        self.world
            .set_horizontal_input(input::steer_from_tilt(sample.x, sensitivity));
    }

    fn advance(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let alive = self.world.tick();
        self.update_score();
        if !alive {
            self.state = GameState::GameOver;
            self.render_game_over();
            return;
        }
        self.render_scene(BRIGHTNESS_FULL);
    }

    fn render_idle(&mut self) {
        self.render_home();
        self.blink = !self.blink;
    }

    fn tick_delay(&self) -> Duration {
        self.world.tuning.frame_delay
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
