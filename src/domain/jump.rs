// Vertical platformer simulation: player physics, platform generation and
// recycling, camera scroll. The world advances in fixed steps scaled by the
// tuning's time-scale factor.

use rand::Rng;
use rand::rngs::SmallRng;

use crate::domain::geometry::{Bounds, Vec2};
use crate::domain::raster::GRID_SIZE;
use crate::domain::tuning::JumpTuning;

const PLAYER_SIZE: Vec2 = Vec2::new(2.0, 2.0);
const PLATFORM_SIZE: Vec2 = Vec2::new(4.0, 1.0);
const PLAYER_START: Vec2 = Vec2::new(12.0, 15.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Normal,
    Bouncy,
    Moving,
}

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    /// Running minimum y, i.e. the highest point reached this run.
    pub max_height_reached: f32,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        Self {
            position: start,
            velocity: Vec2::new(0.0, 0.0),
            size: PLAYER_SIZE,
            max_height_reached: start.y,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    /// Positive vertical velocity points down the screen.
    pub fn is_falling(&self) -> bool {
        self.velocity.y > 0.0
    }

    pub fn update(&mut self, tuning: &JumpTuning) {
        let time_scale = tuning.time_scale();
        self.velocity.y += tuning.gravity * time_scale;
        self.position += self.velocity * time_scale;

        // Horizontal wraparound: exits left re-enter right and vice versa.
        if self.position.x < 0.0 {
            self.position.x = GRID_SIZE as f32 - self.size.x;
        } else if self.position.x + self.size.x > GRID_SIZE as f32 {
            self.position.x = 0.0;
        }

        if self.position.y < self.max_height_reached {
            self.max_height_reached = self.position.y;
        }
    }

    pub fn set_horizontal_velocity(&mut self, input: f32, tuning: &JumpTuning) {
        self.velocity.x = input.clamp(-tuning.max_horizontal_speed, tuning.max_horizontal_speed);
    }

    /// Snaps the player to rest on top of the platform and applies its
    /// launch impulse.
    pub fn land_on(&mut self, platform: &Platform, tuning: &JumpTuning) {
        self.position.y = platform.position.y - self.size.y;
        match platform.kind {
            PlatformKind::Normal | PlatformKind::Moving => {
                // Only while not already moving up; prevents stacking jumps.
                if self.velocity.y >= 0.0 {
                    self.velocity.y = tuning.jump_impulse;
                }
            }
            PlatformKind::Bouncy => self.velocity.y = tuning.bouncy_impulse,
        }
    }

    pub fn reset(&mut self, start: Vec2) {
        self.position = start;
        self.velocity = Vec2::new(0.0, 0.0);
        self.max_height_reached = start.y;
    }
}

#[derive(Debug)]
pub struct Platform {
    pub position: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    /// Oscillation sign for moving platforms; unused otherwise.
    pub direction: f32,
}

impl Platform {
    pub fn new(position: Vec2, kind: PlatformKind) -> Self {
        Self {
            position,
            size: PLATFORM_SIZE,
            kind,
            direction: 1.0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    /// Moving platforms oscillate between the grid edges, reversing on
    /// reaching either bound.
    pub fn update(&mut self, tuning: &JumpTuning) {
        if self.kind != PlatformKind::Moving {
            return;
        }
        self.position.x += self.direction * tuning.platform_move_speed * tuning.time_scale();
        if self.position.x <= 0.0 || self.position.x + self.size.x >= GRID_SIZE as f32 {
            self.direction = -self.direction;
            self.position.x = self.position.x.clamp(0.0, GRID_SIZE as f32 - self.size.x);
        }
    }
}

#[derive(Debug)]
pub struct JumpWorld {
    pub player: Player,
    pub platforms: Vec<Platform>,
    /// Vertical scroll; only ever decreases (the view scrolls up).
    pub camera_offset: f32,
    pub tuning: JumpTuning,
    rng: SmallRng,
}

impl JumpWorld {
    pub fn new(tuning: JumpTuning, rng: SmallRng) -> Self {
        let mut world = Self {
            player: Player::new(PLAYER_START),
            platforms: Vec::new(),
            camera_offset: 0.0,
            tuning,
            rng,
        };
        world.reset();
        world
    }

    pub fn set_horizontal_input(&mut self, input: f32) {
        let tuning = self.tuning;
        self.player.set_horizontal_velocity(input, &tuning);
    }

    /// Advances the world by one frame. Returns false once the player has
    /// fallen out of the view.
    pub fn tick(&mut self) -> bool {
        let tuning = self.tuning;
        self.player.update(&tuning);
        for platform in &mut self.platforms {
            platform.update(&tuning);
        }
        self.handle_collisions();
        self.update_camera();
        self.recycle_platforms();
        !self.player_lost()
    }

    /// Landing is only checked while the player is falling; the first
    /// overlapping platform wins.
    fn handle_collisions(&mut self) {
        if !self.player.is_falling() {
            return;
        }
        let tuning = self.tuning;
        let player_bounds = self.player.bounds();
        for platform in &self.platforms {
            if player_bounds.intersects(&platform.bounds()) {
                self.player.land_on(platform, &tuning);
                return;
            }
        }
    }

    fn update_camera(&mut self) {
        if self.player.position.y < self.camera_offset + self.tuning.camera_follow_threshold {
            self.camera_offset = self.player.position.y - self.tuning.camera_follow_threshold;
        }
    }

    /// Drops platforms that scrolled far enough behind the camera and keeps
    /// the space above the view stocked.
    fn recycle_platforms(&mut self) {
        let bottom = self.camera_offset + GRID_SIZE as f32 + self.tuning.platform_removal_margin;
        self.platforms.retain(|p| p.position.y <= bottom);

        let Some(highest_y) = self
            .platforms
            .iter()
            .map(|p| p.position.y)
            .reduce(f32::min)
        else {
            return;
        };
        if highest_y > self.camera_offset - self.tuning.platform_spawn_buffer {
            let new_y = highest_y - self.rng.random_range(0.0..4.0) - 3.0;
            let new_x = self
                .rng
                .random_range(0.0..(GRID_SIZE as f32 - PLATFORM_SIZE.x));
            let kind = self.random_platform_kind();
            self.platforms
                .push(Platform::new(Vec2::new(new_x, new_y), kind));
        }
    }

    /// True once the player has fallen more than the configured margin below
    /// the bottom of the view. One-way: recovery requires an explicit reset.
    pub fn player_lost(&self) -> bool {
        self.player.position.y
            > self.camera_offset + GRID_SIZE as f32 + self.tuning.game_over_margin
    }

    /// Height-derived score for the current player position.
    pub fn current_score(&self) -> u32 {
        (GRID_SIZE as f32 - self.player.position.y).max(0.0) as u32
    }

    /// Re-seeds the world: player at the start position, one guaranteed
    /// platform right under it, the rest stacked upward at randomized
    /// offsets.
    pub fn reset(&mut self) {
        self.player.reset(PLAYER_START);
        self.camera_offset = 0.0;
        self.platforms.clear();
        self.platforms
            .push(Platform::new(Vec2::new(10.0, 17.0), PlatformKind::Normal));

        let mut current_y = 13.0;
        for _ in 1..self.tuning.platform_count {
            let x = self
                .rng
                .random_range(0.0..(GRID_SIZE as f32 - PLATFORM_SIZE.x));
            let kind = self.random_platform_kind();
            self.platforms
                .push(Platform::new(Vec2::new(x, current_y), kind));
            current_y -= self.rng.random_range(0.0..4.0) + 2.0;
        }
    }

    /// Weighted platform mix: 80% normal, 15% moving, 5% bouncy.
    fn random_platform_kind(&mut self) -> PlatformKind {
        match self.rng.random_range(0..100) {
            0..80 => PlatformKind::Normal,
            80..95 => PlatformKind::Moving,
            _ => PlatformKind::Bouncy,
        }
    }
}
