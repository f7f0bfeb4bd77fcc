use std::time::Duration;

/// Gameplay tuning for the vertical platformer.
///
/// Keep this separate from runtime configuration (channel capacities, env
/// knobs, etc.).
#[derive(Debug, Clone, Copy)]
pub struct JumpTuning {
    /// Downward acceleration added to vertical velocity each tick.
    pub gravity: f32,

    /// Upward impulse granted by normal and moving platforms.
    pub jump_impulse: f32,

    /// Upward impulse granted by bouncy platforms.
    pub bouncy_impulse: f32,

    /// Hard cap on horizontal speed from tilt input.
    pub max_horizontal_speed: f32,

    /// Horizontal speed of moving platforms.
    pub platform_move_speed: f32,

    /// Number of platforms seeded into a fresh world.
    pub platform_count: usize,

    /// The camera scrolls once the player climbs within this many cells of
    /// the top of the view.
    pub camera_follow_threshold: f32,

    /// Platforms this far below the view are removed.
    pub platform_removal_margin: f32,

    /// A new platform spawns while the highest one is closer than this to
    /// the camera's leading edge.
    pub platform_spawn_buffer: f32,

    /// Falling this far below the view ends the run.
    pub game_over_margin: f32,

    /// Delay between simulation frames.
    pub frame_delay: Duration,

    /// Nominal frame delay the physics constants were tuned against, in
    /// milliseconds.
    pub base_frame_delay_ms: f32,

    /// Delay between idle-screen blink frames.
    pub home_blink_delay: Duration,
}

impl JumpTuning {
    /// Ratio of the actual frame delay to the nominal baseline. Scaling the
    /// integration step by this keeps simulated gravity and speeds
    /// independent of the frame rate.
    pub fn time_scale(&self) -> f32 {
        self.frame_delay.as_millis() as f32 / self.base_frame_delay_ms
    }
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            gravity: 0.15,
            jump_impulse: -2.0,
            bouncy_impulse: -6.0,
            max_horizontal_speed: 2.0,
            platform_move_speed: 0.5,
            platform_count: 8,
            camera_follow_threshold: 8.0,
            platform_removal_margin: 5.0,
            platform_spawn_buffer: 10.0,
            game_over_margin: 5.0,
            frame_delay: Duration::from_millis(25),
            base_frame_delay_ms: 50.0,
            home_blink_delay: Duration::from_millis(100),
        }
    }
}
