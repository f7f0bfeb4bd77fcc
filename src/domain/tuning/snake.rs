use std::time::Duration;

/// Gameplay tuning for the circular-board snake game.
#[derive(Debug, Clone, Copy)]
pub struct SnakeTuning {
    /// Body length of a freshly seeded snake.
    pub initial_length: usize,

    /// Score awarded per food pellet.
    pub food_score: u32,

    /// Tick delay at score zero.
    pub base_update_delay: Duration,

    /// Fastest allowed tick delay; the speed ramp never goes below this.
    pub min_update_delay: Duration,

    /// Delay between idle-screen blink frames.
    pub home_blink_delay: Duration,
}

impl SnakeTuning {
    /// Tick delay for the given score: shrinks linearly as the score grows,
    /// floored at the configured minimum.
    pub fn update_delay(&self, score: u32) -> Duration {
        let speed_bonus = u64::from((score / 5).min(80));
        let base = self.base_update_delay.as_millis() as u64;
        let floor = self.min_update_delay.as_millis() as u64;
        Duration::from_millis(base.saturating_sub(speed_bonus).max(floor))
    }
}

impl Default for SnakeTuning {
    fn default() -> Self {
        Self {
            initial_length: 5,
            food_score: 10,
            base_update_delay: Duration::from_millis(180),
            min_update_delay: Duration::from_millis(80),
            home_blink_delay: Duration::from_millis(400),
        }
    }
}
