use glyph_games::domain::geometry::Vec2;
use glyph_games::domain::jump::{JumpWorld, Platform, PlatformKind, Player};
use glyph_games::domain::tuning::JumpTuning;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn world_with_seed(seed: u64) -> JumpWorld {
    JumpWorld::new(JumpTuning::default(), SmallRng::seed_from_u64(seed))
}

/// World with no platforms at all: pure free-fall physics.
fn empty_world(seed: u64) -> JumpWorld {
    let mut world = world_with_seed(seed);
    world.platforms.clear();
    world
}

#[test]
fn time_scale_halves_the_nominal_step() {
    assert!((JumpTuning::default().time_scale() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn gravity_integrates_into_velocity_and_position() {
    let mut world = empty_world(1);
    assert_eq!(world.player.position.y, 15.0);

    assert!(world.tick());

    // One tick of gravity at half time scale.
    assert!((world.player.velocity.y - 0.075).abs() < 1e-4);
    assert!((world.player.position.y - 15.0375).abs() < 1e-4);
    // Height-derived score matches the new position.
    assert_eq!(world.current_score(), 9);
}

#[test]
fn player_wraps_around_both_horizontal_edges() {
    let mut world = empty_world(2);
    world.player.position.x = -0.5;
    world.tick();
    assert_eq!(world.player.position.x, 23.0);

    let mut world = empty_world(3);
    world.player.position.x = 23.5;
    world.tick();
    assert_eq!(world.player.position.x, 0.0);
}

#[test]
fn falling_onto_a_platform_snaps_and_launches() {
    let mut world = empty_world(4);
    world
        .platforms
        .push(Platform::new(Vec2::new(11.0, 18.0), PlatformKind::Normal));
    world.player.position = Vec2::new(11.0, 15.9);
    world.player.velocity.y = 1.0;

    world.tick();

    // Snapped to rest on top of the platform and launched upward.
    assert_eq!(world.player.position.y, 16.0);
    assert_eq!(world.player.velocity.y, -2.0);
}

#[test]
fn rising_player_gets_no_second_normal_impulse() {
    let tuning = JumpTuning::default();
    let platform = Platform::new(Vec2::new(11.0, 18.0), PlatformKind::Normal);
    let mut player = Player::new(Vec2::new(11.0, 16.5));
    player.velocity.y = -1.0;

    player.land_on(&platform, &tuning);

    // Snap happens, but the upward velocity is kept as is.
    assert_eq!(player.position.y, 16.0);
    assert_eq!(player.velocity.y, -1.0);
}

#[test]
fn bouncy_platforms_always_apply_the_big_impulse() {
    let tuning = JumpTuning::default();
    let platform = Platform::new(Vec2::new(11.0, 18.0), PlatformKind::Bouncy);
    let mut player = Player::new(Vec2::new(11.0, 16.5));
    player.velocity.y = -1.0;

    player.land_on(&platform, &tuning);

    assert_eq!(player.velocity.y, -6.0);
}

#[test]
fn moving_platforms_reverse_at_the_edges() {
    let tuning = JumpTuning::default();
    let mut platform = Platform::new(Vec2::new(20.8, 10.0), PlatformKind::Moving);

    platform.update(&tuning);
    // Hit the right edge: clamped back in and reversed.
    assert_eq!(platform.position.x, 21.0);
    assert_eq!(platform.direction, -1.0);

    platform.update(&tuning);
    assert!(platform.position.x < 21.0);
}

#[test]
fn non_moving_platforms_stay_put() {
    let tuning = JumpTuning::default();
    let mut platform = Platform::new(Vec2::new(5.0, 10.0), PlatformKind::Normal);
    platform.update(&tuning);
    assert_eq!(platform.position.x, 5.0);
}

#[test]
fn camera_follows_up_but_never_back_down() {
    let mut world = empty_world(5);
    world.player.position.y = 3.0;
    world.tick();

    let scrolled = world.camera_offset;
    assert!(scrolled < 0.0);

    // Player drops well below the follow threshold; the camera holds.
    world.player.position.y = 20.0;
    world.player.velocity.y = 0.0;
    world.tick();
    assert_eq!(world.camera_offset, scrolled);
}

#[test]
fn platforms_recycle_behind_the_camera_and_spawn_ahead() {
    let mut world = empty_world(6);
    world
        .platforms
        .push(Platform::new(Vec2::new(5.0, -5.0), PlatformKind::Normal));
    world
        .platforms
        .push(Platform::new(Vec2::new(5.0, 31.0), PlatformKind::Normal));
    world.player.position.y = 10.0;

    world.tick();

    // The platform below the view is gone; a new one spawned above the
    // highest survivor at a randomized offset.
    assert_eq!(world.platforms.len(), 2);
    assert!(world.platforms.iter().all(|p| p.position.y <= 30.0));
    assert!(
        world
            .platforms
            .iter()
            .any(|p| p.position.y <= -8.0 && p.position.y > -12.0)
    );
}

#[test]
fn falling_out_of_view_ends_the_run() {
    let mut world = empty_world(7);
    world.player.position.y = 31.0;
    assert!(!world.tick());
    assert!(world.player_lost());
}

#[test]
fn reset_reseeds_the_world() {
    let mut world = world_with_seed(8);
    world.player.position = Vec2::new(1.0, 1.0);
    world.camera_offset = -40.0;

    world.reset();

    assert_eq!(world.player.position, Vec2::new(12.0, 15.0));
    assert_eq!(world.camera_offset, 0.0);
    assert_eq!(world.platforms.len(), 8);
    // The guaranteed starter platform sits right under the spawn point.
    assert_eq!(world.platforms[0].position, Vec2::new(10.0, 17.0));
    assert_eq!(world.platforms[0].kind, PlatformKind::Normal);
}

#[test]
fn horizontal_input_is_clamped() {
    let mut world = empty_world(9);
    world.set_horizontal_input(5.0);
    assert_eq!(world.player.velocity.x, 2.0);
    world.set_horizontal_input(-5.0);
    assert_eq!(world.player.velocity.x, -2.0);
    world.set_horizontal_input(0.3);
    assert_eq!(world.player.velocity.x, 0.3);
}
