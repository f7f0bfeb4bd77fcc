use glyph_games::domain::board::{self, Direction, Point};
use glyph_games::domain::snake::{SnakeWorld, StepOutcome};
use glyph_games::domain::tuning::SnakeTuning;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

fn world_with_seed(seed: u64) -> SnakeWorld {
    SnakeWorld::new(SnakeTuning::default(), SmallRng::seed_from_u64(seed))
}

#[test]
fn fresh_world_runs_through_the_middle_heading_right() {
    let world = world_with_seed(1);
    assert_eq!(world.body.len(), 5);
    assert_eq!(world.head(), Point::new(14, 12));
    assert_eq!(world.direction, Direction::Right);
    assert!(world.food.inside_circle());
    assert!(!world.body.contains(&world.food));
}

#[test]
fn reversing_direction_is_a_no_op() {
    let mut world = world_with_seed(2);
    world.queue_direction(Direction::Left);
    assert_eq!(world.pending_direction, None);

    // Queuing the current direction is equally pointless.
    world.queue_direction(Direction::Right);
    assert_eq!(world.pending_direction, None);

    // A perpendicular turn is accepted, and reversing the pending turn is
    // then rejected against the pending one.
    world.queue_direction(Direction::Up);
    assert_eq!(world.pending_direction, Some(Direction::Up));
    world.queue_direction(Direction::Down);
    assert_eq!(world.pending_direction, Some(Direction::Up));
}

#[test]
fn queued_direction_applies_on_the_next_step() {
    let mut world = world_with_seed(3);
    // Keep the food out of the way so the move is a plain slide.
    world.food = Point::new(5, 5);
    let head = world.head();

    world.queue_direction(Direction::Up);
    let outcome = world.step();

    assert_eq!(outcome, StepOutcome::Moved);
    assert_eq!(world.direction, Direction::Up);
    assert_eq!(world.pending_direction, None);
    assert_eq!(world.head(), Point::new(head.x, head.y - 1));
    assert_eq!(world.body.len(), 5);
}

#[test]
fn eating_grows_by_exactly_one_and_relocates_the_food() {
    let mut world = world_with_seed(4);
    world.food = Point::new(15, 12); // right in front of the head

    let outcome = world.step();

    assert_eq!(outcome, StepOutcome::Ate);
    assert_eq!(world.body.len(), 6);
    assert_eq!(world.head(), Point::new(15, 12));
    // The new food is on an open in-circle cell.
    assert!(world.food.inside_circle());
    assert!(!world.body.contains(&world.food));
}

#[test]
fn biting_the_body_ends_the_run() {
    let mut world = world_with_seed(5);
    world.body.clear();
    for point in [
        Point::new(10, 12),
        Point::new(10, 11),
        Point::new(11, 11),
        Point::new(11, 12),
    ] {
        world.body.push_back(point);
    }
    world.direction = Direction::Right;
    world.pending_direction = None;
    world.food = Point::new(5, 5);

    assert_eq!(world.step(), StepOutcome::Collided);
}

#[test]
fn wraparound_always_lands_inside_the_circle() {
    // Every in-circle cell, moved in every direction, resolves to another
    // in-circle cell.
    for y in 0..25 {
        for x in 0..25 {
            let point = Point::new(x, y);
            if !point.inside_circle() {
                continue;
            }
            for direction in [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ] {
                let resolved = board::wrap_within_circle(direction.step(point), direction);
                assert!(
                    resolved.inside_circle(),
                    "{point:?} moving {direction:?} resolved to {resolved:?}"
                );
            }
        }
    }
}

#[test]
fn row_wrap_respects_the_chord_not_the_square() {
    // Row 2 is a short chord: its leftmost valid column is well inside the
    // square. Walking off its right end must wrap to that chord's left
    // bound, not to column 0.
    let bounds = board::row_bounds(2);
    assert!(bounds.min > 0);

    let start = Point::new(bounds.max, 2);
    let resolved = board::wrap_within_circle(Direction::Right.step(start), Direction::Right);
    assert_eq!(resolved, Point::new(bounds.min, 2));
}

#[test]
fn square_edge_wrap_comes_back_on_the_full_row() {
    // The middle row spans the whole grid, so leaving the square on the
    // right re-enters at column zero.
    let start = Point::new(24, 12);
    let resolved = board::wrap_within_circle(Direction::Right.step(start), Direction::Right);
    assert_eq!(resolved, Point::new(0, 12));
}

#[test]
fn speed_ramp_shrinks_with_score_down_to_a_floor() {
    let tuning = SnakeTuning::default();
    assert_eq!(tuning.update_delay(0), Duration::from_millis(180));
    assert_eq!(tuning.update_delay(50), Duration::from_millis(170));
    // The bonus caps out; the delay never drops below the floor.
    let floor = tuning.update_delay(u32::MAX);
    assert_eq!(floor, Duration::from_millis(100));
    assert!(floor >= tuning.min_update_delay);

    let mut previous = tuning.update_delay(0);
    for score in (0..500).step_by(10) {
        let delay = tuning.update_delay(score);
        assert!(delay <= previous);
        previous = delay;
    }
}

#[test]
fn reset_restores_the_starting_body() {
    let mut world = world_with_seed(6);
    world.food = Point::new(15, 12);
    world.step();
    world.queue_direction(Direction::Down);
    world.step();

    world.reset();

    assert_eq!(world.body.len(), 5);
    assert_eq!(world.head(), Point::new(14, 12));
    assert_eq!(world.direction, Direction::Right);
    assert_eq!(world.pending_direction, None);
}
