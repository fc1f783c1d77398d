use snake_rules::{
    Direction, GameState, Point, TickInput, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, MAX_SEGMENTS,
};

#[test]
fn spawned_food_is_grid_aligned_and_off_the_snake() {
    for seed in 0..32 {
        let mut state = GameState::new(seed);
        state.tick(&TickInput::default()); // first tick activates the food

        let food = state.food();
        let origin = state.origin();
        assert!(food.active);
        assert_eq!((food.position.x - origin.x) % CELL_SIZE, 0);
        assert_eq!((food.position.y - origin.y) % CELL_SIZE, 0);
        assert!(food.position.x >= origin.x && food.position.x < BOARD_WIDTH - origin.x);
        assert!(food.position.y >= origin.y && food.position.y < BOARD_HEIGHT - origin.y);
        assert!(state
            .segments()
            .iter()
            .all(|segment| segment.position != food.position));
    }
}

#[test]
fn eating_grows_by_one_and_deactivates_food_that_tick() {
    let mut state = GameState::new(100);
    state.tick(&TickInput::default());
    let len = state.segments().len();

    // drop the food one cell ahead of the head
    let head = state.head().position;
    state.debug_set_food(Point::new(head.x + CELL_SIZE, head.y));

    let mut grew = false;
    for _ in 0..10 {
        state.tick(&TickInput::default());
        if state.segments().len() > len {
            assert_eq!(state.segments().len(), len + 1);
            assert!(!state.food().active);
            grew = true;
            break;
        }
    }
    assert!(grew, "head should reach the food within two movement steps");

    // the replacement food must avoid the now-longer snake
    state.tick(&TickInput::default());
    let food = state.food();
    assert!(food.active);
    assert!(state
        .segments()
        .iter()
        .all(|segment| segment.position != food.position));
}

#[test]
fn length_saturates_at_capacity() {
    let mut state = GameState::new(101);

    // a full arena stacked on one cell, like the freshly spawned tail pile
    let pile = vec![Point::new(103, 103); MAX_SEGMENTS];
    state.debug_set_segments(&pile, Direction::Right);
    state.debug_set_food(Point::new(134, 103)); // where the head lands next

    state.tick(&TickInput::default());
    assert_eq!(state.segments().len(), MAX_SEGMENTS);
    assert!(!state.food().active);
}

#[test]
fn length_never_decreases() {
    let mut state = GameState::new(102);
    let mut previous = state.segments().len();

    for _ in 0..150 {
        state.tick(&TickInput::default());
        let len = state.segments().len();
        assert!(len >= previous, "snake length must never shrink");
        assert!(len <= MAX_SEGMENTS);
        previous = len;
        if state.is_game_over() {
            break;
        }
    }
}
