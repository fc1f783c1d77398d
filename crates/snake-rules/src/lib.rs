pub mod game;
pub mod types;

pub use game::GameState;
pub use types::{
    Direction, Food, Point, Segment, TickInput, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE,
    MAX_SEGMENTS, MOVE_EVERY, START_SEGMENTS,
};
