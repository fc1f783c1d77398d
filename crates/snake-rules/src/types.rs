use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: i32 = 640;
pub const BOARD_HEIGHT: i32 = 640;
pub const CELL_SIZE: i32 = 31;
pub const MAX_SEGMENTS: usize = 256;
pub const START_SEGMENTS: usize = 32;
pub const MOVE_EVERY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn velocity(self) -> Point {
        match self {
            Self::Up => Point::new(0, -CELL_SIZE),
            Self::Down => Point::new(0, CELL_SIZE),
            Self::Left => Point::new(-CELL_SIZE, 0),
            Self::Right => Point::new(CELL_SIZE, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Segment {
    pub position: Point,
    pub size: Point,
    pub velocity: Point,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Food {
    pub position: Point,
    pub size: Point,
    pub active: bool,
}

/// Edge events collected by the frontend for one tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub turns: Vec<Direction>,
    pub toggle_pause: bool,
    pub restart: bool,
}

impl TickInput {
    pub fn turn(direction: Direction) -> Self {
        Self {
            turns: vec![direction],
            ..Default::default()
        }
    }
}
