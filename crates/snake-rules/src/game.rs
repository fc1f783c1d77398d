use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::types::{
    Direction, Food, Point, Segment, TickInput, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE,
    MAX_SEGMENTS, MOVE_EVERY, START_SEGMENTS,
};

/// Snake rules engine: a fixed-capacity segment arena advanced once per
/// host frame, with movement gated to every `MOVE_EVERY`-th frame.
#[derive(Debug, Clone)]
pub struct GameState {
    frames: u32,
    game_over: bool,
    paused: bool,
    segments: [Segment; MAX_SEGMENTS],
    history: [Point; MAX_SEGMENTS],
    len: usize,
    turn_armed: bool,
    offset: Point,
    food: Food,
    rng: ChaCha8Rng,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            frames: 0,
            game_over: false,
            paused: false,
            segments: [Segment::default(); MAX_SEGMENTS],
            history: [Point::default(); MAX_SEGMENTS],
            len: 0,
            turn_armed: false,
            offset: Point::default(),
            food: Food::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    pub fn reset(&mut self) {
        self.frames = 0;
        self.game_over = false;
        self.paused = false;
        self.len = START_SEGMENTS;
        self.turn_armed = false;
        self.offset = Point::new(BOARD_WIDTH % CELL_SIZE, BOARD_HEIGHT % CELL_SIZE);

        let origin = self.origin();
        let cell = Point::new(CELL_SIZE, CELL_SIZE);
        for segment in self.segments.iter_mut() {
            *segment = Segment {
                position: origin,
                size: cell,
                velocity: Point::new(CELL_SIZE, 0),
            };
        }
        self.history = [Point::default(); MAX_SEGMENTS];

        self.food = Food {
            position: Point::default(),
            size: cell,
            active: false,
        };
    }

    pub fn tick(&mut self, input: &TickInput) {
        if self.game_over {
            if input.restart {
                self.reset();
            }
            return;
        }

        if input.toggle_pause {
            self.paused = !self.paused;
        }
        if self.paused {
            return;
        }

        for &direction in &input.turns {
            self.try_turn(direction);
        }

        for i in 0..self.len {
            self.history[i] = self.segments[i].position;
        }

        if self.frames % MOVE_EVERY == 0 {
            let head = &mut self.segments[0];
            head.position.x += head.velocity.x;
            head.position.y += head.velocity.y;
            self.turn_armed = true;
            for i in 1..self.len {
                self.segments[i].position = self.history[i - 1];
            }
        }

        let head = self.segments[0];
        let max_x = BOARD_WIDTH - self.offset.x;
        let max_y = BOARD_HEIGHT - self.offset.y;
        if head.position.x < 0
            || head.position.y < 0
            || head.position.x > max_x
            || head.position.y > max_y
        {
            self.game_over = true;
        }
        for i in 1..self.len {
            if self.segments[i].position == head.position {
                self.game_over = true;
                break;
            }
        }

        if !self.food.active {
            self.food.position = self.spawn_food();
            self.food.active = true;
        }

        if overlaps(head.position, head.size, self.food.position, self.food.size) {
            if self.len < MAX_SEGMENTS {
                self.segments[self.len].position = self.history[self.len - 1];
                self.len += 1;
            }
            self.food.active = false;
        }

        self.frames = self.frames.wrapping_add(1);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Top-left corner of the playable grid (half the alignment offset).
    pub fn origin(&self) -> Point {
        Point::new(self.offset.x / 2, self.offset.y / 2)
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn turn_armed(&self) -> bool {
        self.turn_armed
    }

    pub fn debug_set_segments(&mut self, positions: &[Point], heading: Direction) {
        assert!(!positions.is_empty() && positions.len() <= MAX_SEGMENTS);
        self.len = positions.len();
        for (segment, &position) in self.segments.iter_mut().zip(positions) {
            segment.position = position;
        }
        self.segments[0].velocity = heading.velocity();
        self.turn_armed = true;
        self.game_over = false;
    }

    pub fn debug_set_food(&mut self, position: Point) {
        self.food.position = position;
        self.food.active = true;
    }

    // A turn is accepted only while armed, and only onto the axis the head
    // is not currently moving along. Rejections leave the flag armed.
    fn try_turn(&mut self, direction: Direction) {
        if !self.turn_armed {
            return;
        }
        let head = &mut self.segments[0];
        let blocked = if direction.is_horizontal() {
            head.velocity.x != 0
        } else {
            head.velocity.y != 0
        };
        if blocked {
            return;
        }
        head.velocity = direction.velocity();
        self.turn_armed = false;
    }

    // Rejection sampling: re-roll while the candidate lands on the snake.
    // The board has more cells than the snake can ever occupy.
    fn spawn_food(&mut self) -> Point {
        let cols = BOARD_WIDTH / CELL_SIZE;
        let rows = BOARD_HEIGHT / CELL_SIZE;
        let origin = self.origin();
        loop {
            let candidate = Point::new(
                self.rng.gen_range(0..cols) * CELL_SIZE + origin.x,
                self.rng.gen_range(0..rows) * CELL_SIZE + origin.y,
            );
            let occupied = self.segments[..self.len]
                .iter()
                .any(|segment| segment.position == candidate);
            if !occupied {
                return candidate;
            }
        }
    }
}

fn overlaps(a: Point, a_size: Point, b: Point, b_size: Point) -> bool {
    a.x < b.x + b_size.x
        && a.x + a_size.x > b.x
        && a.y < b.y + b_size.y
        && a.y + a_size.y > b.y
}
