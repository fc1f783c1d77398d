use macroquad::prelude::*;

use snake_rules::{GameState, BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE};

/// Immediate-mode drawing of one frame of game state.
pub struct Renderer;

impl Renderer {
    const BG_COLOR: Color = Color::new(0.02, 0.024, 0.031, 1.0);
    const GRID_LINE: Color = Color::new(0.157, 0.173, 0.188, 1.0);
    const SNAKE_HEAD: Color = Color::new(0.471, 0.863, 0.471, 1.0);
    const SNAKE_BODY: Color = Color::new(0.314, 0.706, 0.353, 1.0);
    const FOOD_COLOR: Color = Color::new(0.922, 0.345, 0.345, 1.0);
    const TEXT_FG: Color = Color::new(0.863, 0.863, 0.863, 1.0);
    const TEXT_MUTED: Color = Color::new(0.55, 0.55, 0.6, 1.0);

    pub fn draw_frame(game: &GameState) {
        clear_background(Self::BG_COLOR);

        if game.is_game_over() {
            Self::draw_centered(
                "PRESS [ENTER] TO PLAY AGAIN",
                BOARD_HEIGHT as f32 * 0.5 - 50.0,
                20.0,
                Self::TEXT_FG,
            );
            return;
        }

        Self::draw_grid(game);

        // food
        let food = game.food();
        if food.active {
            draw_rectangle(
                food.position.x as f32,
                food.position.y as f32,
                food.size.x as f32,
                food.size.y as f32,
                Self::FOOD_COLOR,
            );
        }

        // snake
        for (i, segment) in game.segments().iter().enumerate() {
            let color = if i == 0 {
                Self::SNAKE_HEAD
            } else {
                Self::SNAKE_BODY
            };
            draw_rectangle(
                segment.position.x as f32,
                segment.position.y as f32,
                segment.size.x as f32,
                segment.size.y as f32,
                color,
            );
        }

        let hud = format!("LENGTH {}", game.segments().len());
        draw_text(&hud, 12.0, 24.0, 20.0, Self::TEXT_MUTED);

        if game.is_paused() {
            Self::draw_centered(
                "GAME PAUSED",
                BOARD_HEIGHT as f32 * 0.5 - 40.0,
                40.0,
                Self::TEXT_FG,
            );
        }
    }

    fn draw_grid(game: &GameState) {
        let origin = game.origin();
        let (ox, oy) = (origin.x as f32, origin.y as f32);
        let width = BOARD_WIDTH as f32;
        let height = BOARD_HEIGHT as f32;
        let cell = CELL_SIZE as f32;

        for i in 0..=(BOARD_WIDTH / CELL_SIZE) {
            let x = ox + cell * i as f32;
            draw_line(x, oy, x, height - oy, 1.0, Self::GRID_LINE);
        }
        for i in 0..=(BOARD_HEIGHT / CELL_SIZE) {
            let y = oy + cell * i as f32;
            draw_line(ox, y, width - ox, y, 1.0, Self::GRID_LINE);
        }
    }

    fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        draw_text(text, (BOARD_WIDTH as f32 - dims.width) * 0.5, y, font_size, color);
    }
}
