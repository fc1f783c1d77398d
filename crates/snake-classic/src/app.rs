use anyhow::Result;

use snake_rules::{GameState, TickInput, BOARD_HEIGHT, BOARD_WIDTH};

use crate::input::{Action, InputHandler};
use crate::post::PostProcess;
use crate::render::Renderer;

/// Owns the game state and the render resources; one `tick` per host frame.
pub struct App {
    game: GameState,
    post: PostProcess,
    quit: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let post = PostProcess::new(BOARD_WIDTH as f32, BOARD_HEIGHT as f32)?;
        let seed = macroquad::miniquad::date::now() as u64;
        log::info!("snake-classic starting (seed {seed})");

        Ok(Self {
            game: GameState::new(seed),
            post,
            quit: false,
        })
    }

    pub fn tick(&mut self) {
        let mut input = TickInput::default();
        for action in InputHandler::poll() {
            match action {
                Action::Turn(direction) => input.turns.push(direction),
                Action::TogglePause => input.toggle_pause = true,
                Action::Restart => input.restart = true,
                Action::Quit => self.quit = true,
            }
        }

        self.game.tick(&input);
        self.render();
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn render(&self) {
        self.post.begin();
        Renderer::draw_frame(&self.game);
        self.post.finish();
    }
}
