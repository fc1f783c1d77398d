mod app;
mod input;
mod post;
mod render;

use macroquad::prelude::*;

use snake_rules::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "classic game: snake".to_owned(),
        window_width: BOARD_WIDTH,
        window_height: BOARD_HEIGHT,
        ..Default::default()
    }
}

fn init_logging() {
    // RUST_LOG overrides the info default; on web the log facade stays a no-op
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();

    let mut app = match App::new() {
        Ok(app) => app,
        Err(err) => {
            log::error!("startup failed: {err:#}");
            return;
        }
    };

    loop {
        app.tick();
        if app.quit_requested() {
            break;
        }
        next_frame().await;
    }
}
