//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for mouse input and the framebuffer-based renderer.
//! Configuration comes from `MEMORY_*` environment variables; log output goes
//! to `MEMORY_LOG_PATH` when set, so it never lands on the game screen.

use std::fs::OpenOptions;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_memory::core::{Flow, FrameLimiter, Game, GameConfig, RenderContext};
use tui_memory::input::poll_events;
use tui_memory::term::{TermCanvas, Viewport};
use tui_memory::types::InputEvent;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid game configuration")?;

    let mut limiter = FrameLimiter::new(config.fps);
    let (columns, rows) = (config.board_width, config.board_height);
    let mut game = Game::new(config, StdRng::from_entropy())?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut canvas = TermCanvas::new(Viewport::new(w, h), columns, rows);
    canvas.enter()?;

    let result = run(&mut game, &mut canvas, &mut limiter);

    // Always try to restore terminal state.
    let _ = canvas.exit();
    info!("exiting after {} rounds", game.rounds_won());
    result
}

fn run(game: &mut Game, canvas: &mut TermCanvas, limiter: &mut FrameLimiter) -> Result<()> {
    game.start_round(&mut RenderContext::new(canvas, limiter))?;

    loop {
        let events = poll_events(Duration::ZERO)?;
        for event in &events {
            if let InputEvent::Resize { width, height } = *event {
                canvas.resize(width, height);
            }
        }

        let mut ctx = RenderContext::new(canvas, limiter);
        if game.frame(&mut ctx, &events)? == Flow::Quit {
            return Ok(());
        }
    }
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("MEMORY_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
