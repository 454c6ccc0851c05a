//! Terminal front end for the engine.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use timeline_tictactoe::GameEngine;
use tracing::{info, instrument};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip(engine), fields(side = engine.side()))]
pub fn run(engine: GameEngine) -> Result<()> {
    info!("Starting terminal front end");

    guarded(
        || Ok(enable_raw_mode()?),
        || {
            guarded(
                || Ok(execute!(io::stdout(), EnterAlternateScreen)?),
                || {
                    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
                    let res = run_app(&mut terminal, App::new(engine));
                    terminal.show_cursor()?;
                    res
                },
                || Ok(execute!(io::stdout(), LeaveAlternateScreen)?),
            )
        },
        || Ok(disable_raw_mode()?),
    )
}

/// Runs `body` between `enter` and `leave`.
///
/// `leave` runs whenever `enter` succeeded, even if `body` fails. An
/// error from `body` takes precedence over one from `leave`.
fn guarded<T>(
    enter: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> Result<()>,
) -> Result<T> {
    enter()?;
    let res = body();
    let left = leave();
    let value = res?;
    left?;
    Ok(value)
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!(moves = app.engine().history().len() - 1, "Leaving");
    Ok(())
}
