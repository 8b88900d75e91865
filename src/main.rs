use std::{
    io::{stdout, Stdout},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use blockfall::constants::FRAME_POLL;
use blockfall::game::{Game, GameState};
use blockfall::input::handle_input;
use blockfall::ui::ui;

enum Outcome {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal);

    // Always restore the terminal before reporting anything.
    let _ = terminal::disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Outcome::GameOver = outcome? {
        println!("Game over");
    }
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<Outcome> {
    let mut game = Game::new();

    // Game loop
    loop {
        // Render
        terminal.draw(|f| ui(f, &game))?;

        // The final frame with the overlay is on screen; hold it until the
        // player acknowledges.
        if game.state == GameState::GameOver {
            wait_for_key()?;
            return Ok(Outcome::GameOver);
        }

        // Handle input
        if event::poll(Duration::from_millis(FRAME_POLL))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        if kind == KeyEventKind::Press {
                            return Ok(Outcome::Quit);
                        }
                    }
                    _ => handle_input(&mut game, code, kind),
                }
            }
        }

        // Update game state
        game.update();
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
