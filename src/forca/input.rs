use std::io::{self};

use crossterm::event::{self, Event, KeyCode};

#[derive(Clone, Debug)]
pub enum GameInput {
    Guess(char),
    NewGame,
    Quit,
}

// Every letter key is a guess, so quitting is Esc only and Enter restarts.
pub fn handle_events() -> io::Result<Option<GameInput>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Esc {
                return Ok(Some(GameInput::Quit));
            } else if key.code == KeyCode::Enter {
                return Ok(Some(GameInput::NewGame));
            } else if let KeyCode::Char(c) = key.code {
                if c.is_ascii_alphabetic() {
                    return Ok(Some(GameInput::Guess(c.to_ascii_uppercase())));
                }
            }
        }
    }
    Ok(None)
}
