// game_engine.rs

use rand::rngs::ThreadRng;
use rand::Rng;
use ratatui::Frame;
use std::io;

use super::{
    engine::Engine,
    game_model::{word_list::WordList, GameModel},
    input::GameInput,
};

/// Owns the single in-flight round and the only legal ways to mutate it.
/// The random source is a type parameter so tests can seed their own.
pub struct GameEngine<R: Rng = ThreadRng> {
    pub game_model: GameModel,
    word_list: WordList,
    rng: R,
}

impl GameEngine {
    pub fn new(word_list: WordList) -> GameEngine {
        GameEngine::with_rng(word_list, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(word_list: WordList, mut rng: R) -> GameEngine<R> {
        let game_model = GameModel::new(word_list.choose(&mut rng));
        GameEngine {
            game_model,
            word_list,
            rng,
        }
    }

    /// Discards the current round and starts a fresh one.
    pub fn reset(&mut self) {
        self.game_model = GameModel::new(self.word_list.choose(&mut self.rng));
    }
}

impl<R: Rng> Engine for GameEngine<R> {
    fn tick(&mut self, user_input: Option<GameInput>) -> io::Result<bool> {
        let mut should_quit = false;
        match user_input {
            Some(GameInput::Quit) => should_quit = true,
            Some(GameInput::NewGame) => self.reset(),
            Some(user_input) => self.game_model.handle_input(user_input),
            _ => {}
        }
        Ok(should_quit)
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(&self.game_model, frame.size());
    }
}
