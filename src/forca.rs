mod engine;
mod game_engine;
mod game_model;
mod input;
mod render_engine;

use input::handle_events;

use crate::ForcaArgs;

use self::{
    engine::Engine, game_engine::GameEngine, game_model::word_list::WordList,
    render_engine::RenderEngine,
};
use std::io;

pub fn game_loop(game_args: ForcaArgs) -> io::Result<()> {
    // Resolve the word list before touching the terminal so a bad
    // configuration aborts with a readable diagnostic.
    let word_list = match game_args.words {
        Some(path) => WordList::load(&path)?,
        None => WordList::builtin(),
    };

    let mut render_engine = RenderEngine::init_render_engine()?;
    let mut should_quit = false;

    let mut game_engine = GameEngine::new(word_list);
    while !should_quit {
        // rendering
        render_engine.render(|frame| game_engine.render_frame(frame))?;
        // tick
        let user_input = handle_events()?;
        should_quit = game_engine.tick(user_input)?;
    }
    render_engine.deinit_render_engine()?;
    Ok(())
}
