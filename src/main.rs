mod forca;

use std::{io, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(about)]
pub struct ForcaArgs {
    /// Replacement word list, one word per line (letters A-Z only)
    #[arg(long)]
    words: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = ForcaArgs::parse();
    forca::game_loop(args)
}
