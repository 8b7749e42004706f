//! Interactive Klondike
//!
//! Deals a game (optionally from a fixed seed) and plays it at the terminal.

use clap::Parser;
use klondike::cli::Args;
use klondike::cli::Human;
use klondike::play::engine::Solitaire;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    klondike::log(args.level());
    let mut human = Human::from(Solitaire::with_config(args.config(), args.seed));
    human.play()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(human.game().state())?);
    }
    Ok(())
}
