use crate::play::config::Config;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Klondike solitaire in the terminal", long_about = None)]
pub struct Args {
    #[arg(long, help = "Replay the deal for this seed")]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = crate::DRAW, value_parser = draw, help = "Cards turned per tap of the stock (1 or 3)")]
    pub draw: usize,
    #[arg(long, help = "Print the final state as JSON on exit")]
    pub json: bool,
    #[arg(short, long, help = "Log every accepted action")]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::default().with_draw(self.draw)
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }
}

fn draw(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n @ (1 | 3)) => Ok(n),
        Ok(n) => Err(format!("draw {} is not one of 1, 3", n)),
        Err(e) => Err(e.to_string()),
    }
}
