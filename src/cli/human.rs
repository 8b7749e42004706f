/// A person at the keyboard, driving one game through terminal prompts.
///
/// Wall-clock seconds are fed to the engine as ticks whenever the
/// player comes back from a prompt.
pub struct Human {
    game: Solitaire,
    started: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Deal,
    Move,
    Hint,
    Send,
    Undo,
    Restart,
    Quit,
}

impl Command {
    const ALL: [Self; 7] = [
        Self::Deal,
        Self::Move,
        Self::Hint,
        Self::Send,
        Self::Undo,
        Self::Restart,
        Self::Quit,
    ];
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Deal => write!(f, "Deal"),
            Self::Move => write!(f, "Move"),
            Self::Hint => write!(f, "Pick a legal move"),
            Self::Send => write!(f, "Send to foundation"),
            Self::Undo => write!(f, "Undo"),
            Self::Restart => write!(f, "Restart"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}

impl From<Solitaire> for Human {
    fn from(game: Solitaire) -> Self {
        Self {
            game,
            started: Instant::now(),
        }
    }
}

impl Human {
    pub fn game(&self) -> &Solitaire {
        &self.game
    }

    pub fn play(&mut self) -> anyhow::Result<()> {
        loop {
            self.clock();
            println!("\n{}", self.board());
            if self.game.is_won() {
                let banner = format!(
                    "WON in {} moves with {} points",
                    self.game.moves(),
                    self.game.points()
                );
                println!("{}", banner.green().bold());
            }
            let choice = Select::new()
                .with_prompt("action")
                .report(false)
                .items(&Command::ALL)
                .default(0)
                .interact()?;
            self.clock();
            let result = match Command::ALL[choice] {
                Command::Deal => {
                    self.game.deal();
                    Ok(())
                }
                Command::Move => self.relocate()?,
                Command::Hint => self.hint()?,
                Command::Send => self.send()?,
                Command::Undo => self.game.undo().map(|_| ()),
                Command::Restart => {
                    self.game.restart();
                    self.started = Instant::now();
                    Ok(())
                }
                Command::Quit => return Ok(()),
            };
            if let Err(rejection) = result {
                println!("{}", rejection.to_string().red());
            }
        }
    }

    /// catch the engine clock up with the wall clock
    fn clock(&mut self) {
        let due = self.started.elapsed().as_secs();
        for _ in self.game.elapsed()..due {
            self.game.tick();
        }
    }

    fn relocate(&mut self) -> anyhow::Result<Result<(), Rejection>> {
        let line = Input::<String>::new()
            .with_prompt("from to [count]  e.g. t3 t5 2, w f♥")
            .report(false)
            .validate_with(|s: &String| -> Result<(), String> { parse(s).map(|_| ()) })
            .interact_text()?;
        let (from, to, count) = parse(&line).map_err(anyhow::Error::msg)?;
        let cards = self.game.layout().cards(from);
        let cards = cards[cards.len().saturating_sub(count)..].to_vec();
        Ok(self.game.propose(&cards, from, to).map(|_| ()))
    }

    fn hint(&mut self) -> anyhow::Result<Result<(), Rejection>> {
        let moves = self.game.legal();
        if moves.is_empty() {
            println!("{}", "no moves on the table".yellow());
            return Ok(Ok(()));
        }
        let choice = Select::new()
            .with_prompt("legal moves (esc to go back)")
            .report(false)
            .items(&moves)
            .default(0)
            .interact_opt()?;
        match choice {
            Some(i) => Ok(self.game.perform(&moves[i]).map(|_| ())),
            None => Ok(Ok(())),
        }
    }

    fn send(&mut self) -> anyhow::Result<Result<(), Rejection>> {
        let layout = self.game.layout();
        let sources = (0..crate::N_COLUMNS)
            .map(Pile::Tableau)
            .chain([Pile::Waste])
            .filter_map(|pile| layout.top(pile).map(|top| (pile, format!("{} {}", pile, top))))
            .collect::<Vec<(Pile, String)>>();
        if sources.is_empty() {
            println!("{}", "nothing to send".yellow());
            return Ok(Ok(()));
        }
        let labels = sources.iter().map(|(_, label)| label).collect::<Vec<&String>>();
        let choice = Select::new()
            .with_prompt("send from (esc to go back)")
            .report(false)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        match choice {
            Some(i) => Ok(self.game.send(sources[i].0).map(|_| ())),
            None => Ok(Ok(())),
        }
    }

    fn board(&self) -> String {
        let layout = self.game.layout();
        let draw = self.game.config().draw();
        let waste = layout.waste().cards();
        let shown = &waste[waste.len().saturating_sub(draw)..];
        let mut lines = Vec::new();
        lines.push(
            format!(
                "score {:<6} moves {:<6} time {:<6} passes {}",
                self.game.points(),
                self.game.moves(),
                format!("{}s", self.game.elapsed()),
                self.game.passes()
            )
            .dimmed()
            .to_string(),
        );
        lines.push(format!(
            "{} [{:>2}]   {} {}",
            Pile::Stock,
            layout.stock().len(),
            Pile::Waste,
            row(shown)
        ));
        lines.push(
            layout
                .foundations()
                .iter()
                .map(|foundation| {
                    let top = match foundation.top() {
                        Some(card) => paint(card),
                        None => "--".dimmed().to_string(),
                    };
                    format!("{} {}", Pile::Foundation(foundation.suit()), top)
                })
                .collect::<Vec<String>>()
                .join("   "),
        );
        for (i, column) in layout.columns().iter().enumerate() {
            lines.push(format!("{} {}", Pile::Tableau(i), row(column.cards())));
        }
        lines.join("\n")
    }
}

/// `from to [count]`, count defaulting to a single card
fn parse(line: &str) -> Result<(Pile, Pile, usize), String> {
    let words = line.split_whitespace().collect::<Vec<&str>>();
    let count = match words.get(2) {
        Some(n) => n.parse::<usize>().map_err(|e| format!("invalid count: {}", e))?,
        None => 1,
    };
    match words.as_slice() {
        [from, to] | [from, to, _] => Ok((Pile::try_from(*from)?, Pile::try_from(*to)?, count)),
        _ => Err(String::from("expected: from to [count]")),
    }
}

fn paint(card: &Card) -> String {
    match (card.is_up(), card.is_red()) {
        (false, _) => "##".dimmed().to_string(),
        (true, true) => card.to_string().red().to_string(),
        (true, false) => card.to_string().bold().to_string(),
    }
}

fn row(cards: &[Card]) -> String {
    cards.iter().map(paint).collect::<Vec<String>>().join(" ")
}

use crate::cards::card::Card;
use crate::piles::pile::Pile;
use crate::play::engine::Solitaire;
use crate::play::rejection::Rejection;
use colored::*;
use dialoguer::Input;
use dialoguer::Select;
use std::fmt::Display;
use std::fmt::Formatter;
use std::time::Instant;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::suit::Suit;

    #[test]
    fn parses_two_piles() {
        let parsed = parse("w f♥");
        assert!(parsed == Ok((Pile::Waste, Pile::Foundation(Suit::Heart), 1)));
    }

    #[test]
    fn parses_a_count() {
        let parsed = parse("t3 t5 2");
        assert!(parsed == Ok((Pile::Tableau(2), Pile::Tableau(4), 2)));
    }

    #[test]
    fn refuses_junk() {
        assert!(parse("").is_err());
        assert!(parse("t3").is_err());
        assert!(parse("t9 t1").is_err());
        assert!(parse("t1 t2 x").is_err());
        assert!(parse("t1 t2 3 4").is_err());
    }

    #[test]
    fn board_lists_every_column() {
        colored::control::set_override(false);
        let human = Human::from(Solitaire::new(Some(11)));
        let board = human.board();
        assert!(board.lines().count() == 3 + crate::N_COLUMNS);
        assert!(board.contains("S [24]"));
        assert!(board.contains("T7 ## ## ## ## ## ## "));
    }
}
