/// One game of Klondike and everything needed to play it.
///
/// The engine owns its state outright. Callers propose actions and
/// read back the resulting [`State`]; every accepted mutation is
/// preceded by a snapshot so it can be undone exactly. Rejected
/// proposals leave the state untouched.
///
/// All operations run to completion synchronously. There is exactly
/// one writer: whoever holds `&mut Solitaire`.
#[derive(Debug, Clone)]
pub struct Solitaire {
    seed: Option<u64>,
    config: Config,
    origin: Layout,
    state: State,
    history: History,
    clock: Clock,
}

impl Solitaire {
    /// Shuffle and deal a fresh game under default rules. Without a seed
    /// one is drawn at random, and kept so the deal can be replayed.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(Config::default(), seed)
    }
    pub fn with_config(config: Config, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let layout = Layout::deal(Deck::new().shuffled(rng));
        log::info!("new game  seed {}  draw {}", seed, config.draw());
        Self {
            seed: Some(seed),
            ..Self::staged(config, layout)
        }
    }
    /// Start from a hand-built position instead of a shuffled deal.
    pub fn staged(config: Config, layout: Layout) -> Self {
        assert!(layout.is_consistent(), "inconsistent layout:\n{}", layout);
        Self {
            seed: None,
            config,
            origin: layout.clone(),
            state: State::from(layout),
            history: History::default(),
            clock: Clock::from(config.interval()),
        }
    }

    /// Move `cards`, which must be the liftable top of `from`, onto `to`.
    pub fn propose(&mut self, cards: &[Card], from: Pile, to: Pile) -> Result<&State, Rejection> {
        if !self.state.layout().selects(cards, from) {
            log::trace!("invalid selection from {}", from);
            return Err(Rejection::InvalidSelection);
        }
        if self.state.is_won() || !self.state.layout().allows(cards, from, to) {
            log::trace!("illegal move {} -> {}", from, to);
            return Err(Rejection::IllegalMove);
        }
        let lifted = self.state.layout().cards(from);
        let lifted = lifted[lifted.len() - cards.len()..].to_vec();
        Ok(self.commit(Move::new(lifted, from, to)))
    }
    /// Replay a move, typically one picked from [`Solitaire::legal`].
    pub fn perform(&mut self, mv: &Move) -> Result<&State, Rejection> {
        self.propose(mv.cards(), mv.source(), mv.target())
    }
    /// Send the top card of a pile to its own suit's foundation.
    pub fn send(&mut self, from: Pile) -> Result<&State, Rejection> {
        if !from.exists() {
            return Err(Rejection::InvalidSelection);
        }
        let card = *self
            .state
            .layout()
            .top(from)
            .ok_or(Rejection::InvalidSelection)?;
        self.propose(&[card], from, Pile::Foundation(card.suit()))
    }

    /// Tap the stock: deal onto the waste, or recycle the waste when
    /// the stock has run out. Does nothing once both are empty or the
    /// game is won.
    pub fn deal(&mut self) -> &State {
        if self.state.is_won() || !self.state.layout().can_turn() {
            log::trace!("nothing to deal");
            return &self.state;
        }
        self.history.push(&self.state);
        match self.state.turn(self.config.draw()) {
            Turn::Dealt(n) => log::debug!("dealt {} to waste", n),
            Turn::Recycled(n) => log::debug!("recycled {} into stock, pass {}", n, self.state.passes()),
            Turn::Idle => unreachable!("checked can_turn"),
        }
        self.check();
        &self.state
    }

    /// Restore the state from before the last accepted action.
    pub fn undo(&mut self) -> Result<&State, Rejection> {
        match self.history.pop() {
            Some(state) => {
                self.state = state;
                log::debug!("undo, {} left", self.history.depth());
                self.check();
                Ok(&self.state)
            }
            None => {
                log::trace!("nothing to undo");
                Err(Rejection::EmptyHistory)
            }
        }
    }

    /// One second of play. Every `interval` seconds costs points.
    /// The clock stops once the game is won.
    pub fn tick(&mut self) -> &State {
        if !self.state.is_won() && self.clock.tick() {
            self.state.penalize();
            log::trace!("time penalty at {}s", self.clock.elapsed());
        }
        &self.state
    }

    /// Back to the opening deal, forgetting all history.
    pub fn restart(&mut self) -> &State {
        self.state = State::from(self.origin.clone());
        self.history.clear();
        self.clock.reset();
        log::info!("restart");
        &self.state
    }

    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn layout(&self) -> &Layout {
        self.state.layout()
    }
    pub fn score(&self) -> Score {
        self.state.score()
    }
    pub fn points(&self) -> Points {
        self.state.score().points()
    }
    pub fn moves(&self) -> usize {
        self.state.score().moves()
    }
    pub fn passes(&self) -> usize {
        self.state.passes()
    }
    pub fn elapsed(&self) -> u64 {
        self.clock.elapsed()
    }
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn config(&self) -> Config {
        self.config
    }
    /// how many actions can still be undone
    pub fn undoable(&self) -> usize {
        self.history.depth()
    }
    /// every move that would be accepted right now
    pub fn legal(&self) -> Vec<Move> {
        match self.state.is_won() {
            true => Vec::new(),
            false => self.state.layout().legal(),
        }
    }

    fn commit(&mut self, mv: Move) -> &State {
        self.history.push(&self.state);
        let won = self.state.relocate(&mv);
        log::debug!("{:<24} {}", mv.to_string(), self.state.score());
        if won {
            log::info!("won in {} moves, {} points", self.moves(), self.points());
        }
        self.check();
        &self.state
    }
    fn check(&self) {
        debug_assert!(
            self.state.layout().is_consistent(),
            "broken invariant:\n{}",
            self.state
        );
    }
}

use super::clock::Clock;
use super::config::Config;
use super::history::History;
use super::rejection::Rejection;
use super::state::State;
use crate::Points;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::piles::layout::Layout;
use crate::piles::pile::Pile;
use crate::rules::action::Move;
use crate::rules::recycle::Turn;
use crate::rules::score::Score;
use rand::SeedableRng;
use rand::rngs::SmallRng;
