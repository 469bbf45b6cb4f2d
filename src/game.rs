// src/game.rs
//! The `Game` aggregate: owns the seven tableaus, four foundations, stock and waste,
//! and is the only place allowed to mutate them. The input layer resolves a screen
//! point to a pile/index pair with `resolve_hit`, then goes through
//! `on_move_attempt` / `on_stock_click`; it never touches pile contents directly.

use std::collections::VecDeque;

use log::{debug, info};
use rand::{thread_rng, Rng};
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::pile::{Pile, PileKind};
use crate::components::position::Position;
use crate::config::layout::{
    FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, WASTE_POS_X, WASTE_POS_Y,
};
use crate::logic::deck::{create_standard_deck, shuffle_deck, ShufflePolicy};
use crate::logic::rules;
use crate::snapshot::GameSnapshot;

/// Identifies one of the persistent piles on the board.
/// The transient run carried during a move has no id: it only exists as an owned
/// `Vec<Card>` inside `on_move_attempt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Tableau(u8),
    Foundation(u8),
    Stock,
    Waste,
}

/// Result of a move attempt. `flipped_card` is the tableau card that was revealed
/// by the move, if any; the renderer wants to know so it can animate the flip.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub flipped_card: Option<Card>,
}

impl MoveOutcome {
    fn rejected() -> Self {
        Self { accepted: false, flipped_card: None }
    }
}

/// What a click on the stock actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// A card moved from stock to waste.
    Draw,
    /// The whole waste went back into the stock, face down.
    Recycle,
    /// Stock and waste were both empty; the click did nothing.
    Nothing,
}

/// Result of a stock click. `drawn_card` is set only for `StockAction::Draw`.
#[derive(Debug, Clone, PartialEq)]
pub struct StockOutcome {
    pub action: StockAction,
    pub drawn_card: Option<Card>,
}

/// Events pushed after each mutation, drained by the outside world.
/// The score/timer display subscribes to these; the engine itself has no score.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    MoveAccepted { origin: PileId, destination: PileId, cards_moved: usize },
    CardRevealed { pile: PileId, card: Card },
    CardDrawn { card: Card },
    WasteRecycled { cards_returned: usize },
    GameWon,
}

/// The whole game state. Created once per deal; all 52 cards live in these piles
/// at every moment (conservation is asserted after every accepted move).
#[derive(Debug, Clone)]
pub struct Game {
    tableaus: Vec<Pile>,
    foundations: Vec<Pile>,
    stock: Pile,
    waste: Pile,
    status: GameStatus,
    events: VecDeque<GameEvent>,
}

impl Game {
    /// Starts a new game: builds a 52-card deck, shuffles it with the chosen
    /// policy and deals the opening layout.
    pub fn new(policy: ShufflePolicy) -> Self {
        Self::new_with_rng(policy, &mut thread_rng())
    }

    /// Like `new`, but with a caller-supplied RNG so tests can replay a deal.
    pub fn new_with_rng(policy: ShufflePolicy, rng: &mut impl Rng) -> Self {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, policy, rng);

        let mut game = Self::empty();
        game.deal(deck);
        info!(
            "Game: dealt new game, stock {} cards, policy {:?}",
            game.stock.len(),
            policy
        );
        game
    }

    /// All piles present but empty. The deal (or a test) fills them in.
    fn empty() -> Self {
        let tableaus = (0..7u8)
            .map(|i| {
                Pile::new(
                    PileKind::Tableau(i),
                    Position::new(TABLEAU_START_X + f32::from(i) * TABLEAU_X_OFFSET, TABLEAU_START_Y),
                )
            })
            .collect();
        let foundations = (0..4u8)
            .map(|i| {
                Pile::new(
                    PileKind::Foundation(i),
                    Position::new(
                        FOUNDATION_START_X + f32::from(i) * FOUNDATION_X_OFFSET,
                        FOUNDATION_START_Y,
                    ),
                )
            })
            .collect();
        Self {
            tableaus,
            foundations,
            stock: Pile::new(PileKind::Stock, Position::new(STOCK_POS_X, STOCK_POS_Y)),
            waste: Pile::new(PileKind::Waste, Position::new(WASTE_POS_X, WASTE_POS_Y)),
            status: GameStatus::Playing,
            events: VecDeque::new(),
        }
    }

    /// Klondike opening layout: tableau `i` gets `i + 1` cards with only the last
    /// one face up, the remaining 24 stay in the stock face down.
    fn deal(&mut self, deck: Vec<Card>) {
        let mut cards = deck.into_iter();
        for i in 0..self.tableaus.len() {
            for j in 0..=i {
                // The deck always has enough cards here; a short deck is a bug in
                // `create_standard_deck`, not a runtime condition.
                if let Some(mut card) = cards.next() {
                    card.is_face_up = j == i;
                    self.tableaus[i].push(card);
                }
            }
        }
        for card in cards {
            self.stock.push(card);
        }
        debug_assert_eq!(self.total_cards(), 52);
    }

    /// Read access to a single pile.
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Tableau(i) => self.tableaus.get(usize::from(i)),
            PileId::Foundation(i) => self.foundations.get(usize::from(i)),
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Tableau(i) => self.tableaus.get_mut(usize::from(i)),
            PileId::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
        }
    }

    /// The sole mutating entry point for card moves.
    ///
    /// Lifts the run starting at `lift_index` out of `origin`, validates it against
    /// `destination`, and either applies the transfer or puts the run back exactly
    /// where it came from. All-or-nothing: a rejected move leaves no trace.
    pub fn on_move_attempt(
        &mut self,
        origin: PileId,
        lift_index: usize,
        destination: PileId,
    ) -> MoveOutcome {
        if origin == destination {
            debug!("Game: move onto the origin pile itself, treating as snap-back");
            return MoveOutcome::rejected();
        }

        let Some(origin_pile) = self.pile(origin) else {
            return MoveOutcome::rejected();
        };
        // What may be lifted depends on where from: never from the stock, only the
        // top card from waste or a foundation, and from a tableau only a face-up
        // suffix. The run's internal order was validated card by card when it was
        // built, so it is not re-checked here.
        let lift_ok = match origin {
            PileId::Stock => false,
            PileId::Waste | PileId::Foundation(_) => {
                !origin_pile.is_empty() && lift_index == origin_pile.len() - 1
            }
            PileId::Tableau(_) => origin_pile
                .card_at(lift_index)
                .map_or(false, |card| card.is_face_up),
        };
        if !lift_ok {
            info!(
                "Game: cannot lift index {} from {:?}, rejecting move",
                lift_index, origin
            );
            return MoveOutcome::rejected();
        }

        let run = match self.pile_mut(origin) {
            Some(pile) => pile.extract_run_from(lift_index),
            None => return MoveOutcome::rejected(),
        };
        debug_assert!(rules::is_descending_alternating(&run));

        let valid = self
            .pile(destination)
            .map_or(false, |dest| rules::is_move_valid(&run, dest));

        if !valid {
            info!("Game: move {:?}[{}] -> {:?} rejected", origin, lift_index, destination);
            // Put the run back where it was lifted from; it was the pile's suffix,
            // so appending restores the exact original positions.
            if let Some(pile) = self.pile_mut(origin) {
                pile.push_run(run);
            }
            return MoveOutcome::rejected();
        }

        let cards_moved = run.len();
        if let Some(dest) = self.pile_mut(destination) {
            dest.push_run(run);
        }

        // Only a tableau reveals a buried card when its face-up suffix leaves.
        let flipped_card = match origin {
            PileId::Tableau(_) => self.pile_mut(origin).and_then(Pile::turn_top_card_up),
            _ => None,
        };
        if let Some(card) = &flipped_card {
            self.events.push_back(GameEvent::CardRevealed { pile: origin, card: card.clone() });
        }
        self.events.push_back(GameEvent::MoveAccepted { origin, destination, cards_moved });
        info!(
            "Game: move {:?}[{}] -> {:?} accepted ({} cards)",
            origin, lift_index, destination, cards_moved
        );

        if rules::check_win_condition(&self.foundations) {
            self.status = GameStatus::Won;
            self.events.push_back(GameEvent::GameWon);
            info!("Game: all foundations complete, game won! 🏆");
        }
        debug_assert_eq!(self.total_cards(), 52);

        MoveOutcome { accepted: true, flipped_card }
    }

    /// A click on the stock either draws one card to the waste, or (when the stock
    /// is exhausted) recycles the waste back into the stock.
    ///
    /// Recycle keeps the waste's stored order and just turns everything face down,
    /// matching the original behavior this engine reproduces (see DESIGN.md for
    /// the note on the ordering).
    pub fn on_stock_click(&mut self) -> StockOutcome {
        if rules::can_deal_from_stock(self.stock.is_empty()) {
            if let Some(mut card) = self.stock.pop_top() {
                card.is_face_up = true;
                self.waste.push(card.clone());
                self.events.push_back(GameEvent::CardDrawn { card: card.clone() });
                debug!("Game: drew {} from stock", card);
                return StockOutcome { action: StockAction::Draw, drawn_card: Some(card) };
            }
        }

        if rules::can_recycle_waste_to_stock(self.stock.is_empty(), self.waste.is_empty()) {
            self.waste.turn_all_cards_down();
            let cards = self.waste.take_all();
            let cards_returned = cards.len();
            self.stock.push_run(cards);
            self.events.push_back(GameEvent::WasteRecycled { cards_returned });
            info!("Game: recycled {} cards from waste into stock", cards_returned);
            debug_assert_eq!(self.total_cards(), 52);
            return StockOutcome { action: StockAction::Recycle, drawn_card: None };
        }

        debug!("Game: stock click with empty stock and waste, nothing to do");
        StockOutcome { action: StockAction::Nothing, drawn_card: None }
    }

    /// Resolves a screen point to the pile and card index under it, or `None` when
    /// the click landed on empty felt. Tableaus are checked first, then foundations,
    /// then the waste, and the stock last.
    pub fn resolve_hit(&self, point: Position) -> Option<(PileId, usize)> {
        for (i, pile) in self.tableaus.iter().enumerate() {
            if let Some(index) = pile.hit_test(point) {
                return Some((PileId::Tableau(i as u8), index));
            }
        }
        for (i, pile) in self.foundations.iter().enumerate() {
            if let Some(index) = pile.hit_test(point) {
                return Some((PileId::Foundation(i as u8), index));
            }
        }
        if let Some(index) = self.waste.hit_test(point) {
            return Some((PileId::Waste, index));
        }
        if let Some(index) = self.stock.hit_test(point) {
            return Some((PileId::Stock, index));
        }
        None
    }

    /// True when every foundation holds all thirteen cards of its suit.
    /// Computed from the piles themselves, so a hand-built winning state
    /// reports the win without needing a final move.
    pub fn is_won(&self) -> bool {
        rules::check_win_condition(&self.foundations)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only copy of the entire board for the renderer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tableaus: self.tableaus.clone(),
            foundations: self.foundations.clone(),
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            status: self.status,
        }
    }

    /// Hands out (and clears) the queued events since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Total number of cards across every pile. Always 52 for a dealt game.
    pub fn total_cards(&self) -> usize {
        self.tableaus.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }
}
