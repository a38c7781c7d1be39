use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::cards::{Board, Card, Hand};
use crate::deck::Deck;
use crate::error::EquityError;
use crate::evaluator::{HandRank, best_hand};

/// Raw showdown tallies. `wins` is aligned with the input hands; a trial in
/// which several hands share the best rank counts once in `ties` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialCounts {
    pub wins: Vec<u64>,
    pub ties: u64,
    pub trials: u64,
}

impl TrialCounts {
    fn new(hands: usize, trials: u64) -> Self {
        Self {
            wins: vec![0; hands],
            ties: 0,
            trials,
        }
    }
}

/// Outcome of a single showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showdown {
    Winner(usize),
    Tie,
}

/// Decides one showdown from per-hand ranks.
pub fn showdown(ranks: &[HandRank]) -> Option<Showdown> {
    let best = ranks.iter().max()?;
    let mut leaders = ranks.iter().enumerate().filter(|(_, rank)| *rank == best);
    let (first, _) = leaders.next()?;
    Some(match leaders.next() {
        None => Showdown::Winner(first),
        Some(_) => Showdown::Tie,
    })
}

/// Runs `trials` random board completions and tallies the winners.
pub fn simulate<R: Rng + ?Sized>(
    hands: &[Hand],
    board: &Board,
    trials: u32,
    rng: &mut R,
) -> Result<TrialCounts, EquityError> {
    if trials == 0 {
        return Err(EquityError::InvalidTrialCount(0));
    }
    if hands.is_empty() {
        return Err(EquityError::NoHands);
    }

    let known = hands
        .iter()
        .flat_map(|hand| hand.cards().iter())
        .chain(board.cards());
    let deck = Deck::standard().remove_known(known)?;
    let missing = board.missing();

    debug!(
        hands = hands.len(),
        board = board.len(),
        remaining = deck.len(),
        trials,
        "starting equity simulation"
    );

    let mut counts = TrialCounts::new(hands.len(), u64::from(trials));
    let mut full_board: Vec<Card> = Vec::with_capacity(Board::MAX_CARDS);
    let mut showdown_cards: Vec<Card> = Vec::with_capacity(Board::MAX_CARDS + 2);
    let mut ranks: Vec<HandRank> = Vec::with_capacity(hands.len());

    for _ in 0..trials {
        full_board.clear();
        full_board.extend_from_slice(board.cards());
        full_board.extend(deck.sample(rng, missing)?);

        ranks.clear();
        for hand in hands {
            showdown_cards.clear();
            showdown_cards.extend_from_slice(hand.cards());
            showdown_cards.extend_from_slice(&full_board);
            ranks.push(best_hand(&showdown_cards)?);
        }

        match showdown(&ranks) {
            Some(Showdown::Winner(idx)) => counts.wins[idx] += 1,
            Some(Showdown::Tie) | None => counts.ties += 1,
        }
    }

    debug!(wins = ?counts.wins, ties = counts.ties, "equity simulation finished");
    Ok(counts)
}
