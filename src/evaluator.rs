use std::cmp::Ordering;

use itertools::Itertools;

use crate::cards::{Card, Rank};
use crate::error::EquityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Showdown strength of a five-card combination.
///
/// `tiebreak` holds rank values (2..=14) compared left to right, zero padded.
/// Paired hands list each distinct rank once, larger groups first, so
/// `KK-Q-7-3` is `[13, 12, 7, 3, 0]`. Straights and straight flushes only use
/// the first slot (top of the run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandRank {
    pub category: HandCategory,
    pub tiebreak: [u8; 5],
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

fn fill(values: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = *value;
    }
    out
}

// Top rank of a five-distinct-rank run; the wheel (A-2-3-4-5) plays as 5-high.
fn straight_high(distinct_desc: &[u8]) -> Option<u8> {
    if distinct_desc.len() != 5 {
        return None;
    }
    let (high, low) = (distinct_desc[0], distinct_desc[4]);
    if high - low == 4 {
        Some(high)
    } else if distinct_desc == [Rank::Ace.value(), 5, 4, 3, 2] {
        Some(Rank::Five.value())
    } else {
        None
    }
}

fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank_value() as usize] += 1;
    }

    // (multiplicity, rank), bigger groups first, then higher rank.
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&rank| counts[rank as usize] > 0)
        .map(|rank| (counts[rank as usize], rank))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let ordered: Vec<u8> = groups.iter().map(|&(_, rank)| rank).collect();
    let shape: Vec<u8> = groups.iter().map(|&(count, _)| count).collect();
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ordered);

    let category = match (is_flush, straight, shape.as_slice()) {
        (true, Some(_), _) => HandCategory::StraightFlush,
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, _, _) => HandCategory::Flush,
        (_, Some(_), _) => HandCategory::Straight,
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    let tiebreak = match (category, straight) {
        (HandCategory::Straight | HandCategory::StraightFlush, Some(high)) => fill(&[high]),
        _ => fill(&ordered),
    };

    HandRank { category, tiebreak }
}

/// Ranks exactly five cards.
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EquityError> {
    let five: &[Card; 5] = cards
        .try_into()
        .map_err(|_| EquityError::InvalidHandSize {
            expected: 5,
            actual: cards.len(),
        })?;
    Ok(evaluate_five(five))
}

/// Best five-card rank among five to seven cards.
///
/// Too few cards report the minimum (5) as expected, too many the maximum (7).
pub fn best_hand(cards: &[Card]) -> Result<HandRank, EquityError> {
    if cards.len() > 7 {
        return Err(EquityError::InvalidHandSize {
            expected: 7,
            actual: cards.len(),
        });
    }
    // Fewer than five cards yield no combinations.
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|combo| evaluate_five(&[combo[0], combo[1], combo[2], combo[3], combo[4]]))
        .max()
        .ok_or(EquityError::InvalidHandSize {
            expected: 5,
            actual: cards.len(),
        })
}
