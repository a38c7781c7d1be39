use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::EquityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_label())
    }
}

impl FromStr for Rank {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(EquityError::DuplicateOrUnknownCard(s.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::Clubs),
            "d" | "♦" => Ok(Suit::Diamonds),
            "h" | "♥" => Ok(Suit::Hearts),
            "s" | "♠" => Ok(Suit::Spades),
            _ => Err(EquityError::DuplicateOrUnknownCard(s.to_string())),
        }
    }
}

/// A single card; its text form is the two-character token, e.g. `Ah`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank_value(&self) -> u8 {
        self.rank.value()
    }

    /// Rank label followed by the suit glyph, for terminal output.
    pub fn symbolic(&self) -> String {
        format!("{}{}", self.rank.short_label(), self.suit.symbol())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let unknown = || EquityError::DuplicateOrUnknownCard(token.to_string());
        let (split, _) = token.char_indices().last().ok_or_else(unknown)?;
        if split == 0 {
            return Err(unknown());
        }
        let rank = token[..split].parse::<Rank>().map_err(|_| unknown())?;
        let suit = token[split..].parse::<Suit>().map_err(|_| unknown())?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses whitespace separated tokens; a run of concatenated two-character
/// tokens (`AhKh`) is also accepted.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, EquityError> {
    let mut cards = Vec::new();
    for chunk in input.split_whitespace() {
        if let Ok(card) = chunk.parse::<Card>() {
            cards.push(card);
            continue;
        }
        if chunk.len() > 2 && chunk.len() % 2 == 0 && chunk.is_ascii() {
            for start in (0..chunk.len()).step_by(2) {
                cards.push(chunk[start..start + 2].parse()?);
            }
        } else {
            return Err(EquityError::DuplicateOrUnknownCard(chunk.to_string()));
        }
    }
    Ok(cards)
}

fn ensure_distinct(cards: &[Card]) -> Result<(), EquityError> {
    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            return Err(EquityError::DuplicateOrUnknownCard(card.to_string()));
        }
    }
    Ok(())
}

fn join_tokens(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two hole cards belonging to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 2]);

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, EquityError> {
        match cards {
            [first, second] => {
                ensure_distinct(cards)?;
                Ok(Self([*first, *second]))
            }
            _ => Err(EquityError::InvalidHandSize {
                expected: 2,
                actual: cards.len(),
            }),
        }
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hand::new(&parse_cards(s)?)
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_tokens(&self.0))
    }
}

/// Zero to five shared cards, fixed for a whole simulation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board(Vec<Card>);

impl Board {
    pub const MAX_CARDS: usize = 5;

    pub fn new(cards: Vec<Card>) -> Result<Self, EquityError> {
        if cards.len() > Self::MAX_CARDS {
            return Err(EquityError::OverfilledBoard(cards.len()));
        }
        ensure_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cards still to be dealt before showdown.
    pub fn missing(&self) -> usize {
        Self::MAX_CARDS - self.0.len()
    }
}

impl FromStr for Board {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::new(parse_cards(s)?)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_tokens(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_display() {
        let card: Card = "Th".parse().unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(card.to_string(), "Th");
        assert_eq!("10h".parse::<Card>().unwrap(), card);
        assert_eq!(card.symbolic(), "T♥");
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for token in ["", "A", "1h", "Ax", "Ahh", "h"] {
            assert!(
                matches!(
                    token.parse::<Card>(),
                    Err(EquityError::DuplicateOrUnknownCard(_))
                ),
                "token {token:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_cards_accepts_spaced_and_concatenated() {
        let spaced = parse_cards("Ah Kh  Qd").unwrap();
        let packed = parse_cards("AhKhQd").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced.len(), 3);
        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AhKz").is_err());
    }

    #[test]
    fn hand_requires_two_distinct_cards() {
        assert!("Ah Kh".parse::<Hand>().is_ok());
        assert_eq!(
            "Ah".parse::<Hand>(),
            Err(EquityError::InvalidHandSize {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            "Ah Ah".parse::<Hand>(),
            Err(EquityError::DuplicateOrUnknownCard("Ah".into()))
        );
    }

    #[test]
    fn board_caps_at_five_cards() {
        let board: Board = "2c 3d 4h".parse().unwrap();
        assert_eq!(board.missing(), 2);
        assert_eq!(board.to_string(), "2c 3d 4h");
        assert_eq!(
            "2c 3d 4h 5s 6c 7d".parse::<Board>(),
            Err(EquityError::OverfilledBoard(6))
        );
    }

    #[test]
    fn cards_serialize_as_tokens() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"As\"");
        let back: Card = serde_json::from_str("\"As\"").unwrap();
        assert_eq!(back, card);
    }
}
