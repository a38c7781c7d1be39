use std::cmp::Ordering;

use equity_calc::cards::{Card, parse_cards};
use equity_calc::evaluator::{HandCategory, HandRank, best_hand, evaluate};

fn cards(tokens: &str) -> Vec<Card> {
    parse_cards(tokens).unwrap()
}

fn category(tokens: &str) -> HandCategory {
    evaluate(&cards(tokens)).unwrap().category
}

#[test]
fn literal_categories() {
    assert_eq!(category("Ah Kh Qh Jh Th"), HandCategory::StraightFlush);
    assert_eq!(category("2c 2d 2h 2s 5c"), HandCategory::FourOfAKind);
    assert_eq!(category("3c 3d 3h 7s 7c"), HandCategory::FullHouse);
    assert_eq!(category("2c 5c 9c Jc Kc"), HandCategory::Flush);
    assert_eq!(category("2c 3d 4h 5s 6c"), HandCategory::Straight);
    assert_eq!(category("7c 7d 7h Ks 2c"), HandCategory::ThreeOfAKind);
    assert_eq!(category("7c 7d Kh Ks 2c"), HandCategory::TwoPair);
    assert_eq!(category("7c 7d Kh 9s 2c"), HandCategory::OnePair);
    assert_eq!(category("7c 4d Kh 9s 2c"), HandCategory::HighCard);
}

#[test]
fn wheel_counts_as_lowest_straight() {
    let wheel = evaluate(&cards("Ac 2d 3h 4s 5c")).unwrap();
    assert_eq!(wheel.category, HandCategory::Straight);
    assert_eq!(wheel.tiebreak[0], 5);
    assert!(wheel > evaluate(&cards("Ac Kd 3h 4s 5c")).unwrap());
}

#[test]
fn category_codes_match_strength_order() {
    assert_eq!(HandCategory::HighCard as u8, 0);
    assert_eq!(HandCategory::Straight as u8, 4);
    assert_eq!(HandCategory::StraightFlush as u8, 8);
}

#[test]
fn card_order_does_not_matter() {
    let a = evaluate(&cards("Kc 9d 9h 4s Kd")).unwrap();
    let b = evaluate(&cards("4s Kd Kc 9h 9d")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn ordering_is_total_and_transitive() {
    let hands = [
        "7c 4d Kh 9s 2c",
        "7c 7d Kh 9s 2c",
        "7c 7d Kh Ks 2c",
        "2c 3d 4h 5s 6c",
        "2c 5c 9c Jc Kc",
        "3c 3d 3h 7s 7c",
        "Ah Kh Qh Jh Th",
        "Ac Kd 3h 4s 5c",
    ];
    let ranks: Vec<HandRank> = hands
        .iter()
        .map(|h| evaluate(&cards(h)).unwrap())
        .collect();

    for a in &ranks {
        for b in &ranks {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
            for c in &ranks {
                if a.cmp(b) != Ordering::Less && b.cmp(c) != Ordering::Less {
                    assert_ne!(a.cmp(c), Ordering::Less);
                }
            }
        }
    }
}

#[test]
fn quads_outrank_full_house_in_seven_cards() {
    let strength = best_hand(&cards("9c 9d 9h 9s Ac Ah 5c")).unwrap();
    assert_eq!(strength.category, HandCategory::FourOfAKind);
    assert_eq!(&strength.tiebreak[..2], &[9, 14]);
}

#[test]
fn seven_cards_pick_the_straight_over_a_pair() {
    let strength = best_hand(&cards("8h 8d 9c Ts Jd Qh 2c")).unwrap();
    assert_eq!(strength.category, HandCategory::Straight);
    assert_eq!(strength.tiebreak[0], 12);
}
