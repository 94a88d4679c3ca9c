use std::collections::HashMap;

use deckhand_engine::cards::{Card, Rank, Suit};
use deckhand_engine::deck::{Deck, DrawRequest};
use deckhand_engine::errors::DeckError;
use deckhand_engine::pile::Cards;

const QUEEN_OF_SPADES: Card = Card::new(Rank::Queen, Suit::Spades);

#[test]
fn count_is_52_per_set() {
    for n in 1..=6 {
        let deck = Deck::new(n, true).unwrap();
        assert_eq!(deck.count(), 52 * n);
    }
}

#[test]
fn every_card_appears_n_times() {
    let deck = Deck::new(3, true).unwrap();
    let mut seen: HashMap<Card, usize> = HashMap::new();
    for card in &deck {
        *seen.entry(*card).or_default() += 1;
    }
    assert_eq!(seen.len(), 52);
    assert!(seen.values().all(|&n| n == 3));
}

#[test]
fn unshuffled_deck_starts_with_queen_of_spades() {
    for n in 1..=3 {
        let mut deck = Deck::new(n, false).unwrap();
        assert_eq!(deck.draw(1).unwrap(), Cards::One(QUEEN_OF_SPADES));
    }
}

#[test]
fn unshuffled_deck_pops_in_reverse_build_order() {
    let mut deck = Deck::new(1, false).unwrap();
    let drawn = deck.draw(5).unwrap().into_vec();
    let names: Vec<String> = drawn.iter().map(Card::to_string).collect();
    assert_eq!(
        names,
        [
            "Queen of Spades",
            "King of Spades",
            "Jack of Spades",
            "Ace of Spades",
            "10 of Spades"
        ]
    );
}

#[test]
fn drawing_reduces_count() {
    let mut deck = Deck::new(2, true).unwrap();
    let drawn = deck.draw(2).unwrap();
    assert_eq!(drawn.len(), 2);
    assert!(matches!(drawn, Cards::Many(_)));
    assert_eq!(deck.count(), 102);

    let rest = deck.count();
    deck.draw(rest).unwrap();
    assert_eq!(deck.count(), 0);
    assert!(!deck.has_cards());
}

#[test]
fn overdraw_fails_and_leaves_deck_untouched() {
    let mut deck = Deck::new(1, true).unwrap();
    let before = deck.cards().to_vec();
    assert_eq!(
        deck.draw(53).unwrap_err(),
        DeckError::NotEnoughCards {
            requested: 53,
            available: 52
        }
    );
    assert_eq!(deck.cards(), before.as_slice());

    deck.draw(52).unwrap();
    assert!(matches!(
        deck.draw(1),
        Err(DeckError::NotEnoughCards { .. })
    ));
    assert!(matches!(
        deck.draw_till(&QUEEN_OF_SPADES),
        Err(DeckError::NotEnoughCards { .. })
    ));
}

#[test]
fn draw_till_is_inclusive_and_in_pop_order() {
    let mut deck = Deck::new(1, false).unwrap();
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let drawn = deck.draw_till(&ace).unwrap().into_vec();
    assert_eq!(
        drawn,
        vec![
            QUEEN_OF_SPADES,
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            ace,
        ]
    );
    assert_eq!(deck.count(), 48);
}

#[test]
fn unmatched_till_drains_the_deck() {
    let mut deck = Deck::new(1, true).unwrap();
    let target = deck.draw(1).unwrap().single().unwrap();
    let remaining: Vec<Card> = deck.cards().iter().rev().copied().collect();

    let drawn = deck.draw_till(&target).unwrap();
    assert_eq!(drawn.into_vec(), remaining);
    assert_eq!(deck.count(), 0);
}

#[test]
fn draw_request_routes_to_pile() {
    let mut deck = Deck::new(1, false).unwrap();
    let hand = deck.draw(3).unwrap();
    deck.discard(hand.clone(), Some("hand"));

    let back = deck
        .draw_with(&DrawRequest::from_pile(3, "hand"))
        .unwrap()
        .into_vec();
    let mut expected = hand.into_vec();
    expected.reverse();
    assert_eq!(back, expected);
    assert_eq!(deck.count(), 49);

    assert_eq!(
        deck.draw_with(&DrawRequest::from_pile(1, "missing"))
            .unwrap_err(),
        DeckError::NoSuchPile("missing".into())
    );
    assert_eq!(
        deck.draw_with(&DrawRequest::till(Card::new(Rank::Ace, Suit::Spades)))
            .unwrap()
            .len(),
        1
    );
    assert_eq!(deck.draw_with(&DrawRequest::count(4)).unwrap().len(), 4);
}

#[test]
fn shuffle_keeps_cards_and_leaves_pile_alone() {
    let mut deck = Deck::new_with_seed(1, false, 7).unwrap();
    let hand = deck.draw(5).unwrap();
    deck.discard(hand.clone(), None);

    let mut before = deck.cards().to_vec();
    deck.shuffle();
    let mut after = deck.cards().to_vec();
    assert_ne!(before, after, "47 cards should not shuffle into the same order");

    before.sort_by_key(|c| (c.suit(), c.rank()));
    after.sort_by_key(|c| (c.suit(), c.rank()));
    assert_eq!(before, after);
    assert_eq!(deck.pile().show(None), hand.as_slice());
}

#[test]
fn identity_is_missing_until_persisted() {
    let deck = Deck::new(1, true).unwrap();
    assert_eq!(deck.id().unwrap_err(), DeckError::NoIdentity);
}

#[test]
fn scenario_draw_discard_and_show() {
    let mut deck = Deck::new(1, false).unwrap();
    let first = deck.draw(1).unwrap().single().unwrap();
    assert_eq!(first.rank(), Rank::Queen);
    assert_eq!(first.suit(), Suit::Spades);

    let seven = deck.draw(7).unwrap();
    assert_eq!(seven.len(), 7);
    assert_eq!(deck.count(), 44);

    deck.discard(seven.clone(), Some("hand"));
    assert_eq!(deck.pile().show(Some("hand")), seven.as_slice());
    assert_eq!(deck.pile().count_of(None), 0);
}
