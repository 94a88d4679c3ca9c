use deckhand_engine::cards::{Card, Rank, Suit};
use deckhand_engine::codec::{self, decode_deck, encode_deck};
use deckhand_engine::deck::Deck;
use deckhand_engine::errors::DeckError;
use serde_json::json;

fn assert_same(a: &Deck, b: &Deck) {
    assert_eq!(a.count(), b.count());
    assert_eq!(a.cards(), b.cards());
    assert_eq!(a.pile(), b.pile());
}

#[test]
fn scenario_survives_round_trip() {
    let mut deck = Deck::new(1, false).unwrap();
    deck.draw(1).unwrap();
    let hand = deck.draw(7).unwrap();
    deck.discard(hand.clone(), Some("hand"));

    let value = serde_json::to_value(encode_deck(&deck)).unwrap();
    let decoded = decode_deck(&value).unwrap();

    assert_same(&deck, &decoded);
    assert_eq!(decoded.count(), 44);
    assert_eq!(decoded.pile().show(Some("hand")), hand.as_slice());
}

#[test]
fn shuffled_multi_deck_survives_json_text() {
    let mut deck = Deck::new(3, true).unwrap();
    let drawn = deck.draw(10).unwrap();
    deck.discard(drawn, None);
    deck.discard(Card::new(Rank::Two, Suit::Hearts), Some("extra"));

    let text = codec::to_json(&deck).unwrap();
    let decoded = codec::from_json(&text).unwrap();
    assert_same(&deck, &decoded);
}

#[test]
fn record_has_the_stored_shape() {
    let mut deck = Deck::new(1, false).unwrap();
    let top = deck.draw(1).unwrap();
    deck.discard(top, None);
    deck.draw(49).unwrap();

    let value = serde_json::to_value(deck.encode()).unwrap();
    assert_eq!(
        value,
        json!({
            "cards": [
                {"rank": 2, "suit": "Clubs"},
                {"rank": 3, "suit": "Clubs"}
            ],
            "pile": {"discard": [{"rank": "Queen", "suit": "Spades"}]},
            "count": 2
        })
    );
}

#[test]
fn deck_record_needs_cards_and_pile() {
    for bad in [
        json!({"pile": {}}),
        json!({"cards": []}),
        json!([]),
        json!({"cards": "nope", "pile": {}}),
        json!({"cards": [{"rank": 99, "suit": "Hearts"}], "pile": {}}),
        json!({"cards": [], "pile": {"hand": [{"rank": 2}]}}),
    ] {
        assert!(
            matches!(decode_deck(&bad), Err(DeckError::Decode(_))),
            "expected decode failure for {}",
            bad
        );
    }
}

#[test]
fn decoded_decks_can_still_shuffle_and_draw() {
    let decoded = decode_deck(&json!({
        "cards": [{"rank": "Ace", "suit": "Hearts"}, {"rank": 9, "suit": "Clubs"}],
        "pile": {}
    }));
    let mut deck = decoded.unwrap();
    deck.shuffle();
    assert_eq!(deck.draw(2).unwrap().len(), 2);
    assert!(deck.pile().contains("discard"));
}
