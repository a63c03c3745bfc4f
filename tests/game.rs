//! Game integration tests.

use blackjack_state::{
    ActionError, Card, DECK_SIZE, DealError, DealerPolicy, GameOptions, GameState, Hand,
    HandOutcome, HitSoft17, Phase, Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn game_from_draws(draws: &[Card]) -> GameState {
    GameState::with_shoe(GameOptions::default(), Shoe::from_cards(draws.iter().copied()))
}

#[test]
fn hand_scoring_scenarios() {
    let hand: Hand = [card(Suit::Hearts, 2), card(Suit::Diamonds, 3)]
        .into_iter()
        .collect();
    assert_eq!((hand.min_score(), hand.score()), (5, 5));

    let hand: Hand = [card(Suit::Spades, 1), card(Suit::Diamonds, 13)]
        .into_iter()
        .collect();
    assert_eq!((hand.min_score(), hand.score()), (11, 21));

    let hand: Hand = [
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 9),
    ]
    .into_iter()
    .collect();
    assert_eq!((hand.min_score(), hand.score()), (11, 21));

    let hand: Hand = [
        card(Suit::Spades, 1),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 13),
    ]
    .into_iter()
    .collect();
    assert_eq!((hand.min_score(), hand.score()), (12, 12));
}

#[test]
fn hand_rendering() {
    let hand: Hand = [card(Suit::Hearts, 12), card(Suit::Clubs, 7)]
        .into_iter()
        .collect();
    assert_eq!(hand.to_string(), "Queen of Hearts, Seven of Clubs");
    assert_eq!(hand.dealer_string(), "Queen of Hearts, **HIDDEN**");
}

#[test]
fn shuffle_is_the_first_call() {
    let game = GameState::new(GameOptions::default());
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidPhase);

    let shuffled = game.shuffle(7);
    assert_eq!(shuffled.cards_remaining(), 3 * DECK_SIZE);
    assert!(game.shoe.is_empty());

    let dealt = shuffled.deal().unwrap();
    assert_eq!(dealt.cards_remaining(), 3 * DECK_SIZE - 4);
}

#[test]
fn seeded_shuffles_repeat() {
    let a = GameState::default().shuffle(11).deal().unwrap();
    let b = GameState::default().shuffle(11).deal().unwrap();
    assert_eq!(a, b);
}

#[test]
fn basic_round_flow() {
    let game = game_from_draws(&[
        card(Suit::Hearts, 8),   // player
        card(Suit::Clubs, 6),    // dealer up
        card(Suit::Diamonds, 7), // player
        card(Suit::Spades, 10),  // dealer hole
        card(Suit::Hearts, 4),   // player hit
        card(Suit::Clubs, 5),    // dealer draw
    ]);

    let game = game.deal().unwrap();
    assert_eq!(game.phase, Phase::PlayerTurn);
    assert_eq!(game.dealer.dealer_string(), "Six of Clubs, **HIDDEN**");

    let game = game.hit().unwrap();
    assert_eq!(game.player.score(), 19);
    assert_eq!(game.phase, Phase::PlayerTurn);

    let game = game.stand().unwrap();
    assert_eq!(game.phase, Phase::DealerTurn);

    let game = HitSoft17.play(&game).unwrap();
    assert_eq!(game.phase, Phase::HandOver);
    assert_eq!(game.dealer.score(), 21);

    let (game, result) = game.end_hand();
    assert_eq!(result.outcome, HandOutcome::DealerWin);
    assert_eq!(result.player_score, 19);
    assert_eq!(result.dealer_score, 21);
    assert!(game.player.is_empty());
    assert!(game.dealer.is_empty());
    assert!(game.shoe.is_empty());
}

#[test]
fn player_bust_skips_to_dealer() {
    let game = game_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 10),
        card(Suit::Hearts, 9),
    ])
    .deal()
    .unwrap();

    let game = game.hit().unwrap();
    assert_eq!(game.player.score(), 25);
    assert_eq!(game.phase, Phase::DealerTurn);

    let game = HitSoft17.play(&game).unwrap();
    let (_, result) = game.end_hand();
    assert_eq!(result.outcome, HandOutcome::PlayerBust);
}

#[test]
fn dealer_bust() {
    let game = game_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 10),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 12),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap();

    let game = game.hit().unwrap();
    assert_eq!(game.dealer.score(), 26);
    assert_eq!(game.phase, Phase::HandOver);

    let (_, result) = game.end_hand();
    assert_eq!(result.outcome, HandOutcome::DealerBust);
    assert!(result.outcome.player_wins());
}

#[test]
fn push() {
    let game = game_from_draws(&[
        card(Suit::Hearts, 10),
        card(Suit::Clubs, 10),
        card(Suit::Diamonds, 9),
        card(Suit::Spades, 9),
    ])
    .deal()
    .unwrap()
    .stand()
    .unwrap()
    .stand()
    .unwrap();

    let (_, result) = game.end_hand();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.outcome.to_string(), "Draw");
}

#[test]
fn earlier_states_stay_valid() {
    let start = game_from_draws(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 5),
        card(Suit::Hearts, 6),
    ]);
    let dealt = start.deal().unwrap();
    let snapshot = dealt.clone();

    let mut hit = dealt.hit().unwrap();
    assert_eq!(dealt, snapshot);

    hit.player.push(card(Suit::Clubs, 13));
    hit.dealer.clear();
    hit.shoe = Shoe::default();
    assert_eq!(dealt, snapshot);
    assert_eq!(start.cards_remaining(), 5);
    assert!(start.player.is_empty());
}

#[test]
fn rounds_share_one_shoe_until_exhausted() {
    let options = GameOptions::default().with_decks(1);
    let mut game = GameState::new(options).shuffle(3);
    let mut rounds = 0;

    loop {
        game = match game.deal() {
            Ok(game) => game,
            Err(DealError::NotEnoughCards) => break,
        };
        game = game.stand().unwrap();
        game = match HitSoft17.play(&game) {
            Ok(game) => game,
            Err(ActionError::NoCards) => break,
            Err(err) => panic!("unexpected error: {err}"),
        };
        game = game.end_hand().0;
        rounds += 1;
    }

    assert!(rounds > 0);
    assert!(game.cards_remaining() < DECK_SIZE);
}
