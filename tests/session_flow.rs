//! Integration tests for full sessions against the built-in catalog.
//!
//! These tests drive the `GameController` through every phase:
//! 1. Intro -> Briefing -> Playing with a dealt deck
//! 2. Commit/advance/undo turns until the deck is exhausted
//! 3. Either finish directly or revise votes in a review session
//! 4. Reset and deal the next session without repeating cards

use std::collections::HashSet;
use std::sync::Arc;

use policy_deck::adapters::RecordingListener;
use policy_deck::application::{GameController, SessionSettings};
use policy_deck::domain::catalog::{CardCatalog, Category, DecisionCard};
use policy_deck::domain::deck::DeckSelector;
use policy_deck::domain::foundation::{CardId, Side};
use policy_deck::domain::outcome::Archetype;
use policy_deck::domain::session::{
    replay, GamePhase, LedgerTotals, SessionError, TurnAdvance, STARTING_BUDGET, STARTING_TRUST,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn controller(seed: u64, deck_size: usize) -> (GameController, Arc<RecordingListener>) {
    let settings = SessionSettings {
        deck_size,
        ..SessionSettings::default()
    };
    let mut game = GameController::new(CardCatalog::builtin(), DeckSelector::seeded(seed), settings);
    let recorder = Arc::new(RecordingListener::new());
    game.subscribe(recorder.clone());
    (game, recorder)
}

fn start(game: &mut GameController) {
    game.begin_briefing().unwrap();
    game.enter_session().unwrap();
}

/// Plays every remaining card, picking a side per card.
fn play_through(game: &mut GameController, choose: impl Fn(&DecisionCard) -> Side) {
    loop {
        let card = game.current_card().cloned().expect("card while playing");
        game.commit_choice(choose(&card)).unwrap();
        if game.advance_turn().unwrap() == TurnAdvance::DeckExhausted {
            break;
        }
    }
}

fn preferred(card: &DecisionCard) -> Side {
    card.preferred_side
}

fn deck_ids(game: &GameController) -> Vec<CardId> {
    game.deck().card_ids().to_vec()
}

// =============================================================================
// Full sessions
// =============================================================================

#[test]
fn all_preferred_choices_classify_as_champion() {
    let (mut game, _) = controller(11, 10);
    start(&mut game);
    assert_eq!(game.deck().len(), 10);

    play_through(&mut game, preferred);
    assert_eq!(game.phase(), GamePhase::SessionEndChoice);
    assert_eq!(game.ledger().streak(), 10);
    assert_eq!(game.ledger().alignment_score(), 10);

    let outcome = game.finish_session().unwrap();
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(outcome.alignment_percent.value(), 100);
    assert_eq!(outcome.archetype, Archetype::Champion);
    assert!(outcome.share_message().contains("100%"));
}

#[test]
fn all_opposite_choices_earn_no_alignment() {
    let (mut game, _) = controller(3, 10);
    start(&mut game);

    play_through(&mut game, |card| card.preferred_side.opposite());
    assert_eq!(game.ledger().alignment_score(), 0);
    assert_eq!(game.ledger().streak(), 0);

    let outcome = game.finish_session().unwrap();
    assert_eq!(outcome.alignment_percent.value(), 0);
    assert_eq!(outcome.archetype, Archetype::StatusQuo);
}

#[test]
fn session_events_arrive_in_play_order() {
    let (mut game, recorder) = controller(5, 2);
    start(&mut game);
    play_through(&mut game, preferred);
    game.finish_session().unwrap();

    assert_eq!(
        recorder.event_types(),
        vec![
            "session.phase_changed.v1",
            "session.phase_changed.v1",
            "session.started.v1",
            "session.turn_started.v1",
            "session.choice_committed.v1",
            "session.turn_ended.v1",
            "session.turn_started.v1",
            "session.choice_committed.v1",
            "session.turn_ended.v1",
            "session.deck_exhausted.v1",
            "session.phase_changed.v1",
            "session.phase_changed.v1",
            "session.finished.v1",
        ]
    );
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn undoing_every_turn_returns_to_the_starting_ledger() {
    let (mut game, _) = controller(8, 10);
    start(&mut game);
    let first_card = game.current_card().unwrap().id.clone();

    for _ in 0..4 {
        let card = game.current_card().cloned().unwrap();
        game.commit_choice(card.preferred_side).unwrap();
        game.advance_turn().unwrap();
    }
    assert_eq!(game.ledger().turn_index(), 4);

    for _ in 0..4 {
        game.undo().unwrap();
    }

    assert_eq!(game.ledger().totals(), LedgerTotals::default());
    assert_eq!(game.ledger().meter_a(), STARTING_BUDGET);
    assert_eq!(game.ledger().meter_b(), STARTING_TRUST);
    assert_eq!(game.ledger().turn_index(), 0);
    assert!(game.ledger().votes().is_empty());
    assert_eq!(game.current_card().unwrap().id, first_card);
    assert_eq!(game.undo(), Err(SessionError::NoHistory));
}

#[test]
fn undo_before_advance_allows_a_different_choice_on_the_same_card() {
    let (mut game, _) = controller(21, 10);
    start(&mut game);
    let card = game.current_card().cloned().unwrap();

    game.commit_choice(Side::Left).unwrap();
    assert_eq!(game.commit_choice(Side::Right), Err(SessionError::ChoicePending));

    game.undo().unwrap();
    assert_eq!(game.current_card().unwrap().id, card.id);
    game.commit_choice(Side::Right).unwrap();

    assert_eq!(game.ledger().votes().len(), 1);
    assert_eq!(game.ledger().votes()[0].side, Side::Right);
    assert_eq!(game.ledger().meter_a(), STARTING_BUDGET + card.right.budget_delta);
}

// =============================================================================
// Review session
// =============================================================================

#[test]
fn review_totals_replace_the_played_ledger() {
    let (mut game, recorder) = controller(13, 10);
    start(&mut game);
    play_through(&mut game, |_| Side::Left);
    let played = game.ledger().totals();

    let ballot = game.extend_session().unwrap();
    assert_eq!(ballot.totals(), played);

    let revised = game.toggle_review_vote(0).unwrap();
    assert_eq!(game.live_totals(), revised);
    assert_eq!(recorder.count_of("session.vote_revised.v1"), 1);

    let outcome = game.finish_review().unwrap();
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.ledger().votes()[0].side, Side::Right);
    assert_eq!(game.ledger().totals(), revised);
    assert_eq!(
        game.ledger().totals(),
        replay(game.ledger().votes(), game.catalog())
    );
    assert_eq!(outcome, game.outcome());
    assert!(!game.ledger().can_undo());
}

#[test]
fn toggling_a_vote_twice_restores_the_played_totals() {
    let (mut game, _) = controller(17, 10);
    start(&mut game);
    play_through(&mut game, preferred);
    let played = game.ledger().totals();

    game.extend_session().unwrap();
    game.toggle_review_vote(4).unwrap();
    let restored = game.toggle_review_vote(4).unwrap();

    assert_eq!(restored, played);
}

#[test]
fn toggling_past_the_last_vote_is_rejected() {
    let (mut game, _) = controller(19, 3);
    start(&mut game);
    play_through(&mut game, preferred);
    game.extend_session().unwrap();

    assert_eq!(
        game.toggle_review_vote(3),
        Err(SessionError::VoteIndexOutOfRange { index: 3, len: 3 })
    );
}

// =============================================================================
// Phases and dealing
// =============================================================================

#[test]
fn turn_operations_are_rejected_outside_play() {
    let (mut game, _) = controller(1, 10);

    assert!(matches!(
        game.commit_choice(Side::Left),
        Err(SessionError::InvalidPhase { phase: GamePhase::Intro, .. })
    ));
    assert!(matches!(
        game.enter_session(),
        Err(SessionError::InvalidPhase { phase: GamePhase::Intro, .. })
    ));
    assert!(game.current_card().is_none());
}

#[test]
fn consecutive_sessions_deal_unplayed_cards_until_the_catalog_runs_dry() {
    let catalog_size = CardCatalog::builtin().len();
    let (mut game, _) = controller(23, 5);
    let mut seen: HashSet<CardId> = HashSet::new();

    for _ in 0..(catalog_size / 5) {
        start(&mut game);
        for id in deck_ids(&game) {
            assert!(seen.insert(id), "card dealt twice before the catalog ran dry");
        }
        game.reset();
    }
    assert_eq!(seen.len(), catalog_size);
    assert_eq!(game.played_card_ids().len(), catalog_size);

    start(&mut game);
    assert_eq!(game.deck().len(), 5);
    assert_eq!(game.played_card_ids(), game.deck().card_ids());
}

#[test]
fn category_filter_holds_across_sessions_while_the_catalog_can_fill_it() {
    let settings = SessionSettings {
        deck_size: 2,
        category_filter: Some(Category::Budget),
        exclude_played: true,
    };
    let mut game = GameController::new(CardCatalog::builtin(), DeckSelector::seeded(31), settings);

    for session in 0..4 {
        start(&mut game);
        let categories: Vec<Category> = game
            .deck()
            .card_ids()
            .iter()
            .map(|id| game.catalog().get(id).unwrap().category.clone())
            .collect();
        assert_eq!(
            categories,
            vec![Category::Budget, Category::Budget],
            "session {} ignored the filter",
            session
        );
        game.reset();
    }
}

#[test]
fn reset_mid_session_returns_to_intro_with_a_fresh_ledger() {
    let (mut game, _) = controller(29, 10);
    start(&mut game);
    let card = game.current_card().cloned().unwrap();
    game.commit_choice(card.preferred_side).unwrap();

    game.reset();

    assert_eq!(game.phase(), GamePhase::Intro);
    assert_eq!(game.ledger().totals(), LedgerTotals::default());
    assert!(game.deck().is_empty());
    assert_eq!(game.played_card_ids().len(), 10);
}
