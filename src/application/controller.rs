//! GameController - owns one player's simulator state and sequences phases.
//!
//! The controller is the single writer of the ledger, deck and review
//! ballot. Every mutation goes through a phase check, then the turn engine
//! or ballot, then listener notification.

use std::sync::Arc;

use crate::domain::catalog::{CardCatalog, CardOption, Category, DecisionCard};
use crate::domain::deck::{ActiveDeck, DeckSelector, DEFAULT_DECK_SIZE};
use crate::domain::foundation::{CardId, SessionId, Side, StateMachine};
use crate::domain::outcome::{classify_totals, Outcome};
use crate::domain::session::{
    GamePhase, LedgerSnapshot, LedgerTotals, ReviewBallot, SessionError, SessionEvent,
    SessionEventKind, SessionLedger, TurnAdvance, TurnEngine,
};
use crate::ports::SessionListener;

/// How decks are dealt for new sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub deck_size: usize,
    pub category_filter: Option<Category>,
    /// Skip cards dealt in earlier sessions until the catalog runs dry.
    pub exclude_played: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            category_filter: None,
            exclude_played: true,
        }
    }
}

/// Single-owner simulator state for one player.
pub struct GameController {
    session_id: SessionId,
    phase: GamePhase,
    catalog: Arc<CardCatalog>,
    selector: DeckSelector,
    settings: SessionSettings,
    deck: ActiveDeck,
    ledger: SessionLedger,
    review: Option<ReviewBallot>,
    played_card_ids: Vec<CardId>,
    listeners: Vec<Arc<dyn SessionListener>>,
}

impl GameController {
    pub fn new(catalog: Arc<CardCatalog>, selector: DeckSelector, settings: SessionSettings) -> Self {
        Self {
            session_id: SessionId::new(),
            phase: GamePhase::Intro,
            catalog,
            selector,
            settings,
            deck: ActiveDeck::default(),
            ledger: SessionLedger::new(),
            review: None,
            played_card_ids: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener; listeners are notified in registration order.
    pub fn subscribe(&mut self, listener: Arc<dyn SessionListener>) {
        self.listeners.push(listener);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn deck(&self) -> &ActiveDeck {
        &self.deck
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    pub fn review_ballot(&self) -> Option<&ReviewBallot> {
        self.review.as_ref()
    }

    pub fn played_card_ids(&self) -> &[CardId] {
        &self.played_card_ids
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Card at the cursor while playing.
    pub fn current_card(&self) -> Option<&DecisionCard> {
        if !self.phase.accepts_turns() {
            return None;
        }
        TurnEngine::new(&self.catalog, &self.deck)
            .current_card(&self.ledger)
            .ok()
    }

    /// Totals a presentation layer should show right now.
    ///
    /// During review these are the live replayed totals of the ballot.
    pub fn live_totals(&self) -> LedgerTotals {
        match &self.review {
            Some(ballot) => ballot.totals(),
            None => self.ledger.totals(),
        }
    }

    /// Outcome of the current totals against the dealt deck.
    pub fn outcome(&self) -> Outcome {
        classify_totals(&self.live_totals(), self.deck.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Phase operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Intro -> Briefing.
    pub fn begin_briefing(&mut self) -> Result<(), SessionError> {
        self.transition("begin the briefing", GamePhase::Briefing)
    }

    /// Briefing -> Playing: deals a fresh deck and resets the ledger.
    ///
    /// # Errors
    ///
    /// - `InvalidPhase` outside the briefing
    /// - `EmptyDeck` if the catalog cannot deal a single card
    pub fn enter_session(&mut self) -> Result<&ActiveDeck, SessionError> {
        self.ensure_transition("enter the session", GamePhase::Playing)?;

        let deck = self.deal()?;
        for id in deck.card_ids() {
            if !self.played_card_ids.contains(id) {
                self.played_card_ids.push(id.clone());
            }
        }
        self.session_id = SessionId::new();
        self.deck = deck;
        self.ledger.start_session();
        self.review = None;

        self.transition("enter the session", GamePhase::Playing)?;
        tracing::info!(
            session_id = %self.session_id,
            deck_size = self.deck.len(),
            "session started"
        );
        self.emit(SessionEventKind::SessionStarted {
            deck: self.deck.card_ids().to_vec(),
        });
        self.emit_turn_started();
        Ok(&self.deck)
    }

    /// Applies `side` of the current card.
    pub fn commit_choice(&mut self, side: Side) -> Result<CardOption, SessionError> {
        self.ensure_playing("commit a choice")?;

        let turn_index = self.ledger.turn_index();
        let engine = TurnEngine::new(&self.catalog, &self.deck);
        let card_id = engine.current_card(&self.ledger)?.id.clone();
        let option = engine.commit_choice(&mut self.ledger, side)?.clone();

        tracing::debug!(
            session_id = %self.session_id,
            turn_index,
            card_id = %card_id,
            side = %side,
            "choice committed"
        );
        self.emit(SessionEventKind::ChoiceCommitted {
            turn_index,
            card_id,
            side,
            meter_a: self.ledger.meter_a(),
            meter_b: self.ledger.meter_b(),
            alignment_score: self.ledger.alignment_score(),
            streak: self.ledger.streak(),
        });
        Ok(option)
    }

    /// Moves past the answered card; on the last card the session ends.
    pub fn advance_turn(&mut self) -> Result<TurnAdvance, SessionError> {
        self.ensure_playing("advance the turn")?;

        let finished = self.ledger.turn_index();
        let advance = TurnEngine::new(&self.catalog, &self.deck).advance_turn(&mut self.ledger)?;
        self.emit(SessionEventKind::TurnEnded {
            turn_index: finished,
        });

        match advance {
            TurnAdvance::Next(index) => {
                tracing::debug!(session_id = %self.session_id, turn_index = index, "next turn");
                self.emit_turn_started();
            }
            TurnAdvance::DeckExhausted => {
                self.emit(SessionEventKind::DeckExhausted {
                    cards_played: self.ledger.votes().len(),
                });
                self.transition("advance the turn", GamePhase::SessionEndChoice)?;
            }
        }
        Ok(advance)
    }

    /// Reverts the most recent commit and re-announces the card at the
    /// restored cursor.
    pub fn undo(&mut self) -> Result<LedgerSnapshot, SessionError> {
        self.ensure_playing("undo")?;

        let snapshot = TurnEngine::new(&self.catalog, &self.deck).undo(&mut self.ledger)?;
        tracing::debug!(
            session_id = %self.session_id,
            turn_index = snapshot.turn_index,
            "turn undone"
        );
        self.emit(SessionEventKind::TurnUndone {
            turn_index: snapshot.turn_index,
            meter_a: snapshot.meter_a,
            meter_b: snapshot.meter_b,
        });
        self.emit_turn_started();
        Ok(snapshot)
    }

    /// SessionEndChoice -> ReviewSession: opens a ballot over the votes.
    pub fn extend_session(&mut self) -> Result<&ReviewBallot, SessionError> {
        self.ensure_transition("open the review", GamePhase::ReviewSession)?;
        let ballot = ReviewBallot::open(self.ledger.votes(), &self.catalog);
        self.transition("open the review", GamePhase::ReviewSession)?;
        Ok(self.review.insert(ballot))
    }

    /// Flips a vote during review and returns the replayed totals.
    pub fn toggle_review_vote(&mut self, index: usize) -> Result<LedgerTotals, SessionError> {
        let phase = self.phase;
        let ballot = match (&mut self.review, phase) {
            (Some(ballot), GamePhase::ReviewSession) => ballot,
            _ => return Err(SessionError::invalid_phase("revise a vote", phase)),
        };

        let vote = ballot.revise_vote(index, &self.catalog)?.clone();
        let totals = ballot.totals();
        self.emit(SessionEventKind::VoteRevised {
            index,
            card_id: vote.card_id,
            side: vote.side,
        });
        Ok(totals)
    }

    /// ReviewSession -> GameOver: the ballot becomes the final ledger.
    pub fn finish_review(&mut self) -> Result<Outcome, SessionError> {
        if self.phase != GamePhase::ReviewSession {
            return Err(SessionError::invalid_phase("finish the review", self.phase));
        }
        if let Some(ballot) = self.review.take() {
            let (votes, totals) = ballot.into_parts();
            self.ledger.adopt_review(votes, totals);
        }
        self.finish("finish the review")
    }

    /// SessionEndChoice -> GameOver with the ledger as played.
    pub fn finish_session(&mut self) -> Result<Outcome, SessionError> {
        if self.phase != GamePhase::SessionEndChoice {
            return Err(SessionError::invalid_phase("finish the session", self.phase));
        }
        self.finish("finish the session")
    }

    /// Returns to the intro from any phase with a fresh ledger.
    ///
    /// Cards played so far stay excluded from future decks.
    pub fn reset(&mut self) {
        let from = self.phase;
        self.ledger.start_session();
        self.deck = ActiveDeck::default();
        self.review = None;
        self.phase = GamePhase::Intro;
        if from != GamePhase::Intro {
            self.emit(SessionEventKind::PhaseChanged {
                from,
                to: GamePhase::Intro,
            });
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn finish(&mut self, operation: &'static str) -> Result<Outcome, SessionError> {
        self.transition(operation, GamePhase::GameOver)?;
        let outcome = self.outcome();
        tracing::info!(
            session_id = %self.session_id,
            alignment_percent = outcome.alignment_percent.value(),
            archetype = %outcome.archetype,
            "session finished"
        );
        self.emit(SessionEventKind::SessionFinished {
            meter_a: self.ledger.meter_a(),
            meter_b: self.ledger.meter_b(),
            alignment_score: self.ledger.alignment_score(),
            alignment_percent: outcome.alignment_percent.value(),
        });
        Ok(outcome)
    }

    /// Draws a deck, clearing the played set once if it starves either the
    /// draw or the category filter.
    fn deal(&mut self) -> Result<ActiveDeck, SessionError> {
        let count = self.settings.deck_size;
        let filter = self.settings.category_filter.as_ref();
        let exclude: &[CardId] = if self.settings.exclude_played {
            &self.played_card_ids
        } else {
            &[]
        };

        // Unplayed cards of a category can run out before the catalog's do.
        let filter_starved = filter.is_some_and(|category| {
            let unplayed = self
                .catalog
                .cards()
                .iter()
                .filter(|card| &card.category == category && !exclude.contains(&card.id))
                .count();
            unplayed < count && self.catalog.count_in(category) >= count
        });

        let mut deck = self.selector.draw_deck(&self.catalog, count, filter, exclude);
        if !exclude.is_empty() && (deck.len() < count || filter_starved) {
            tracing::info!(
                played = self.played_card_ids.len(),
                "unplayed cards exhausted, clearing played set"
            );
            self.played_card_ids.clear();
            deck = self.selector.draw_deck(&self.catalog, count, filter, &[]);
        }

        if deck.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(deck)
    }

    fn ensure_playing(&self, operation: &'static str) -> Result<(), SessionError> {
        if self.phase.accepts_turns() {
            Ok(())
        } else {
            Err(SessionError::invalid_phase(operation, self.phase))
        }
    }

    fn ensure_transition(&self, operation: &'static str, to: GamePhase) -> Result<(), SessionError> {
        if self.phase.can_transition_to(&to) {
            Ok(())
        } else {
            Err(SessionError::invalid_phase(operation, self.phase))
        }
    }

    fn transition(&mut self, operation: &'static str, to: GamePhase) -> Result<(), SessionError> {
        let from = self.phase;
        self.phase = from
            .transition_to(to)
            .map_err(|_| SessionError::invalid_phase(operation, from))?;
        self.emit(SessionEventKind::PhaseChanged { from, to });
        Ok(())
    }

    fn emit_turn_started(&self) {
        if let Some(card_id) = self.deck.get(self.ledger.turn_index()) {
            self.emit(SessionEventKind::TurnStarted {
                turn_index: self.ledger.turn_index(),
                card_id: card_id.clone(),
            });
        }
    }

    fn emit(&self, kind: SessionEventKind) {
        let event = SessionEvent::new(self.session_id, kind);
        for listener in &self.listeners {
            listener.notify(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingListener;
    use crate::domain::catalog::fixtures::card;

    fn catalog() -> Arc<CardCatalog> {
        Arc::new(
            CardCatalog::new(vec![
                card("a", Category::Budget, (-5, 0), (20, 5), Side::Right),
                card("b", Category::Care, (5, -5), (-15, 5), Side::Left),
                card("c", Category::Safety, (0, -35), (-5, 25), Side::Right),
                card("d", Category::Energy, (10, -10), (-10, 10), Side::Left),
            ])
            .unwrap(),
        )
    }

    fn controller(deck_size: usize) -> GameController {
        GameController::new(
            catalog(),
            DeckSelector::seeded(7),
            SessionSettings {
                deck_size,
                ..SessionSettings::default()
            },
        )
    }

    fn playing(deck_size: usize) -> GameController {
        let mut game = controller(deck_size);
        game.begin_briefing().unwrap();
        game.enter_session().unwrap();
        game
    }

    fn play_all(game: &mut GameController, side: Side) {
        while game.phase() == GamePhase::Playing {
            game.commit_choice(side).unwrap();
            game.advance_turn().unwrap();
        }
    }

    #[test]
    fn starts_in_intro_with_starting_ledger() {
        let game = controller(3);
        assert_eq!(game.phase(), GamePhase::Intro);
        assert_eq!(game.ledger(), &SessionLedger::new());
        assert!(game.current_card().is_none());
    }

    #[test]
    fn enter_session_deals_requested_size() {
        let game = playing(3);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.deck().len(), 3);
        assert_eq!(game.played_card_ids().len(), 3);
        assert!(game.current_card().is_some());
    }

    #[test]
    fn enter_session_requires_briefing() {
        let mut game = controller(3);
        assert!(matches!(
            game.enter_session(),
            Err(SessionError::InvalidPhase { phase: GamePhase::Intro, .. })
        ));
    }

    #[test]
    fn turn_operations_outside_play_are_rejected() {
        let mut game = controller(3);
        assert!(matches!(
            game.commit_choice(Side::Left),
            Err(SessionError::InvalidPhase { .. })
        ));
        assert!(matches!(game.undo(), Err(SessionError::InvalidPhase { .. })));
        assert!(matches!(
            game.advance_turn(),
            Err(SessionError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn last_advance_moves_to_session_end_choice() {
        let mut game = playing(2);
        game.commit_choice(Side::Left).unwrap();
        assert_eq!(game.advance_turn().unwrap(), TurnAdvance::Next(1));
        game.commit_choice(Side::Left).unwrap();
        assert_eq!(game.advance_turn().unwrap(), TurnAdvance::DeckExhausted);
        assert_eq!(game.phase(), GamePhase::SessionEndChoice);
        assert!(matches!(game.undo(), Err(SessionError::InvalidPhase { .. })));
    }

    #[test]
    fn finish_session_classifies_ledger() {
        let mut game = playing(4);
        play_all(&mut game, Side::Left);

        let outcome = game.finish_session().unwrap();
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(outcome, game.outcome());
        // Two of the four cards prefer the left side.
        assert_eq!(outcome.alignment_percent.value(), 50);
    }

    #[test]
    fn finished_review_becomes_authoritative() {
        let mut game = playing(4);
        play_all(&mut game, Side::Left);
        let before = game.ledger().totals();

        game.extend_session().unwrap();
        let totals = game.toggle_review_vote(0).unwrap();
        assert_ne!(totals, before);
        assert_eq!(game.live_totals(), totals);

        let outcome = game.finish_review().unwrap();
        assert_eq!(game.ledger().totals(), totals);
        assert_ne!(game.ledger().votes()[0].side, Side::Left);
        assert!(!game.ledger().can_undo());
        assert_eq!(outcome, classify_totals(&totals, 4));
    }

    #[test]
    fn toggle_outside_review_is_rejected() {
        let mut game = playing(2);
        assert!(matches!(
            game.toggle_review_vote(0),
            Err(SessionError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn finish_session_is_rejected_during_review() {
        let mut game = playing(1);
        play_all(&mut game, Side::Right);
        game.extend_session().unwrap();
        assert!(matches!(
            game.finish_session(),
            Err(SessionError::InvalidPhase { .. })
        ));
    }

    #[test]
    fn reset_from_game_over_returns_to_intro() {
        let mut game = playing(2);
        play_all(&mut game, Side::Right);
        game.finish_session().unwrap();

        game.reset();
        assert_eq!(game.phase(), GamePhase::Intro);
        assert_eq!(game.ledger(), &SessionLedger::new());
        assert!(game.deck().is_empty());
    }

    #[test]
    fn reset_mid_session_is_allowed() {
        let mut game = playing(3);
        game.commit_choice(Side::Left).unwrap();
        game.reset();
        assert_eq!(game.phase(), GamePhase::Intro);
        assert!(game.ledger().votes().is_empty());
    }

    #[test]
    fn next_session_avoids_played_cards_until_exhausted() {
        let mut game = playing(2);
        let first: Vec<CardId> = game.deck().card_ids().to_vec();
        game.reset();
        game.begin_briefing().unwrap();
        game.enter_session().unwrap();

        for id in game.deck().card_ids() {
            assert!(!first.contains(id));
        }
        assert_eq!(game.played_card_ids().len(), 4);

        game.reset();
        game.begin_briefing().unwrap();
        game.enter_session().unwrap();
        assert_eq!(game.deck().len(), 2);
        assert_eq!(game.played_card_ids().len(), 2);
    }

    #[test]
    fn empty_catalog_cannot_enter_session() {
        let mut game = GameController::new(
            Arc::new(CardCatalog::new(vec![]).unwrap()),
            DeckSelector::seeded(1),
            SessionSettings::default(),
        );
        game.begin_briefing().unwrap();
        assert_eq!(game.enter_session().err(), Some(SessionError::EmptyDeck));
        assert_eq!(game.phase(), GamePhase::Briefing);
    }

    #[test]
    fn listeners_receive_events_in_order() {
        let log = Arc::new(RecordingListener::new());
        let mut game = controller(1);
        game.subscribe(log.clone());

        game.begin_briefing().unwrap();
        game.enter_session().unwrap();
        game.commit_choice(Side::Right).unwrap();
        game.advance_turn().unwrap();
        game.finish_session().unwrap();

        assert_eq!(
            log.event_types(),
            vec![
                "session.phase_changed.v1",
                "session.phase_changed.v1",
                "session.started.v1",
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

    #[test]
    fn undo_emits_turn_undone() {
        let log = Arc::new(RecordingListener::new());
        let mut game = playing(2);
        game.subscribe(log.clone());

        game.commit_choice(Side::Left).unwrap();
        game.undo().unwrap();
        assert!(log.has_event("session.turn_undone.v1"));
        assert_eq!(game.ledger().turn_index(), 0);
    }

    #[test]
    fn undo_of_advanced_turn_restarts_previous_card() {
        let log = Arc::new(RecordingListener::new());
        let mut game = playing(2);
        let first = game.deck().card_ids()[0].clone();
        game.commit_choice(Side::Left).unwrap();
        game.advance_turn().unwrap();
        game.subscribe(log.clone());

        game.undo().unwrap();

        assert_eq!(
            log.event_types(),
            vec!["session.turn_undone.v1", "session.turn_started.v1"]
        );
        match &log.events()[1].kind {
            SessionEventKind::TurnStarted {
                turn_index,
                card_id,
            } => {
                assert_eq!(*turn_index, 0);
                assert_eq!(card_id, &first);
            }
            other => panic!("Expected TurnStarted, got {:?}", other),
        }
    }

    fn budget_heavy_catalog() -> Arc<CardCatalog> {
        Arc::new(
            CardCatalog::new(vec![
                card("b1", Category::Budget, (-5, 0), (20, 5), Side::Right),
                card("b2", Category::Budget, (5, -5), (-15, 5), Side::Left),
                card("b3", Category::Budget, (0, -5), (-5, 10), Side::Right),
                card("b4", Category::Budget, (10, -10), (-10, 10), Side::Left),
                card("c1", Category::Care, (5, 0), (-5, 5), Side::Left),
                card("s1", Category::Safety, (0, -15), (-5, 15), Side::Right),
                card("e1", Category::Energy, (10, -10), (-10, 10), Side::Left),
                card("f1", Category::Fixes, (0, 5), (5, 0), Side::Right),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn category_filter_survives_played_card_exclusion() {
        let mut game = GameController::new(
            budget_heavy_catalog(),
            DeckSelector::seeded(3),
            SessionSettings {
                deck_size: 2,
                category_filter: Some(Category::Budget),
                exclude_played: true,
            },
        );

        for _ in 0..4 {
            game.begin_briefing().unwrap();
            game.enter_session().unwrap();
            for id in game.deck().card_ids() {
                let card = game.catalog().get(id).unwrap();
                assert_eq!(card.category, Category::Budget);
            }
            game.reset();
        }
    }

    #[test]
    fn third_filtered_session_starts_a_fresh_played_set() {
        let mut game = GameController::new(
            budget_heavy_catalog(),
            DeckSelector::seeded(5),
            SessionSettings {
                deck_size: 2,
                category_filter: Some(Category::Budget),
                exclude_played: true,
            },
        );
        for _ in 0..2 {
            game.begin_briefing().unwrap();
            game.enter_session().unwrap();
            game.reset();
        }
        assert_eq!(game.played_card_ids().len(), 4);

        game.begin_briefing().unwrap();
        game.enter_session().unwrap();
        assert_eq!(game.played_card_ids(), game.deck().card_ids());
    }
}
