//! Integration tests for the external collaborators.
//!
//! File-backed adapters run against a temporary directory; failing
//! in-memory adapters check that a session result never depends on them.

use std::sync::Arc;

use tempfile::TempDir;

use policy_deck::adapters::{
    InMemoryHighScoreStore, InMemoryLeadSink, JsonFileHighScoreStore, JsonLinesLeadSink,
    MockAdvisor,
};
use policy_deck::application::{
    AdvisorFallbacks, AskAdvisorCommand, AskAdvisorHandler, CaptureLeadCommand,
    CaptureLeadHandler, GameController, RecordHighScoreCommand, RecordHighScoreHandler,
    SessionSettings,
};
use policy_deck::domain::catalog::CardCatalog;
use policy_deck::domain::deck::DeckSelector;
use policy_deck::domain::foundation::{Percentage, Side};
use policy_deck::domain::outcome::{classify, Outcome};
use policy_deck::domain::session::{GamePhase, TurnAdvance};
use policy_deck::ports::{ExternalServiceError, HighScoreStore, HIGH_SCORE_NAMESPACE};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn finished_game() -> GameController {
    let mut game = GameController::new(
        CardCatalog::builtin(),
        DeckSelector::seeded(42),
        SessionSettings::default(),
    );
    game.begin_briefing().unwrap();
    game.enter_session().unwrap();
    loop {
        let side = game.current_card().map(|c| c.preferred_side).unwrap();
        game.commit_choice(side).unwrap();
        if game.advance_turn().unwrap() == TurnAdvance::DeckExhausted {
            break;
        }
    }
    game.finish_session().unwrap();
    game
}

fn outcome(percent: u8) -> Outcome {
    classify(10, 30, u32::from(percent), 100)
}

// =============================================================================
// High score
// =============================================================================

#[tokio::test]
async fn high_score_persists_across_store_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores").join("high_score.json");

    let handler = RecordHighScoreHandler::new(Arc::new(JsonFileHighScoreStore::new(&path)));
    let first = handler
        .handle(RecordHighScoreCommand {
            alignment_percent: Percentage::new(40),
        })
        .await;
    assert!(first.is_new_record);
    assert_eq!(first.best, Percentage::new(40));

    let lower = handler
        .handle(RecordHighScoreCommand {
            alignment_percent: Percentage::new(30),
        })
        .await;
    assert!(!lower.is_new_record);
    assert_eq!(lower.best, Percentage::new(40));

    let reopened = JsonFileHighScoreStore::new(&path);
    assert_eq!(
        reopened.get(HIGH_SCORE_NAMESPACE).await.unwrap(),
        Some(Percentage::new(40))
    );
}

#[tokio::test]
async fn equal_score_is_not_a_new_record() {
    let store = InMemoryHighScoreStore::with_score(HIGH_SCORE_NAMESPACE, Percentage::new(70));
    let handler = RecordHighScoreHandler::new(Arc::new(store));

    let result = handler
        .handle(RecordHighScoreCommand {
            alignment_percent: Percentage::new(70),
        })
        .await;

    assert!(!result.is_new_record);
    assert_eq!(result.best, Percentage::new(70));
}

#[tokio::test]
async fn unreadable_high_score_reports_current_score() {
    let store = InMemoryHighScoreStore::failing(ExternalServiceError::storage("corrupt"));
    let handler = RecordHighScoreHandler::new(Arc::new(store));

    let result = handler
        .handle(RecordHighScoreCommand {
            alignment_percent: Percentage::new(55),
        })
        .await;

    assert!(!result.is_new_record);
    assert_eq!(result.best, Percentage::new(55));
}

// =============================================================================
// Lead capture
// =============================================================================

#[tokio::test]
async fn captured_lead_is_appended_as_one_json_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leads.jsonl");
    let handler = CaptureLeadHandler::new(Arc::new(JsonLinesLeadSink::new(&path)));

    for zip in ["98501", "98502"] {
        let result = handler
            .handle(CaptureLeadCommand {
                email: " voter@example.com ".to_string(),
                zip: zip.to_string(),
                outcome: outcome(70),
            })
            .unwrap();
        result.write.await.unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["contact"], "voter@example.com");
    assert_eq!(lines[0]["zip"], "98501");
    assert_eq!(lines[0]["archetype"], "Pragmatic Builder");
    assert_eq!(lines[0]["alignment_percent"], 70);
    assert_eq!(lines[1]["zip"], "98502");
}

#[tokio::test]
async fn invalid_contact_details_are_rejected_before_writing() {
    let sink = Arc::new(InMemoryLeadSink::new());
    let handler = CaptureLeadHandler::new(sink.clone());

    let bad_email = handler.handle(CaptureLeadCommand {
        email: "not-an-email".to_string(),
        zip: "98501".to_string(),
        outcome: outcome(50),
    });
    let bad_zip = handler.handle(CaptureLeadCommand {
        email: "voter@example.com".to_string(),
        zip: "985".to_string(),
        outcome: outcome(50),
    });

    assert!(bad_email.is_err());
    assert!(bad_zip.is_err());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn failing_lead_sink_leaves_the_finished_session_untouched() {
    let game = finished_game();
    let before = game.outcome();

    let sink = InMemoryLeadSink::failing(ExternalServiceError::storage("disk full"));
    let handler = CaptureLeadHandler::new(Arc::new(sink));
    let result = handler
        .handle(CaptureLeadCommand {
            email: "voter@example.com".to_string(),
            zip: "98501".to_string(),
            outcome: before,
        })
        .unwrap();
    result.write.await.unwrap();

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.outcome(), before);
    assert_eq!(result.lead.alignment_percent, before.alignment_percent);
}

// =============================================================================
// Advisor
// =============================================================================

#[tokio::test]
async fn advisor_failure_falls_back_without_touching_the_session() {
    let mut game = GameController::new(
        CardCatalog::builtin(),
        DeckSelector::seeded(7),
        SessionSettings::default(),
    );
    game.begin_briefing().unwrap();
    game.enter_session().unwrap();
    let card = game.current_card().cloned().unwrap();
    let before = game.ledger().clone();

    let advisor = MockAdvisor::new().with_error(ExternalServiceError::Network("reset".into()));
    let handler = AskAdvisorHandler::new(Arc::new(advisor), AdvisorFallbacks::default());
    let answer = handler.handle(AskAdvisorCommand { card }).await;

    assert!(answer.from_fallback);
    assert_eq!(answer.text, "Comms link down.");
    assert_eq!(game.ledger(), &before);
    game.commit_choice(Side::Left).unwrap();
}

#[tokio::test]
async fn advisor_prompt_names_the_current_card() {
    let catalog = CardCatalog::builtin();
    let card = catalog.cards()[0].clone();
    let advisor = Arc::new(MockAdvisor::new().with_response("Sell it."));
    let handler = AskAdvisorHandler::new(advisor.clone(), AdvisorFallbacks::default());

    let answer = handler
        .handle(AskAdvisorCommand { card: card.clone() })
        .await;

    assert!(!answer.from_fallback);
    assert_eq!(answer.text, "Sell it.");
    assert_eq!(advisor.call_count(), 1);
    assert!(advisor.calls()[0].contains(&card.title));
}
