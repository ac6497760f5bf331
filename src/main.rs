//! Terminal driver for the policy deck simulator.
//!
//! Reads one command per line from stdin. Logs go to stderr so they do not
//! interleave with the game text.
//!
//! ```bash
//! POLICY_DECK__GAME__DECK_SIZE=5 POLICY_DECK__GAME__SEED=7 policy-deck
//! ```

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::task::JoinHandle;

use policy_deck::adapters::{
    GeminiAdvisor, GeminiConfig, JsonFileHighScoreStore, JsonLinesLeadSink, TracingListener,
};
use policy_deck::application::{
    AskAdvisorCommand, AskAdvisorHandler, CaptureLeadCommand, CaptureLeadHandler,
    GameController, RecordHighScoreCommand, RecordHighScoreHandler,
};
use policy_deck::config::{AppConfig, LoggingConfig};
use policy_deck::domain::catalog::{CardCatalog, CardOption, DecisionCard};
use policy_deck::domain::deck::DeckSelector;
use policy_deck::domain::foundation::Side;
use policy_deck::domain::outcome::Outcome;
use policy_deck::domain::session::{GamePhase, LedgerTotals, SessionError, TurnAdvance};

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Line-oriented stdin reader.
struct Terminal {
    lines: Lines<BufReader<Stdin>>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `message` and reads one trimmed line. `None` on EOF.
    async fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{} ", message);
        std::io::stdout().flush()?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }
}

/// Optional collaborators, built from feature flags.
struct Collaborators {
    advisor: Option<AskAdvisorHandler>,
    high_score: Option<RecordHighScoreHandler>,
    leads: Option<CaptureLeadHandler>,
    pending_writes: Vec<JoinHandle<()>>,
}

impl Collaborators {
    fn from_config(config: &AppConfig) -> Result<Self> {
        let advisor = if config.features.enable_advisor {
            let gemini = GeminiConfig::new(config.advisor.api_key.clone())
                .with_model(config.advisor.model.clone())
                .with_base_url(config.advisor.base_url.clone())
                .with_timeout(config.advisor.timeout());
            let service = GeminiAdvisor::new(gemini).context("building advisor")?;
            Some(AskAdvisorHandler::new(
                Arc::new(service),
                config.advisor.fallbacks(),
            ))
        } else {
            None
        };

        let high_score = config.features.enable_high_score.then(|| {
            RecordHighScoreHandler::new(Arc::new(JsonFileHighScoreStore::new(
                &config.storage.high_score_path,
            )))
        });

        let leads = config.features.enable_lead_capture.then(|| {
            CaptureLeadHandler::new(Arc::new(JsonLinesLeadSink::new(&config.storage.leads_path)))
        });

        Ok(Self {
            advisor,
            high_score,
            leads,
            pending_writes: Vec::new(),
        })
    }

    async fn drain(self) {
        for write in self.pending_writes {
            let _ = write.await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;
    init_tracing(&config.logging);

    let catalog = match &config.game.catalog_path {
        Some(path) => Arc::new(
            CardCatalog::from_yaml_file(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
        ),
        None => CardCatalog::builtin(),
    };
    tracing::info!(cards = catalog.len(), "catalog loaded");

    let selector = config.game.seed.map(DeckSelector::seeded).unwrap_or_default();
    let mut game = GameController::new(catalog, selector, config.session_settings());
    game.subscribe(Arc::new(TracingListener));

    let mut collaborators = Collaborators::from_config(&config)?;
    let mut terminal = Terminal::new();

    let result = run(&mut game, &mut collaborators, &mut terminal).await;
    collaborators.drain().await;
    result
}

async fn run(
    game: &mut GameController,
    collaborators: &mut Collaborators,
    terminal: &mut Terminal,
) -> Result<()> {
    loop {
        let keep_going = match game.phase() {
            GamePhase::Intro => intro(game, terminal).await?,
            GamePhase::Briefing => briefing(game, terminal).await?,
            GamePhase::Playing => play_turn(game, collaborators, terminal).await?,
            GamePhase::SessionEndChoice => session_end(game, terminal).await?,
            GamePhase::ReviewSession => review(game, terminal).await?,
            GamePhase::GameOver => game_over(game, collaborators, terminal).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

async fn intro(game: &mut GameController, terminal: &mut Terminal) -> Result<bool> {
    println!("\n=== FIX WASHINGTON ===");
    println!("The session is about to begin. Every vote moves the budget and voter trust.");
    match terminal.prompt("[enter] start, [q] quit >").await? {
        None => Ok(false),
        Some(line) if line.eq_ignore_ascii_case("q") => Ok(false),
        Some(_) => {
            game.begin_briefing()?;
            Ok(true)
        }
    }
}

async fn briefing(game: &mut GameController, terminal: &mut Terminal) -> Result<bool> {
    let totals = game.ledger().totals();
    println!("\nBriefing: the state is in crisis.");
    print_meters(&totals);
    println!("Swipe left or right on each bill. Choose with [l] or [r].");
    if terminal.prompt("[enter] enter the chamber >").await?.is_none() {
        return Ok(false);
    }
    game.enter_session()?;
    Ok(true)
}

async fn play_turn(
    game: &mut GameController,
    collaborators: &mut Collaborators,
    terminal: &mut Terminal,
) -> Result<bool> {
    let Some(card) = game.current_card().cloned() else {
        return Ok(false);
    };
    print_card(game, &card);

    loop {
        let Some(line) = terminal
            .prompt("[l]eft [r]ight [a]dvisor [u]ndo [q]uit >")
            .await?
        else {
            return Ok(false);
        };

        match line.to_ascii_lowercase().as_str() {
            "q" => return Ok(false),
            "u" => {
                if let Err(e) = game.undo() {
                    report(&e);
                    continue;
                }
                return Ok(true);
            }
            "a" => match &collaborators.advisor {
                Some(advisor) => {
                    let answer = advisor
                        .handle(AskAdvisorCommand { card: card.clone() })
                        .await;
                    println!("  Advisor: {}", answer.text);
                }
                None => println!("  The advisor is disabled."),
            },
            other => match other.parse::<Side>() {
                Ok(side) => {
                    let option = game.commit_choice(side)?;
                    print_feedback(game, &card, side, &option);
                    return after_commit(game, terminal).await;
                }
                Err(_) => println!("  Unknown command."),
            },
        }
    }
}

/// Feedback is showing: continue, or undo back to the same card.
async fn after_commit(game: &mut GameController, terminal: &mut Terminal) -> Result<bool> {
    let Some(line) = terminal.prompt("[enter] next card, [u]ndo >").await? else {
        return Ok(false);
    };
    if line.eq_ignore_ascii_case("u") {
        game.undo()?;
        return Ok(true);
    }
    if let TurnAdvance::DeckExhausted = game.advance_turn()? {
        println!("\nThat was the last bill of the session.");
    }
    Ok(true)
}

async fn session_end(game: &mut GameController, terminal: &mut Terminal) -> Result<bool> {
    print_meters(&game.ledger().totals());
    let Some(line) = terminal
        .prompt("[s]pecial session to revisit votes, [f]inish >")
        .await?
    else {
        return Ok(false);
    };
    match line.to_ascii_lowercase().as_str() {
        "s" => {
            game.extend_session()?;
        }
        "f" => {
            game.finish_session()?;
        }
        _ => println!("  Choose [s] or [f]."),
    }
    Ok(true)
}

async fn review(game: &mut GameController, terminal: &mut Terminal) -> Result<bool> {
    println!("\n=== SPECIAL SESSION ===");
    if let Some(ballot) = game.review_ballot() {
        for (index, vote) in ballot.votes().iter().enumerate() {
            let title = game
                .catalog()
                .get(&vote.card_id)
                .map(|card| card.title.as_str())
                .unwrap_or("(retired bill)");
            println!("  {:>2}. {:<28} {}", index + 1, title, vote.side);
        }
    }
    print_meters(&game.live_totals());

    let Some(line) = terminal.prompt("[number] flip a vote, [d]one >").await? else {
        return Ok(false);
    };
    if line.eq_ignore_ascii_case("d") {
        game.finish_review()?;
        return Ok(true);
    }
    match line.parse::<usize>() {
        Ok(n) if n >= 1 => {
            if let Err(e) = game.toggle_review_vote(n - 1) {
                report(&e);
            }
        }
        _ => println!("  Enter a vote number or [d]."),
    }
    Ok(true)
}

async fn game_over(
    game: &mut GameController,
    collaborators: &mut Collaborators,
    terminal: &mut Terminal,
) -> Result<bool> {
    let outcome = game.outcome();
    print_outcome(game, &outcome);

    if let Some(high_score) = &collaborators.high_score {
        let result = high_score
            .handle(RecordHighScoreCommand {
                alignment_percent: outcome.alignment_percent,
            })
            .await;
        if result.is_new_record {
            println!("New high score: {}", result.best);
        } else {
            println!("High score: {}", result.best);
        }
    }
    println!("\n{}", outcome.share_message());

    if collaborators.leads.is_some() {
        capture_lead(&outcome, collaborators, terminal).await?;
    }

    let Some(line) = terminal.prompt("[n]ew game, [q]uit >").await? else {
        return Ok(false);
    };
    if line.eq_ignore_ascii_case("n") {
        game.reset();
        return Ok(true);
    }
    Ok(false)
}

async fn capture_lead(
    outcome: &Outcome,
    collaborators: &mut Collaborators,
    terminal: &mut Terminal,
) -> Result<()> {
    let Some(email) = terminal.prompt("Email for updates (blank to skip) >").await? else {
        return Ok(());
    };
    if email.is_empty() {
        return Ok(());
    }
    let Some(zip) = terminal.prompt("ZIP code >").await? else {
        return Ok(());
    };

    if let Some(leads) = &collaborators.leads {
        match leads.handle(CaptureLeadCommand {
            email,
            zip,
            outcome: *outcome,
        }) {
            Ok(result) => {
                collaborators.pending_writes.push(result.write);
                println!("Thanks. You're on the list.");
            }
            Err(e) => println!("  {}", e),
        }
    }
    Ok(())
}

/// Shows a rejected request to the player; the code goes to the log.
fn report(error: &SessionError) {
    tracing::debug!(code = %error.code(), "request rejected");
    println!("  {}", error.message());
}

fn print_meters(totals: &LedgerTotals) {
    println!(
        "  Budget: {:>4}   Trust: {:>4}   Streak: {}",
        totals.meter_a, totals.meter_b, totals.streak
    );
}

fn print_card(game: &GameController, card: &DecisionCard) {
    let turn = game.ledger().turn_index() + 1;
    println!("\n--- Bill {}/{} [{}] ---", turn, game.deck().len(), card.category);
    println!("{}", card.title);
    println!("{}", card.description);
    println!("  [L] {} - {}", card.left.label, card.left.forecast);
    println!("  [R] {} - {}", card.right.label, card.right.forecast);
    print_meters(&game.ledger().totals());
}

fn print_feedback(game: &GameController, card: &DecisionCard, side: Side, option: &CardOption) {
    let verdict = if card.is_preferred(side) {
        "Aligned with reform."
    } else {
        "Off the reform agenda."
    };
    println!("\n{} {}", verdict, option.feedback);
    if option.has_budget_badge() {
        println!("  Budget {:+}", option.budget_delta);
    }
    if option.has_trust_badge() {
        println!("  Trust {:+}", option.trust_delta);
    }
    if !card.context.is_empty() {
        println!("  Context: {}", card.context);
    }
    if !card.reality.is_empty() {
        println!("  Reality: {}", card.reality);
    }
    println!("  {} of players agreed.", card.community_agreement);
    print_meters(&game.ledger().totals());
}

fn print_outcome(game: &GameController, outcome: &Outcome) {
    println!("\n=== SESSION ADJOURNED ===");
    println!(
        "{} ({} alignment, {})",
        outcome.archetype, outcome.alignment_percent, outcome.spectrum
    );
    println!("{}", outcome.archetype.description());
    println!("\"{}\"", outcome.archetype.pitch());
    println!("\nState of the State: {}", outcome.style);
    println!("{}", outcome.style.description());
    print_meters(&game.ledger().totals());
}
