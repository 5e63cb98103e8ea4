//! Headless games played by a scripted player.
//!
//! The simulator drives a [`GameSession`] bound to a [`TranscriptView`] on
//! virtual time: it jumps straight to each pending deadline, answers every
//! player turn with the correct pads and, if asked, slips once on a chosen
//! round. Every view call is kept with the moment it happened.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use simon_core::{
    GamePhase, GameSession, Outcome, Pad, RoundOutcome, SequenceGenerator, SimonError, Timing,
    TranscriptView, ViewEvent,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How the scripted player behaves.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SimulationOptions {
    /// Level selector passed to `start`.
    level: Option<i64>,
    /// Seed for the sequence generator.
    seed: u64,
    /// Round whose final press is wrong.
    mistake_at: Option<usize>,
    /// Pause before each press.
    press_gap: Duration,
}

impl SimulationOptions {
    /// Options for a flawless player at `level`.
    pub fn new(level: Option<i64>, seed: u64) -> Self {
        Self {
            level,
            seed,
            mistake_at: None,
            press_gap: Duration::from_millis(250),
        }
    }

    /// Makes the player press a wrong pad at the end of `round`.
    pub fn with_mistake_at(mut self, round: Option<usize>) -> Self {
        self.mistake_at = round;
        self
    }

    /// Sets the pause before each press.
    pub fn with_press_gap(mut self, gap: Duration) -> Self {
        self.press_gap = gap;
        self
    }
}

/// A view call and the session time it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Milliseconds since the game started.
    pub at_ms: u64,
    /// What the view was told.
    pub event: ViewEvent,
}

/// Result of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SimulationReport {
    /// How the game ended.
    outcome: Outcome,
    /// Round target of the level played.
    max_rounds: usize,
    /// Rounds the player got through.
    rounds_completed: usize,
    /// The longest sequence the computer played.
    longest_sequence: Vec<Pad>,
    /// Session time at game over.
    elapsed_ms: u64,
    /// Every view call in order.
    transcript: Vec<TranscriptEntry>,
}

/// Plays one game to its end.
///
/// # Errors
///
/// Propagates [`SimonError`] from `start` (an invalid level) or from a
/// computer turn.
#[instrument(skip(timing), fields(level = ?options.level, seed = options.seed))]
pub fn simulate(timing: Timing, options: &SimulationOptions) -> Result<SimulationReport, SimonError> {
    let mut session = GameSession::new(
        TranscriptView::new(),
        SequenceGenerator::seeded(options.seed),
        timing,
    );
    let mut transcript = Vec::new();

    session.start(options.level)?;
    let max_rounds = session.max_rounds();
    collect(&mut session, &mut transcript);
    info!(max_rounds, "Simulation started");

    let mut rounds_completed = 0;
    let mut longest_sequence = Vec::new();

    while session.phase().is_active() {
        if session.phase() != GamePhase::PlayerTurn {
            let Some(deadline) = session.next_deadline() else {
                break;
            };
            session.advance_to(deadline)?;
            collect(&mut session, &mut transcript);
            continue;
        }

        let round = session.round();
        let expected = session.sequence().to_vec();
        longest_sequence.clone_from(&expected);

        for (index, pad) in expected.iter().enumerate() {
            let at = session.now() + options.press_gap;
            session.advance_to(at)?;
            collect(&mut session, &mut transcript);

            let slip = options.mistake_at == Some(round) && index + 1 == expected.len();
            let choice = if slip { wrong_pad(*pad) } else { *pad };
            debug!(round, %choice, slip, "Scripted press");

            let result = session.press(choice);
            collect(&mut session, &mut transcript);

            if result.map(|r| r.outcome) == Some(RoundOutcome::RoundComplete) {
                rounds_completed += 1;
            }
            if session.phase() != GamePhase::PlayerTurn {
                break;
            }
        }
    }

    let outcome = session.outcome().unwrap_or(Outcome::Lost);
    info!(%outcome, rounds_completed, "Simulation finished");

    Ok(SimulationReport {
        outcome,
        max_rounds,
        rounds_completed,
        longest_sequence,
        elapsed_ms: millis(session.now()),
        transcript,
    })
}

/// Renders one transcript line for the console.
pub fn format_entry(entry: &TranscriptEntry) -> String {
    let what = match &entry.event {
        ViewEvent::Status(text) => format!("status    {}", text),
        ViewEvent::Heading(text) => format!("heading   {}", text),
        ViewEvent::Notify(text) => format!("notice    {}", text),
        ViewEvent::InputLocked(locked) => format!("input     {}", if *locked { "locked" } else { "open" }),
        ViewEvent::StartEnabled(enabled) => format!("start     {}", if *enabled { "enabled" } else { "disabled" }),
        ViewEvent::StatusVisible(visible) => format!("status    {}", if *visible { "shown" } else { "hidden" }),
        ViewEvent::Activate(pad) => format!("light on  {}", pad),
        ViewEvent::Deactivate(pad) => format!("light off {}", pad),
    };
    format!("[{:>5}.{:03}s] {}", entry.at_ms / 1000, entry.at_ms % 1000, what)
}

fn collect(session: &mut GameSession<TranscriptView>, transcript: &mut Vec<TranscriptEntry>) {
    let at_ms = millis(session.now());
    transcript.extend(
        session
            .view_mut()
            .take_events()
            .into_iter()
            .map(|event| TranscriptEntry { at_ms, event }),
    );
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn wrong_pad(expected: Pad) -> Pad {
    Pad::ALL
        .into_iter()
        .find(|pad| *pad != expected)
        .unwrap_or(expected)
}
