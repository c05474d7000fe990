//! Headless play and evaluation reports.

use crate::config::{EMPTY_SYMBOL, Settings};
use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_core::{Board, GameState, Mark, Outcome, Position, evaluate};
use tracing::{debug, instrument, warn};

/// A move request that did not change the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// The request as given on the command line.
    pub request: String,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of a headless command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Final board, one entry per cell.
    pub board: [Option<Mark>; 9],
    /// Final outcome.
    pub outcome: Outcome,
    /// Status label for the outcome.
    pub status: String,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Mark to move next.
    pub turn: Mark,
    /// Requests that were ignored, in order.
    pub rejected: Vec<RejectedMove>,
}

impl Report {
    fn new(board: &Board, outcome: Outcome, turn: Mark, rejected: Vec<RejectedMove>) -> Self {
        Self {
            board: board.cells().map(|cell| cell.mark()),
            outcome,
            status: outcome.to_string(),
            winning_line: outcome.winning_line().map(|line| line.indices()),
            turn,
            rejected,
        }
    }

    /// Renders the report as text using the configured symbols.
    ///
    /// Winning cells are wrapped in brackets.
    pub fn render(&self, settings: &Settings) -> String {
        let mut out = String::new();
        for row in 0..3 {
            if row > 0 {
                out.push_str("\n---+---+---\n");
            }
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let symbol = self.board[index].map_or(EMPTY_SYMBOL, |mark| settings.symbol(mark));
                    if self.winning_line.is_some_and(|line| line.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            out.push_str(&cells.join("|"));
        }

        out.push_str(&format!("\n\nStatus: {}", self.status));
        if !self.outcome.is_terminal() {
            out.push_str(&format!("\nTurn: {}", settings.symbol(self.turn)));
        }
        for rejected in &self.rejected {
            out.push_str(&format!("\nIgnored {}: {}", rejected.request, rejected.reason));
        }
        out
    }

    /// Renders the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}

/// Plays `requests` from a fresh game.
///
/// Each request is an index (0-8) or a position label. Requests that cannot
/// be parsed or that the game rejects are recorded and otherwise ignored.
#[instrument(skip(requests), fields(count = requests.len()))]
pub fn play<S: AsRef<str>>(requests: &[S]) -> Report {
    let mut state = GameState::new();
    let mut rejected = Vec::new();

    for request in requests {
        let request = request.as_ref();
        let Some(position) = Position::from_label_or_number(request) else {
            warn!(request, "Unrecognized move");
            rejected.push(RejectedMove {
                request: request.to_string(),
                reason: "not a board position".to_string(),
            });
            continue;
        };

        match state.try_move(position.index()) {
            Ok(next) => {
                debug!(request, %position, "Move applied");
                state = next;
            }
            Err(e) => {
                warn!(request, error = %e, "Move ignored");
                rejected.push(RejectedMove {
                    request: request.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(outcome = %state.outcome(), rejected = rejected.len(), "Headless game finished");
    Report::new(state.board(), state.outcome(), state.turn(), rejected)
}

/// Evaluates a board given as text, e.g. `XOX/OXO/OXO`.
#[instrument]
pub fn evaluate_board(text: &str) -> Result<Report> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Invalid board {:?}", text))?;
    let outcome = evaluate(&board);
    let turn = next_turn(&board);
    Ok(Report::new(&board, outcome, turn, Vec::new()))
}

/// Cross moves whenever both marks have been played equally often.
fn next_turn(board: &Board) -> Mark {
    let crosses = board.cells().iter().filter(|c| c.mark() == Some(Mark::Cross)).count();
    let circles = board.cells().iter().filter(|c| c.mark() == Some(Mark::Circle)).count();
    if crosses > circles {
        Mark::Circle
    } else {
        Mark::Cross
    }
}
