//! Interactive query loop, modeled as an explicit state machine so the
//! finder stays free of I/O concerns.
//!
//! The session owns no streams: the caller feeds it one line at a time via
//! [`Session::offer`] and shows [`Session::prompt`] between calls. `None`
//! input means EOF or an interrupt and cancels the session.

use crate::board::{Board, Cell};
use crate::common::BoardError;
use crate::finder::{find_all_shortest_paths, PathSet};
use crate::logging::DiagnosticSink;

/// Where the prompt loop currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingStart,
    AwaitingEnd { start: Cell },
    Computing { start: Cell, end: Cell },
    Done,
    Cancelled,
}

/// Outcome of feeding one line of input to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Input accepted; show the next prompt.
    Prompt,
    /// Input rejected; repeat the current prompt.
    Invalid(BoardError),
    /// A query completed with at least one shortest path.
    Found {
        start: Cell,
        end: Cell,
        paths: PathSet,
    },
    /// A query completed with no connecting path. Not fatal.
    NoPath { start: Cell, end: Cell },
    /// The session was cancelled.
    Cancelled,
}

pub struct Session {
    board: Board,
    state: SessionState,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Session {
            board,
            state: SessionState::AwaitingStart,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The question to put to the user for the current state.
    pub fn prompt(&self) -> &'static str {
        match self.state {
            SessionState::AwaitingStart => "Start position (e.g. a1): ",
            SessionState::AwaitingEnd { .. } => "End position (e.g. h8): ",
            _ => "",
        }
    }

    /// Feed one line of user input; `None` means EOF or an interrupt.
    pub fn offer(&mut self, line: Option<&str>, sink: &mut dyn DiagnosticSink) -> SessionEvent {
        let Some(line) = line else {
            self.state = SessionState::Cancelled;
            return SessionEvent::Cancelled;
        };
        let input = line.trim();

        // A finished query accepts new input as the start of the next one.
        if self.state == SessionState::Done {
            self.state = SessionState::AwaitingStart;
        }

        match self.state {
            SessionState::AwaitingStart => match self.board.from_notation(input) {
                Ok(start) => {
                    self.state = SessionState::AwaitingEnd { start };
                    SessionEvent::Prompt
                }
                Err(err) => {
                    sink.error(&err.to_string());
                    SessionEvent::Invalid(err)
                }
            },
            SessionState::AwaitingEnd { start } => match self.board.from_notation(input) {
                Ok(end) => self.compute(start, end, sink),
                Err(err) => {
                    sink.error(&err.to_string());
                    SessionEvent::Invalid(err)
                }
            },
            // Transient within compute(), never observable between calls.
            SessionState::Computing { .. } | SessionState::Done => SessionEvent::Prompt,
            SessionState::Cancelled => SessionEvent::Cancelled,
        }
    }

    fn compute(&mut self, start: Cell, end: Cell, sink: &mut dyn DiagnosticSink) -> SessionEvent {
        self.state = SessionState::Computing { start, end };
        sink.info(&format!(
            "Finding paths from {} to {}",
            self.board.to_notation(start),
            self.board.to_notation(end)
        ));
        let paths = find_all_shortest_paths(&self.board, start, end);
        self.state = SessionState::Done;
        if paths.is_empty() {
            sink.error("No valid paths found");
            SessionEvent::NoPath { start, end }
        } else {
            sink.info(&format!("Found {} shortest paths", paths.len()));
            SessionEvent::Found { start, end, paths }
        }
    }

    /// Begin a new query after a completed one. A cancelled session stays
    /// cancelled.
    pub fn reset(&mut self) {
        if self.state != SessionState::Cancelled {
            self.state = SessionState::AwaitingStart;
        }
    }

    pub fn cancel(&mut self) {
        self.state = SessionState::Cancelled;
    }
}
