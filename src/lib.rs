//! All shortest knight-move paths between two squares on an n×n board.
//!
//! The core is a layered breadth-first search that returns the complete set
//! of minimum-length paths, plus the board geometry it runs on. Around it
//! sit a JSONC configuration loader, an interactive prompt state machine,
//! and a renderer producing Graphviz DOT output and a text listing.

mod board;
mod common;
mod config;
mod finder;
mod logging;
mod render;
mod session;

pub use board::{Board, Cell};
pub use common::BoardError;
pub use config::{Config, ConfigError};
pub use finder::{find_all_shortest_paths, Path, PathSet};
pub use logging::{init_logging, DiagnosticSink, LogSink};
pub use render::{path_listing, write_artifacts, PathGraph};
pub use session::{Session, SessionEvent, SessionState};
