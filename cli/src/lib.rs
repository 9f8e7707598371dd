//! Terminal host for `board-core`.
//!
//! Supplies the pieces the core leaves to its host: a ureq `Transport`, a
//! console `Notifier`, a line-command parser that produces `UiEvent`s, and
//! printing of the view.

pub mod command;
pub mod console;
pub mod logging;
pub mod settings;
pub mod transport;

pub use command::{Command, CommandError};
pub use console::ConsoleNotifier;
pub use settings::Args;
pub use transport::UreqTransport;
