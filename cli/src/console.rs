//! Terminal projection of the view and the alert channel.

use std::io::{self, Write};

use board_core::{Notifier, View};

/// Prints alerts on their own line, prefixed with `!`.
#[derive(Debug)]
pub struct ConsoleNotifier<W> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn alert(&mut self, message: &str) {
        if let Err(err) = writeln!(self.out, "! {message}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, alert = message, "could not write alert");
        }
    }
}

pub fn print_list(view: &View, out: &mut impl Write) -> io::Result<()> {
    if view.is_empty() {
        writeln!(out, "(no todos)")?;
    }
    for item in view.items() {
        writeln!(out, "{item}")?;
    }
    out.flush()
}

pub fn print_users(view: &View, out: &mut impl Write) -> io::Result<()> {
    if view.user_options().is_empty() {
        writeln!(out, "(no users)")?;
    }
    for option in view.user_options() {
        writeln!(out, "  {:>3}  {}", option.value, option.label)?;
    }
    out.flush()
}
