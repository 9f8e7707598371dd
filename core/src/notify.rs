//! User-visible failure channel.

/// Receives the messages that must be shown to the user.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Keeps every alert in memory. Used by tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
