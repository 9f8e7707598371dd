//! Command-line arguments, with environment fallbacks.

use board_core::config::{DEFAULT_BASE_URL, DEFAULT_TODO_LIMIT, DEFAULT_USER_LIMIT};
use board_core::Config;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "todo-board", version, about = "Todo list client for a jsonplaceholder-style API")]
pub struct Args {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_BOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// How many todos to load at startup.
    #[arg(long, env = "TODO_BOARD_TODO_LIMIT", default_value_t = DEFAULT_TODO_LIMIT)]
    pub todo_limit: usize,

    /// How many users to load at startup.
    #[arg(long, env = "TODO_BOARD_USER_LIMIT", default_value_t = DEFAULT_USER_LIMIT)]
    pub user_limit: usize,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new(&self.base_url).with_limits(self.todo_limit, self.user_limit)
    }
}
