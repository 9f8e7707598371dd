//! Runtime settings for the remote API.

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_TODO_LIMIT: usize = 15;
pub const DEFAULT_USER_LIMIT: usize = 5;

/// Where the API lives and how many records each startup fetch asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub todo_limit: usize,
    pub user_limit: usize,
}

impl Config {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_limits(mut self, todo_limit: usize, user_limit: usize) -> Self {
        self.todo_limit = todo_limit;
        self.user_limit = user_limit;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            todo_limit: DEFAULT_TODO_LIMIT,
            user_limit: DEFAULT_USER_LIMIT,
        }
    }
}
