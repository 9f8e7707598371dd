//! Client core for a remote todo board.
//!
//! # Overview
//! Loads todos and users from a jsonplaceholder-style REST API, keeps them in
//! a `StateStore`, projects them into a headless `View`, and turns UI events
//! into create / complete / delete calls mirrored to the server.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `RemoteGateway` runs those requests over a host-supplied `Transport`
//!   and returns `Result`s; it never talks to the user.
//! - `App` owns the store, the view and a `Notifier`, and is the only place
//!   where failures are reported and local state is mutated.
//! - Identifiers are a single string-typed `Id`, converted at the serde
//!   boundary.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod notify;
pub mod store;
pub mod types;
pub mod view;

pub use app::{App, UiEvent};
pub use client::TodoClient;
pub use config::Config;
pub use error::{ApiError, SERVER_FAILURE_MESSAGE};
pub use gateway::RemoteGateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use notify::{Notifier, RecordingNotifier};
pub use store::StateStore;
pub use types::{Id, NewTodo, Todo, User};
pub use view::{TodoItem, UserOption, View};
