//! Event handlers: turn UI events into gateway calls, then update the
//! State Store and the view from the outcome.
//!
//! # Design
//! Each handler awaits exactly one gateway call and mutates the store and
//! view only after it resolves, so no mutation straddles a suspension point.
//! Failures go to the `Notifier` and leave local state as it was.

use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::gateway::RemoteGateway;
use crate::http::Transport;
use crate::notify::Notifier;
use crate::store::StateStore;
use crate::types::{Id, NewTodo};
use crate::view::View;

/// User interactions, each carrying the identifier it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The creation form was submitted with the selected user and entered title.
    Submit { user: String, title: String },
    /// A todo's checkbox was flipped to `completed`.
    Toggle { id: Id, completed: bool },
    /// A todo's close control was clicked.
    Close { id: Id },
}

pub struct App<T, N> {
    gateway: RemoteGateway<T>,
    store: StateStore,
    view: View,
    notifier: N,
}

impl<T: Transport, N: Notifier> App<T, N> {
    pub fn new(gateway: RemoteGateway<T>, notifier: N) -> Self {
        Self {
            gateway,
            store: StateStore::new(),
            view: View::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn gateway(&self) -> &RemoteGateway<T> {
        &self.gateway
    }

    /// Fetches todos and users concurrently, then renders both.
    ///
    /// A failed fetch is reported and treated as an empty list.
    pub async fn start(&mut self) {
        let (todos, users) = tokio::join!(self.gateway.fetch_todos(), self.gateway.fetch_users());
        let todos = self.or_report("fetch todos", todos).unwrap_or_default();
        let users = self.or_report("fetch users", users).unwrap_or_default();
        info!(todos = todos.len(), users = users.len(), "initial state loaded");

        self.store.replace_all(todos, users);
        self.view.clear();
        for todo in self.store.todos() {
            self.view.render_todo(todo, self.store.user_name(&todo.user_id));
        }
        for user in self.store.users() {
            self.view.render_user_option(user);
        }
    }

    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit { user, title } => self.submit(user, title).await,
            UiEvent::Toggle { id, completed } => self.toggle(id, completed).await,
            UiEvent::Close { id } => self.close(id).await,
        }
    }

    async fn submit(&mut self, user: String, title: String) {
        let user = user.trim();
        if user.is_empty() || title.is_empty() {
            debug!("form is missing a required field, not submitting");
            return;
        }
        let draft = NewTodo {
            user_id: Id::from(user),
            title,
            completed: false,
        };
        let created = self.gateway.create_todo(&draft).await;
        if let Some(todo) = self.or_report("create todo", created) {
            self.view.render_todo(&todo, self.store.user_name(&todo.user_id));
            self.store.add(todo);
        }
    }

    async fn toggle(&mut self, id: Id, completed: bool) {
        if !self.view.set_checked(&id, completed) {
            debug!(%id, "toggle for a todo that is not rendered");
            return;
        }
        let result = self.gateway.set_todo_completed(&id, completed).await;
        self.or_report("update todo", result);
    }

    async fn close(&mut self, id: Id) {
        if self.view.item(&id).is_none() {
            debug!(%id, "close for a todo that is not rendered");
            return;
        }
        let result = self.gateway.delete_todo(&id).await;
        if self.or_report("delete todo", result).is_some() {
            self.store.remove(&id);
            self.view.remove_todo(&id);
        }
    }

    fn or_report<V>(&mut self, operation: &str, result: Result<V, ApiError>) -> Option<V> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(operation, status = ?err.status(), error = %err, "remote call failed");
                self.notifier.alert(&err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::{ready, Future};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tokio::sync::Notify;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Config;
    use crate::error::SERVER_FAILURE_MESSAGE;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::notify::RecordingNotifier;

    const BASE: &str = "http://api.test";

    /// Answers requests from a fixed routing table and records what was sent.
    #[derive(Default)]
    struct ScriptedTransport {
        routes: HashMap<(HttpMethod, String), Result<(u16, String), String>>,
        sent: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn reply(mut self, method: HttpMethod, path: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert((method, format!("{BASE}{path}")), Ok((status, body.to_string())));
            self
        }

        fn fail(mut self, method: HttpMethod, path: &str, message: &str) -> Self {
            self.routes
                .insert((method, format!("{BASE}{path}")), Err(message.to_string()));
            self
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(
            &self,
            request: HttpRequest,
        ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
            let route = self.routes.get(&(request.method, request.url.clone())).cloned();
            self.sent.lock().unwrap().push(request);
            ready(match route {
                Some(Ok((status, body))) => Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body,
                }),
                Some(Err(message)) => Err(ApiError::Transport(message)),
                None => Ok(HttpResponse {
                    status: 404,
                    headers: Vec::new(),
                    body: "{}".to_string(),
                }),
            })
        }
    }

    /// Holds the todos response back until the users request has gone out.
    struct GatedTransport {
        inner: ScriptedTransport,
        users_sent: Arc<Notify>,
    }

    impl Transport for GatedTransport {
        fn execute(
            &self,
            request: HttpRequest,
        ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
            let gate = Arc::clone(&self.users_sent);
            let is_todos = request.url.contains("/todos");
            if request.url.contains("/users") {
                gate.notify_one();
            }
            let reply = self.inner.execute(request);
            async move {
                if is_todos {
                    gate.notified().await;
                }
                reply.await
            }
        }
    }

    const TODOS: &str = r#"[
        {"userId":1,"id":1,"title":"A","completed":false},
        {"userId":2,"id":2,"title":"B","completed":true},
        {"userId":7,"id":3,"title":"C","completed":false}
    ]"#;
    const USERS: &str = r#"[{"id":1,"name":"Bob"},{"id":2,"name":"Ann"}]"#;

    fn seeded() -> ScriptedTransport {
        ScriptedTransport::default()
            .reply(HttpMethod::Get, "/todos?_limit=15", 200, TODOS)
            .reply(HttpMethod::Get, "/users?_limit=5", 200, USERS)
    }

    async fn started(transport: ScriptedTransport) -> App<ScriptedTransport, RecordingNotifier> {
        let gateway = RemoteGateway::new(&Config::new(BASE), transport);
        let mut app = App::new(gateway, RecordingNotifier::new());
        app.start().await;
        app
    }

    fn labels<T: Transport, N: Notifier>(app: &App<T, N>) -> Vec<String> {
        app.view().items().map(|item| item.label()).collect()
    }

    #[tokio::test]
    async fn start_renders_every_todo_in_reverse_fetch_order() {
        let app = started(seeded()).await;
        assert_eq!(labels(&app), ["C by ", "B by Ann", "A by Bob"]);
        assert_eq!(app.store().todos().len(), 3);
        assert!(app.notifier().alerts().is_empty());

        let options: Vec<&str> = app.view().user_options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(options, ["Bob", "Ann"]);
    }

    #[tokio::test]
    async fn start_issues_both_fetches() {
        let app = started(seeded()).await;
        let urls: Vec<String> = app.gateway().transport().sent().into_iter().map(|r| r.url).collect();
        assert_eq!(urls.len(), 2);
        assert!(urls.contains(&format!("{BASE}/todos?_limit=15")));
        assert!(urls.contains(&format!("{BASE}/users?_limit=5")));
    }

    #[tokio::test]
    async fn start_fetches_todos_and_users_concurrently() {
        let transport = GatedTransport {
            inner: seeded(),
            users_sent: Arc::new(Notify::new()),
        };
        let gateway = RemoteGateway::new(&Config::new(BASE), transport);
        let mut app = App::new(gateway, RecordingNotifier::new());

        tokio::time::timeout(Duration::from_secs(2), app.start())
            .await
            .expect("todos fetch must not wait for the users fetch to finish");

        assert_eq!(app.view().len(), 3);
        assert_eq!(app.view().user_options().len(), 2);
        assert!(app.notifier().alerts().is_empty());
    }

    #[tokio::test]
    async fn single_todo_scenario_reads_a_by_bob() {
        let transport = ScriptedTransport::default()
            .reply(
                HttpMethod::Get,
                "/todos?_limit=15",
                200,
                r#"[{"id":1,"userId":1,"title":"A","completed":false}]"#,
            )
            .reply(HttpMethod::Get, "/users?_limit=5", 200, r#"[{"id":1,"name":"Bob"}]"#);
        let app = started(transport).await;
        let item = app.view().item(&Id::from("1")).unwrap();
        assert_eq!(item.label(), "A by Bob");
        assert!(!item.checked);
    }

    #[tokio::test]
    async fn failed_fetch_alerts_and_renders_the_rest() {
        let transport = ScriptedTransport::default()
            .fail(HttpMethod::Get, "/todos?_limit=15", "network down")
            .reply(HttpMethod::Get, "/users?_limit=5", 200, USERS);
        let app = started(transport).await;
        assert!(app.view().is_empty());
        assert!(app.store().todos().is_empty());
        assert_eq!(app.view().user_options().len(), 2);
        assert_eq!(app.notifier().alerts(), ["network down"]);
    }

    #[tokio::test]
    async fn malformed_users_alert_and_names_degrade() {
        let transport = ScriptedTransport::default()
            .reply(HttpMethod::Get, "/todos?_limit=15", 200, TODOS)
            .reply(HttpMethod::Get, "/users?_limit=5", 200, "<html>");
        let app = started(transport).await;
        assert_eq!(labels(&app), ["C by ", "B by ", "A by "]);
        assert_eq!(app.notifier().alerts().len(), 1);
        assert!(app.notifier().alerts()[0].starts_with("deserialization failed"));
    }

    #[tokio::test]
    async fn submit_posts_draft_and_prepends_created_todo() {
        let transport = seeded().reply(
            HttpMethod::Post,
            "/todos",
            201,
            r#"{"userId":2,"title":"Buy milk","completed":false,"id":99}"#,
        );
        let mut app = started(transport).await;
        app.handle(UiEvent::Submit {
            user: "2".to_string(),
            title: "Buy milk".to_string(),
        })
        .await;

        let post = app
            .gateway()
            .transport()
            .sent()
            .into_iter()
            .find(|r| r.method == HttpMethod::Post)
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(post.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"userId": 2, "title": "Buy milk", "completed": false}));

        let top = app.view().items().next().unwrap();
        assert_eq!(top.id, Id::from("99"));
        assert_eq!(top.label(), "Buy milk by Ann");
        assert!(app.store().todo(&Id::from("99")).is_some());
    }

    #[tokio::test]
    async fn failed_submit_renders_nothing() {
        let transport = seeded().reply(HttpMethod::Post, "/todos", 500, "oops");
        let mut app = started(transport).await;
        app.handle(UiEvent::Submit {
            user: "1".to_string(),
            title: "x".to_string(),
        })
        .await;
        assert_eq!(app.view().len(), 3);
        assert_eq!(app.store().todos().len(), 3);
        assert_eq!(app.notifier().alerts(), [SERVER_FAILURE_MESSAGE]);
    }

    #[tokio::test]
    async fn submit_with_missing_field_sends_nothing() {
        let mut app = started(seeded()).await;
        app.handle(UiEvent::Submit {
            user: String::new(),
            title: "x".to_string(),
        })
        .await;
        app.handle(UiEvent::Submit {
            user: "1".to_string(),
            title: String::new(),
        })
        .await;
        assert_eq!(app.gateway().transport().sent().len(), 2);
    }

    #[tokio::test]
    async fn toggle_keeps_store_and_item_whatever_the_outcome() {
        let transport = seeded()
            .reply(HttpMethod::Patch, "/todos/1", 200, "{}")
            .reply(HttpMethod::Patch, "/todos/2", 500, "");
        let mut app = started(transport).await;
        let before = app.store().todos().to_vec();

        app.handle(UiEvent::Toggle {
            id: Id::from("1"),
            completed: true,
        })
        .await;
        app.handle(UiEvent::Toggle {
            id: Id::from("2"),
            completed: false,
        })
        .await;

        assert_eq!(app.store().todos(), before.as_slice());
        assert_eq!(app.view().len(), 3);
        assert!(app.view().item(&Id::from("1")).unwrap().checked);
        assert!(!app.view().item(&Id::from("2")).unwrap().checked);
        assert_eq!(app.notifier().alerts(), [SERVER_FAILURE_MESSAGE]);

        let patch = app
            .gateway()
            .transport()
            .sent()
            .into_iter()
            .find(|r| r.method == HttpMethod::Patch)
            .unwrap();
        assert_eq!(patch.body.as_deref(), Some(r#"{"completed":true}"#));
    }

    #[tokio::test]
    async fn close_removes_item_on_success() {
        let transport = seeded().reply(HttpMethod::Delete, "/todos/2", 200, "{}");
        let mut app = started(transport).await;
        app.handle(UiEvent::Close { id: Id::from("2") }).await;

        assert!(app.view().item(&Id::from("2")).is_none());
        assert!(app.store().todo(&Id::from("2")).is_none());
        assert_eq!(app.view().len(), 2);
        assert_eq!(app.store().todos().len(), 2);
        assert!(app.notifier().alerts().is_empty());
    }

    #[tokio::test]
    async fn close_drops_every_copy_of_a_reused_id() {
        let transport = seeded()
            .reply(
                HttpMethod::Post,
                "/todos",
                201,
                r#"{"userId":1,"title":"same","completed":false,"id":201}"#,
            )
            .reply(HttpMethod::Delete, "/todos/201", 200, "{}");
        let mut app = started(transport).await;
        for _ in 0..2 {
            app.handle(UiEvent::Submit {
                user: "1".to_string(),
                title: "same".to_string(),
            })
            .await;
        }
        assert_eq!(app.view().len(), 5);
        assert_eq!(app.store().todos().len(), 5);

        app.handle(UiEvent::Close { id: Id::from("201") }).await;

        assert!(app.view().item(&Id::from("201")).is_none());
        assert!(app.store().todo(&Id::from("201")).is_none());
        assert_eq!(app.view().len(), 3);
        assert_eq!(app.store().todos().len(), app.view().len());
        assert!(app.notifier().alerts().is_empty());
    }

    #[tokio::test]
    async fn close_keeps_item_when_server_refuses() {
        let transport = ScriptedTransport::default()
            .reply(
                HttpMethod::Get,
                "/todos?_limit=15",
                200,
                r#"[{"id":"5","userId":1,"title":"E","completed":false}]"#,
            )
            .reply(HttpMethod::Get, "/users?_limit=5", 200, USERS)
            .reply(HttpMethod::Delete, "/todos/5", 503, "");
        let mut app = started(transport).await;
        app.handle(UiEvent::Close { id: Id::from("5") }).await;

        assert!(app.view().item(&Id::from("5")).is_some());
        assert!(app.store().todo(&Id::from("5")).is_some());
        assert_eq!(app.notifier().alerts(), [SERVER_FAILURE_MESSAGE]);
    }

    #[tokio::test]
    async fn events_for_unrendered_items_are_ignored() {
        let mut app = started(seeded()).await;
        app.handle(UiEvent::Close { id: Id::from("404") }).await;
        app.handle(UiEvent::Toggle {
            id: Id::from("404"),
            completed: true,
        })
        .await;
        assert_eq!(app.gateway().transport().sent().len(), 2);
        assert!(app.notifier().alerts().is_empty());
    }
}
