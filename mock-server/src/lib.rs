//! In-memory stand-in for the jsonplaceholder todo/user API.
//!
//! Records keep insertion order so `_limit` returns the first N, the way the
//! real service does. Identifiers are integers; a path id that is not an
//! integer is answered with 404.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub user_id: Option<u64>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Data {
    pub todos: Vec<Todo>,
    pub users: Vec<User>,
    next_id: u64,
}

const USER_NAMES: [(&str, &str); 10] = [
    ("Leanne Graham", "Bret"),
    ("Ervin Howell", "Antonette"),
    ("Clementine Bauch", "Samantha"),
    ("Patricia Lebsack", "Karianne"),
    ("Chelsey Dietrich", "Kamren"),
    ("Mrs. Dennis Schulist", "Leopoldo_Corkery"),
    ("Kurtis Weissnat", "Elwyn.Skiles"),
    ("Nicholas Runolfsdottir V", "Maxime_Nienow"),
    ("Glenna Reichert", "Delphine"),
    ("Clementina DuBuque", "Moriah.Stanton"),
];

pub const SEED_TODOS: u64 = 30;

impl Data {
    pub fn new(todos: Vec<Todo>, users: Vec<User>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos,
            users,
            next_id,
        }
    }

    /// Ten users and thirty todos, three per user.
    pub fn seeded() -> Self {
        let users = USER_NAMES
            .iter()
            .zip(1u64..)
            .map(|(&(name, username), id)| User {
                id,
                name: name.to_string(),
                username: username.to_string(),
                email: format!("{}@example.com", username.to_lowercase()),
            })
            .collect();
        let todos = (1..=SEED_TODOS)
            .map(|id| Todo {
                user_id: (id - 1) / 3 + 1,
                id,
                title: format!("todo number {id}"),
                completed: id % 3 == 0,
            })
            .collect();
        Self::new(todos, users)
    }
}

pub type Db = Arc<RwLock<Data>>;

pub fn app() -> Router {
    app_with(Data::seeded())
}

pub fn app_with(data: Data) -> Router {
    let db: Db = Arc::new(RwLock::new(data));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).patch(update_todo).delete(delete_todo))
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn take_limit<T: Clone>(items: &[T], limit: Option<usize>) -> Vec<T> {
    let n = limit.unwrap_or(items.len()).min(items.len());
    items[..n].to_vec()
}

fn parse_id(raw: &str) -> Result<u64, StatusCode> {
    raw.parse().map_err(|_| StatusCode::NOT_FOUND)
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let data = db.read().await;
    Json(take_limit(&data.todos, params.limit))
}

async fn list_users(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<User>> {
    let data = db.read().await;
    Json(take_limit(&data.users, params.limit))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut data = db.write().await;
    let todo = Todo {
        user_id: input.user_id,
        id: data.next_id,
        title: input.title,
        completed: input.completed,
    };
    data.next_id += 1;
    data.todos.push(todo.clone());
    tracing::debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(&id)?;
    let data = db.read().await;
    data.todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let id = parse_id(&id)?;
    let mut data = db.write().await;
    let todo = data
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let id = parse_id(&id)?;
    let mut data = db.write().await;
    let before = data.todos.len();
    data.todos.retain(|t| t.id != id);
    if data.todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    tracing::debug!(id, "todo deleted");
    Ok(Json(serde_json::json!({})))
}
