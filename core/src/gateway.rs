//! Async remote gateway: `TodoClient` requests executed over a `Transport`.
//!
//! Every operation returns a `Result`. Reporting failures to the user is left
//! to the caller.

use tracing::debug;

use crate::client::TodoClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Id, NewTodo, Todo, User};

#[derive(Debug)]
pub struct RemoteGateway<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> RemoteGateway<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            client: TodoClient::new(config),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    /// `GET /todos?_limit=N`.
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    /// `GET /users?_limit=N`.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.send(self.client.build_list_users()).await?;
        self.client.parse_list_users(response)
    }

    /// `POST /todos`. Returns the todo as stored by the server, identifier included.
    pub async fn create_todo(&self, draft: &NewTodo) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(draft)?;
        let response = self.send(request).await?;
        self.client.parse_create_todo(response)
    }

    /// `PATCH /todos/{id}` with `{completed}`.
    pub async fn set_todo_completed(&self, id: &Id, completed: bool) -> Result<(), ApiError> {
        let request = self.client.build_set_completed(id, completed)?;
        let response = self.send(request).await?;
        self.client.parse_set_completed(response)
    }

    /// `DELETE /todos/{id}`.
    pub async fn delete_todo(&self, id: &Id) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }
}
