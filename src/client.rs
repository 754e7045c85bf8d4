//!
//! # Client layer
//!
//! The consumer side of the API: an HTTP client plus a durable session. The
//! session (token and user profile) is persisted to a JSON file so it
//! survives process restarts, is attached as a bearer header on every task
//! request, and is cleared on logout or whenever the server answers 401.
//! After a 401 the caller must log in again. Views rendering these results
//! are out of scope; this is the seam they talk through.

use std::fmt;
use std::path::PathBuf;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::models::{Task, TaskInput, TaskPatch, User};

/// Failures surfaced to client callers.
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad JSON).
    Http(reqwest::Error),
    /// Session file could not be read or written.
    Io(std::io::Error),
    /// The server rejected the credentials or token. Any stored session has
    /// already been cleared when this is returned.
    Unauthorized,
    /// A task operation was attempted with no active session.
    NotLoggedIn,
    /// Any other non-success response, with the server's error message.
    Api { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "http error: {}", e),
            ClientError::Io(e) => write!(f, "session storage error: {}", e),
            ClientError::Unauthorized => write!(f, "not authorized; session cleared"),
            ClientError::NotLoggedIn => write!(f, "not logged in"),
            ClientError::Api { status, message } => write!(f, "api error ({}): {}", status, message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> ClientError {
        ClientError::Http(error)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(error: std::io::Error) -> ClientError {
        ClientError::Io(error)
    }
}

/// An authenticated session: the bearer token and the profile it was issued
/// for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// File-backed session persistence, the durable-storage analogue of a
/// browser's local storage.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored session. A missing or unparseable file is treated as
    /// "not logged in", not an error.
    pub fn load(&self) -> Option<Session> {
        let bytes = std::fs::read(&self.path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|e| ClientError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// HTTP client for the tasknest API.
///
/// Construction loads any previously stored session, so a token issued in an
/// earlier process is reused until it expires or is cleared.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: SessionStore,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session_path: impl Into<PathBuf>) -> Self {
        let storage = SessionStore::new(session_path);
        let session = storage.load();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            storage,
            session,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Result<String, ClientError> {
        self.session
            .as_ref()
            .map(|s| format!("Bearer {}", s.token))
            .ok_or(ClientError::NotLoggedIn)
    }

    /// Turns an error response into a `ClientError`. A 401 additionally
    /// drops the in-memory session and the session file: the token is no
    /// longer good, so the next action has to be a fresh login.
    async fn check(&mut self, resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if resp.status() == StatusCode::UNAUTHORIZED {
            self.session = None;
            self.storage.clear()?;
            return Err(ClientError::Unauthorized);
        }
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string());
            return Err(ClientError::Api { status, message });
        }
        Ok(resp)
    }

    /// Registers a new account. Does not log in; call `login` next.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let resp = self.check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Logs in and persists the issued session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, ClientError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        let resp = self.check(resp).await?;

        let login: LoginResponse = resp.json().await?;
        let session = Session {
            token: login.token,
            user: login.user.clone(),
        };
        self.storage.save(&session)?;
        self.session = Some(session);
        Ok(login.user)
    }

    /// Drops the session locally. The token itself is stateless and simply
    /// ages out server-side.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session = None;
        self.storage.clear()
    }

    pub async fn list_tasks(&mut self) -> Result<Vec<Task>, ClientError> {
        let resp = self
            .http
            .get(self.url("/tasks"))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        let resp = self.check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn create_task(&mut self, input: &TaskInput) -> Result<Task, ClientError> {
        let resp = self
            .http
            .post(self.url("/tasks"))
            .header("Authorization", self.bearer()?)
            .json(input)
            .send()
            .await?;
        let resp = self.check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn get_task(&mut self, id: Uuid) -> Result<Task, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/tasks/{}", id)))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        let resp = self.check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn update_task(&mut self, id: Uuid, patch: &TaskPatch) -> Result<Task, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("/tasks/{}", id)))
            .header("Authorization", self.bearer()?)
            .json(patch)
            .send()
            .await?;
        let resp = self.check(resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn delete_task(&mut self, id: Uuid) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/tasks/{}", id)))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        self.check(resp).await?;
        Ok(())
    }
}
