use crate::wizard::form::FormSnapshot;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use strum::Display;
use thiserror::Error;

/// An initiative as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeRecord {
    pub id: i64,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub form: FormSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RemoteErrorKind {
    /// Another initiative already uses this title.
    DuplicateTitle,
    NotFound,
    Unauthorized,
    Network,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify a backend that only reports a message string.
    ///
    /// Only an exact match on `duplicate_title_marker` yields
    /// [`RemoteErrorKind::DuplicateTitle`]. Backends that return a structured
    /// kind should construct the error with [`RemoteError::new`] instead.
    pub fn from_message(message: impl Into<String>, duplicate_title_marker: &str) -> Self {
        let message = message.into();
        let kind = if message == duplicate_title_marker {
            RemoteErrorKind::DuplicateTitle
        } else {
            RemoteErrorKind::Other
        };
        Self { kind, message }
    }

    pub fn is_duplicate_title(&self) -> bool {
        self.kind == RemoteErrorKind::DuplicateTitle
    }
}

pub type RemoteFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RemoteError>> + Send + 'a>>;

/// Backend operations on initiatives.
pub trait InitiativeApi: Send + Sync {
    /// Publish a brand-new initiative.
    fn create<'a>(&'a self, form: &'a FormSnapshot) -> RemoteFuture<'a, InitiativeRecord>;

    fn update<'a>(&'a self, id: i64, form: &'a FormSnapshot) -> RemoteFuture<'a, InitiativeRecord>;

    /// Publish a previously saved draft with the final form values.
    fn promote_draft<'a>(
        &'a self,
        draft_id: i64,
        form: &'a FormSnapshot,
    ) -> RemoteFuture<'a, InitiativeRecord>;

    /// Save partial progress; `None` creates a new draft record.
    fn save_draft<'a>(
        &'a self,
        draft_id: Option<i64>,
        form: &'a FormSnapshot,
    ) -> RemoteFuture<'a, InitiativeRecord>;

    fn delete<'a>(&'a self, id: i64) -> RemoteFuture<'a, ()>;

    /// Drop any cached initiative listings after a write.
    fn invalidate_listings(&self) {}
}
