//! Contracts shared between the UI state machinery and the HTTP layer.
//!
//! Every backend interaction resolves to a [`RemoteError`] on failure so the
//! UI can tell connectivity problems apart from backend rejections. The
//! traits here are implemented by the gloo-net clients in the frontend and
//! by in-memory fakes in tests.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::field::MediaKind;

/// Failure of a backend or asset-host call. The payload is the
/// human-readable message shown to the user; when the backend supplies a
/// `message` field it is carried verbatim, otherwise the caller fills in an
/// action-specific fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// No response reached the backend at all.
    #[error("{0}")]
    Network(String),
    /// The backend answered with an error status.
    #[error("{0}")]
    Server(String),
    /// The targeted identifier is no longer known to the backend.
    #[error("{0}")]
    NotFound(String),
    /// Local pre-flight checks failed; nothing was sent over the wire.
    #[error("{0}")]
    Validation(String),
}

impl RemoteError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::NotFound(_))
    }
}

/// Resolved upload: an absolute URL on the asset host. Never cached beyond
/// the submission that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub url: String,
    pub kind: MediaKind,
}

/// CRUD access to one REST resource. Implementations are stateless per
/// call and never retry on their own.
#[allow(async_fn_in_trait)]
pub trait RecordApi<R> {
    async fn list(&self) -> Result<Vec<R>, RemoteError>;
    /// `payload` excludes the identifier; the returned record carries the
    /// server-assigned id and any server-computed fields.
    async fn create(&self, payload: &Map<String, Value>) -> Result<R, RemoteError>;
    /// Sparse update: `payload` holds only the fields being changed and the
    /// backend leaves everything absent from it untouched.
    async fn update(&self, id: &str, payload: &Map<String, Value>) -> Result<R, RemoteError>;
    async fn remove(&self, id: &str) -> Result<(), RemoteError>;
}

/// One-shot JSON POST to a backend path, used by the public forms.
#[allow(async_fn_in_trait)]
pub trait RemotePost {
    async fn post(&self, path: &str, payload: &Map<String, Value>) -> Result<Value, RemoteError>;
}

/// Transfer of a single file to the external asset host.
///
/// The host does not guarantee idempotency, so callers must not retry
/// blindly. Concurrent invocations are allowed.
#[allow(async_fn_in_trait)]
pub trait FileUpload {
    /// Handle to the file contents; `web_sys::File` in the browser.
    type Source;

    async fn upload(&self, source: &Self::Source, kind: MediaKind)
    -> Result<UploadResult, RemoteError>;
}
