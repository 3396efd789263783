//! gloo-net clients for the REST backend.
//!
//! One [`RestClient`] per resource type covers the collection CRUD;
//! [`JsonPost`] covers the one-shot form submissions. Both are
//! stateless per call and map every failure onto [`RemoteError`], so
//! the UI can distinguish "the server never answered" from "the server
//! said no". Backend error bodies optionally carry a `message` field,
//! which is surfaced verbatim; otherwise an action-specific fallback
//! is used.

use std::marker::PhantomData;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use common::record::Record;
use common::remote::{RecordApi, RemoteError, RemotePost};

use super::API_BASE;

const SAVE_FALLBACK: &str = "Failed to save, please try again.";

/// Typed client for one REST resource under [`API_BASE`].
pub struct RestClient<R> {
    base: String,
    _marker: PhantomData<R>,
}

impl<R: Record> RestClient<R> {
    pub fn new() -> Self {
        Self {
            base: format!("{API_BASE}/{}", R::RESOURCE),
            _marker: PhantomData,
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base, id)
    }
}

impl<R: Record> Default for RestClient<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordApi<R> for RestClient<R> {
    async fn list(&self) -> Result<Vec<R>, RemoteError> {
        let response = Request::get(&self.base).send().await.map_err(offline)?;
        decode(response, "Failed to load entries, please retry.").await
    }

    async fn create(&self, payload: &Map<String, Value>) -> Result<R, RemoteError> {
        let response = Request::post(&self.base)
            .json(payload)
            .map_err(offline)?
            .send()
            .await
            .map_err(offline)?;
        decode(response, SAVE_FALLBACK).await
    }

    async fn update(&self, id: &str, payload: &Map<String, Value>) -> Result<R, RemoteError> {
        // PATCH with only the changed fields; the backend leaves the
        // rest untouched
        let response = Request::patch(&self.item_url(id))
            .json(payload)
            .map_err(offline)?
            .send()
            .await
            .map_err(offline)?;
        decode(response, SAVE_FALLBACK).await
    }

    async fn remove(&self, id: &str) -> Result<(), RemoteError> {
        let response = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(offline)?;
        if response.ok() {
            Ok(())
        } else {
            Err(failure(response, "Failed to delete, please try again.").await)
        }
    }
}

/// One-shot JSON POST used by the public forms; paths are relative to
/// [`API_BASE`].
pub struct JsonPost;

impl RemotePost for JsonPost {
    async fn post(&self, path: &str, payload: &Map<String, Value>) -> Result<Value, RemoteError> {
        let response = Request::post(&format!("{API_BASE}{path}"))
            .json(payload)
            .map_err(offline)?
            .send()
            .await
            .map_err(offline)?;
        if response.ok() {
            Ok(response.json::<Value>().await.unwrap_or(Value::Null))
        } else {
            Err(failure(response, SAVE_FALLBACK).await)
        }
    }
}

fn offline(err: gloo_net::Error) -> RemoteError {
    RemoteError::Network(format!("Could not reach the server: {err}"))
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, RemoteError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| RemoteError::Server(format!("Unexpected response: {err}")))
    } else {
        Err(failure(response, fallback).await)
    }
}

async fn failure(response: Response, fallback: &str) -> RemoteError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    match status {
        404 => RemoteError::NotFound(message),
        _ => RemoteError::Server(message),
    }
}
