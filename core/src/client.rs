//! Verb-level client bound to one [`Config`] and one [`Transport`].
//!
//! # Design
//! `ApiClient` carries no mutable state between calls. Each verb is split
//! into a pure `build_*` method that produces an `HttpRequest` and an async
//! method that sends it and decodes the reply, so request construction can
//! be tested without any I/O.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::classify::decode_json;
use crate::config::Config;
use crate::dispatch::send;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, Metadata, RequestBody};
use crate::transport::Transport;
use crate::url_builder::build_url;

const NO_PARAMS: &[(&str, &str)] = &[];

#[derive(Debug, Clone)]
pub struct ApiClient<Tr> {
    config: Config,
    transport: Tr,
}

impl<Tr: Transport> ApiClient<Tr> {
    pub fn new(config: Config, transport: Tr) -> Self {
        Self { config, transport }
    }

    pub fn build_get<K, V>(&self, method_path: &str, params: &[(K, V)]) -> HttpRequest
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        HttpRequest {
            method: HttpMethod::Get,
            url: build_url(&self.config.base_url, method_path, params),
            headers: self.config.headers.clone(),
            body: None,
        }
    }

    pub fn build_post(&self, method_path: &str, body: &Value) -> HttpRequest {
        self.build_with_body(HttpMethod::Post, method_path, body)
    }

    pub fn build_put(&self, method_path: &str, body: &Value) -> HttpRequest {
        self.build_with_body(HttpMethod::Put, method_path, body)
    }

    pub fn build_patch(&self, method_path: &str, body: &Value) -> HttpRequest {
        self.build_with_body(HttpMethod::Patch, method_path, body)
    }

    pub fn build_delete(&self, method_path: &str, body: &Value) -> HttpRequest {
        self.build_with_body(HttpMethod::Delete, method_path, body)
    }

    fn build_with_body(&self, method: HttpMethod, method_path: &str, body: &Value) -> HttpRequest {
        HttpRequest {
            method,
            url: build_url(&self.config.base_url, method_path, NO_PARAMS),
            headers: self.config.headers.clone(),
            body: Some(RequestBody::json(body)),
        }
    }

    pub async fn get<T, K, V>(&self, method_path: &str, params: &[(K, V)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.send_json(self.build_get(method_path, params)).await
    }

    pub async fn post<T: DeserializeOwned>(&self, method_path: &str, body: &Value) -> Result<T, ApiError> {
        self.send_json(self.build_post(method_path, body)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, method_path: &str, body: &Value) -> Result<T, ApiError> {
        self.send_json(self.build_put(method_path, body)).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, method_path: &str, body: &Value) -> Result<T, ApiError> {
        self.send_json(self.build_patch(method_path, body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, method_path: &str, body: &Value) -> Result<T, ApiError> {
        self.send_json(self.build_delete(method_path, body)).await
    }

    /// Send a prepared request, decoding a 2xx body as JSON.
    pub async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        send(&self.transport, request, |_, text| decode_json(&text)).await
    }

    /// Send a prepared request with a custom success handler.
    pub async fn send_with<T, F>(&self, request: HttpRequest, on_success: F) -> Result<T, ApiError>
    where
        F: FnOnce(Metadata, String) -> Result<T, ApiError>,
    {
        send(&self.transport, request, on_success).await
    }
}
