//! # HTTP client: bearer auth and the `{success, data|error}` envelope
//!
//! [`ApiClient`] is a thin wrapper around [`reqwest::Client`]. Every request:
//!
//! 1. targets `<base_url><path>` (the base already ends in `/api`),
//! 2. carries `Authorization: Bearer <token>` when a token is supplied,
//! 3. sends a JSON body when one is given,
//! 4. decodes the answer as a JSON envelope.
//!
//! ## Envelope rules
//!
//! The server wraps every answer as `{ "success": bool, ... }`. The `success`
//! flag is the only source of truth: a `success: true` body is deserialised
//! into the caller's payload type, and a `success: false` body becomes an
//! error carrying the server's `error` text. The HTTP status is consulted for
//! exactly one thing, telling an authentication rejection (401 →
//! [`Error::Auth`]) apart from any other failure ([`Error::Application`]).
//!
//! Transport failures (DNS, refused connection, timeout) and bodies that are
//! not JSON become [`Error::Connection`] with the underlying message.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// REST client bound to one API root (e.g. `https://tree.example/api`).
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given absolute API root.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::Connection(format!("invalid API URL {base_url}: {e}")))?;

        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn builder(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request without a body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<T> {
        tracing::debug!(%method, path, "api request");
        self.dispatch(self.builder(method, path, token)).await
    }

    /// Send a request with a JSON body.
    pub async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%method, path, "api request with body");
        self.dispatch(self.builder(method, path, token).json(body)).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("API request failed: {e}");
            Error::from(e)
        })?;
        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            tracing::warn!(%status, "API response was not JSON: {e}");
            Error::from(e)
        })?;
        tracing::debug!(%status, "api response");
        decode_envelope(status, body)
    }
}

/// Apply the envelope rules to a decoded body.
pub(crate) fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: Value) -> Result<T> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if success {
        return serde_json::from_value(body)
            .map_err(|e| Error::Connection(format!("unexpected response shape: {e}")));
    }

    let message = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    if status == StatusCode::UNAUTHORIZED {
        Err(Error::Auth(message))
    } else {
        Err(Error::Application(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ack, DataBody, Person};
    use serde_json::json;

    #[test]
    fn test_success_flag_is_the_source_of_truth() {
        // A 500 with success:true is still a success.
        let body = json!({"success": true, "data": []});
        let parsed: DataBody<Vec<Person>> =
            decode_envelope(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap();
        assert_eq!(parsed.data, Some(vec![]));

        // A 200 with success:false is still a failure.
        let body = json!({"success": false, "error": "Person not found"});
        let err = decode_envelope::<Ack>(StatusCode::OK, body).unwrap_err();
        assert_eq!(err, Error::Application("Person not found".into()));
    }

    #[test]
    fn test_401_is_auth_error() {
        let body = json!({"success": false, "error": "Authentication required"});
        let err = decode_envelope::<Ack>(StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert_eq!(err, Error::Auth("Authentication required".into()));
    }

    #[test]
    fn test_missing_error_text_falls_back_to_status() {
        let err = decode_envelope::<Ack>(StatusCode::NOT_FOUND, json!({"success": false}))
            .unwrap_err();
        assert_eq!(err, Error::Application("Not Found".into()));

        let err = decode_envelope::<Ack>(StatusCode::OK, json!({})).unwrap_err();
        assert_eq!(err, Error::Application("OK".into()));
    }

    #[test]
    fn test_wrong_shape_is_connection_error() {
        let body = json!({"success": true, "data": "not a list"});
        let err = decode_envelope::<DataBody<Vec<Person>>>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ApiClient::new("/api").unwrap_err();
        assert!(matches!(err, Error::Connection(_)));

        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/people/3"), "http://localhost:5000/api/people/3");
    }
}
