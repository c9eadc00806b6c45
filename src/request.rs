//! The transport wrapper: the only place talking to the network.

use std::borrow::Cow;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::{Error, NetworkCause};
use crate::response::{classify, Envelope};

const JSON_CONTENT_TYPE: &str = "application/json";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Body of a [`Request`]
#[derive(Debug)]
pub enum Payload<P> {
    None,
    Json(P),
    Form(reqwest::multipart::Form),
    Bytes(Vec<u8>),
}

/// Description of a single call to the API.
///
/// ```
/// use openlist::Request;
///
/// let request = Request::post("/api/fs/mkdir")
///     .json(serde_json::json!({ "path": "/new_folder" }));
/// assert_eq!(request.path(), "/api/fs/mkdir");
/// ```
#[derive(Debug)]
pub struct Request<'a, P = ()> {
    method: Method,
    path: Cow<'a, str>,
    query: Vec<(Cow<'a, str>, String)>,
    payload: Payload<P>,
    headers: Vec<(HeaderName, String)>,
}

impl<'a> Request<'a> {
    pub fn new(method: Method, path: impl Into<Cow<'a, str>>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: Payload::None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::PUT, path)
    }
}

impl<'a, P> Request<'a, P> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<Cow<'a, str>>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Adds a header, replacing the default one with the same name.
    ///
    /// A value that isn't a valid header value makes the call fail with a
    /// [`NetworkCause::Transport`](crate::NetworkCause::Transport) error.
    pub fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn with_payload<Q>(self, payload: Payload<Q>) -> Request<'a, Q> {
        Request {
            method: self.method,
            path: self.path,
            query: self.query,
            payload,
            headers: self.headers,
        }
    }

    /// Sends the given value serialized as JSON.
    pub fn json<Q: serde::Serialize>(self, value: Q) -> Request<'a, Q> {
        self.with_payload(Payload::Json(value))
    }

    /// Sends a multipart form.
    pub fn form(self, form: reqwest::multipart::Form) -> Request<'a, P> {
        Request {
            payload: Payload::Form(form),
            ..self
        }
    }

    /// Sends raw bytes.
    pub fn bytes(self, data: impl Into<Vec<u8>>) -> Request<'a, P> {
        Request {
            payload: Payload::Bytes(data.into()),
            ..self
        }
    }
}

impl crate::Client {
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn default_headers(
        &self,
        content_type: Option<&'static str>,
    ) -> Result<HeaderMap, NetworkCause> {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        if let Some(token) = self.token.get() {
            let mut value = HeaderValue::from_str(&token).map_err(NetworkCause::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Executes a single call and returns the envelope with its data typed as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the token can't be sent, when the service
    /// can't be reached or answers with something that isn't an envelope,
    /// otherwise the error mapped from the status and the envelope by [`classify`].
    #[tracing::instrument(name = "execute", skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn execute<T, P>(&self, request: Request<'_, P>) -> crate::Result<Envelope<T>>
    where
        T: DeserializeOwned,
        P: serde::Serialize,
    {
        let Request {
            method,
            path,
            query,
            payload,
            headers,
        } = request;

        let builder = self.inner.request(method, self.build_url(&path));
        let builder = if query.is_empty() {
            builder
        } else {
            builder.query(&query)
        };
        let content_type = match payload {
            Payload::None | Payload::Json(_) => Some(JSON_CONTENT_TYPE),
            Payload::Form(_) => None,
            Payload::Bytes(_) => Some(BINARY_CONTENT_TYPE),
        };
        let mut defaults = self
            .default_headers(content_type)
            .map_err(|cause| Error::network(&*path, cause))?;
        for (name, _) in headers.iter() {
            defaults.remove(name);
        }
        let builder = headers
            .into_iter()
            .fold(builder.headers(defaults), |builder, (name, value)| {
                builder.header(name, value)
            });
        let builder = match payload {
            Payload::None => builder,
            Payload::Json(value) => builder.json(&value),
            Payload::Form(form) => builder.multipart(form),
            Payload::Bytes(data) => builder.body(data),
        };

        let res = builder
            .send()
            .await
            .map_err(|err| Error::network(&*path, err))?;
        let status = res.status();
        tracing::debug!("responded with status {status:?}");
        let body = res
            .text()
            .await
            .map_err(|err| Error::network(&*path, err))?;
        classify(&path, status.as_u16(), &body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> crate::Result<T> {
        self.execute::<T, ()>(Request::get(path))
            .await
            .map(Envelope::into_data)
    }

    /// Calls a method answering with no meaningful data, keeping the message.
    pub(crate) async fn post_action<P: serde::Serialize>(
        &self,
        path: &str,
        params: P,
    ) -> crate::Result<Envelope<()>> {
        self.execute::<IgnoredAny, P>(Request::post(path).json(params))
            .await
            .map(|envelope| envelope.map(|_| ()))
    }

    pub(crate) async fn post_json<T: DeserializeOwned, P: serde::Serialize>(
        &self,
        path: &str,
        params: P,
    ) -> crate::Result<T> {
        self.execute(Request::post(path).json(params))
            .await
            .map(Envelope::into_data)
    }
}
