//! The envelope wrapping every response of the service and the mapping of
//! the responses into [`Error`](crate::Error).

use crate::error::{Error, Failure, NetworkCause};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Code reported by the service on success
pub const SUCCESS_CODE: i64 = 200;

const SNIPPET_LENGTH: usize = 256;

const AUTHENTICATION_PHRASES: &[&str] = &[
    "unauthorized",
    "invalid credentials",
    "token expired",
    "token is expired",
    "token is invalidated",
    "password is incorrect",
];

const NOT_FOUND_PHRASES: &[&str] = &[
    "object not found",
    "file not found",
    "path not found",
    "storage not found",
];

/// Uniform response of the service: `{"code": 200, "message": "success", "data": ...}`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }

    pub fn map<U>(self, func: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            code: self.code,
            message: self.message,
            data: func(self.data),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Only a json object is an envelope, the derived implementation would also
/// accept a sequence of the fields.
fn parse_envelope(body: &str) -> Result<RawEnvelope, serde_json::Error> {
    let fields = serde_json::from_str::<serde_json::Map<String, Value>>(body)?;
    serde_json::from_value(Value::Object(fields))
}

fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_LENGTH).collect()
}

fn contains_any(message: &str, phrases: &[&str]) -> bool {
    let message = message.to_lowercase();
    phrases.iter().any(|phrase| message.contains(phrase))
}

fn reject(path: &str, status: u16, effective: i64, code: Option<i64>, message: String) -> Error {
    let failure = Failure {
        path: path.to_string(),
        status,
        code,
        message,
        resource: None,
    };
    if effective == 401 || contains_any(&failure.message, AUTHENTICATION_PHRASES) {
        Error::Authentication(failure)
    } else if effective == 404 || contains_any(&failure.message, NOT_FOUND_PHRASES) {
        Error::NotFound(failure)
    } else if (400..500).contains(&effective) {
        Error::Api(failure)
    } else if (500..600).contains(&effective) {
        Error::Server(failure)
    } else {
        Error::network(
            failure.path,
            NetworkCause::UnexpectedStatus {
                status,
                snippet: failure.message,
            },
        )
    }
}

/// Maps the status and the body of a response to a typed envelope or an error.
///
/// When the HTTP status is a success, the `code` of the envelope decides the
/// outcome, a missing code being a success. Otherwise the HTTP status decides.
/// A successful envelope whose `data` doesn't match `T` is a malformed response.
///
/// ```
/// use openlist::response::classify;
///
/// let envelope = classify::<()>("/api/fs/mkdir", 200, r#"{"code":200,"message":"success","data":null}"#)
///     .expect("should be a success");
/// assert_eq!(envelope.message, "success");
///
/// let error = classify::<()>("/api/fs/get", 404, r#"{"message":"Not found"}"#).unwrap_err();
/// assert_eq!(error.kind(), openlist::ErrorKind::NotFound);
/// ```
pub fn classify<T: DeserializeOwned>(
    path: &str,
    status: u16,
    body: &str,
) -> Result<Envelope<T>, Error> {
    let raw = match parse_envelope(body) {
        Ok(raw) => raw,
        Err(source) => {
            let effective = i64::from(status);
            return Err(if (400..600).contains(&effective) {
                reject(path, status, effective, None, snippet(body))
            } else {
                Error::network(
                    path,
                    NetworkCause::MalformedResponse {
                        status,
                        snippet: snippet(body),
                        source,
                    },
                )
            });
        }
    };

    let message = raw.message.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(reject(path, status, i64::from(status), raw.code, message));
    }

    let code = raw.code.unwrap_or(SUCCESS_CODE);
    if code != SUCCESS_CODE {
        return Err(reject(path, status, code, raw.code, message));
    }

    let data = serde_json::from_value::<T>(raw.data.unwrap_or(Value::Null)).map_err(|source| {
        Error::network(
            path,
            NetworkCause::MalformedResponse {
                status,
                snippet: snippet(body),
                source,
            },
        )
    })?;
    Ok(Envelope {
        code,
        message,
        data,
    })
}
