//! The errors returned by the client

/// Details reported by the service when a call is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Path of the API method that was called
    pub path: String,
    /// HTTP status of the response
    pub status: u16,
    /// Code reported in the envelope, if the body could be read
    pub code: Option<i64>,
    pub message: String,
    /// Path of the file or folder the call was about, when there is a single one
    pub resource: Option<String>,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;
        if let Some(resource) = &self.resource {
            write!(f, " for {resource}")?;
        }
        match self.code {
            Some(code) if code != i64::from(self.status) => write!(
                f,
                " (status {}, code {}, calling {})",
                self.status, code, self.path
            ),
            _ => write!(f, " (status {}, calling {})", self.status, self.path),
        }
    }
}

/// Reason of a [`Error::Network`].
#[derive(Debug, thiserror::Error)]
pub enum NetworkCause {
    /// The request couldn't be sent or the response couldn't be read
    /// (connection refused, DNS, TLS, timeout...)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The body doesn't have the expected shape
    #[error("malformed response with status {status}: {snippet}")]
    MalformedResponse {
        status: u16,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
    /// The status can't be mapped to any known outcome
    #[error("unexpected status {status}: {snippet}")]
    UnexpectedStatus { status: u16, snippet: String },
    /// The stored token contains characters that can't be sent in a header,
    /// the request was not sent
    #[error("token can't be sent as a header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),
}

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure or unreadable response
    #[error("network error calling {path}: {cause}")]
    Network {
        path: String,
        #[source]
        cause: NetworkCause,
    },
    /// The service rejected the credentials or the token
    #[error("authentication failed: {0}")]
    Authentication(Failure),
    /// The requested object doesn't exist
    #[error("not found: {0}")]
    NotFound(Failure),
    /// Any other rejection of the request by the service
    #[error("api error: {0}")]
    Api(Failure),
    /// The service failed to handle the request
    #[error("server error: {0}")]
    Server(Failure),
}

/// Discriminant of an [`Error`], handy to decide how to recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Authentication,
    NotFound,
    Api,
    Server,
}

impl Error {
    pub(crate) fn network(path: impl Into<String>, cause: impl Into<NetworkCause>) -> Self {
        Self::Network {
            path: path.into(),
            cause: cause.into(),
        }
    }

    /// Attaches the path of the file or folder the call was about.
    pub(crate) fn with_resource(mut self, resource: impl Into<String>) -> Self {
        match &mut self {
            Self::Network { .. } => {}
            Self::Authentication(inner)
            | Self::NotFound(inner)
            | Self::Api(inner)
            | Self::Server(inner) => inner.resource = Some(resource.into()),
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Api(_) => ErrorKind::Api,
            Self::Server(_) => ErrorKind::Server,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Network { .. } => None,
            Self::Authentication(inner)
            | Self::NotFound(inner)
            | Self::Api(inner)
            | Self::Server(inner) => Some(inner),
        }
    }

    /// Path of the API method that failed
    pub fn path(&self) -> &str {
        match self {
            Self::Network { path, .. } => path,
            Self::Authentication(inner)
            | Self::NotFound(inner)
            | Self::Api(inner)
            | Self::Server(inner) => &inner.path,
        }
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { cause, .. } => match cause {
                NetworkCause::Transport(inner) => inner.status().map(|status| status.as_u16()),
                NetworkCause::MalformedResponse { status, .. }
                | NetworkCause::UnexpectedStatus { status, .. } => Some(*status),
                NetworkCause::InvalidToken(_) => None,
            },
            other => other.failure().map(|inner| inner.status),
        }
    }

    /// Path of the file or folder the failed call was about
    pub fn resource(&self) -> Option<&str> {
        self.failure().and_then(|inner| inner.resource.as_deref())
    }

    /// Code reported by the service in the envelope
    pub fn code(&self) -> Option<i64> {
        self.failure().and_then(|inner| inner.code)
    }

    /// Message reported by the service, or the description of the network failure
    pub fn message(&self) -> String {
        match self {
            Self::Network { cause, .. } => cause.to_string(),
            other => other
                .failure()
                .map(|inner| inner.message.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Network {
                cause: NetworkCause::Transport(inner),
                ..
            } if inner.is_timeout()
        )
    }
}
