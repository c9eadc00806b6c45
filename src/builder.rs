use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URL, the timeout, an initial token and optionally
/// customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use std::time::Duration;
///
/// let client = openlist::ClientBuilder::default()
///     .with_base_url("https://files.example.com")
///     .with_timeout(Duration::from_secs(10))
///     .with_token("my-token")
///     .build()
///     .expect("unable to build client");
/// assert_eq!(client.token().as_deref(), Some("my-token"));
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    timeout: Duration,
    token: Option<String>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is a local instance on the default port.
    /// - Timeout is 30 seconds.
    /// - No token is set.
    /// - No custom `reqwest::ClientBuilder` is used.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::DEFAULT_BASE_URL),
            client_builder: None,
            timeout: crate::DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

fn parse_timeout(value: String) -> Option<Duration> {
    match value.parse::<u64>() {
        Ok(seconds) => Some(Duration::from_secs(seconds)),
        Err(err) => {
            tracing::warn!("ignoring invalid OPENLIST_TIMEOUT value {value:?}: {err}");
            None
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `OPENLIST_BASE_URL` for the endpoint.
    /// - Uses `OPENLIST_TOKEN` for the initial token.
    /// - Uses `OPENLIST_TIMEOUT`, in seconds, for the timeout.
    ///
    /// Missing or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("OPENLIST_BASE_URL")
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::DEFAULT_BASE_URL));
        let token = lookup("OPENLIST_TOKEN").filter(|value| !value.is_empty());
        let timeout = lookup("OPENLIST_TIMEOUT")
            .and_then(parse_timeout)
            .unwrap_or(crate::DEFAULT_TIMEOUT);

        Self {
            base_url,
            client_builder: None,
            timeout,
            token,
        }
    }
}

impl ClientBuilder {
    /// Sets the base URL of the service.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets the base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets the timeout applied to every call.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Sets the timeout and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Sets the token used before any login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Sets the token and returns the modified builder.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT)
            .timeout(self.timeout);
        let base_url = match self.base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
        Ok(crate::Client {
            base_url,
            timeout: self.timeout,
            token: crate::TokenStore::new(self.token),
            inner: builder.build()?,
        })
    }
}
