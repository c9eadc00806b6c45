//! Client library for the [OpenList](https://github.com/OpenListTeam/OpenList) HTTP API.
//!
//! Every call goes through [`Client::execute`], which attaches the current token,
//! reads the `{code, message, data}` envelope returned by the service and turns
//! failures into an [`Error`].
//!
//! ```
//! use openlist::ClientBuilder;
//!
//! # tokio_test::block_on(async {
//! let client = ClientBuilder::from_env().build().unwrap();
//! match client.list("/").await {
//!     Ok(listing) => {
//!         for entry in listing.content {
//!             println!("{} ({} bytes)", entry.name, entry.size);
//!         }
//!     }
//!     Err(err) => eprintln!("error: {:?}", err),
//! }
//! # })
//! ```

use std::borrow::Cow;
use std::time::Duration;

pub mod auth;
pub mod builder;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod fs;
pub mod request;
pub mod response;

pub use builder::ClientBuilder;
pub use credentials::TokenStore;
pub use error::{Error, ErrorKind, Failure, NetworkCause};
pub use request::Request;
pub use response::Envelope;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// Address of a local OpenList instance with its default port
pub const DEFAULT_BASE_URL: &str = "http://localhost:5244";
/// Timeout applied to every call when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type returned by the client methods.
pub type Result<T> = std::result::Result<T, Error>;

/// Client for the OpenList REST API.
///
/// Cloning a client is cheap, the clones share the connection pool and the token.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    timeout: Duration,
    token: TokenStore,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client for the given base url with the default timeout and no token.
    pub fn new(base_url: impl Into<Cow<'static, str>>) -> std::result::Result<Self, builder::Error> {
        ClientBuilder::default().with_base_url(base_url).build()
    }

    /// Creates a builder with the default configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replaces the token sent with every following call.
    ///
    /// An empty token is the same as calling [`Client::clear_token`].
    pub fn set_token(&self, token: impl Into<String>) {
        self.token.set(token);
    }

    /// Removes the token, following calls are sent anonymously.
    pub fn clear_token(&self) {
        self.token.clear();
    }

    /// Returns the token currently attached to the calls, if any.
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use std::time::Duration;

    pub fn init() {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn should_use_default_configuration() {
        let client = Client::new("http://localhost:5244").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5244");
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert!(client.token().is_none());
    }

    #[test]
    fn should_share_token_between_clones() {
        let client = Client::new("http://localhost:5244").unwrap();
        let other = client.clone();
        client.set_token("test_token");
        assert_eq!(other.token().as_deref(), Some("test_token"));
        other.clear_token();
        assert!(client.token().is_none());
    }
}
