//! Authentication of the client and information about the current user.

pub mod login;
pub mod logout;
pub mod me;

/// Token returned by the service after a successful login
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LoginToken {
    pub token: String,
}
