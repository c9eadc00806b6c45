use std::borrow::Cow;

use sha2::{Digest, Sha256};

use super::LoginToken;

/// Suffix the service appends to the password before hashing it
pub const PASSWORD_SALT: &str = "-https://github.com/alist-org/alist";

#[derive(serde::Serialize)]
struct LoginParams<'a> {
    username: Cow<'a, str>,
    password: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    otp_code: Option<Cow<'a, str>>,
}

/// Computes the value expected by `/api/auth/login/hash` for a clear password.
///
/// ```
/// let hashed = openlist::auth::login::hash_password("password");
/// assert_eq!(hashed.len(), 64);
/// ```
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

impl crate::Client {
    async fn request_token(
        &self,
        path: &str,
        params: LoginParams<'_>,
    ) -> crate::Result<LoginToken> {
        let result: LoginToken = self.post_json(path, params).await?;
        self.set_token(result.token.as_str());
        Ok(result)
    }

    /// Logs in with a username and a password.
    ///
    /// On success, the returned token is stored in the client and sent with
    /// every following call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`](crate::Error::Authentication) when the
    /// service rejects the credentials.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// let token = client.login("admin", "password").await?;
    /// assert_eq!(client.token(), Some(token.token));
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn login<'a>(
        &self,
        username: impl Into<Cow<'a, str>>,
        password: impl Into<Cow<'a, str>>,
    ) -> crate::Result<LoginToken> {
        self.request_token(
            "/api/auth/login",
            LoginParams {
                username: username.into(),
                password: password.into(),
                otp_code: None,
            },
        )
        .await
    }

    /// Logs in with a username, a password and a one time password, for
    /// accounts with two factor authentication enabled.
    #[tracing::instrument(skip_all)]
    pub async fn login_with_otp<'a>(
        &self,
        username: impl Into<Cow<'a, str>>,
        password: impl Into<Cow<'a, str>>,
        otp_code: impl Into<Cow<'a, str>>,
    ) -> crate::Result<LoginToken> {
        self.request_token(
            "/api/auth/login",
            LoginParams {
                username: username.into(),
                password: password.into(),
                otp_code: Some(otp_code.into()),
            },
        )
        .await
    }

    /// Logs in without sending the clear password, using [`hash_password`].
    #[tracing::instrument(skip_all)]
    pub async fn login_hash<'a>(
        &self,
        username: impl Into<Cow<'a, str>>,
        password: &str,
    ) -> crate::Result<LoginToken> {
        self.request_token(
            "/api/auth/login/hash",
            LoginParams {
                username: username.into(),
                password: Cow::Owned(hash_password(password)),
                otp_code: None,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::hash_password;
    use crate::{Client, ErrorKind};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "admin",
                "password": "password",
            })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":{"token":"mock_jwt_token"}}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let result = client.login("admin", "password").await.unwrap();
        assert_eq!(result.token, "mock_jwt_token");
        assert_eq!(client.token().as_deref(), Some("mock_jwt_token"));
        m.assert();
    }

    #[tokio::test]
    async fn with_otp() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "admin",
                "password": "password",
                "otp_code": "123456",
            })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":{"token":"otp_token"}}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let result = client
            .login_with_otp("admin", "password", "123456")
            .await
            .unwrap();
        assert_eq!(result.token, "otp_token");
        m.assert();
    }

    #[tokio::test]
    async fn hashed() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login/hash")
            .match_body(Matcher::Json(serde_json::json!({
                "username": "admin",
                "password": hash_password("password"),
            })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":{"token":"hashed_token"}}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        client.login_hash("admin", "password").await.unwrap();
        assert_eq!(client.token().as_deref(), Some("hashed_token"));
        m.assert();
    }

    #[tokio::test]
    async fn rejected_with_status() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Invalid credentials"}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        client.set_token("previous");
        let error = client.login("admin", "wrong_password").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Authentication);
        assert_eq!(error.message(), "Invalid credentials");
        assert_eq!(client.token().as_deref(), Some("previous"));
        m.assert();
    }

    #[tokio::test]
    async fn rejected_with_code() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"code":400,"message":"password is incorrect","data":null}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let error = client.login("admin", "wrong_password").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Authentication);
        assert_eq!(error.code(), Some(400));
        assert!(client.token().is_none());
        m.assert();
    }

    #[test]
    fn should_hash_with_salt() {
        let hashed = hash_password("password");
        assert_eq!(hashed.len(), 64);
        assert!(hashed.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(hashed, hash_password("other"));
    }
}
