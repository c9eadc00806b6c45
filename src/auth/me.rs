/// Roles of a user, older versions of the service send a single one
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Roles {
    Single(i64),
    Many(Vec<i64>),
}

fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Ok(match Option::<Roles>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Roles::Single(value)) => vec![value],
        Some(Roles::Many(values)) => values,
    })
}

/// The user owning the current token
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Folder the user is jailed in
    pub base_path: String,
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub role: Vec<i64>,
    #[serde(default)]
    pub disabled: bool,
    /// Bit field of the permissions granted to the user
    #[serde(default)]
    pub permission: u64,
    #[serde(default)]
    pub sso_id: String,
    /// Whether two factor authentication is enabled
    #[serde(default)]
    pub otp: bool,
}

impl crate::Client {
    /// Fetches the user owning the current token, the guest user when no token is set.
    #[tracing::instrument(skip(self))]
    pub async fn current_user(&self) -> crate::Result<User> {
        self.get_json("/api/me").await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, ErrorKind};

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/me")
            .match_header("authorization", "access-token")
            .with_status(200)
            .with_body(
                r#"{
    "code": 200,
    "message": "success",
    "data": {
        "id": 1,
        "username": "admin",
        "password": "",
        "base_path": "/",
        "role": 2,
        "disabled": false,
        "permission": 0,
        "sso_id": "",
        "otp": true
    }
}"#,
            )
            .create();
        let client = Client::builder()
            .with_base_url(server.url())
            .with_token("access-token")
            .build()
            .unwrap();
        let user = client.current_user().await.unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, vec![2]);
        assert!(user.otp);
        m.assert();
    }

    #[tokio::test]
    async fn with_many_roles() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/me")
            .with_status(200)
            .with_body(
                r#"{"code":200,"message":"success","data":{"id":3,"username":"alice","base_path":"/alice","role":[1,4]}}"#,
            )
            .create();
        let client = Client::new(server.url()).unwrap();
        let user = client.current_user().await.unwrap();
        assert_eq!(user.role, vec![1, 4]);
        assert!(!user.disabled);
        m.assert();
    }

    #[tokio::test]
    async fn expired_token() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/me")
            .with_status(200)
            .with_body(r#"{"code":401,"message":"token is expired","data":null}"#)
            .create();
        let client = Client::builder()
            .with_base_url(server.url())
            .with_token("expired")
            .build()
            .unwrap();
        let error = client.current_user().await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Authentication);
        assert_eq!(client.token().as_deref(), Some("expired"));
        m.assert();
    }
}
