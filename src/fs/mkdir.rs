use std::borrow::Cow;

use crate::Envelope;

#[derive(serde::Serialize)]
struct MkdirParams<'a> {
    path: Cow<'a, str>,
}

impl crate::Client {
    /// Creates a folder, along with its missing parents.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// client.mkdir("/test_folder").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn mkdir<'a>(
        &self,
        path: impl Into<Cow<'a, str>>,
    ) -> crate::Result<Envelope<()>> {
        let path = path.into();
        let params = MkdirParams {
            path: Cow::Borrowed(&path),
        };
        let result = self.post_action("/api/fs/mkdir", params).await;
        result.map_err(|err| err.with_resource(&*path))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, ErrorKind};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/mkdir")
            .match_header("authorization", "test_token")
            .match_body(Matcher::Json(serde_json::json!({ "path": "/new_folder" })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":null}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        client.set_token("test_token");
        let result = client.mkdir("/new_folder").await.unwrap();
        assert_eq!(result.message, "success");
        m.assert();
    }

    #[tokio::test]
    async fn forbidden() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/mkdir")
            .with_status(200)
            .with_body(r#"{"code":403,"message":"permission denied","data":null}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let error = client.mkdir("/new_folder").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.message(), "permission denied");
        assert_eq!(error.resource(), Some("/new_folder"));
        m.assert();
    }
}
