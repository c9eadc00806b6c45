use std::borrow::Cow;

use super::TransferParams;
use crate::Envelope;

impl crate::Client {
    /// Moves entries of `src_dir` into `dst_dir`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// client.move_entries("/source", "/target", ["file.txt"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn move_entries<'a, N>(
        &self,
        src_dir: impl Into<Cow<'a, str>>,
        dst_dir: impl Into<Cow<'a, str>>,
        names: impl IntoIterator<Item = N>,
    ) -> crate::Result<Envelope<()>>
    where
        N: Into<Cow<'a, str>>,
    {
        let params = TransferParams::new(src_dir, dst_dir, names);
        tracing::debug!("moving {:?}", params);
        self.post_action("/api/fs/move", params).await
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
            .mock("POST", "/api/fs/move")
            .match_body(Matcher::Json(serde_json::json!({
                "src_dir": "/source",
                "dst_dir": "/target",
                "names": ["file.txt", "other.txt"],
            })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":null}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        client
            .move_entries("/source", "/target", vec!["file.txt", "other.txt"])
            .await
            .unwrap();
        m.assert();
    }

    #[tokio::test]
    async fn unauthorized() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/move")
            .with_status(401)
            .with_body("")
            .create();
        let client = Client::new(server.url()).unwrap();
        let error = client
            .move_entries("/source", "/target", ["file.txt"])
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Authentication);
        m.assert();
    }
}
