use std::borrow::Cow;

use super::TransferParams;
use crate::Envelope;

impl crate::Client {
    /// Copies entries of `src_dir` into `dst_dir`.
    ///
    /// Copies between different storages are run as background tasks by the
    /// service, the call returns once they are queued.
    #[tracing::instrument(skip_all)]
    pub async fn copy<'a, N>(
        &self,
        src_dir: impl Into<Cow<'a, str>>,
        dst_dir: impl Into<Cow<'a, str>>,
        names: impl IntoIterator<Item = N>,
    ) -> crate::Result<Envelope<()>>
    where
        N: Into<Cow<'a, str>>,
    {
        let params = TransferParams::new(src_dir, dst_dir, names);
        tracing::debug!("copying {:?}", params);
        self.post_action("/api/fs/copy", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/copy")
            .match_body(Matcher::Json(serde_json::json!({
                "src_dir": "/source",
                "dst_dir": "/target",
                "names": ["file.txt"],
            })))
            .with_status(200)
            .with_body(r#"{"code":200,"message":"success","data":{"tasks":[]}}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let result = client
            .copy("/source", "/target", [String::from("file.txt")])
            .await
            .unwrap();
        assert_eq!(result.code, 200);
        assert_eq!(result.message, "success");
        m.assert();
    }
}
