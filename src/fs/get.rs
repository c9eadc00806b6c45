use std::borrow::Cow;

use crate::entry::FileInfo;

#[derive(serde::Serialize)]
struct GetParams<'a> {
    path: Cow<'a, str>,
    password: Cow<'a, str>,
}

impl crate::Client {
    /// Fetches the information about a file or a folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when nothing exists at this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use openlist::ClientBuilder;
    ///
    /// # tokio_test::block_on(async {
    /// let client = ClientBuilder::from_env().build().unwrap();
    /// match client.get("/movies/video.mp4").await {
    ///     Ok(info) => println!("download it from {}", info.raw_url),
    ///     Err(openlist::Error::NotFound(_)) => println!("no such file"),
    ///     Err(err) => eprintln!("error: {:?}", err),
    /// }
    /// # })
    /// ```
    pub async fn get<'a>(&self, path: impl Into<Cow<'a, str>>) -> crate::Result<FileInfo> {
        self.get_with_password(path, "").await
    }

    /// Fetches the information about an entry located in a protected folder.
    #[tracing::instrument(skip_all)]
    pub async fn get_with_password<'a>(
        &self,
        path: impl Into<Cow<'a, str>>,
        password: impl Into<Cow<'a, str>>,
    ) -> crate::Result<FileInfo> {
        let path = path.into();
        let params = GetParams {
            path: Cow::Borrowed(&path),
            password: password.into(),
        };
        let result = self.post_json("/api/fs/get", params).await;
        result.map_err(|err| err.with_resource(&*path))
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::FileType;
    use crate::{Client, Error, ErrorKind};
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/get")
            .match_body(Matcher::Json(serde_json::json!({
                "path": "/test_folder",
                "password": "",
            })))
            .with_status(200)
            .with_body(
                r#"{
    "code": 200,
    "message": "success",
    "data": {
        "name": "test_folder",
        "size": 0,
        "is_dir": true,
        "modified": "2024-01-01T00:00:00Z",
        "created": "2024-01-01T00:00:00Z",
        "sign": "",
        "thumb": "",
        "type": 1,
        "hashinfo": "null",
        "hash_info": null,
        "raw_url": "",
        "readme": "",
        "header": "",
        "provider": "Local",
        "related": null
    }
}"#,
            )
            .create();
        let client = Client::new(server.url()).unwrap();
        let info = client.get("/test_folder").await.unwrap();
        assert_eq!(info.entry.name, "test_folder");
        assert!(info.entry.is_dir);
        assert_eq!(info.entry.file_type(), FileType::Folder);
        assert_eq!(info.provider, "Local");
        m.assert();
    }

    #[tokio::test]
    async fn not_found_status() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/get")
            .with_status(404)
            .with_body(r#"{"message":"Not found"}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        client.set_token("test_token");
        let error = client.get("/nonexistent.txt").await.unwrap_err();
        assert!(matches!(error, Error::NotFound(ref failure) if failure.status == 404));
        assert_eq!(error.path(), "/api/fs/get");
        assert_eq!(error.resource(), Some("/nonexistent.txt"));
        m.assert();
    }

    #[tokio::test]
    async fn not_found_code() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/api/fs/get")
            .with_status(200)
            .with_body(r#"{"code":500,"message":"failed get obj: object not found","data":null}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let error = client.get("/nonexistent.txt").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.code(), Some(500));
        m.assert();
    }
}
