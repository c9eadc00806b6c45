//! Resources needed to upload a file

use reqwest::header::HeaderName;
use reqwest::multipart::{Form, Part};
use serde::de::IgnoredAny;

use crate::request::Request;
use crate::Envelope;

const FILE_PATH: &str = "file-path";
const AS_TASK: &str = "as-task";

/// Name of the file part, the last segment of the path
fn file_name(path: &str) -> String {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}

impl crate::Client {
    /// Uploads the content of a file held in memory.
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute path of the file to create, including its name.
    /// * `content` - Bytes of the file.
    /// * `as_task` - If is set, the service stores the file in a background task
    ///   and answers before it's written in the storage.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// client.upload("/notes/hello.txt", b"hello world".to_vec(), false).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    pub async fn upload(
        &self,
        path: &str,
        content: Vec<u8>,
        as_task: bool,
    ) -> crate::Result<Envelope<()>> {
        let form = Form::new().part("file", Part::bytes(content).file_name(file_name(path)));
        let request = Request::put("/api/fs/form")
            .form(form)
            // the service expects the path to be percent encoded, as in a url
            .header(HeaderName::from_static(FILE_PATH), urlencoding::encode(path))
            .header(
                HeaderName::from_static(AS_TASK),
                if as_task { "true" } else { "false" },
            );
        self.execute::<IgnoredAny, ()>(request)
            .await
            .map(|envelope| envelope.map(|_| ()))
    }
}
