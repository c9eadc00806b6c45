use std::borrow::Cow;

use crate::Envelope;

#[derive(serde::Serialize)]
struct RemoveParams<'a> {
    dir: Cow<'a, str>,
    names: Vec<Cow<'a, str>>,
}

#[derive(serde::Serialize)]
struct RemoveEmptyDirectoryParams<'a> {
    src_dir: Cow<'a, str>,
}

impl crate::Client {
    /// Deletes entries of a folder.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// client.remove("/folder", ["file.txt"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn remove<'a, N>(
        &self,
        dir: impl Into<Cow<'a, str>>,
        names: impl IntoIterator<Item = N>,
    ) -> crate::Result<Envelope<()>>
    where
        N: Into<Cow<'a, str>>,
    {
        let params = RemoveParams {
            dir: dir.into(),
            names: names.into_iter().map(Into::into).collect(),
        };
        self.post_action("/api/fs/remove", params).await
    }

    /// Deletes every empty folder below `src_dir`.
    #[tracing::instrument(skip_all)]
    pub async fn remove_empty_directory<'a>(
        &self,
        src_dir: impl Into<Cow<'a, str>>,
    ) -> crate::Result<Envelope<()>> {
        let params = RemoveEmptyDirectoryParams {
            src_dir: src_dir.into(),
        };
        self.post_action("/api/fs/remove_empty_directory", params)
            .await
    }
}
