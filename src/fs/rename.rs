use std::borrow::Cow;

use crate::Envelope;

#[derive(serde::Serialize)]
struct RenameParams<'a> {
    path: Cow<'a, str>,
    name: Cow<'a, str>,
}

#[derive(serde::Serialize)]
struct RenameObject<'a> {
    src_name: Cow<'a, str>,
    new_name: Cow<'a, str>,
}

#[derive(serde::Serialize)]
struct BatchRenameParams<'a> {
    src_dir: Cow<'a, str>,
    rename_objects: Vec<RenameObject<'a>>,
}

impl crate::Client {
    /// Renames a file or a folder, keeping it in the same parent folder.
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute path of the entry to rename.
    /// * `name` - New name of the entry, without any folder.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// client.rename("/old_name.txt", "new_name.txt").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub async fn rename<'a>(
        &self,
        path: impl Into<Cow<'a, str>>,
        name: impl Into<Cow<'a, str>>,
    ) -> crate::Result<Envelope<()>> {
        let path = path.into();
        let params = RenameParams {
            path: Cow::Borrowed(&path),
            name: name.into(),
        };
        let result = self.post_action("/api/fs/rename", params).await;
        result.map_err(|err| err.with_resource(&*path))
    }

    /// Renames several entries of the same folder at once.
    ///
    /// Each item of `renames` is a pair of the current name and the new name.
    #[tracing::instrument(skip_all)]
    pub async fn batch_rename<'a, N>(
        &self,
        src_dir: impl Into<Cow<'a, str>>,
        renames: impl IntoIterator<Item = (N, N)>,
    ) -> crate::Result<Envelope<()>>
    where
        N: Into<Cow<'a, str>>,
    {
        let params = BatchRenameParams {
            src_dir: src_dir.into(),
            rename_objects: renames
                .into_iter()
                .map(|(src_name, new_name)| RenameObject {
                    src_name: src_name.into(),
                    new_name: new_name.into(),
                })
                .collect(),
        };
        self.post_action("/api/fs/batch_rename", params).await
    }
}
