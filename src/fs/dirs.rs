use std::borrow::Cow;

use crate::entry::DirEntry;

#[derive(serde::Serialize)]
struct DirsParams<'a> {
    path: Cow<'a, str>,
    password: &'a str,
    force_root: bool,
}

impl crate::Client {
    /// Lists the folders directly inside a folder, without the files.
    #[tracing::instrument(skip_all)]
    pub async fn dirs<'a>(&self, path: impl Into<Cow<'a, str>>) -> crate::Result<Vec<DirEntry>> {
        let path = path.into();
        let params = DirsParams {
            path: Cow::Borrowed(&path),
            password: "",
            force_root: false,
        };
        let result: Option<Vec<DirEntry>> = self
            .post_json("/api/fs/dirs", params)
            .await
            .map_err(|err| err.with_resource(&*path))?;
        Ok(result.unwrap_or_default())
    }
}
