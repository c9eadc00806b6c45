//! Resources needed to list the content of a folder

use std::borrow::Cow;

use crate::entry::ListResult;

/// Options used when listing a folder
///
/// ```
/// use openlist::fs::list::ListOptions;
///
/// let options = ListOptions::default().with_page(2).with_per_page(50);
/// assert_eq!(options.page, 2);
/// ```
#[derive(Clone, Debug)]
pub struct ListOptions {
    /// Index of the page, starting at 1
    pub page: u32,
    /// Number of entries per page, 0 meaning all of them
    pub per_page: u32,
    /// Password of the folder, if it's protected
    pub password: String,
    /// If is set, the storage is queried instead of the cache of the service.
    pub refresh: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 0,
            password: String::new(),
            refresh: false,
        }
    }
}

impl ListOptions {
    pub fn set_page(&mut self, value: u32) {
        self.page = value;
    }

    pub fn with_page(mut self, value: u32) -> Self {
        self.page = value;
        self
    }

    pub fn set_per_page(&mut self, value: u32) {
        self.per_page = value;
    }

    pub fn with_per_page(mut self, value: u32) -> Self {
        self.per_page = value;
        self
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn with_password(mut self, value: impl Into<String>) -> Self {
        self.password = value.into();
        self
    }

    /// If is set, the storage is queried instead of the cache of the service.
    pub fn set_refresh(&mut self, value: bool) {
        self.refresh = value;
    }

    /// If is set, the storage is queried instead of the cache of the service.
    pub fn with_refresh(mut self, value: bool) -> Self {
        self.refresh = value;
        self
    }
}

#[derive(serde::Serialize)]
struct ListParams<'a> {
    path: Cow<'a, str>,
    password: &'a str,
    page: u32,
    per_page: u32,
    refresh: bool,
}

impl crate::Client {
    /// Lists the whole content of a folder.
    ///
    /// # Examples
    ///
    /// ```
    /// use openlist::ClientBuilder;
    ///
    /// # tokio_test::block_on(async {
    /// let client = ClientBuilder::from_env().build().unwrap();
    /// match client.list("/").await {
    ///     Ok(listing) => println!("{} entries provided by {}", listing.total, listing.provider),
    ///     Err(err) => eprintln!("error: {:?}", err),
    /// }
    /// # })
    /// ```
    pub async fn list<'a>(&self, path: impl Into<Cow<'a, str>>) -> crate::Result<ListResult> {
        self.list_with_options(path, &ListOptions::default()).await
    }

    /// Lists the content of a folder, page by page.
    #[tracing::instrument(skip_all, fields(page = options.page, per_page = options.per_page))]
    pub async fn list_with_options<'a>(
        &self,
        path: impl Into<Cow<'a, str>>,
        options: &ListOptions,
    ) -> crate::Result<ListResult> {
        let path = path.into();
        let params = ListParams {
            path: Cow::Borrowed(&path),
            password: &options.password,
            page: options.page,
            per_page: options.per_page,
            refresh: options.refresh,
        };
        tracing::debug!("listing {}", params.path);
        let mut result: ListResult = self
            .post_json("/api/fs/list", params)
            .await
            .map_err(|err| err.with_resource(&*path))?;
        result.page = options.page;
        result.per_page = options.per_page;
        Ok(result)
    }
}
