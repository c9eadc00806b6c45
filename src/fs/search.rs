//! Resources needed to search entries by name

use std::borrow::Cow;

use crate::entry::SearchResult;

/// Kind of entries a search should return
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    Directories,
    Files,
}

impl serde::Serialize for SearchScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(match self {
            Self::All => 0,
            Self::Directories => 1,
            Self::Files => 2,
        })
    }
}

#[derive(serde::Serialize)]
struct SearchParams<'a> {
    parent: Cow<'a, str>,
    keywords: Cow<'a, str>,
    scope: SearchScope,
    page: u32,
    per_page: u32,
    password: &'a str,
}

impl crate::Client {
    /// Searches the entries below `parent` whose name matches the keywords.
    ///
    /// The search relies on the index built by the service and fails when it's disabled.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use openlist::fs::search::SearchScope;
    ///
    /// # async fn example(client: &openlist::Client) -> openlist::Result<()> {
    /// let found = client.search("/", "test", SearchScope::Files, 1, 10).await?;
    /// for item in found.content {
    ///     println!("{}", item.path());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, parent, keywords))]
    pub async fn search<'a>(
        &self,
        parent: impl Into<Cow<'a, str>>,
        keywords: impl Into<Cow<'a, str>>,
        scope: SearchScope,
        page: u32,
        per_page: u32,
    ) -> crate::Result<SearchResult> {
        let params = SearchParams {
            parent: parent.into(),
            keywords: keywords.into(),
            scope,
            page,
            per_page,
            password: "",
        };
        let mut result: SearchResult = self.post_json("/api/fs/search", params).await?;
        result.page = page;
        result.per_page = per_page;
        Ok(result)
    }
}
