use serde::de::IgnoredAny;

impl crate::Client {
    /// Invalidates the current token on the service side and forgets it.
    ///
    /// The token is kept when the call fails.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> crate::Result<()> {
        self.get_json::<IgnoredAny>("/api/auth/logout").await?;
        self.clear_token();
        Ok(())
    }
}
