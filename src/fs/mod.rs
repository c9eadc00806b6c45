//! Browsing and manipulation of the files exposed by the service.
//!
//! Paths are absolute and relative to the base path of the current user.

use std::borrow::Cow;

pub mod copy;
pub mod dirs;
pub mod get;
pub mod list;
pub mod mkdir;
pub mod moving;
pub mod remove;
pub mod rename;
pub mod search;
pub mod upload;

/// Parameters shared by the commands moving entries from a folder to another
#[derive(Debug, serde::Serialize)]
pub(crate) struct TransferParams<'a> {
    src_dir: Cow<'a, str>,
    dst_dir: Cow<'a, str>,
    names: Vec<Cow<'a, str>>,
}

impl<'a> TransferParams<'a> {
    pub(crate) fn new<N>(
        src_dir: impl Into<Cow<'a, str>>,
        dst_dir: impl Into<Cow<'a, str>>,
        names: impl IntoIterator<Item = N>,
    ) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        Self {
            src_dir: src_dir.into(),
            dst_dir: dst_dir.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}
