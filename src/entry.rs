use chrono::{DateTime, Utc};

/// Kind of content, as guessed by the service from the name of the entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileType {
    Unknown,
    Folder,
    Video,
    Audio,
    Text,
    Image,
    Other(u8),
}

impl From<u8> for FileType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Folder,
            2 => Self::Video,
            3 => Self::Audio,
            4 => Self::Text,
            5 => Self::Image,
            other => Self::Other(other),
        }
    }
}

impl From<FileType> for u8 {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Unknown => 0,
            FileType::Folder => 1,
            FileType::Video => 2,
            FileType::Audio => 3,
            FileType::Text => 4,
            FileType::Image => 5,
            FileType::Other(other) => other,
        }
    }
}

/// A file or a folder, as listed by the service
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub is_dir: bool,
    pub modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Signature to append to download links when the storage requires it
    pub sign: String,
    /// Url of the thumbnail, empty when there is none
    pub thumb: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

impl FileEntry {
    pub fn file_type(&self) -> FileType {
        FileType::from(self.kind)
    }
}

/// Content of a folder
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ListResult {
    /// Entries in the order sent by the service
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<FileEntry>,
    pub total: u64,
    pub readme: String,
    pub header: String,
    /// Whether the current user can write in this folder
    pub write: bool,
    /// Name of the storage driver
    pub provider: String,
    /// Page requested, copied from the request
    #[serde(skip)]
    pub page: u32,
    /// Page size requested, copied from the request
    #[serde(skip)]
    pub per_page: u32,
}

impl ListResult {
    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.content.iter().find(|item| item.name == name)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.content.iter().filter(|item| !item.is_dir)
    }

    pub fn folders(&self) -> impl Iterator<Item = &FileEntry> {
        self.content.iter().filter(|item| item.is_dir)
    }
}

/// Detailed information about a single entry
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct FileInfo {
    #[serde(flatten)]
    pub entry: FileEntry,
    /// Direct link to the content, empty for folders
    #[serde(default)]
    pub raw_url: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub provider: String,
}

impl From<FileInfo> for FileEntry {
    fn from(value: FileInfo) -> Self {
        value.entry
    }
}

/// A folder, as returned when listing the folder tree
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct DirEntry {
    pub name: String,
    pub modified: DateTime<Utc>,
}

/// An entry matching a search
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SearchEntry {
    /// Folder containing the entry
    pub parent: String,
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: u8,
}

impl SearchEntry {
    pub fn file_type(&self) -> FileType {
        FileType::from(self.kind)
    }

    /// Absolute path of the entry
    pub fn path(&self) -> String {
        format!("{}/{}", self.parent.trim_end_matches('/'), self.name)
    }
}

/// Entries matching a search
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<SearchEntry>,
    pub total: u64,
    #[serde(skip)]
    pub page: u32,
    #[serde(skip)]
    pub per_page: u32,
}

/// The service sends `null` instead of an empty list
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
