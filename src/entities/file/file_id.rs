use derive_more::{Display, From, Into};

/// Unique across all files; doubles as the blob key.
#[derive(Clone, Debug, Display, Eq, PartialEq, Hash, PartialOrd, Ord, From, Into)]
pub struct FileId(String);

impl FileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
