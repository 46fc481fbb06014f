use derive_more::Into;
use thiserror::Error;

/// Version counter maintained by the client. Stored as given; there is no
/// optimistic concurrency check against it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Into)]
pub struct VersionId(i64);

impl VersionId {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for VersionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Clone)]
pub enum VersionIdTryFromError {
    #[error("VersionId must be non negative")]
    NegativeInteger,
}

impl TryFrom<i64> for VersionId {
    type Error = VersionIdTryFromError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(VersionIdTryFromError::NegativeInteger)
        }
    }
}
