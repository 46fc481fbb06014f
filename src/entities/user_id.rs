use derive_more::{Display, From, Into};

#[derive(Clone, Debug, Display, Eq, PartialEq, Hash, PartialOrd, Ord, From, Into)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
