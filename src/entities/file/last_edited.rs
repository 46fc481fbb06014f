use derive_more::{From, Into};

// supplied by the client, never generated here
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, From, Into)]
pub struct LastEdited(i64);
