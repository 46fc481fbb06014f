use serde::{Deserialize, Serialize};

/// Site statistics counters. Nothing records them yet, see `queries::stats_query`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub open_source: u64,
    pub design: u64,
    pub lightweight: u64,
    pub privacy: u64,
}
