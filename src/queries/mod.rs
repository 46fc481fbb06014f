pub mod files_query;
pub mod stats_query;
