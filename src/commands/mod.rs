pub mod files_command;
pub mod maintenance_command;
pub mod stats_command;
