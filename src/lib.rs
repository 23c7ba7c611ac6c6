// Library surface for the statistics store and its summaries.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod stats;
pub mod summary;
pub mod tally;
pub mod util;
