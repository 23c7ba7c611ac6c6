use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn stats_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("spelltally");
            Some(state_dir.join("stats.tsv"))
        } else {
            ProjectDirs::from("", "", "spelltally")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("stats.tsv"))
        }
    }
}
