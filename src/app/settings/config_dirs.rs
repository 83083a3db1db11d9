use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "pageZoom")
}

/// Per-user configuration directory, e.g. `~/.config/pageZoom` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; log files go here by default.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Location of the default settings file.
pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}
