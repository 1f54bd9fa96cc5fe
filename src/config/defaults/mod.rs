use directories::ProjectDirs;
use std::path::PathBuf;
pub mod messages;
pub mod suggestions;

pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gsb").map(|proj_dirs| {
        let config_dir = proj_dirs.config_dir();
        config_dir.join("config.toml")
    })
}

pub fn separator() -> String {
    " ".to_string()
}
