//! Config file discovery
//!
//! A project-local `.todo-goals.toml` overrides the per-user files, so a
//! checkout can carry its own prompt and markers.

use std::path::PathBuf;

const CONFIG_FILE: &str = ".todo-goals.toml";

/// Candidate config files, most specific first
///
/// 1. `.todo-goals.toml` in the working directory
/// 2. `.todo-goals.toml` in `$HOME`
/// 3. `config.toml` in the todo-goals config directory
fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    match crate::paths::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No config directory: {}", e),
    }
    paths
}

/// Content of the first readable config file, if any
pub fn load_config_file() -> Option<String> {
    candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}
