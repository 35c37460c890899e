use std::fs;
use std::path::PathBuf;

/// Name of the game data directory that sits next to the source directory.
pub const TARGET_DIR_NAME: &str = "data2";

#[derive(Clone)]
pub struct ApplyContext {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub dry_run: bool
}

impl ApplyContext {
    pub fn source_path(&self, source: &str) -> PathBuf {
        self.source_dir.join(source)
    }
}

/// The `data2` sibling of `source_dir`. Falls back to `<source_dir>/../data2` when the
/// source directory cannot be resolved.
pub fn default_target_dir(source_dir: &PathBuf) -> PathBuf {
    match fs::canonicalize(source_dir) {
        Ok(resolved) => match resolved.parent() {
            Some(parent) => parent.join(TARGET_DIR_NAME),
            None => resolved.join(TARGET_DIR_NAME)
        },
        Err(error) => {
            debug!("Unable to resolve source directory {}: {}", source_dir.to_string_lossy(), error);
            source_dir.join("..").join(TARGET_DIR_NAME)
        }
    }
}
