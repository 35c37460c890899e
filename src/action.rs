use std::fs;
use std::path::{Component, Path, PathBuf};

use context::ApplyContext;
use error::*;

pub trait BuildAction {
    fn create_task<'a>(&self, target: &str) -> BuildTask<'a>;
}

pub struct BuildTask<'a> {
    task: Box<FnMut(&ApplyContext) -> Result<()> + 'a>
}

impl<'a> BuildTask<'a> {
    pub fn execute(mut self, context: &ApplyContext) -> Result<()> {
        let task_function: &mut FnMut(&ApplyContext) -> Result<()> = &mut *self.task;
        task_function(context)
    }

    pub fn new<T>(task_function: T) -> BuildTask<'a> where T: FnMut(&ApplyContext) -> Result<()> + 'a {
        BuildTask { task: Box::new(task_function) }
    }
}

/// Overwrites a target file in the target directory with the bytes of `source`.
pub struct CopyAction {
    source: PathBuf
}

impl CopyAction {
    pub fn new(source: PathBuf) -> CopyAction {
        CopyAction { source }
    }
}

impl BuildAction for CopyAction {
    fn create_task<'a>(&self, target: &str) -> BuildTask<'a> {
        let source = self.source.clone();
        let target = target.to_string();
        let task = move |context: &ApplyContext| {
            let destination = target_path(&context.target_dir, &target)?;
            debug!("Copying {} -> {}", source.to_string_lossy(), destination.to_string_lossy());
            check_not_same_file(&source, &destination)?;
            if context.dry_run {
                if !context.target_dir.is_dir() {
                    bail!("Target directory {} does not exist", context.target_dir.to_string_lossy());
                }
            } else {
                fs::copy(&source, &destination)
                    .chain_err(|| format!("Unable to copy file {} to destination {}", source.to_string_lossy(),
                                          destination.to_string_lossy()))?;
            }
            Ok(())
        };

        BuildTask::new(task)
    }
}

// Targets are bare file names; anything that would escape the target directory is refused.
fn target_path(target_dir: &PathBuf, target: &str) -> Result<PathBuf> {
    let mut components = Path::new(target).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(target_dir.join(target)),
        _ => bail!(ErrorKind::InvalidTargetName(target.to_string()))
    }
}

// `fs::copy` truncates the destination before reading, so copying a file onto itself empties it.
fn check_not_same_file(source: &PathBuf, destination: &PathBuf) -> Result<()> {
    if !destination.exists() {
        return Ok(());
    }
    let resolved_source = fs::canonicalize(source)
        .chain_err(|| format!("Unable to resolve source file {}", source.to_string_lossy()))?;
    let resolved_destination = fs::canonicalize(destination)
        .chain_err(|| format!("Unable to resolve destination {}", destination.to_string_lossy()))?;
    if resolved_source == resolved_destination {
        bail!(ErrorKind::SameFile(source.to_string_lossy().into_owned(),
                                  destination.to_string_lossy().into_owned()));
    }

    Ok(())
}
