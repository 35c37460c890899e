use action::{BuildAction, CopyAction};
use context::ApplyContext;
use mapping::BuildMapping;

/// Outcome of one pass over the mapping table. Sources are listed in table order.
#[derive(Debug, Default, PartialEq)]
pub struct ApplySummary {
    /// Sources copied to at least one target.
    pub used: Vec<String>,
    /// Sources that exist but were not copied anywhere.
    pub unused: Vec<String>,
    /// Sources that were not found in the source directory.
    pub missing: Vec<String>,
    pub copied: usize,
    pub failed: usize
}

impl ApplySummary {
    pub fn log(&self) {
        info!("unused sources: {:?}", self.unused);
        info!("used {} sources: {:?}", self.used.len(), self.used);
        if !self.missing.is_empty() {
            warn!("missing {} sources: {:?}", self.missing.len(), self.missing);
        }
        info!("copied {} files, {} failed", self.copied, self.failed);
    }
}

/// Copies every source to each of its targets. Per-file failures are logged and never stop the run.
pub fn apply_builds(mappings: &[BuildMapping], context: &ApplyContext) -> ApplySummary {
    let mut summary = ApplySummary::default();
    for mapping in mappings {
        let source_path = context.source_path(&mapping.source);
        if !source_path.is_file() {
            warn!("file {} does not exist", source_path.to_string_lossy());
            summary.missing.push(mapping.source.clone());
            continue;
        }

        info!("copying '{}'", mapping.source);
        let action = CopyAction::new(source_path.clone());
        let mut is_used = false;
        for target in &mapping.targets {
            match action.create_task(target).execute(context) {
                Ok(()) => {
                    info!("    to '{}'", target);
                    summary.copied += 1;
                    is_used = true;
                }
                Err(ref error) => {
                    error!("error copying '{}' to '{}': {}", source_path.to_string_lossy(),
                           context.target_dir.join(target).to_string_lossy(), error);
                    for cause in error.iter().skip(1) {
                        error!("caused by: {}", cause);
                    }
                    summary.failed += 1;
                }
            }
        }

        if is_used {
            summary.used.push(mapping.source.clone());
        } else {
            summary.unused.push(mapping.source.clone());
        }
    }

    summary
}
