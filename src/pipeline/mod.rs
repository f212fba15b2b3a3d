//! Naming and linking pipeline.
//!
//! Combines the scanner, parser, and link executor into the two-pass run
//! that populates the destination library.

pub mod executor;
pub mod planner;

use std::path::{Path, PathBuf};

use reelvault_common::{Error, Result};
use tracing::info;

use crate::scanner::{self, ReleaseFile};
use self::planner::SkipReason;

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Hardlinks created (or, in a dry run, that would be created).
    pub created: usize,
    /// Link targets that already existed and were left alone.
    pub existing: usize,
    /// Files whose names already follow the library convention.
    pub already_named: Vec<PathBuf>,
    /// Files with no extractable title/year after both passes.
    pub unparsable: Vec<PathBuf>,
}

/// Run the full pipeline: scan, plan, link, then retry the skipped set.
///
/// The second pass applies the identical planning logic to the files the
/// first pass skipped; whatever it still skips is final and lands in the
/// report. Planning never reads the destination, so executing between
/// the passes carries no ordering requirement.
pub fn run(source: &Path, dest: &Path, dry_run: bool) -> Result<RunReport> {
    if !source.is_dir() {
        return Err(Error::not_found(format!(
            "source directory {}",
            source.display()
        )));
    }

    let releases = scanner::scan_tree(source)?;
    info!(
        "found {} release files under {}",
        releases.len(),
        source.display()
    );

    let first = planner::plan(&releases);
    let mut outcome = executor::execute(dest, &first.tasks, dry_run)?;

    let retries: Vec<ReleaseFile> = first
        .skipped
        .iter()
        .filter_map(|skipped| release_from_path(&skipped.path))
        .collect();
    let second = planner::plan(&retries);
    let retry_outcome = executor::execute(dest, &second.tasks, dry_run)?;
    outcome.created += retry_outcome.created;
    outcome.existing += retry_outcome.existing;

    let mut report = RunReport {
        created: outcome.created,
        existing: outcome.existing,
        ..Default::default()
    };
    for skipped in second.skipped {
        match skipped.reason {
            SkipReason::Unparsable => report.unparsable.push(skipped.path),
            SkipReason::AlreadyNamed => report.already_named.push(skipped.path),
        }
    }

    Ok(report)
}

fn release_from_path(path: &Path) -> Option<ReleaseFile> {
    let file_name = path.file_name()?.to_str()?.to_string();
    Some(ReleaseFile {
        path: path.to_path_buf(),
        file_name,
    })
}
