//! Link planning.
//!
//! Decides, per release file, whether it needs a link, already follows the
//! library convention, or cannot be named at all.

use std::path::PathBuf;

use reelvault_parser::output::{LibraryFormat, OutputFormat};
use reelvault_parser::{parse, ParsedRelease};
use tracing::{debug, info};

use crate::scanner::ReleaseFile;

/// One planned hardlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTask {
    /// File the link will point at.
    pub source_path: PathBuf,
    /// Destination folder name under the library root.
    pub folder_name: String,
    /// Destination file stem; the source extension is appended at link
    /// time.
    pub file_stem: String,
}

/// Why a file was not planned in this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No valid title/year could be extracted.
    Unparsable,
    /// The filename already carries the canonical folder name and tags.
    AlreadyNamed,
}

/// A file deferred out of this pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of one planning pass.
#[derive(Debug, Default)]
pub struct Plan {
    pub tasks: Vec<LinkTask>,
    pub skipped: Vec<SkippedFile>,
}

/// Plan links for a set of release files.
///
/// Applied once over the scanner output, then a second time over the
/// files the first pass skipped. Parsing uses the selected filename, not
/// the full path.
pub fn plan(releases: &[ReleaseFile]) -> Plan {
    let mut plan = Plan::default();

    for release in releases {
        let parsed = parse(&release.file_name);
        match &parsed.title_year {
            Some(title_year) => info!(
                "processing {}: title {:?}, year {}",
                release.file_name, title_year.title, title_year.year
            ),
            None => info!("processing {}: no title/year", release.file_name),
        }

        let Some(name) = LibraryFormat.format(&parsed) else {
            plan.skipped.push(SkippedFile {
                path: release.path.clone(),
                reason: SkipReason::Unparsable,
            });
            continue;
        };

        if is_already_named(&release.file_name, &parsed, &name.folder_name) {
            debug!("{} already follows the library convention", release.file_name);
            plan.skipped.push(SkippedFile {
                path: release.path.clone(),
                reason: SkipReason::AlreadyNamed,
            });
            continue;
        }

        debug!(
            "planned {} -> {}/{}",
            release.file_name, name.folder_name, name.file_stem
        );
        plan.tasks.push(LinkTask {
            source_path: release.path.clone(),
            folder_name: name.folder_name,
            file_stem: name.file_stem,
        });
    }

    plan
}

/// Substring heuristic for files that already carry their canonical name.
///
/// The folder name must appear verbatim in the filename, along with the
/// detected source token or the detected quality token (case-sensitive).
/// A title that coincidentally contains all of these false-positives;
/// that is accepted behavior.
fn is_already_named(file_name: &str, parsed: &ParsedRelease, folder_name: &str) -> bool {
    if !file_name.contains(folder_name) {
        return false;
    }

    file_name.contains(parsed.source.as_str())
        || parsed
            .quality
            .is_some_and(|q| file_name.contains(q.as_str()))
}
