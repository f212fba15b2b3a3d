//! Link materialization.
//!
//! Consumes planned link tasks and creates the destination folders and
//! hardlinks.

use std::fs;
use std::path::Path;

use reelvault_common::Result;
use tracing::info;

use super::planner::LinkTask;

/// Counts from one execution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOutcome {
    /// Hardlinks created (or, in a dry run, that would be created).
    pub created: usize,
    /// Destination paths that already existed and were left alone.
    pub existing: usize,
}

/// Materialize planned links under `dest_root`.
///
/// Destination folders are created as needed. An existing destination
/// path is not an error; the task is counted and skipped, which makes
/// re-runs idempotent per target path. Hardlink failures (cross-device,
/// permissions) propagate and abort the run.
pub fn execute(dest_root: &Path, tasks: &[LinkTask], dry_run: bool) -> Result<LinkOutcome> {
    let mut outcome = LinkOutcome::default();

    for task in tasks {
        let folder = dest_root.join(&task.folder_name);

        // Keep the source container extension verbatim
        let mut file_name = task.file_stem.clone();
        if let Some(ext) = task.source_path.extension().and_then(|e| e.to_str()) {
            file_name.push('.');
            file_name.push_str(ext);
        }
        let link_path = folder.join(&file_name);

        if link_path.exists() {
            info!("link already exists: {}", link_path.display());
            outcome.existing += 1;
            continue;
        }

        if dry_run {
            info!(
                "would link {} -> {}",
                task.source_path.display(),
                link_path.display()
            );
            outcome.created += 1;
            continue;
        }

        fs::create_dir_all(&folder)?;
        fs::hard_link(&task.source_path, &link_path)?;
        info!(
            "created hardlink: {} -> {}",
            task.source_path.display(),
            link_path.display()
        );
        outcome.created += 1;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn task(source: PathBuf, folder: &str, stem: &str) -> LinkTask {
        LinkTask {
            source_path: source,
            folder_name: folder.to_string(),
            file_stem: stem.to_string(),
        }
    }

    #[test]
    fn creates_folder_and_hardlink() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("The.Movie.2015.1080p.BluRay.mkv");
        fs::write(&source, b"movie bytes").unwrap();

        let tasks = [task(
            source.clone(),
            "The Movie (2015)",
            "The Movie (2015) BluRay-1080p",
        )];
        let outcome = execute(dest_dir.path(), &tasks, false).unwrap();

        assert_eq!(outcome.created, 1);
        assert_eq!(outcome.existing, 0);

        let link = dest_dir
            .path()
            .join("The Movie (2015)/The Movie (2015) BluRay-1080p.mkv");
        assert_eq!(fs::read(&link).unwrap(), b"movie bytes");
    }

    #[cfg(unix)]
    #[test]
    fn destination_is_a_hardlink_not_a_copy() {
        use std::os::unix::fs::MetadataExt;

        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("Film.2001.mkv");
        fs::write(&source, b"data").unwrap();

        let tasks = [task(source.clone(), "Film (2001)", "Film (2001) BluRay")];
        execute(dest_dir.path(), &tasks, false).unwrap();

        let link = dest_dir.path().join("Film (2001)/Film (2001) BluRay.mkv");
        assert_eq!(
            fs::metadata(&source).unwrap().ino(),
            fs::metadata(&link).unwrap().ino()
        );
    }

    #[test]
    fn existing_destination_is_left_alone() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("Film.2001.mp4");
        fs::write(&source, b"new").unwrap();

        let folder = dest_dir.path().join("Film (2001)");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("Film (2001) BluRay.mp4"), b"old").unwrap();

        let tasks = [task(source, "Film (2001)", "Film (2001) BluRay")];
        let outcome = execute(dest_dir.path(), &tasks, false).unwrap();

        assert_eq!(outcome.created, 0);
        assert_eq!(outcome.existing, 1);
        assert_eq!(
            fs::read(folder.join("Film (2001) BluRay.mp4")).unwrap(),
            b"old"
        );
    }

    #[test]
    fn extension_is_taken_from_the_source() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("Film.2001.mp4");
        fs::write(&source, b"data").unwrap();

        let tasks = [task(source, "Film (2001)", "Film (2001) BluRay")];
        execute(dest_dir.path(), &tasks, false).unwrap();

        assert!(dest_dir
            .path()
            .join("Film (2001)/Film (2001) BluRay.mp4")
            .exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let source = src_dir.path().join("Film.2001.mkv");
        fs::write(&source, b"data").unwrap();

        let tasks = [task(source, "Film (2001)", "Film (2001) BluRay")];
        let outcome = execute(dest_dir.path(), &tasks, true).unwrap();

        assert_eq!(outcome.created, 1);
        assert!(fs::read_dir(dest_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn missing_source_propagates_an_error() {
        let dest_dir = tempdir().unwrap();
        let tasks = [task(
            PathBuf::from("/nonexistent/Film.2001.mkv"),
            "Film (2001)",
            "Film (2001) BluRay",
        )];

        assert!(execute(dest_dir.path(), &tasks, false).is_err());
    }
}
