//! Source tree scanner.
//!
//! This module walks the source directory to discover video files and
//! selects which file represents each release.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use reelvault_common::paths::is_video_file;
use reelvault_common::Result;
use tracing::debug;
use walkdir::WalkDir;

/// A video file selected to represent a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name used for parsing and display.
    pub file_name: String,
}

/// A discovered video file, before selection.
#[derive(Debug, Clone)]
pub struct VideoFile {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl VideoFile {
    fn into_release(self) -> ReleaseFile {
        ReleaseFile {
            path: self.path,
            file_name: self.file_name,
        }
    }
}

/// Walk the source tree and select the release files.
///
/// Files sitting directly in `root` are each their own release; in any
/// subdirectory only the largest video file counts. Filesystem errors
/// during the walk abort the scan.
pub fn scan_tree(root: &Path) -> Result<Vec<ReleaseFile>> {
    let mut by_dir: BTreeMap<PathBuf, Vec<VideoFile>> = BTreeMap::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_video_file(path) {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("skipping non-UTF-8 file name: {}", path.display());
            continue;
        };

        let size = entry.metadata().map_err(std::io::Error::from)?.len();
        let parent = path.parent().unwrap_or(root).to_path_buf();
        by_dir.entry(parent).or_default().push(VideoFile {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            size,
        });
    }

    let mut releases = Vec::new();
    for (dir, files) in by_dir {
        let is_root_level = dir == root;
        releases.extend(select_releases(files, is_root_level));
    }

    debug!(
        "selected {} release files under {}",
        releases.len(),
        root.display()
    );
    Ok(releases)
}

/// Select which files in one directory count as releases.
///
/// At the tree root every video file is its own release (a flat folder of
/// loose movies). Anywhere deeper, the directory holds one release plus
/// ancillary files, so only the largest file is kept; equal sizes keep
/// the first file encountered.
pub fn select_releases(files: Vec<VideoFile>, is_root_level: bool) -> Vec<ReleaseFile> {
    if is_root_level {
        return files.into_iter().map(VideoFile::into_release).collect();
    }

    let mut largest: Option<VideoFile> = None;
    for file in files {
        let bigger = largest
            .as_ref()
            .map_or(true, |current| file.size > current.size);
        if bigger {
            largest = Some(file);
        }
    }

    largest.into_iter().map(VideoFile::into_release).collect()
}
