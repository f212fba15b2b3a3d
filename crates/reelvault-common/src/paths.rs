//! Path utilities for recognizing video files by extension.

use std::path::Path;

/// Video container extensions the pipeline recognizes.
///
/// Matching is case-sensitive: `movie.MKV` is not picked up.
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4"];

/// Check if a path has a recognized video extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reelvault_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.mp4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
