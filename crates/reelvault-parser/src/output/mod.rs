//! Output formatting for parsed releases.
//!
//! This module provides trait-based output formatting. Each formatter
//! knows how to structure parsed release data for its consumer.
//!
//! # Available Formats
//!
//! - [`LibraryFormat`]: canonical `Title (Year)` folder and file names
//!
//! # Example
//!
//! ```
//! use reelvault_parser::{parse, output::{LibraryFormat, OutputFormat}};
//!
//! let release = parse("The.Movie.2015.1080p.BluRay.mkv");
//! let name = LibraryFormat.format(&release).unwrap();
//!
//! assert_eq!(name.folder_name, "The Movie (2015)");
//! ```

mod library;

pub use library::{LibraryFormat, LibraryName};

/// Trait for formatting parsed releases into consumer-specific output.
pub trait OutputFormat {
    /// The output type produced by this formatter.
    type Output;

    /// Format a parsed release into the consumer-specific output.
    fn format(&self, release: &crate::model::ParsedRelease) -> Self::Output;
}
