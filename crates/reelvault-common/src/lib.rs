//! Reelvault-Common: Shared error types and path utilities.
//!
//! This crate provides common functionality used across reelvault:
//!
//! - **Path Utilities**: Functions to recognize video files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use reelvault_common::{Error, Result};
//! use reelvault_common::paths::is_video_file;
//! use std::path::Path;
//!
//! // Check file types
//! assert!(is_video_file(Path::new("movie.mkv")));
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::not_found("source directory"))
//! }
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
