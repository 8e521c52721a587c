//! Image format detection by signature.
//!
//! This module identifies the binary format of an image from its leading bytes,
//! independent of any file extension claimed for it.
//!
//! ## Detection
//!
//! The [`Registry`] holds an ordered list of [`FormatTester`]s. Each tester
//! compares fixed-offset [`Signature`]s against the buffer:
//! - a format may require several signatures at once (WEBP: `RIFF` at 0 and
//!   `WEBP` at 8)
//! - or accept one of several alternatives (GIF: `GIF89a` or `GIF87a`)
//! - the first tester in registry order that matches decides the result
//!
//! Matching never fails. Short and empty buffers simply match nothing.
//!
//! ## Usage
//!
//! ```
//! use imgsig::signatures::{identify, matches_extension};
//!
//! let buf = b"GIF87a\x01\x00\x01\x00";
//! assert_eq!(identify(buf).map(|a| a.canonical()), Some("gif"));
//! assert!(matches_extension(buf, "gif"));
//! assert!(!matches_extension(buf, "png"));
//! ```

mod format;
mod registry;
mod signature;

pub use format::{Aliases, ImageFormat};
pub use registry::{FormatTester, Registry};
pub use signature::{bytes_equal, Signature};

use std::path::Path;

/// Identify the format of `buf`, returning its extension aliases.
///
/// Returns `None` for an empty buffer or when no tester matches.
#[must_use]
pub fn identify(buf: &[u8]) -> Option<Aliases> {
    Registry::builtin().identify(buf)
}

/// Identify the format of `buf`.
#[must_use]
pub fn identify_format(buf: &[u8]) -> Option<ImageFormat> {
    Registry::builtin().identify_format(buf)
}

/// Check whether `buf` is a format for which `ext` is a known alias.
///
/// `ext` is compared exactly; callers normalize case and leading dots.
#[must_use]
pub fn matches_extension(buf: &[u8], ext: &str) -> bool {
    Registry::builtin().matches_extension(buf, ext)
}

/// Read the file at `path` and identify it.
///
/// Read failures are returned unchanged.
pub fn identify_from_path(path: impl AsRef<Path>) -> std::io::Result<Option<Aliases>> {
    let buf = std::fs::read(path)?;
    Ok(identify(&buf))
}

/// Read the file at `path` and check it against a claimed extension.
///
/// Read failures are returned unchanged.
pub fn matches_extension_from_path(path: impl AsRef<Path>, ext: &str) -> std::io::Result<bool> {
    let buf = std::fs::read(path)?;
    Ok(matches_extension(&buf, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_png() {
        let buf = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
        assert_eq!(identify(&buf), Some(ImageFormat::Png.aliases()));
        assert_eq!(identify_format(&buf), Some(ImageFormat::Png));
    }

    #[test]
    fn test_identify_empty() {
        assert_eq!(identify(&[]), None);
        assert_eq!(identify_format(&[]), None);
        assert!(!matches_extension(&[], "png"));
    }

    #[test]
    fn test_tiff_marker_only() {
        assert_eq!(identify_format(b"II"), Some(ImageFormat::Tiff));
        assert_eq!(identify_format(b"MM\x00"), Some(ImageFormat::Tiff));
        assert_eq!(identify_format(b"IM"), None);
    }

    #[test]
    fn test_matches_extension_is_case_sensitive() {
        assert!(matches_extension(b"BM\x00\x00", "bmp"));
        assert!(!matches_extension(b"BM\x00\x00", "BMP"));
        assert!(!matches_extension(b"BM\x00\x00", ".bmp"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = identify_from_path("/nonexistent/imgsig/missing.png")
            .expect_err("missing file should fail");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

        let err = matches_extension_from_path("/nonexistent/imgsig/missing.png", "png")
            .expect_err("missing file should fail");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
