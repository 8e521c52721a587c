//! **Identify image formats by their magic numbers.**
//!
//! `imgsig` inspects the leading bytes of an image against a fixed registry of
//! format signatures and reports the true format, independent of the file
//! extension a caller claims for it. Use it to reject an upload named `.png`
//! that is actually an executable, or to treat `jpg` and `jpeg` as the same
//! format.
//!
//! ## Supported Formats
//!
//! In registry (priority) order:
//!
//! | Format | Signature | Aliases |
//! |--------|-----------|---------|
//! | PNG | `89 50 4E 47 0D 0A 1A 0A` at 0 | `png` |
//! | JPEG | `FF D8 FF` at 0, then `JFIF` or `Exif` at 6 | `jpg`, `jpeg` |
//! | GIF | `GIF89a` or `GIF87a` at 0 | `gif` |
//! | TIFF | `MM` or `II` at 0 | `tiff` |
//! | BMP | `BM` at 0 | `bmp` |
//! | WEBP | `RIFF` at 0 and `WEBP` at 8 | `webp` |
//!
//! ## Core Concepts & Modules
//!
//! - **[`signatures`]**: The matching engine. [`identify`] returns the aliases of the
//!   first matching format, [`matches_extension`] checks a claimed extension.
//!   Both are pure and safe to call from any number of threads.
//! - **[`pipeline`]**: Reads files and inspects them, in parallel for many files, and
//!   computes exit codes.
//! - **[`reports`]**: Summary, table and JSON renderings of inspection results.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use imgsig::{identify, matches_extension, ImageFormat};
//!
//! let buf = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];
//!
//! let aliases = identify(&buf).expect("a JPEG");
//! assert_eq!(aliases, ["jpg", "jpeg"]);
//! assert_eq!(imgsig::identify_format(&buf), Some(ImageFormat::Jpeg));
//!
//! assert!(matches_extension(&buf, "jpeg"));
//! assert!(!matches_extension(&buf, "png"));
//! ```
//!
//! Reading from disk returns IO errors unchanged:
//!
//! ```no_run
//! fn main() -> std::io::Result<()> {
//!     match imgsig::identify_from_path("upload.bin")? {
//!         Some(aliases) => println!("detected {}", aliases.canonical()),
//!         None => println!("not a supported image"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod reports;
pub mod signatures;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{ImgSigError, OptionContext, Result};
pub use pipeline::{inspect_file, inspect_files, FileReport, InspectOptions};
pub use reports::{ReportFormat, ReportGenerator};
pub use signatures::{
    identify, identify_format, identify_from_path, matches_extension,
    matches_extension_from_path, Aliases, FormatTester, ImageFormat, Registry, Signature,
};
