//! Image format identities and their extension aliases.

use serde::{Serialize, Serializer};
use std::fmt;

/// Image formats recognized by the builtin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG in JFIF or Exif container
    Jpeg,
    /// Graphics Interchange Format (87a and 89a)
    Gif,
    /// Tagged Image File Format
    Tiff,
    /// Windows bitmap
    Bmp,
    /// WebP in a RIFF container
    Webp,
}

const PNG_ALIASES: &[&str] = &["png"];
const JPEG_ALIASES: &[&str] = &["jpg", "jpeg"];
const GIF_ALIASES: &[&str] = &["gif"];
const TIFF_ALIASES: &[&str] = &["tiff"];
const BMP_ALIASES: &[&str] = &["bmp"];
const WEBP_ALIASES: &[&str] = &["webp"];

impl ImageFormat {
    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Tiff => "TIFF",
            Self::Bmp => "BMP",
            Self::Webp => "WEBP",
        }
    }

    /// Extension aliases, canonical alias first.
    #[must_use]
    pub const fn aliases(&self) -> Aliases {
        match self {
            Self::Png => Aliases(PNG_ALIASES),
            Self::Jpeg => Aliases(JPEG_ALIASES),
            Self::Gif => Aliases(GIF_ALIASES),
            Self::Tiff => Aliases(TIFF_ALIASES),
            Self::Bmp => Aliases(BMP_ALIASES),
            Self::Webp => Aliases(WEBP_ALIASES),
        }
    }

    /// The conventional extension for this format.
    #[must_use]
    pub const fn canonical_extension(&self) -> &'static str {
        self.aliases().canonical()
    }

    /// IANA media type.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
            Self::Webp => "image/webp",
        }
    }

    /// All formats in registry order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Png,
            Self::Jpeg,
            Self::Gif,
            Self::Tiff,
            Self::Bmp,
            Self::Webp,
        ]
    }

    /// Find the format owning an extension alias.
    ///
    /// The lookup is exact: `"JPG"` and `".jpg"` are not aliases.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.aliases().contains(ext))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ImageFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_extension())
    }
}

/// Non-empty ordered list of extension aliases for one format.
///
/// The first alias is the canonical one by convention; order carries no other
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aliases(&'static [&'static str]);

impl Aliases {
    /// The first alias.
    #[must_use]
    pub const fn canonical(&self) -> &'static str {
        self.0[0]
    }

    /// Whether `ext` is one of the aliases (exact comparison).
    #[must_use]
    pub fn contains(&self, ext: &str) -> bool {
        self.0.iter().any(|alias| *alias == ext)
    }

    /// Iterate the aliases in order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Aliases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl PartialEq<[&str]> for Aliases {
    fn eq(&self, other: &[&str]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Aliases {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0 == other.as_slice()
    }
}

impl Serialize for Aliases {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_has_aliases() {
        for format in ImageFormat::all() {
            assert!(!format.aliases().is_empty(), "{format} has no aliases");
        }
    }

    #[test]
    fn test_jpeg_canonical_alias() {
        assert_eq!(ImageFormat::Jpeg.canonical_extension(), "jpg");
        assert_eq!(ImageFormat::Jpeg.aliases(), ["jpg", "jpeg"]);
    }

    #[test]
    fn test_from_extension_exact() {
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("tiff"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_extension("JPG"), None);
        assert_eq!(ImageFormat::from_extension(".png"), None);
        assert_eq!(ImageFormat::from_extension("tif"), None);
    }

    #[test]
    fn test_each_alias_belongs_to_one_format() {
        for format in ImageFormat::all() {
            for alias in format.aliases().iter() {
                assert_eq!(ImageFormat::from_extension(alias), Some(*format));
            }
        }
    }

    #[test]
    fn test_aliases_display_and_serialize() {
        let aliases = ImageFormat::Jpeg.aliases();
        assert_eq!(aliases.to_string(), "jpg, jpeg");
        assert_eq!(
            serde_json::to_string(&aliases).expect("serialize aliases"),
            r#"["jpg","jpeg"]"#
        );
        assert_eq!(
            serde_json::to_string(&ImageFormat::Webp).expect("serialize format"),
            r#""webp""#
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Webp.mime_type(), "image/webp");
    }
}
