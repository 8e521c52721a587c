//! The ordered registry of format testers.
//!
//! Registry order is the tie-break contract: the first tester that matches a
//! buffer decides its format.

use super::format::{Aliases, ImageFormat};
use super::signature::Signature;

/// One format's complete signature logic.
///
/// A buffer matches when every `all_of` signature is present and, if `any_of`
/// is non-empty, at least one of its alternatives is present too.
#[derive(Debug, Clone, Copy)]
pub struct FormatTester {
    /// Format reported on a match
    pub format: ImageFormat,
    /// Signatures that must all be present
    pub all_of: &'static [Signature],
    /// Alternative signatures, one of which must be present
    pub any_of: &'static [Signature],
}

impl FormatTester {
    /// Run this tester against a buffer.
    #[must_use]
    pub fn test(&self, buf: &[u8]) -> Option<Aliases> {
        let required = self.all_of.iter().all(|sig| sig.matches(buf));
        if !required {
            return None;
        }

        let alternative = self.any_of.is_empty() || self.any_of.iter().any(|sig| sig.matches(buf));
        alternative.then(|| self.format.aliases())
    }

    /// Every signature this tester may inspect.
    pub fn signatures(&self) -> impl Iterator<Item = &'static Signature> {
        self.all_of.iter().chain(self.any_of.iter())
    }

    /// Number of leading bytes this tester may look at.
    #[must_use]
    pub const fn required_len(&self) -> usize {
        max(max_end(self.all_of), max_end(self.any_of))
    }
}

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

const fn max_end(signatures: &[Signature]) -> usize {
    let mut i = 0;
    let mut end = 0;
    while i < signatures.len() {
        end = max(end, signatures[i].end());
        i += 1;
    }
    end
}

const BUILTIN_TESTERS: &[FormatTester] = &[
    FormatTester {
        format: ImageFormat::Png,
        all_of: &[Signature::at_start(&[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
        ])],
        any_of: &[],
    },
    FormatTester {
        format: ImageFormat::Jpeg,
        all_of: &[Signature::at_start(&[0xFF, 0xD8, 0xFF])],
        any_of: &[Signature::at(6, b"JFIF"), Signature::at(6, b"Exif")],
    },
    FormatTester {
        format: ImageFormat::Gif,
        all_of: &[],
        any_of: &[Signature::at_start(b"GIF89a"), Signature::at_start(b"GIF87a")],
    },
    FormatTester {
        format: ImageFormat::Tiff,
        all_of: &[],
        any_of: &[Signature::at_start(b"MM"), Signature::at_start(b"II")],
    },
    FormatTester {
        format: ImageFormat::Bmp,
        all_of: &[Signature::at_start(b"BM")],
        any_of: &[],
    },
    FormatTester {
        format: ImageFormat::Webp,
        all_of: &[Signature::at_start(b"RIFF"), Signature::at(8, b"WEBP")],
        any_of: &[],
    },
];

static BUILTIN: Registry = Registry::new(BUILTIN_TESTERS);

/// Immutable, ordered collection of format testers.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    testers: &'static [FormatTester],
}

impl Registry {
    /// Build a registry over a static tester table.
    #[must_use]
    pub const fn new(testers: &'static [FormatTester]) -> Self {
        Self { testers }
    }

    /// The compiled-in registry.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Testers in priority order.
    #[must_use]
    pub const fn testers(&self) -> &'static [FormatTester] {
        self.testers
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.testers.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.testers.is_empty()
    }

    /// Number of leading bytes needed to evaluate every tester.
    #[must_use]
    pub const fn required_len(&self) -> usize {
        let mut i = 0;
        let mut len = 0;
        while i < self.testers.len() {
            len = max(len, self.testers[i].required_len());
            i += 1;
        }
        len
    }

    /// Find the first tester matching `buf`.
    ///
    /// An empty buffer matches nothing.
    #[must_use]
    pub fn find(&self, buf: &[u8]) -> Option<(&'static FormatTester, Aliases)> {
        if buf.is_empty() {
            return None;
        }

        self.testers
            .iter()
            .find_map(|tester| tester.test(buf).map(|aliases| (tester, aliases)))
    }

    /// Aliases of the first matching format.
    #[must_use]
    pub fn identify(&self, buf: &[u8]) -> Option<Aliases> {
        self.find(buf).map(|(_, aliases)| aliases)
    }

    /// The first matching format.
    #[must_use]
    pub fn identify_format(&self, buf: &[u8]) -> Option<ImageFormat> {
        self.find(buf).map(|(tester, _)| tester.format)
    }

    /// Whether any matching tester lists `ext` among its aliases.
    ///
    /// This is a membership test over every tester, not a comparison against
    /// the first match from [`Registry::identify`].
    #[must_use]
    pub fn matches_extension(&self, buf: &[u8], ext: &str) -> bool {
        self.testers
            .iter()
            .any(|tester| tester.test(buf).is_some_and(|aliases| aliases.contains(ext)))
    }
}
