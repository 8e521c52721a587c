//! Fixed-offset byte signatures ("magic numbers").

use std::fmt;

/// Compare two byte sequences for exact equality.
///
/// Both length and content must match. A truncated slice taken from a short
/// buffer therefore never equals a non-empty signature.
#[inline]
#[must_use]
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// An exact byte sequence expected at a fixed offset in a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Byte offset at which the signature must appear
    pub offset: usize,
    /// The expected bytes
    pub bytes: &'static [u8],
}

impl Signature {
    /// Signature anchored at the start of the buffer.
    #[must_use]
    pub const fn at_start(bytes: &'static [u8]) -> Self {
        Self { offset: 0, bytes }
    }

    /// Signature anchored at `offset`.
    #[must_use]
    pub const fn at(offset: usize, bytes: &'static [u8]) -> Self {
        Self { offset, bytes }
    }

    /// One past the last byte this signature inspects.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.bytes.len()
    }

    /// Take the region of `buf` this signature covers.
    ///
    /// Reading past the end of `buf` yields a shorter (possibly empty) slice.
    #[must_use]
    pub fn window<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        let start = self.offset.min(buf.len());
        let end = self.end().min(buf.len());
        &buf[start..end]
    }

    /// Check whether `buf` carries this signature.
    #[must_use]
    pub fn matches(&self, buf: &[u8]) -> bool {
        bytes_equal(self.window(buf), self.bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}:", self.offset)?;
        for byte in self.bytes {
            write!(f, " {byte:02X}")?;
        }
        Ok(())
    }
}
