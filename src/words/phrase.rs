//! Fixed capacity phrase buffer

use core::fmt;

/// Capacity of a phrase buffer in bytes, terminator included
pub const BUFFER_SIZE: usize = 43;

/// Text owned by a watchface slot.
///
/// The buffer is reused on every refresh. The text is always followed by a
/// NUL byte, so at most `BUFFER_SIZE - 1` bytes of text fit.
#[derive(Clone)]
pub struct Phrase {
    buf: [u8; BUFFER_SIZE],
    len: usize,
}

impl Phrase {
    /// Create an empty phrase
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_SIZE],
            len: 0,
        }
    }

    /// Replace the contents with formatted text
    pub fn write(&mut self, args: fmt::Arguments) {
        // Keep the last byte for the terminator
        let len = match format_no_std::show(&mut self.buf[..BUFFER_SIZE - 1], args) {
            Ok(text) => text.len(),
            Err(_) => {
                debug_assert!(false, "phrase does not fit into {} bytes", BUFFER_SIZE);
                0
            }
        };
        self.len = len;
        self.buf[len] = 0;
    }

    /// Replace the contents with a copy of `other`
    pub fn copy_from(&mut self, other: &Phrase) {
        self.buf = other.buf;
        self.len = other.len;
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = 0;
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Text including the NUL terminator, for C style text layers
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Length of the text in bytes, terminator excluded
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Phrase {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Phrase {}

impl PartialEq<&str> for Phrase {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Phrase {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}
