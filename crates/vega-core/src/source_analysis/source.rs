// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! In-memory source files and the character cursor the scanner reads from.
//!
//! A [`SourceFile`] owns the raw bytes of one compilation unit; the scanner
//! borrows it for its whole lifetime. [`SourceReader`] is the byte cursor:
//! it decodes UTF-8 incrementally and supports unreading the last character,
//! which is the only form of backtracking the scanner needs.

use camino::{Utf8Path, Utf8PathBuf};

/// A named source file held in memory.
///
/// Reading the file from disk is the caller's concern; the frontend only
/// sees a name and bytes. The bytes are assumed to be UTF-8 but only the
/// ASCII subset is lexically significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: Utf8PathBuf,
    source: Vec<u8>,
}

impl SourceFile {
    /// Creates a source file from a name and its contents.
    #[must_use]
    pub fn new(name: impl Into<Utf8PathBuf>, source: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The file name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &Utf8Path {
        &self.name
    }

    /// The raw source bytes.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Returns a fresh cursor over the source bytes.
    pub(crate) fn reader(&self) -> SourceReader<'_> {
        SourceReader::new(&self.source)
    }
}

/// The last read failed to decode as UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidUtf8;

/// A forward cursor over source bytes with one character of pushback.
#[derive(Debug)]
pub(crate) struct SourceReader<'src> {
    bytes: &'src [u8],
    offset: usize,
    /// Byte width of the most recently read character; 0 when there is
    /// nothing to unread.
    last_width: usize,
}

impl<'src> SourceReader<'src> {
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            last_width: 0,
        }
    }

    /// Reads the next character, or `Ok(None)` at end of input.
    pub(crate) fn read(&mut self) -> Result<Option<char>, InvalidUtf8> {
        let rest = &self.bytes[self.offset..];
        if rest.is_empty() {
            self.last_width = 0;
            return Ok(None);
        }
        // A UTF-8 scalar is at most four bytes; validating a four-byte
        // window is enough to decode the first character.
        let window = &rest[..rest.len().min(4)];
        let valid = match std::str::from_utf8(window) {
            Ok(s) => s,
            Err(e) if e.valid_up_to() > 0 => match std::str::from_utf8(&window[..e.valid_up_to()]) {
                Ok(s) => s,
                Err(_) => return Err(InvalidUtf8),
            },
            Err(_) => return Err(InvalidUtf8),
        };
        match valid.chars().next() {
            Some(c) => {
                self.last_width = c.len_utf8();
                self.offset += self.last_width;
                Ok(Some(c))
            }
            None => Err(InvalidUtf8),
        }
    }

    /// Reverts the most recent [`read`](Self::read); the character will be
    /// produced again by the next read. Returns `false` (and does nothing)
    /// when nothing was read since the last unread.
    pub(crate) fn unread(&mut self) -> bool {
        if self.last_width == 0 {
            return false;
        }
        self.offset -= self.last_width;
        self.last_width = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_characters_in_order() {
        let mut reader = SourceReader::new(b"1+1\n.");
        let want = ['1', '+', '1', '\n', '.'];
        for expected in want {
            assert_eq!(reader.read(), Ok(Some(expected)));
        }
        assert_eq!(reader.read(), Ok(None));
        assert_eq!(reader.read(), Ok(None));
    }

    #[test]
    fn unread_replays_last_character() {
        let mut reader = SourceReader::new(b"ab");
        assert_eq!(reader.read(), Ok(Some('a')));
        assert!(reader.unread());
        assert_eq!(reader.read(), Ok(Some('a')));
        assert_eq!(reader.read(), Ok(Some('b')));
    }

    #[test]
    fn unread_without_read_is_noop() {
        let mut reader = SourceReader::new(b"x");
        assert!(!reader.unread());
        assert_eq!(reader.read(), Ok(Some('x')));
        assert!(reader.unread());
        assert!(!reader.unread());
        assert_eq!(reader.read(), Ok(Some('x')));
    }

    #[test]
    fn decodes_multibyte_scalars() {
        let mut reader = SourceReader::new("aß€".as_bytes());
        assert_eq!(reader.read(), Ok(Some('a')));
        assert_eq!(reader.read(), Ok(Some('ß')));
        reader.unread();
        assert_eq!(reader.read(), Ok(Some('ß')));
        assert_eq!(reader.read(), Ok(Some('€')));
        assert_eq!(reader.read(), Ok(None));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut reader = SourceReader::new(&[b'a', 0xFF, b'b']);
        assert_eq!(reader.read(), Ok(Some('a')));
        assert_eq!(reader.read(), Err(InvalidUtf8));
    }

    #[test]
    fn truncated_sequence_is_an_error() {
        // 0xC3 opens a two-byte sequence that never completes.
        let mut reader = SourceReader::new(&[0xC3]);
        assert_eq!(reader.read(), Err(InvalidUtf8));
    }

    #[test]
    fn source_file_accessors() {
        let file = SourceFile::new("/path/to/test.vg", *b"func");
        assert_eq!(file.name(), "/path/to/test.vg");
        assert_eq!(file.source(), b"func");
    }
}
