/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Contains an implementation of [`Read`](super::Read) for
//! borrowed UTF8 slices (`&str`s).

use super::{
    error::{ReaderError, ReaderResult},
    private, Read, ReadContext, Reader,
};
use crate::{
    decode,
    scanner::flag::{Flags, O_EXTENDABLE},
    token::StreamEncoding,
};

/// A [`Read`](super::Read) implementor for borrows.
#[derive(Debug, Clone)]
pub struct BorrowReader<'de>
{
    data: &'de str,
}

impl<'de> BorrowReader<'de>
{
    /// Instantiate a new [`BorrowReader`] from the given
    /// UTF8 slice
    ///
    /// A leading UTF8 byte order mark, if present, is
    /// stripped -- it has no bearing on the YAML content
    /// that follows it.
    pub fn new(data: &'de str) -> Self
    {
        Self {
            data: data.strip_prefix('\u{FEFF}').unwrap_or(data),
        }
    }

    /// Instantiate a new [`BorrowReader`] from the given
    /// bytes, returning an error if they are not
    /// valid UTF8, or if they are led by a byte order mark
    /// for an encoding other than UTF8.
    ///
    /// This runs the [`decode`](crate::decode) module's BOM
    /// detection and UTF8 validation ahead of the scanner
    /// proper, so invalid byte sequences are reported with
    /// a precise byte offset rather than the coarser
    /// [`Utf8Error`](std::str::Utf8Error) `std::str::from_utf8`
    /// alone would produce.
    pub(crate) fn try_from_bytes(data: &'de [u8]) -> ReaderResult<Self>
    {
        let (encoding, skip) = decode::detect_bom(data);

        if !matches!(encoding, StreamEncoding::UTF8 | StreamEncoding::Unknown)
        {
            return Err(ReaderError::UnsupportedEncoding(encoding));
        }

        let content = &data[skip..];

        decode::validate_utf8(content).map_err(|pos| ReaderError::InvalidUtf8(pos + skip))?;

        // Safety: .content was just validated above by
        // validate_utf8, which walks the entire slice
        // enforcing the same well formedness rules as
        // std::str::from_utf8.
        let s = unsafe { std::str::from_utf8_unchecked(content) };

        Ok(Self::new(s))
    }

    pub(crate) fn new_reader(&'de self, opts: Flags) -> Reader<'de, Self>
    {
        Reader::new(self, opts)
    }
}

impl<'a> Read for BorrowReader<'a>
{
    fn drive<'de>(&'de self, cxt: ReadContext<'_, '_, 'de>) -> Result<(), ReaderError>
    {
        // This implementation is never extendable, so we remove the
        // option from the set if it exists
        cxt.scanner
            .scan_tokens(cxt.flags & !O_EXTENDABLE, self.data, cxt.queue)?;

        Ok(())
    }

    unsafe fn consume(&self, _bound: usize) -> Result<(), ReaderError>
    {
        Ok(())
    }
}

impl private::Sealed for BorrowReader<'_> {}

#[cfg(test)]
mod tests
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reader::test_util::test_reader;

    test_reader! {BorrowReader::new}

    #[test]
    fn try_from_bytes_strips_utf8_bom()
    {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"a: b");

        let reader = BorrowReader::try_from_bytes(&bytes).expect("valid utf8");

        assert_eq!(reader.data, "a: b");
    }

    #[test]
    fn try_from_bytes_rejects_utf16_bom()
    {
        let bytes = [0xFF, 0xFE, b'a' as u8, 0x00];

        let err = BorrowReader::try_from_bytes(&bytes).unwrap_err();

        assert!(matches!(
            err,
            ReaderError::UnsupportedEncoding(StreamEncoding::UTF16LE)
        ));
    }

    #[test]
    fn try_from_bytes_reports_invalid_utf8_offset()
    {
        let mut bytes = b"valid: ".to_vec();
        bytes.push(0xFF);

        let err = BorrowReader::try_from_bytes(&bytes).unwrap_err();

        assert!(matches!(err, ReaderError::InvalidUtf8(7)));
    }

    #[test]
    fn new_strips_leading_bom_char()
    {
        let src = "\u{FEFF}a: b";

        let reader = BorrowReader::new(src);

        assert_eq!(reader.data, "a: b");
    }
}
