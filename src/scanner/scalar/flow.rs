/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the functions responsible for
//! scanning single and double quoted flow scalars into
//! Tokens.
//!
//! It exports 3 functions:
//!
//! - scan_flow_scalar
//! - scan_flow_scalar_eager
//! - scan_flow_scalar_lazy
//!
//! The eager variant produces a scalar Token (or an error)
//! that may allocate and performs any processing the YAML
//! spec requires -- line joining, single quote doubling and
//! (for double quoted scalars) escape unescaping. The lazy
//! variant instead only locates the scalar's boundary,
//! deferring that processing to a later call to
//! `Deferred::into_token`.
//!
//! Both styles share the same line folding rule a plain
//! scalar uses: a single line break between words folds to
//! a space, more than one folds to (n - 1) literal breaks,
//! and any blanks surrounding the break(s) are discarded. A
//! double quoted scalar additionally recognizes a backslash
//! immediately preceding a line break as an escaped break --
//! the break (and any blanks leading the next line) is
//! dropped entirely, with no space or newline inserted.

use crate::{
    scanner::{
        entry::MaybeToken,
        error::{ScanError, ScanResult as Result},
        flag::{Flags, O_EXTENDABLE, O_LAZY},
        scalar::{as_maybe, escape::flow_unescape},
        stats::MStats,
    },
    token::{ScalarStyle, Token},
};

/// Scans a flow scalar, returning an opaque handle to a
/// byte slice that could be a valid scalar, and the amount
/// read from .base.
///
/// This function is a wrapper around
/// scan_flow_scalar_eager and scan_flow_scalar_lazy. See
/// the respective documentation for an explanation.
pub(in crate::scanner) fn scan_flow_scalar<'de>(
    opts: Flags,
    base: &'de str,
    stats: &mut MStats,
    single: bool,
) -> Result<(MaybeToken<'de>, usize)>
{
    match opts.contains(O_LAZY)
    {
        true => scan_flow_scalar_lazy(opts, base, stats, single).map(as_maybe),
        false => scan_flow_scalar_eager(opts, base, stats, single).map(as_maybe),
    }
}

/// Scans a flow scalar, returning a Token and the amount
/// read from .base. This function will attempt to borrow
/// from .base, however any line join, doubled quote or
/// escape sequence forces a copy into a scratch allocation.
///
/// .base must start with the opening quote (' or ") that
/// .single discriminates between.
///
/// See:
///     YAML 1.2: Section 7.3.1, 7.3.2
///     yaml.org/spec/1.2/spec.html#c-single-quoted(n,c)
///     yaml.org/spec/1.2/spec.html#c-double-quoted(n,c)
pub(in crate::scanner) fn scan_flow_scalar_eager<'de>(
    opts: Flags,
    base: &'de str,
    stats: &mut MStats,
    single: bool,
) -> Result<(Token<'de>, usize)>
{
    let mut buffer = base;
    let mut scratch = Vec::new();
    let mut local_stats = stats.clone();

    let mut can_borrow = true;

    // Eat the left quote
    advance!(buffer, :local_stats, 1);

    'scalar: loop
    {
        cache!(~buffer, 4, opts)?;

        // EOF without a closing quote is always an error
        if buffer.is_empty()
        {
            return Err(ScanError::UnexpectedEOF);
        }

        // Even in a scalar context, YAML prohibits a line
        // starting with a document indicator followed by a
        // blank character
        if local_stats.column == 0
            && check!(~buffer => [b'-', b'-', b'-', ..] | [b'.', b'.', b'.', ..])
            && isWhiteSpaceZ!(~buffer, 3)
        {
            return Err(ScanError::InvalidFlowScalar);
        }

        // Consume a run of non whitespace characters
        while !isWhiteSpaceZ!(~buffer)
        {
            cache!(~buffer, 2, opts)?;

            // A doubled quote is an escaped quote in single quote style
            if single && check!(~buffer => [b'\'', b'\'', ..])
            {
                set_no_borrow(&mut can_borrow, base, buffer, &mut scratch);
                scratch.push(SINGLE);
                advance!(buffer, :local_stats, 2);

                continue;
            }

            // An unescaped quote terminates the scalar
            if single && check!(~buffer => b'\'')
            {
                break 'scalar;
            }
            if !single && check!(~buffer => b'"')
            {
                break 'scalar;
            }

            // Double quoted scalars process backslash escapes
            if !single && check!(~buffer => b'\\')
            {
                // A backslash directly preceding a line break escapes
                // it: the break is swallowed entirely, along with any
                // blanks leading the next line, and no fold is
                // performed
                if isBreak!(~buffer, 1)
                {
                    set_no_borrow(&mut can_borrow, base, buffer, &mut scratch);

                    advance!(buffer, :local_stats, 1);
                    advance!(buffer, :local_stats, @line);

                    while isBlank!(~buffer)
                    {
                        advance!(buffer, :local_stats, 1);
                    }

                    continue;
                }

                set_no_borrow(&mut can_borrow, base, buffer, &mut scratch);
                let amt = flow_unescape(buffer, &mut scratch)?;
                advance!(buffer, :local_stats, amt);

                continue;
            }

            if !can_borrow
            {
                scratch.push(buffer.as_bytes()[0])
            }
            advance!(buffer, :local_stats, 1);
        }

        // Consume and fold the run of blank/break whitespace that
        // separates two words
        let mut whitespace: usize = 0;
        let mut lines: usize = 0;

        loop
        {
            cache!(~buffer, 1, opts)?;

            match (isBlank!(~buffer), isBreak!(~buffer))
            {
                (false, false) => break,
                (true, _) =>
                {
                    if !can_borrow
                    {
                        scratch.push(buffer.as_bytes()[0])
                    }
                    whitespace += 1;
                    advance!(buffer, :local_stats, 1);
                },
                (false, _) =>
                {
                    set_no_borrow(&mut can_borrow, base, buffer, &mut scratch);

                    lines += 1;
                    advance!(buffer, :local_stats, @line);
                },
            }
        }

        match lines
        {
            // No join needed
            0 =>
            {},
            // A single line break folds to a space
            1 =>
            {
                scratch.truncate(scratch.len() - whitespace);
                scratch.push(SPACE);
            },
            // More than one line break folds to (n - 1) literal breaks
            _ =>
            {
                scratch.truncate(scratch.len() - whitespace);

                for _ in 0..lines - 1
                {
                    scratch.push(NEWLINE);
                }
            },
        }
    }

    let style = if single
    {
        ScalarStyle::SingleQuote
    }
    else
    {
        ScalarStyle::DoubleQuote
    };

    // Retrieve the token slice, either from .base, or if we
    // couldn't borrow, from .scratch
    let token = if can_borrow
    {
        // Safety: we must be on a code point boundary, as the only
        // way we can get to this section is:
        //
        // 1. .base->0 must be a quote
        // 2. .base->.buffer.len() - 1 must be a quote
        // 3. .base must be valid UTF8 (its a str)
        let fragment = base.get(1..base.len() - buffer.len()).unwrap();

        Token::Scalar(cow!(fragment), style)
    }
    else
    {
        // Safety: characters added to scratch are either:
        //
        // A. added from a str (.base)
        // B. Unescaped into valid UTF8
        let fragment = String::from_utf8(scratch).unwrap();

        Token::Scalar(cow!(fragment), style)
    };

    // Eat the right quote
    advance!(buffer, :local_stats, 1);

    let advance = base.len() - buffer.len();
    *stats = local_stats;

    Ok((token, advance))
}

/// Scans a flow scalar, locating its end without processing
/// its content, returning a [`Deferred`] handle that can
/// perform that processing (and surface any errors it
/// contains) at a later time, along with the amount read
/// from .base.
pub(in crate::scanner) fn scan_flow_scalar_lazy<'de>(
    opts: Flags,
    base: &'de str,
    stats: &mut MStats,
    single: bool,
) -> Result<(Deferred<'de>, usize)>
{
    let mut buffer = base;
    let mut local_stats = stats.clone();

    advance!(buffer, :local_stats, 1);

    'scalar: loop
    {
        cache!(~buffer, 4, opts)?;

        if buffer.is_empty()
        {
            return Err(ScanError::UnexpectedEOF);
        }

        if local_stats.column == 0
            && check!(~buffer => [b'-', b'-', b'-', ..] | [b'.', b'.', b'.', ..])
            && isWhiteSpaceZ!(~buffer, 3)
        {
            return Err(ScanError::InvalidFlowScalar);
        }

        while !isWhiteSpaceZ!(~buffer)
        {
            cache!(~buffer, 2, opts)?;

            if single && check!(~buffer => [b'\'', b'\'', ..])
            {
                advance!(buffer, :local_stats, 2);

                continue;
            }

            if single && check!(~buffer => b'\'')
            {
                break 'scalar;
            }
            if !single && check!(~buffer => b'"')
            {
                break 'scalar;
            }

            if !single && check!(~buffer => b'\\')
            {
                if isBreak!(~buffer, 1)
                {
                    advance!(buffer, :local_stats, 1);
                    advance!(buffer, :local_stats, @line);

                    while isBlank!(~buffer)
                    {
                        advance!(buffer, :local_stats, 1);
                    }

                    continue;
                }

                let amt = skip_escape(buffer);
                advance!(buffer, :local_stats, amt);

                continue;
            }

            advance!(buffer, :local_stats, 1);
        }

        loop
        {
            cache!(~buffer, 1, opts)?;

            match (isBlank!(~buffer), isBreak!(~buffer))
            {
                (false, false) => break,
                (true, _) => advance!(buffer, :local_stats, 1),
                (false, _) => advance!(buffer, :local_stats, @line),
            }
        }
    }

    // Eat the right quote
    advance!(buffer, :local_stats, 1);

    let advance = base.len() - buffer.len();
    let slice = &base[..advance];

    // Note we remove O_EXTENDABLE as we've already located the
    // entire scalar
    let lazy = Deferred::new(opts & !O_EXTENDABLE, slice, stats.clone(), single);

    *stats = local_stats;

    Ok((lazy, advance))
}

/// Advance past an escape sequence structurally, without
/// validating its hex digits or resulting code point --
/// that is deferred to `Deferred::into_token`. Assumes
/// .buffer->0 is a backslash.
fn skip_escape(buffer: &str) -> usize
{
    let escape_len: usize = match buffer.as_bytes().get(1)
    {
        Some(b'x') => 2,
        Some(b'u') => 4,
        Some(b'U') => 8,
        Some(_) => 0,
        None => return 1,
    };

    let mut advance = 2;
    let mut seen = 0;

    while seen < escape_len
    {
        match widthOf!(buffer, advance)
        {
            0 => break,
            n => advance += n,
        }

        seen += 1;
    }

    advance
}

/// Handles the trap door from borrowing to copying
fn set_no_borrow(can_borrow: &mut bool, base: &str, buffer: &str, scratch: &mut Vec<u8>)
{
    if *can_borrow
    {
        scratch.extend_from_slice(base[1..base.len() - buffer.len()].as_bytes());
    }

    *can_borrow = false
}

#[derive(Debug, Clone)]
pub(in crate::scanner) struct Deferred<'de>
{
    opts:   Flags,
    slice:  &'de str,
    stats:  MStats,
    single: bool,
}

impl<'de> Deferred<'de>
{
    pub fn new(opts: Flags, slice: &'de str, stats: MStats, single: bool) -> Self
    {
        Self {
            opts,
            slice,
            stats,
            single,
        }
    }

    pub fn into_token(self) -> Result<Token<'de>>
    {
        let Deferred {
            opts,
            slice,
            mut stats,
            single,
        } = self;

        scan_flow_scalar_eager(opts, slice, &mut stats, single).map(|(t, _)| t)
    }
}

const SINGLE: u8 = b'\'';
const SPACE: u8 = b' ';
const NEWLINE: u8 = b'\n';

#[cfg(test)]
mod tests
{
    use anyhow::{anyhow, bail};
    use pretty_assertions::assert_eq;
    use ScalarStyle::{DoubleQuote, SingleQuote};

    use super::*;
    use crate::scanner::scalar::test_utils::{normalize, TestResult, TEST_FLAGS};

    #[test]
    fn flow_single_empty() -> TestResult
    {
        let data = "''";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!(""), SingleQuote);

        let (token, amt) = scan_flow_scalar(TEST_FLAGS, data, &mut stats, true).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, 2);

        Ok(())
    }

    #[test]
    fn flow_single_simple() -> TestResult
    {
        let data = "'hello world'";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("hello world"), SingleQuote);

        let (token, amt) = scan_flow_scalar(TEST_FLAGS, data, &mut stats, true).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, 13);

        Ok(())
    }

    #[test]
    fn flow_single_escaped_quote() -> TestResult
    {
        let data = "'it''s'";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("it's"), SingleQuote);

        let (token, amt) = scan_flow_scalar(TEST_FLAGS, data, &mut stats, true).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_single_multi_line() -> TestResult
    {
        let data = "'hello\nworld'";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("hello world"), SingleQuote);

        let (token, amt) = scan_flow_scalar(TEST_FLAGS, data, &mut stats, true).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_single_multi_line_breaks() -> TestResult
    {
        let data = "'a\nb\n\nc\nd'";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("a b\nc d"), SingleQuote);

        let (token, amt) = scan_flow_scalar(TEST_FLAGS, data, &mut stats, true).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_single_reject_document()
    {
        let data = ["'--- '", "'---\n'"];
        let mut stats = MStats::new();
        let expected = ScanError::InvalidFlowScalar;

        for (i, &t) in (&data).into_iter().enumerate()
        {
            match scan_flow_scalar(TEST_FLAGS, t, &mut stats, true).and_then(normalize)
            {
                Err(e) => assert_eq!(
                    e, expected,
                    "on iteration {}, expected error {}, got {}",
                    i, expected, e
                ),
                Ok((unexpected, _)) => panic!(
                    "on iteration {}, expected error {}, got unexpected value {:?}",
                    i, expected, unexpected
                ),
            }
        }
    }

    #[test]
    fn flow_single_reject_eof()
    {
        let data = ["'end space ", "'", "'end word"];
        let mut stats = MStats::new();
        let expected = ScanError::UnexpectedEOF;

        for (i, &t) in (&data).into_iter().enumerate()
        {
            match scan_flow_scalar(TEST_FLAGS, t, &mut stats, true).and_then(normalize)
            {
                Err(e) => assert_eq!(
                    e, expected,
                    "on iteration {}, expected error {}, got {}",
                    i, expected, e
                ),
                Ok((unexpected, _)) => panic!(
                    "on iteration {}, expected error {}, got unexpected value {:?}",
                    i, expected, unexpected
                ),
            }
        }
    }

    #[test]
    fn flow_double_empty() -> TestResult
    {
        let data = "\"\"";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!(""), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, 2);

        Ok(())
    }

    #[test]
    fn flow_double_simple() -> TestResult
    {
        let data = "\"hello world\"";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("hello world"), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_double_escape() -> TestResult
    {
        let data = r#""a\tb\nc""#;
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("a\tb\nc"), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_double_escaped_line_break() -> TestResult
    {
        let data = "\"a\\\n   b\"";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("ab"), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_double_multi_line() -> TestResult
    {
        let data = "\"hello\nworld\"";
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("hello world"), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_double_escaped_quote() -> TestResult
    {
        let data = r#""say \"hi\"""#;
        let mut stats = MStats::new();
        let expected = Token::Scalar(cow!("say \"hi\""), DoubleQuote);

        let (token, amt) =
            scan_flow_scalar(TEST_FLAGS, data, &mut stats, false).and_then(normalize)?;

        assert_eq!(token, expected);
        assert_eq!(amt, data.len());

        Ok(())
    }

    #[test]
    fn flow_double_reject_eof()
    {
        let data = ["\"end space ", "\"", "\"end word"];
        let mut stats = MStats::new();
        let expected = ScanError::UnexpectedEOF;

        for (i, &t) in (&data).into_iter().enumerate()
        {
            match scan_flow_scalar(TEST_FLAGS, t, &mut stats, false).and_then(normalize)
            {
                Err(e) => assert_eq!(
                    e, expected,
                    "on iteration {}, expected error {}, got {}",
                    i, expected, e
                ),
                Ok((unexpected, _)) => panic!(
                    "on iteration {}, expected error {}, got unexpected value {:?}",
                    i, expected, unexpected
                ),
            }
        }
    }

    #[test]
    fn flow_lazy_roundtrips_single_and_double() -> TestResult
    {
        let data = ["'it''s\nfine'", "\"a\\tb\\nc\""];
        let expected = [
            Token::Scalar(cow!("it's fine"), SingleQuote),
            Token::Scalar(cow!("a\tb\nc"), DoubleQuote),
        ];
        let singles = [true, false];

        for (i, (&t, single)) in data.iter().zip(singles).enumerate()
        {
            let mut stats = MStats::new();
            let lazy_opts = TEST_FLAGS | O_LAZY;

            let (lazy, amt) = scan_flow_scalar_lazy(lazy_opts, t, &mut stats, single)
                .map_err(|e| anyhow!("iteration {}: {}", i, e))?;

            let token = lazy
                .into_token()
                .map_err(|e| anyhow!("iteration {}: {}", i, e))?;

            if token != expected[i]
            {
                bail!(
                    "on iteration {}, expected {:?}, got {:?}",
                    i,
                    expected[i],
                    token
                )
            }

            assert_eq!(amt, t.len(), "on iteration {}", i);
        }

        Ok(())
    }
}
