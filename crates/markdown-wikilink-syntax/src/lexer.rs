//! # Lexer - Turning Source Text Into Codes
//!
//! Scanners never look at `&str`. This module uses [Logos] to turn source
//! text into a flat sequence of [`Chunk`]s, each pairing a [`Code`] with the
//! byte range it came from.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Normalization
//!
//! ```text
//! "\r\n" → CarriageReturnLineFeed
//! "\r"   → CarriageReturn
//! "\n"   → LineFeed
//! "\t"   → HorizontalTab, VirtualSpace* (up to the next tab stop)
//! "\0"   → Char('\u{FFFD}')
//! other  → Char(c)
//! ```
//!
//! ## The Lossless Guarantee
//!
//! Every byte of the input belongs to exactly one chunk. Virtual spaces own
//! an empty range, so concatenating the chunk ranges gives back the input:
//!
//! ```
//! use markdown_wikilink_syntax::lexer::lex;
//!
//! let input = "a\tb\r\n";
//! let chunks = lex(input);
//! let reconstructed: String = chunks.iter().map(|c| &input[c.range.clone()]).collect();
//! assert_eq!(input, reconstructed);
//! ```

use std::ops::Range;

use logos::Logos;

use crate::code::Code;

/// Columns per tab stop.
pub const TAB_SIZE: usize = 4;

/// Raw token kinds recognized by Logos, before tab expansion.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    #[token("\r\n")]
    CarriageReturnLineFeed,

    #[token("\r")]
    CarriageReturn,

    #[token("\n")]
    LineFeed,

    #[token("\t")]
    Tab,

    #[token("\0")]
    Nul,

    /// Any single character that is not one of the above
    #[regex(r"[^\r\n\t\x00]")]
    Char,
}

/// A code together with the source bytes it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub code: Code,
    pub range: Range<usize>,
}

impl Chunk {
    fn new(code: Code, range: Range<usize>) -> Self {
        Self { code, range }
    }
}

/// Lex the input into a sequence of chunks.
///
/// Guarantees that all bytes from the input appear in the output chunks, in
/// order.
pub fn lex(input: &str) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(input.len());
    let mut lexer = RawKind::lexer(input);
    let mut column: usize = 1;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawKind::CarriageReturnLineFeed) => {
                chunks.push(Chunk::new(Code::CarriageReturnLineFeed, span));
                column = 1;
            }
            Ok(RawKind::CarriageReturn) => {
                chunks.push(Chunk::new(Code::CarriageReturn, span));
                column = 1;
            }
            Ok(RawKind::LineFeed) => {
                chunks.push(Chunk::new(Code::LineFeed, span));
                column = 1;
            }
            Ok(RawKind::Tab) => {
                let end = span.end;
                chunks.push(Chunk::new(Code::HorizontalTab, span));
                let stop = column.div_ceil(TAB_SIZE) * TAB_SIZE;
                while column < stop {
                    chunks.push(Chunk::new(Code::VirtualSpace, end..end));
                    column += 1;
                }
                column += 1;
            }
            Ok(RawKind::Nul) => {
                chunks.push(Chunk::new(Code::Char(char::REPLACEMENT_CHARACTER), span));
                column += 1;
            }
            // Logos error means a character no rule matched; keep it as text
            Ok(RawKind::Char) | Err(()) => {
                let text = lexer.slice();
                for (offset, c) in text.char_indices() {
                    let start = span.start + offset;
                    chunks.push(Chunk::new(Code::Char(c), start..start + c.len_utf8()));
                    column += 1;
                }
            }
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes_of(input: &str) -> Vec<Code> {
        lex(input).into_iter().map(|c| c.code).collect()
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(
            lex("ab"),
            vec![
                Chunk::new(Code::Char('a'), 0..1),
                Chunk::new(Code::Char('b'), 1..2),
            ]
        );
    }

    #[test]
    fn lex_line_endings() {
        assert_eq!(
            codes_of("a\nb\r\nc\rd"),
            vec![
                Code::Char('a'),
                Code::LineFeed,
                Code::Char('b'),
                Code::CarriageReturnLineFeed,
                Code::Char('c'),
                Code::CarriageReturn,
                Code::Char('d'),
            ]
        );
    }

    #[test]
    fn lex_crlf_is_one_chunk() {
        assert_eq!(
            lex("\r\n"),
            vec![Chunk::new(Code::CarriageReturnLineFeed, 0..2)]
        );
    }

    #[test]
    fn lex_tab_at_line_start_pads_to_stop() {
        assert_eq!(
            lex("\tx"),
            vec![
                Chunk::new(Code::HorizontalTab, 0..1),
                Chunk::new(Code::VirtualSpace, 1..1),
                Chunk::new(Code::VirtualSpace, 1..1),
                Chunk::new(Code::VirtualSpace, 1..1),
                Chunk::new(Code::Char('x'), 1..2),
            ]
        );
    }

    #[test]
    fn lex_tab_mid_line() {
        // "abc" leaves us on column 4, which is already a tab stop
        assert_eq!(
            codes_of("abc\td"),
            vec![
                Code::Char('a'),
                Code::Char('b'),
                Code::Char('c'),
                Code::HorizontalTab,
                Code::Char('d'),
            ]
        );
        assert_eq!(
            codes_of("a\tb"),
            vec![
                Code::Char('a'),
                Code::HorizontalTab,
                Code::VirtualSpace,
                Code::VirtualSpace,
                Code::Char('b'),
            ]
        );
    }

    #[test]
    fn lex_tab_stops_reset_after_newline() {
        let after_newline: Vec<_> = codes_of("abcdef\n\t").into_iter().skip(7).collect();
        assert_eq!(
            after_newline,
            vec![
                Code::HorizontalTab,
                Code::VirtualSpace,
                Code::VirtualSpace,
                Code::VirtualSpace,
            ]
        );
    }

    #[test]
    fn lex_nul_becomes_replacement_character() {
        assert_eq!(lex("\0"), vec![Chunk::new(Code::Char('\u{FFFD}'), 0..1)]);
    }

    #[test]
    fn lex_multibyte_characters() {
        assert_eq!(
            lex("é!"),
            vec![
                Chunk::new(Code::Char('é'), 0..2),
                Chunk::new(Code::Char('!'), 2..3),
            ]
        );
    }

    #[test]
    fn all_bytes_preserved() {
        let input = "![[pic.png|A\tpic]]\r\nsee [[note]]\0\n";
        let chunks = lex(input);
        let reconstructed: String = chunks.iter().map(|c| &input[c.range.clone()]).collect();
        assert_eq!(input, reconstructed);
    }

    #[test]
    fn ranges_are_contiguous() {
        let input = "x\ty\r\n\tz";
        let chunks = lex(input);
        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.range.start, expected_start);
            expected_start = chunk.range.end;
        }
        assert_eq!(expected_start, input.len());
    }
}
