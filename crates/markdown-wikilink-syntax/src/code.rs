//! # Character Codes
//!
//! The host tokenizer does not hand scanners raw `char`s. It hands them
//! **codes**: real characters plus a handful of sentinels for things that are
//! not a single character in the source.
//!
//! ```text
//! raw   meaning
//! ----  ------------------------------------------
//!  -5   carriage return (`\r`)
//!  -4   line feed (`\n`)
//!  -3   carriage return + line feed (`\r\n`)
//!  -2   horizontal tab (`\t`)
//!  -1   virtual space (tab padding up to the next tab stop)
//!   0   NUL
//! null  end of input
//! 32    space
//! ```
//!
//! [`Code`] keeps the sentinels as distinct variants so they can never be
//! mistaken for scalar values, while [`Code::raw`] / [`Code::from_raw`] keep
//! the integer alphabet available at the boundary.

/// Raw integer values of the host alphabet.
pub mod codes {
    pub const CARRIAGE_RETURN: i32 = -5;
    pub const LINE_FEED: i32 = -4;
    pub const CARRIAGE_RETURN_LINE_FEED: i32 = -3;
    pub const HORIZONTAL_TAB: i32 = -2;
    pub const VIRTUAL_SPACE: i32 = -1;
    pub const NUL: i32 = 0;
    pub const SPACE: i32 = 32;
    pub const EXCLAMATION_MARK: i32 = 33;
    pub const LEFT_SQUARE_BRACKET: i32 = 91;
}

/// A single unit of input as seen by a scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// End of input. There is nothing left to feed.
    Eof,
    CarriageReturn,
    LineFeed,
    CarriageReturnLineFeed,
    HorizontalTab,
    /// Zero-width padding emitted after a tab, up to the next tab stop.
    VirtualSpace,
    /// Any real character, NUL included.
    Char(char),
}

impl Code {
    /// The raw integer for this code, `None` for end of input.
    pub fn raw(self) -> Option<i32> {
        match self {
            Code::Eof => None,
            Code::CarriageReturn => Some(codes::CARRIAGE_RETURN),
            Code::LineFeed => Some(codes::LINE_FEED),
            Code::CarriageReturnLineFeed => Some(codes::CARRIAGE_RETURN_LINE_FEED),
            Code::HorizontalTab => Some(codes::HORIZONTAL_TAB),
            Code::VirtualSpace => Some(codes::VIRTUAL_SPACE),
            Code::Char(c) => Some(c as i32),
        }
    }

    /// Map a raw integer back to a code.
    ///
    /// Returns `None` for values that are neither a known sentinel nor a
    /// Unicode scalar value (e.g. `-9` or a lone surrogate).
    pub fn from_raw(raw: Option<i32>) -> Option<Code> {
        let Some(raw) = raw else {
            return Some(Code::Eof);
        };
        match raw {
            codes::CARRIAGE_RETURN => Some(Code::CarriageReturn),
            codes::LINE_FEED => Some(Code::LineFeed),
            codes::CARRIAGE_RETURN_LINE_FEED => Some(Code::CarriageReturnLineFeed),
            codes::HORIZONTAL_TAB => Some(Code::HorizontalTab),
            codes::VIRTUAL_SPACE => Some(Code::VirtualSpace),
            n => char::from_u32(u32::try_from(n).ok()?).map(Code::Char),
        }
    }

    /// The character this code stands for, if it is a real character.
    pub fn as_char(self) -> Option<char> {
        match self {
            Code::Char(c) => Some(c),
            _ => None,
        }
    }

    /// True if this code is the character `c`.
    pub fn is(self, c: char) -> bool {
        self == Code::Char(c)
    }
}

impl From<char> for Code {
    fn from(c: char) -> Self {
        Code::Char(c)
    }
}

/// True for CR, LF and CRLF: every code below the tab sentinel.
pub fn markdown_line_ending(code: Code) -> bool {
    matches!(
        code,
        Code::CarriageReturn | Code::LineFeed | Code::CarriageReturnLineFeed
    )
}

/// True for any negative sentinel (line endings, tab, virtual space) or space.
///
/// NUL and end of input are not included.
pub fn markdown_line_ending_or_space(code: Code) -> bool {
    matches!(
        code,
        Code::CarriageReturn
            | Code::LineFeed
            | Code::CarriageReturnLineFeed
            | Code::HorizontalTab
            | Code::VirtualSpace
            | Code::Char(' ')
    )
}
