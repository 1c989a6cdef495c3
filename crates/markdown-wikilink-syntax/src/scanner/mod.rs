//! # Scanner - The Wiki Link State Machine
//!
//! One finite-state machine recognizes both `[[target|alias]]` and
//! `![[target|alias]]`. The two differ only in their opening marker and the
//! tag names they emit, which a [`Flavor`] supplies.
//!
//! ## States
//!
//! ```text
//! Start ─► StartMarker ─► Data ─► Target ─┬─────────────────────────► EndMarker ─► accept
//!                                         └─► AliasMarker ─► Alias ─┘
//! ```
//!
//! Every state either consumes the current code and waits for the next one,
//! hands the same code on to another state, or finishes with a [`Verdict`].
//! Any state can reject.
//!
//! ## Rules
//!
//! - The target must contain something other than line endings and spaces
//!   before a divider or the closing marker may follow it.
//! - The alias may be empty: `[[target|]]` is accepted.
//! - A line ending or end of input anywhere inside rejects the whole run.
//! - The divider is checked before the closing marker, so with the default
//!   options `[[a|]]` goes through the alias states.
//!
//! ## Driving a Scanner
//!
//! ```
//! use markdown_wikilink_syntax::code::Code;
//! use markdown_wikilink_syntax::options::WikiLinkOptions;
//! use markdown_wikilink_syntax::scanner::{Construct, Verdict};
//!
//! let construct = Construct::wiki_link(&WikiLinkOptions::default());
//! let (events, verdict) = construct.scan("[[note]]".chars().map(Code::Char));
//! assert_eq!(verdict, Verdict::Accept(Code::Eof));
//! assert!(!events.is_empty());
//! ```

pub mod event;
mod tokenize;

pub use event::{Effects, Event};
pub use tokenize::{Resume, StateFn};

use crate::code::{Code, markdown_line_ending, markdown_line_ending_or_space};
use crate::options::WikiLinkOptions;
use crate::syntax_kind::SyntaxKind;

/// Closing marker shared by both flavors.
pub const END_MARKER: &str = "]]";

/// Which of the two constructs a scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `[[target|alias]]`
    Link,
    /// `![[target|alias]]`
    ImgLink,
}

impl Flavor {
    pub fn start_marker(self) -> &'static str {
        match self {
            Flavor::Link => "[[",
            Flavor::ImgLink => "![[",
        }
    }

    /// The character the host dispatches on.
    pub fn trigger(self) -> char {
        match self {
            Flavor::Link => '[',
            Flavor::ImgLink => '!',
        }
    }

    /// The flavor whose outer node is `kind`.
    pub fn of(kind: SyntaxKind) -> Option<Flavor> {
        match kind {
            SyntaxKind::WIKI_LINK => Some(Flavor::Link),
            SyntaxKind::WIKI_IMG_LINK => Some(Flavor::ImgLink),
            _ => None,
        }
    }

    pub fn wrapper(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK,
        }
    }

    /// Used for both the opening and the closing marker.
    pub fn marker(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK_MARKER,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK_MARKER,
        }
    }

    pub fn data(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK_DATA,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK_DATA,
        }
    }

    pub fn target(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK_TARGET,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK_TARGET,
        }
    }

    pub fn alias_marker(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK_ALIAS_MARKER,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK_ALIAS_MARKER,
        }
    }

    pub fn alias(self) -> SyntaxKind {
        match self {
            Flavor::Link => SyntaxKind::WIKI_LINK_ALIAS,
            Flavor::ImgLink => SyntaxKind::WIKI_IMG_LINK_ALIAS,
        }
    }
}

/// A configured wiki link construct: the descriptor a host registers under
/// its trigger character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    flavor: Flavor,
    start_marker: Vec<char>,
    end_marker: Vec<char>,
    alias_marker: Vec<char>,
}

impl Construct {
    pub fn new(flavor: Flavor, options: &WikiLinkOptions) -> Self {
        Self {
            flavor,
            start_marker: flavor.start_marker().chars().collect(),
            end_marker: END_MARKER.chars().collect(),
            alias_marker: options.alias_marker().chars().collect(),
        }
    }

    pub fn wiki_link(options: &WikiLinkOptions) -> Self {
        Self::new(Flavor::Link, options)
    }

    pub fn wiki_img_link(options: &WikiLinkOptions) -> Self {
        Self::new(Flavor::ImgLink, options)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The code this construct is registered under.
    pub fn trigger(&self) -> Code {
        Code::from(self.flavor.trigger())
    }

    /// A fresh run, positioned before the first code.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self)
    }

    /// Run over `codes` in isolation, feeding `Eof` once they run out.
    ///
    /// Returns every event the run emitted, rejected runs included.
    pub fn scan<I>(&self, codes: I) -> (Vec<Event>, Verdict)
    where
        I: IntoIterator<Item = Code>,
    {
        let mut events = Vec::new();
        let mut scanner = self.scanner();
        let mut codes = codes.into_iter();
        loop {
            let code = codes.next().unwrap_or(Code::Eof);
            if let Progress::Done(verdict) = scanner.step(code, &mut events) {
                return (events, verdict);
            }
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Recognized. The code is the first one *after* the construct; it was
    /// not consumed and the host should process it next.
    Accept(Code),
    /// Not a wiki link here. The code is the one that broke the match.
    Reject(Code),
}

impl Verdict {
    pub fn is_accept(self) -> bool {
        matches!(self, Verdict::Accept(_))
    }
}

/// Result of feeding one code to a [`Scanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The code was consumed; feed the next one.
    NeedMore,
    Done(Verdict),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    StartMarker,
    Data,
    Target,
    AliasMarker,
    Alias,
    EndMarker,
    Done(Verdict),
}

/// Per-run state: where we are, how far into each marker, and whether the
/// target and alias have real content yet.
#[derive(Debug, Clone)]
pub struct Scanner<'c> {
    construct: &'c Construct,
    state: State,
    start_cursor: usize,
    end_cursor: usize,
    alias_cursor: usize,
    data: bool,
    alias: bool,
}

impl<'c> Scanner<'c> {
    fn new(construct: &'c Construct) -> Self {
        Self {
            construct,
            state: State::Start,
            start_cursor: 0,
            end_cursor: 0,
            alias_cursor: 0,
            data: false,
            alias: false,
        }
    }

    /// Whether non-space alias content has been seen. Informational only.
    pub fn has_alias_content(&self) -> bool {
        self.alias
    }

    /// Feed one code.
    ///
    /// Returns [`Progress::NeedMore`] only after consuming `code`. Once a run
    /// is done, further calls return the same verdict and emit nothing.
    pub fn step<E: Effects>(&mut self, code: Code, effects: &mut E) -> Progress {
        let flavor = self.construct.flavor;
        loop {
            match self.state {
                State::Start => {
                    if !at(&self.construct.start_marker, self.start_cursor, code) {
                        return self.reject(code, "no start marker");
                    }
                    effects.enter(flavor.wrapper());
                    effects.enter(flavor.marker());
                    self.state = State::StartMarker;
                }
                State::StartMarker => {
                    if self.start_cursor == self.construct.start_marker.len() {
                        effects.exit(flavor.marker());
                        self.state = State::Data;
                        continue;
                    }
                    if !at(&self.construct.start_marker, self.start_cursor, code) {
                        return self.reject(code, "incomplete start marker");
                    }
                    effects.consume(code);
                    self.start_cursor += 1;
                    return Progress::NeedMore;
                }
                State::Data => {
                    if markdown_line_ending(code) || code == Code::Eof {
                        return self.reject(code, "nothing after start marker");
                    }
                    effects.enter(flavor.data());
                    effects.enter(flavor.target());
                    self.state = State::Target;
                }
                State::Target => {
                    if at(&self.construct.alias_marker, self.alias_cursor, code) {
                        if !self.data {
                            return self.reject(code, "divider before target");
                        }
                        effects.exit(flavor.target());
                        effects.enter(flavor.alias_marker());
                        self.state = State::AliasMarker;
                        continue;
                    }
                    if at(&self.construct.end_marker, self.end_cursor, code) {
                        if !self.data {
                            return self.reject(code, "empty target");
                        }
                        effects.exit(flavor.target());
                        effects.exit(flavor.data());
                        effects.enter(flavor.marker());
                        self.state = State::EndMarker;
                        continue;
                    }
                    if markdown_line_ending(code) || code == Code::Eof {
                        return self.reject(code, "unterminated target");
                    }
                    if !markdown_line_ending_or_space(code) {
                        self.data = true;
                    }
                    effects.consume(code);
                    return Progress::NeedMore;
                }
                State::AliasMarker => {
                    if self.alias_cursor == self.construct.alias_marker.len() {
                        effects.exit(flavor.alias_marker());
                        effects.enter(flavor.alias());
                        self.state = State::Alias;
                        continue;
                    }
                    if !at(&self.construct.alias_marker, self.alias_cursor, code) {
                        return self.reject(code, "incomplete divider");
                    }
                    effects.consume(code);
                    self.alias_cursor += 1;
                    return Progress::NeedMore;
                }
                State::Alias => {
                    // An empty alias is fine: `[[target|]]`
                    if at(&self.construct.end_marker, self.end_cursor, code) {
                        effects.exit(flavor.alias());
                        effects.exit(flavor.data());
                        effects.enter(flavor.marker());
                        self.state = State::EndMarker;
                        continue;
                    }
                    if markdown_line_ending(code) || code == Code::Eof {
                        return self.reject(code, "unterminated alias");
                    }
                    if !markdown_line_ending_or_space(code) {
                        self.alias = true;
                    }
                    effects.consume(code);
                    return Progress::NeedMore;
                }
                State::EndMarker => {
                    if self.end_cursor == self.construct.end_marker.len() {
                        effects.exit(flavor.marker());
                        effects.exit(flavor.wrapper());
                        let verdict = Verdict::Accept(code);
                        self.state = State::Done(verdict);
                        return Progress::Done(verdict);
                    }
                    if !at(&self.construct.end_marker, self.end_cursor, code) {
                        return self.reject(code, "incomplete end marker");
                    }
                    effects.consume(code);
                    self.end_cursor += 1;
                    return Progress::NeedMore;
                }
                State::Done(verdict) => return Progress::Done(verdict),
            }
        }
    }

    fn reject(&mut self, code: Code, reason: &str) -> Progress {
        log::trace!(
            "{} rejected at {code:?}: {reason}",
            self.construct.flavor.wrapper().tag_name()
        );
        let verdict = Verdict::Reject(code);
        self.state = State::Done(verdict);
        Progress::Done(verdict)
    }
}

/// True if `code` is the character at `cursor` in `marker`.
fn at(marker: &[char], cursor: usize, code: Code) -> bool {
    marker.get(cursor).is_some_and(|&c| code.is(c))
}
