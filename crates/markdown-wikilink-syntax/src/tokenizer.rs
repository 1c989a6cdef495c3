//! # Tokenizer - A Minimal Host for the Scanners
//!
//! The scanners only know how to recognize a wiki link starting at the code
//! they are handed. Something has to walk the input, decide where to try
//! them, and clean up after the ones that fail. That is this module.
//!
//! ## The Loop
//!
//! ```text
//! for each position:
//!     line ending          → LINE_ENDING node
//!     registered trigger   → attempt each construct in order
//!                              accept → keep its events, resume after it
//!                              reject → drop its events, rewind
//!     anything else        → extend the current DATA node
//! ```
//!
//! ## Attempts
//!
//! An attempt records a checkpoint (event count and chunk position), then
//! feeds codes to the construct until it reaches a verdict. Every consumed
//! code moves the position forward by one chunk. On rejection the event list
//! is truncated back to the checkpoint, so a failed construct leaves nothing
//! behind and its trigger character simply becomes data.

use crate::code::{Code, markdown_line_ending};
use crate::extension::Extension;
use crate::lexer::Chunk;
use crate::scanner::{Construct, Event, Resume, Verdict};
use crate::syntax_kind::SyntaxKind;

/// Walks a chunk stream, dispatching to registered constructs.
///
/// Holds the chunk stream, current position, and accumulated events.
pub struct Tokenizer<'t> {
    chunks: &'t [Chunk],
    extension: &'t Extension,
    pos: usize,
    events: Vec<Event>,
}

impl<'t> Tokenizer<'t> {
    pub fn new(chunks: &'t [Chunk], extension: &'t Extension) -> Self {
        Self {
            chunks,
            extension,
            pos: 0,
            events: Vec::new(),
        }
    }

    /// Tokenize everything, returning a flat event list wrapped in `ROOT`.
    pub fn tokenize(mut self) -> Vec<Event> {
        self.events.push(Event::Enter(SyntaxKind::ROOT));

        while !self.at_end() {
            let code = self.current();
            if markdown_line_ending(code) {
                self.line_ending();
            } else if !self.try_constructs(code) {
                self.data();
            }
        }

        self.events.push(Event::Exit(SyntaxKind::ROOT));
        self.events
    }

    /// Current code, or `Eof` if past end.
    fn current(&self) -> Code {
        self.nth(0)
    }

    /// Look ahead n codes.
    fn nth(&self, n: usize) -> Code {
        code_at(self.chunks, self.pos + n)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chunks.len()
    }

    /// Consume the current code into the innermost open node.
    fn bump(&mut self) {
        if !self.at_end() {
            let code = self.current();
            self.events.push(Event::Consume(code));
            self.pos += 1;
        }
    }

    fn line_ending(&mut self) {
        self.events.push(Event::Enter(SyntaxKind::LINE_ENDING));
        self.bump();
        self.events.push(Event::Exit(SyntaxKind::LINE_ENDING));
    }

    /// Extend the plain-text run with the current code and whatever follows
    /// up to the next line ending or trigger.
    fn data(&mut self) {
        // Continue a run that a failed attempt interrupted
        if self.events.last() == Some(&Event::Exit(SyntaxKind::DATA)) {
            self.events.pop();
        } else {
            self.events.push(Event::Enter(SyntaxKind::DATA));
        }

        self.bump();
        while !self.at_end() {
            let code = self.current();
            if markdown_line_ending(code) || self.extension.is_trigger(code) {
                break;
            }
            self.bump();
        }

        self.events.push(Event::Exit(SyntaxKind::DATA));
    }

    fn try_constructs(&mut self, code: Code) -> bool {
        let extension = self.extension;
        extension
            .constructs_for(code)
            .iter()
            .any(|construct| self.attempt(construct))
    }

    /// Run one construct from the current position. Commits on accept,
    /// rewinds on reject.
    fn attempt(&mut self, construct: &Construct) -> bool {
        let checkpoint = self.events.len();
        let start = self.pos;
        let chunks = self.chunks;

        let mut state = construct.tokenize(&mut self.events, Verdict::Accept, Verdict::Reject);
        let mut pos = start;
        let verdict = loop {
            match state.feed(code_at(chunks, pos)) {
                Resume::Continue(next) => {
                    state = next;
                    pos += 1;
                }
                Resume::Done(verdict) => break verdict,
            }
        };

        match verdict {
            Verdict::Accept(next) => {
                log::trace!(
                    "{} accepted at {start}..{pos}, resuming at {next:?}",
                    construct.flavor().wrapper().tag_name()
                );
                debug_assert_eq!(next, code_at(self.chunks, pos));
                self.pos = pos;
                true
            }
            Verdict::Reject(at) => {
                log::trace!(
                    "{} rejected at {start}, dropping {} events (stopped on {at:?})",
                    construct.flavor().wrapper().tag_name(),
                    self.events.len() - checkpoint
                );
                self.events.truncate(checkpoint);
                false
            }
        }
    }
}

fn code_at(chunks: &[Chunk], pos: usize) -> Code {
    chunks.get(pos).map_or(Code::Eof, |chunk| chunk.code)
}
