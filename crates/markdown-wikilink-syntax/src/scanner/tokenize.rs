//! Continuation-passing entry point for hosts that expect it.
//!
//! Some tokenizer frameworks hand a construct its effects plus two
//! continuations, `ok` and `nok`, and get back a state function to feed
//! codes into. [`Construct::tokenize`] offers that shape on top of
//! [`Scanner`]:
//!
//! ```
//! use markdown_wikilink_syntax::code::Code;
//! use markdown_wikilink_syntax::options::WikiLinkOptions;
//! use markdown_wikilink_syntax::scanner::{Construct, Event, Resume};
//!
//! let construct = Construct::wiki_img_link(&WikiLinkOptions::default());
//! let mut events: Vec<Event> = Vec::new();
//! let mut state = construct.tokenize(&mut events, |_| "ok", |_| "nok");
//!
//! let mut codes = "![[a.png]]".chars().map(Code::Char);
//! let outcome = loop {
//!     let code = codes.next().unwrap_or(Code::Eof);
//!     match state.feed(code) {
//!         Resume::Continue(next) => state = next,
//!         Resume::Done(outcome) => break outcome,
//!     }
//! };
//! assert_eq!(outcome, "ok");
//! ```

use super::{Construct, Effects, Progress, Scanner, Verdict};
use crate::code::Code;

/// What feeding a code to a [`StateFn`] produced.
#[derive(Debug)]
pub enum Resume<S, T> {
    /// Keep going with the next code.
    Continue(S),
    /// A continuation ran; this is what it returned.
    Done(T),
}

/// A scanner run bundled with its effects and both continuations.
pub struct StateFn<'c, E, A, R> {
    scanner: Scanner<'c>,
    effects: E,
    ok: A,
    nok: R,
}

impl Construct {
    /// Begin a run. `ok` is called with the code after an accepted
    /// construct, `nok` with the code that caused a rejection.
    pub fn tokenize<E, A, R, T>(&self, effects: E, ok: A, nok: R) -> StateFn<'_, E, A, R>
    where
        E: Effects,
        A: FnOnce(Code) -> T,
        R: FnOnce(Code) -> T,
    {
        StateFn {
            scanner: self.scanner(),
            effects,
            ok,
            nok,
        }
    }
}

impl<'c, E, A, R> StateFn<'c, E, A, R>
where
    E: Effects,
{
    pub fn feed<T>(mut self, code: Code) -> Resume<Self, T>
    where
        A: FnOnce(Code) -> T,
        R: FnOnce(Code) -> T,
    {
        match self.scanner.step(code, &mut self.effects) {
            Progress::NeedMore => Resume::Continue(self),
            Progress::Done(Verdict::Accept(code)) => Resume::Done((self.ok)(code)),
            Progress::Done(Verdict::Reject(code)) => Resume::Done((self.nok)(code)),
        }
    }
}
