//! # Scanner Events
//!
//! A scanner never builds anything itself. It reports what it sees through
//! [`Effects`], and the host records those calls as a **flat sequence** of
//! [`Event`]s:
//!
//! ```text
//! Enter(WIKI_LINK)
//!   Enter(WIKI_LINK_MARKER)
//!     Consume('[') Consume('[')
//!   Exit(WIKI_LINK_MARKER)
//!   Enter(WIKI_LINK_DATA)
//!     Enter(WIKI_LINK_TARGET)
//!       Consume('a')
//!     Exit(WIKI_LINK_TARGET)
//!   Exit(WIKI_LINK_DATA)
//!   Enter(WIKI_LINK_MARKER)
//!     Consume(']') Consume(']')
//!   Exit(WIKI_LINK_MARKER)
//! Exit(WIKI_LINK)
//! ```
//!
//! Enter pushes, Exit pops. The [`Sink`](crate::sink::Sink) turns this into a
//! Rowan tree; a renderer can also walk it directly.

use std::fmt;

use crate::code::Code;
use crate::syntax_kind::SyntaxKind;

/// The three things a scanner can ask of its host.
pub trait Effects {
    /// Open a span.
    fn enter(&mut self, kind: SyntaxKind);
    /// Close the innermost open span. `kind` must match what was entered.
    fn exit(&mut self, kind: SyntaxKind);
    /// Take the current code into the innermost open span and advance.
    fn consume(&mut self, code: Code);
}

/// A recorded effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Enter(SyntaxKind),
    Exit(SyntaxKind),
    Consume(Code),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Enter(kind) => write!(f, "enter {}", kind.tag_name()),
            Event::Exit(kind) => write!(f, "exit {}", kind.tag_name()),
            Event::Consume(Code::Char(c)) => write!(f, "consume {c:?}"),
            Event::Consume(code) => write!(f, "consume {code:?}"),
        }
    }
}

impl Effects for Vec<Event> {
    fn enter(&mut self, kind: SyntaxKind) {
        self.push(Event::Enter(kind));
    }

    fn exit(&mut self, kind: SyntaxKind) {
        self.push(Event::Exit(kind));
    }

    fn consume(&mut self, code: Code) {
        self.push(Event::Consume(code));
    }
}

impl<E: Effects + ?Sized> Effects for &mut E {
    fn enter(&mut self, kind: SyntaxKind) {
        (**self).enter(kind);
    }

    fn exit(&mut self, kind: SyntaxKind) {
        (**self).exit(kind);
    }

    fn consume(&mut self, code: Code) {
        (**self).consume(code);
    }
}

/// Check that every exit closes the span most recently entered.
///
/// Returns the index of the first offending event.
pub fn check_nesting(events: &[Event]) -> Result<(), usize> {
    let mut open = Vec::new();
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Enter(kind) => open.push(*kind),
            Event::Exit(kind) => {
                if open.pop() != Some(*kind) {
                    return Err(i);
                }
            }
            Event::Consume(_) => {
                if open.is_empty() {
                    return Err(i);
                }
            }
        }
    }
    if open.is_empty() {
        Ok(())
    } else {
        Err(events.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_records_effects_in_order() {
        let mut events = Vec::new();
        events.enter(SyntaxKind::WIKI_LINK);
        events.consume(Code::Char('['));
        events.exit(SyntaxKind::WIKI_LINK);
        assert_eq!(
            events,
            vec![
                Event::Enter(SyntaxKind::WIKI_LINK),
                Event::Consume(Code::Char('[')),
                Event::Exit(SyntaxKind::WIKI_LINK),
            ]
        );
    }

    #[test]
    fn mut_ref_forwards() {
        fn open_data<E: Effects>(mut effects: E) {
            effects.enter(SyntaxKind::DATA);
        }

        let mut events: Vec<Event> = Vec::new();
        open_data(&mut events);
        assert_eq!(events, vec![Event::Enter(SyntaxKind::DATA)]);
    }

    #[test]
    fn display_uses_tag_names() {
        assert_eq!(
            Event::Enter(SyntaxKind::WIKI_IMG_LINK_ALIAS).to_string(),
            "enter wikiImgLinkAlias"
        );
        assert_eq!(Event::Consume(Code::Char('|')).to_string(), "consume '|'");
        assert_eq!(
            Event::Consume(Code::LineFeed).to_string(),
            "consume LineFeed"
        );
    }

    #[test]
    fn nesting_checks() {
        let ok = [
            Event::Enter(SyntaxKind::WIKI_LINK),
            Event::Enter(SyntaxKind::WIKI_LINK_MARKER),
            Event::Consume(Code::Char('[')),
            Event::Exit(SyntaxKind::WIKI_LINK_MARKER),
            Event::Exit(SyntaxKind::WIKI_LINK),
        ];
        assert_eq!(check_nesting(&ok), Ok(()));

        let crossed = [
            Event::Enter(SyntaxKind::WIKI_LINK),
            Event::Enter(SyntaxKind::WIKI_LINK_MARKER),
            Event::Exit(SyntaxKind::WIKI_LINK),
        ];
        assert_eq!(check_nesting(&crossed), Err(2));

        let unclosed = [Event::Enter(SyntaxKind::WIKI_LINK)];
        assert_eq!(check_nesting(&unclosed), Err(1));

        let orphan = [Event::Consume(Code::Char('x'))];
        assert_eq!(check_nesting(&orphan), Err(0));
    }
}
