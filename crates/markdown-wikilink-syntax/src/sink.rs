//! Sink for converting tokenizer events into a Rowan green tree.

use std::ops::Range;

use rowan::GreenNodeBuilder;

use crate::code::{Code, markdown_line_ending};
use crate::lexer::Chunk;
use crate::scanner::Event;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// Converts events and chunks into a Rowan syntax tree.
///
/// Consecutive consumes inside the same node become a single token, so a
/// target like `note` is one `TEXT` token rather than four.
pub struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    source: &'input str,
    chunks: &'t [Chunk],
    cursor: usize,
    events: Vec<Event>,
    pending: Option<(SyntaxKind, Range<usize>)>,
}

impl<'t, 'input> Sink<'t, 'input> {
    /// Create a new sink. `chunks` must be the lexed form of `source`.
    pub fn new(source: &'input str, chunks: &'t [Chunk], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            source,
            chunks,
            cursor: 0,
            events,
            pending: None,
        }
    }

    /// Consume the sink and build the syntax tree.
    ///
    /// # Panics
    ///
    /// If the events consume more codes than there are chunks.
    pub fn finish(mut self) -> SyntaxNode {
        for event in std::mem::take(&mut self.events) {
            match event {
                Event::Enter(kind) => {
                    self.flush();
                    self.builder.start_node(kind.into());
                }
                Event::Exit(_) => {
                    self.flush();
                    self.builder.finish_node();
                }
                Event::Consume(code) => self.consume(code),
            }
        }
        self.flush();

        SyntaxNode::new_root(self.builder.finish())
    }

    fn consume(&mut self, code: Code) {
        let Some(chunk) = self.chunks.get(self.cursor) else {
            panic!("no chunk left for consume of {code:?}");
        };
        debug_assert_eq!(chunk.code, code, "event out of step with chunks");
        self.cursor += 1;

        let kind = if markdown_line_ending(code) {
            SyntaxKind::NEWLINE
        } else {
            SyntaxKind::TEXT
        };
        let range = chunk.range.clone();

        if let Some((pending_kind, pending)) = &mut self.pending
            && *pending_kind == kind
            && pending.end == range.start
        {
            pending.end = range.end;
            return;
        }
        self.flush();
        self.pending = Some((kind, range));
    }

    fn flush(&mut self) {
        if let Some((kind, range)) = self.pending.take() {
            // Virtual spaces alone carry no text
            if !range.is_empty() {
                self.builder.token(kind.into(), &self.source[range]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use pretty_assertions::assert_eq;

    /// `ROOT > DATA` holding one consume per chunk.
    fn data_events(chunks: &[Chunk]) -> Vec<Event> {
        let mut events = vec![
            Event::Enter(SyntaxKind::ROOT),
            Event::Enter(SyntaxKind::DATA),
        ];
        events.extend(chunks.iter().map(|c| Event::Consume(c.code)));
        events.push(Event::Exit(SyntaxKind::DATA));
        events.push(Event::Exit(SyntaxKind::ROOT));
        events
    }

    #[test]
    fn sink_builds_simple_tree() {
        let input = "hello";
        let chunks = lex(input);
        let events = data_events(&chunks);

        let tree = Sink::new(input, &chunks, events).finish();

        assert_eq!(tree.kind(), SyntaxKind::ROOT);
        assert_eq!(tree.children().count(), 1);
        let data = tree.first_child().unwrap();
        assert_eq!(data.kind(), SyntaxKind::DATA);
        // Five consumes merge into one token
        assert_eq!(data.children_with_tokens().count(), 1);
        assert_eq!(tree.text().to_string(), input);
    }

    #[test]
    fn sink_splits_tokens_at_node_boundaries() {
        let input = "ab";
        let chunks = lex(input);
        let events = vec![
            Event::Enter(SyntaxKind::ROOT),
            Event::Enter(SyntaxKind::DATA),
            Event::Consume(chunks[0].code),
            Event::Exit(SyntaxKind::DATA),
            Event::Enter(SyntaxKind::DATA),
            Event::Consume(chunks[1].code),
            Event::Exit(SyntaxKind::DATA),
            Event::Exit(SyntaxKind::ROOT),
        ];

        let tree = Sink::new(input, &chunks, events).finish();
        let texts: Vec<String> = tree.children().map(|n| n.text().to_string()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn tab_and_virtual_spaces_become_one_token() {
        let input = "\tx";
        let chunks = lex(input);
        assert_eq!(chunks.len(), 5);
        let events = data_events(&chunks);

        let tree = Sink::new(input, &chunks, events).finish();
        let data = tree.first_child().unwrap();
        let tokens: Vec<String> = data
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .map(|t| t.text().to_string())
            .collect();
        assert_eq!(tokens, vec!["\tx"]);
    }

    #[test]
    fn line_endings_are_newline_tokens() {
        let input = "\r\n";
        let chunks = lex(input);
        let events = vec![
            Event::Enter(SyntaxKind::ROOT),
            Event::Enter(SyntaxKind::LINE_ENDING),
            Event::Consume(chunks[0].code),
            Event::Exit(SyntaxKind::LINE_ENDING),
            Event::Exit(SyntaxKind::ROOT),
        ];

        let tree = Sink::new(input, &chunks, events).finish();
        let token = tree.first_child().unwrap().first_token().unwrap();
        assert_eq!(token.kind(), SyntaxKind::NEWLINE);
        assert_eq!(token.text(), "\r\n");
    }

    #[test]
    #[should_panic(expected = "no chunk left for consume of LineFeed")]
    fn consume_past_last_chunk_panics() {
        let chunks = lex("a");
        let events = vec![
            Event::Enter(SyntaxKind::ROOT),
            Event::Consume(Code::Char('a')),
            Event::Consume(Code::LineFeed),
            Event::Exit(SyntaxKind::ROOT),
        ];
        Sink::new("a", &chunks, events).finish();
    }
}
