//! # markdown-wikilink-syntax
//!
//! Scanners for Obsidian-style wiki links, `[[target|alias]]`, and their
//! embedding form, `![[target|alias]]`, plus just enough host around them to
//! turn text into a lossless [Rowan] tree.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Chunks → Tokenizer ⇄ Scanners → Events → Sink → Rowan Tree
//!               (Logos)           (host)     (per trigger)        (GreenNodeBuilder)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Uses [Logos] to split input into [`Code`](code::Code)s: characters plus
//! sentinels for line endings, tabs and the virtual spaces a tab expands to.
//!
//! ### 2. Scanners ([`scanner`] module)
//!
//! One state machine per construct. A scanner is fed one code at a time and
//! reports `enter`/`exit`/`consume` effects until it accepts or rejects.
//! Scanners are registered under their trigger character in an
//! [`Extension`](extension::Extension).
//!
//! ### 3. Tokenizer ([`tokenizer`] module)
//!
//! Walks the codes, tries the registered scanners at each trigger, keeps the
//! events of the ones that accept and throws away the rest. Whatever no
//! scanner claims becomes `DATA` or `LINE_ENDING`.
//!
//! ### 4. Sink ([`sink`] module)
//!
//! Replays the events into a `GreenNodeBuilder`. [`ast`] provides typed
//! accessors on the result.
//!
//! ## Module Structure
//!
//! ```text
//! markdown-wikilink-syntax/
//! ├── lib.rs           # This file - public API and tree tests
//! ├── code.rs          # Code alphabet and character classifiers
//! ├── lexer.rs         # Logos-based lexer with tab expansion
//! ├── options.rs       # Alias divider configuration (TOML)
//! ├── syntax_kind.rs   # SyntaxKind enum, tag names, Rowan integration
//! ├── extension.rs     # Trigger → construct registration
//! ├── scanner/
//! │   ├── mod.rs       # Construct, Flavor, the Scanner state machine
//! │   ├── event.rs     # Effects trait and recorded Event
//! │   └── tokenize.rs  # ok/nok continuation entry point
//! ├── tokenizer.rs     # Host loop with attempt/rewind
//! ├── sink.rs          # Events → Rowan GreenNode
//! └── ast.rs           # Typed WikiLink view
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdown_wikilink_syntax::{ast, parse, SyntaxKind};
//!
//! let tree = parse("Read [[note|the note]] first.\n");
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), "Read [[note|the note]] first.\n");
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//!
//! let link = ast::wiki_links(&tree).next().unwrap();
//! assert_eq!(link.target(), "note");
//! assert_eq!(link.alias().as_deref(), Some("the note"));
//! ```

pub mod ast;
pub mod code;
pub mod extension;
pub mod lexer;
pub mod options;
pub mod scanner;
pub mod sink;
pub mod syntax_kind;
pub mod tokenizer;

pub use options::{OptionsError, WikiLinkOptions};
pub use scanner::{Construct, Flavor, Verdict};
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, WikiLinkLang};

/// Parse `source` with the default `|` divider.
pub fn parse(source: &str) -> SyntaxNode {
    parse_with(source, &WikiLinkOptions::default())
}

/// Parse `source`, recognizing both link forms with the given options.
pub fn parse_with(source: &str, options: &WikiLinkOptions) -> SyntaxNode {
    let chunks = lexer::lex(source);
    let extension = extension::wiki_links(options);
    let events = tokenizer::Tokenizer::new(&chunks, &extension).tokenize();
    log::trace!("{} chunks, {} events", chunks.len(), events.len());
    sink::Sink::new(source, &chunks, events).finish()
}
