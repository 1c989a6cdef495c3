//! Typed views over the untyped syntax tree.
//!
//! A [`WikiLink`] wraps a `WIKI_LINK` or `WIKI_IMG_LINK` node and reads its
//! parts back out of the children. The tree stays the source of truth;
//! nothing is cached.
//!
//! ```
//! use markdown_wikilink_syntax::{ast, parse};
//!
//! let tree = parse("See [[note|Note]] and ![[cat.png]]");
//! let links: Vec<_> = ast::wiki_links(&tree).collect();
//!
//! assert_eq!(links[0].target(), "note");
//! assert_eq!(links[0].alias().as_deref(), Some("Note"));
//! assert!(links[1].is_embed());
//! assert_eq!(links[1].alias(), None);
//! ```

use rowan::TextRange;

use crate::scanner::Flavor;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// A `[[target|alias]]` or `![[target|alias]]` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiLink {
    syntax: SyntaxNode,
    flavor: Flavor,
}

impl WikiLink {
    pub fn cast(syntax: SyntaxNode) -> Option<Self> {
        let flavor = Flavor::of(syntax.kind())?;
        Some(Self { syntax, flavor })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.syntax
    }

    /// True for `![[...]]`.
    pub fn is_embed(&self) -> bool {
        self.flavor == Flavor::ImgLink
    }

    /// The text between the opening marker and the divider (or the closing
    /// marker), exactly as written.
    pub fn target(&self) -> String {
        self.part(self.flavor.target())
            .map(|node| node.text().to_string())
            .unwrap_or_default()
    }

    /// The text after the divider. `None` when there is no divider at all,
    /// `Some("")` for `[[target|]]`.
    pub fn alias(&self) -> Option<String> {
        self.part(self.flavor.alias())
            .map(|node| node.text().to_string())
    }

    /// The divider as written, if present.
    pub fn alias_marker(&self) -> Option<String> {
        self.part(self.flavor.alias_marker())
            .map(|node| node.text().to_string())
    }

    /// Text a renderer would show: the alias when it has one, else the target.
    pub fn display_text(&self) -> String {
        match self.alias() {
            Some(alias) if !alias.trim().is_empty() => alias,
            _ => self.target(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.syntax.text_range()
    }

    fn part(&self, kind: SyntaxKind) -> Option<SyntaxNode> {
        self.syntax
            .children()
            .find(|child| child.kind() == self.flavor.data())?
            .children()
            .find(|child| child.kind() == kind)
    }
}

/// Every wiki link under `root`, in document order.
pub fn wiki_links(root: &SyntaxNode) -> impl Iterator<Item = WikiLink> + '_ {
    root.descendants().filter_map(WikiLink::cast)
}
