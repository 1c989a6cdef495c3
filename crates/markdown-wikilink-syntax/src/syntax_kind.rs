//! SyntaxKind enum for the tags scanners emit and the tree the sink builds.
//!
//! Following the rust-analyzer model, tokens and nodes share a single enum.
//! Every wiki link tag has a fixed camelCase tag name that downstream
//! renderers match on, see [`SyntaxKind::tag_name`].

/// All syntax kinds for the wiki link CST.
///
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens ===
    /// Run of consumed characters
    TEXT,
    /// Line ending (CR, LF or CRLF)
    NEWLINE,

    // === Host nodes ===
    /// Root document node
    ROOT,
    /// Plain text no construct claimed
    DATA,
    /// Line ending outside any construct
    LINE_ENDING,

    // === Wiki link (`[[target|alias]]`) ===
    WIKI_LINK,
    /// Both `[[` and `]]`
    WIKI_LINK_MARKER,
    /// Everything between the markers
    WIKI_LINK_DATA,
    WIKI_LINK_TARGET,
    WIKI_LINK_ALIAS_MARKER,
    WIKI_LINK_ALIAS,

    // === Wiki image link (`![[target|alias]]`) ===
    WIKI_IMG_LINK,
    /// Both `![[` and `]]`
    WIKI_IMG_LINK_MARKER,
    WIKI_IMG_LINK_DATA,
    WIKI_IMG_LINK_TARGET,
    WIKI_IMG_LINK_ALIAS_MARKER,
    WIKI_IMG_LINK_ALIAS,
}

const ALL: [SyntaxKind; 17] = [
    SyntaxKind::TEXT,
    SyntaxKind::NEWLINE,
    SyntaxKind::ROOT,
    SyntaxKind::DATA,
    SyntaxKind::LINE_ENDING,
    SyntaxKind::WIKI_LINK,
    SyntaxKind::WIKI_LINK_MARKER,
    SyntaxKind::WIKI_LINK_DATA,
    SyntaxKind::WIKI_LINK_TARGET,
    SyntaxKind::WIKI_LINK_ALIAS_MARKER,
    SyntaxKind::WIKI_LINK_ALIAS,
    SyntaxKind::WIKI_IMG_LINK,
    SyntaxKind::WIKI_IMG_LINK_MARKER,
    SyntaxKind::WIKI_IMG_LINK_DATA,
    SyntaxKind::WIKI_IMG_LINK_TARGET,
    SyntaxKind::WIKI_IMG_LINK_ALIAS_MARKER,
    SyntaxKind::WIKI_IMG_LINK_ALIAS,
];

impl SyntaxKind {
    /// Returns true if this kind represents a token.
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::NEWLINE as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true for the outer node of either wiki link flavor.
    pub fn is_wiki_link(self) -> bool {
        matches!(self, Self::WIKI_LINK | Self::WIKI_IMG_LINK)
    }

    /// The tag name used in the event stream.
    ///
    /// The `wikiLink*` / `wikiImgLink*` names are a contract with renderers
    /// and must not change.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::TEXT => "text",
            Self::NEWLINE => "newline",
            Self::ROOT => "root",
            Self::DATA => "data",
            Self::LINE_ENDING => "lineEnding",
            Self::WIKI_LINK => "wikiLink",
            Self::WIKI_LINK_MARKER => "wikiLinkMarker",
            Self::WIKI_LINK_DATA => "wikiLinkData",
            Self::WIKI_LINK_TARGET => "wikiLinkTarget",
            Self::WIKI_LINK_ALIAS_MARKER => "wikiLinkAliasMarker",
            Self::WIKI_LINK_ALIAS => "wikiLinkAlias",
            Self::WIKI_IMG_LINK => "wikiImgLink",
            Self::WIKI_IMG_LINK_MARKER => "wikiImgLinkMarker",
            Self::WIKI_IMG_LINK_DATA => "wikiImgLinkData",
            Self::WIKI_IMG_LINK_TARGET => "wikiImgLinkTarget",
            Self::WIKI_IMG_LINK_ALIAS_MARKER => "wikiImgLinkAliasMarker",
            Self::WIKI_IMG_LINK_ALIAS => "wikiImgLinkAlias",
        }
    }

    /// Inverse of [`SyntaxKind::tag_name`].
    pub fn from_tag_name(name: &str) -> Option<Self> {
        ALL.into_iter().find(|kind| kind.tag_name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WikiLinkLang {}

impl rowan::Language for WikiLinkLang {
    type Kind = SyntaxKind;

    /// # Panics
    ///
    /// If `raw` was not produced by [`SyntaxKind`]'s own conversion.
    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match ALL.get(usize::from(raw.0)) {
            Some(kind) => *kind,
            None => panic!("unknown raw syntax kind {}", raw.0),
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<WikiLinkLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<WikiLinkLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<WikiLinkLang>;
