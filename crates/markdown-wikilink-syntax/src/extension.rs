//! Trigger registration: which constructs a host should try at which
//! character.
//!
//! ```text
//! '[' → wiki link
//! '!' → wiki image link
//! ```
//!
//! Extensions combine by appending; constructs sharing a trigger are tried in
//! the order they were registered.

use std::collections::BTreeMap;

use crate::code::Code;
use crate::options::WikiLinkOptions;
use crate::scanner::Construct;

/// Constructs keyed by the character that triggers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    text: BTreeMap<char, Vec<Construct>>,
}

impl Extension {
    /// Register `construct` under its own trigger.
    pub fn with(mut self, construct: Construct) -> Self {
        self.text
            .entry(construct.flavor().trigger())
            .or_default()
            .push(construct);
        self
    }

    /// Merge two extensions. `other`'s constructs go after ours.
    pub fn combine(mut self, other: Extension) -> Self {
        for (trigger, constructs) in other.text {
            self.text.entry(trigger).or_default().extend(constructs);
        }
        self
    }

    /// Constructs to attempt at `code`, in order.
    pub fn constructs_for(&self, code: Code) -> &[Construct] {
        code.as_char()
            .and_then(|c| self.text.get(&c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_trigger(&self, code: Code) -> bool {
        !self.constructs_for(code).is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = char> + '_ {
        self.text.keys().copied()
    }
}

/// `[[target|alias]]`, triggered by `[`.
pub fn wiki_link(options: &WikiLinkOptions) -> Extension {
    Extension::default().with(Construct::wiki_link(options))
}

/// `![[target|alias]]`, triggered by `!`.
pub fn wiki_img_link(options: &WikiLinkOptions) -> Extension {
    Extension::default().with(Construct::wiki_img_link(options))
}

/// Both constructs.
pub fn wiki_links(options: &WikiLinkOptions) -> Extension {
    wiki_link(options).combine(wiki_img_link(options))
}
