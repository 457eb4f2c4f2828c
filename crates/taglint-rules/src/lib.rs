//! taglint rules engine
//!
//! Checks whitespace placement around the four tag-spacing boundaries:
//! the `</` of a closing tag, the `/>` of a self-closing tag, the gap
//! after the opening bracket, and the gap before the end bracket. Each
//! boundary carries an independent policy (`always`, `never`, `allow`;
//! plus `allow-multiline` for after-opening) and violations come back as
//! diagnostics with ready-to-apply single edits where one exists.
//!
//! The engine is a pure function from (tree, options) to diagnostics:
//! it never mutates the tree and never touches the outside world.
//!
//! # Example
//!
//! ```
//! use taglint_rules::{check, Options, Policy};
//! use taglint_syntax::{Document, Element, Node, TagBuilder, TagKind, TokenKind};
//!
//! // `<Foo/ >`
//! let tag = TagBuilder::new(TagKind::SelfClosing, 0)
//!     .token(TokenKind::LeftAngle, "<")
//!     .token(TokenKind::Name, "Foo")
//!     .token(TokenKind::Slash, "/")
//!     .trivia(" ")
//!     .token(TokenKind::RightAngle, ">")
//!     .build();
//! let doc = Document::new(vec![Node::Element(Element {
//!     open: tag,
//!     children: Vec::new(),
//!     close: None,
//! })]);
//!
//! let options = Options {
//!     closing_slash: Policy::Never,
//!     ..Options::default()
//! };
//! let diagnostics = check(&doc, &options).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod diagnostic;
pub mod fix;
pub mod gap;
pub mod options;
pub mod rules;

pub use diagnostic::{messages, Diagnostic};
pub use fix::Fix;
pub use gap::{Adjacency, Gap};
pub use options::{AfterOpening, Options, Policy, RawOptions};
pub use rules::{check, check_tag};

/// Configuration error: an option value outside its enum. Surfaced by
/// [`Options::resolve`] before any traversal begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid value `{value}` for option `{field}`; expected one of {expected}")]
pub struct OptionsError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}
