//! taglint syntax model
//!
//! The tag-tree data model the taglint checker consumes: tokens with
//! byte spans and leading trivia, tag nodes in three closed variants,
//! the nested document tree with a pre-order tag iterator, and named
//! shape accessors for each variant's delimiter tokens.
//!
//! The tree is produced elsewhere — this crate neither parses nor
//! mutates source text; `Document::to_source` merely re-emits what the
//! tokens carry.
//!
//! # Example
//!
//! ```
//! use taglint_syntax::{TagBuilder, TagKind, TokenKind};
//!
//! let tag = TagBuilder::new(TagKind::SelfClosing, 0)
//!     .token(TokenKind::LeftAngle, "<")
//!     .token(TokenKind::Name, "Foo")
//!     .trivia(" ")
//!     .token(TokenKind::Slash, "/")
//!     .token(TokenKind::RightAngle, ">")
//!     .build();
//! assert_eq!(tag.shape().unwrap().before_slash.unwrap().text, "Foo");
//! ```

pub mod builder;
pub mod shape;
pub mod token;
pub mod tree;

pub use builder::TagBuilder;
pub use shape::TagShape;
pub use token::{Span, Token, TokenKind};
pub use tree::{Document, Element, Node, Tag, TagKind, Tags};

/// Raised when a tag node does not have the token layout its variant
/// requires — a defect in the upstream tree, never silently validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed tag at offset {offset}: {message}")]
pub struct ShapeError {
    pub message: String,
    pub offset: usize,
}
