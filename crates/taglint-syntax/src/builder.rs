//! Construction helpers for tag trees.
//!
//! The collaborator that owns parsing builds tags token by token; the
//! builder accumulates byte offsets so callers only supply text. Queued
//! trivia attaches to the next token pushed.

use crate::token::{Token, TokenKind};
use crate::tree::{Tag, TagKind};

/// Builds one tag with automatic offset bookkeeping.
pub struct TagBuilder {
    kind: TagKind,
    tokens: Vec<Token>,
    cursor: usize,
    trivia: String,
}

impl TagBuilder {
    /// Start a tag whose first character (or first trivia byte) sits at
    /// `at`.
    pub fn new(kind: TagKind, at: usize) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
            cursor: at,
            trivia: String::new(),
        }
    }

    /// Queue trivia to precede the next token.
    pub fn trivia(mut self, text: &str) -> Self {
        self.trivia.push_str(text);
        self
    }

    /// Append a token, consuming any queued trivia.
    pub fn token(mut self, kind: TokenKind, text: &str) -> Self {
        let trivia = std::mem::take(&mut self.trivia);
        let token = Token::new(kind, &trivia, text, self.cursor);
        self.cursor = token.end();
        self.tokens.push(token);
        self
    }

    /// Offset one past everything pushed so far, queued trivia included.
    pub fn offset(&self) -> usize {
        self.cursor + self.trivia.len()
    }

    pub fn build(self) -> Tag {
        debug_assert!(
            self.trivia.is_empty(),
            "trailing trivia queued with no token to attach it to"
        );
        Tag::new(self.kind, self.tokens)
    }
}
