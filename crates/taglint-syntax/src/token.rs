use serde::{Deserialize, Serialize};

/// A byte range in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for markup tag source.
///
/// Kinds are positional lexemes, not semantic categories: the checker only
/// needs to locate brackets and slashes and measure the trivia between
/// neighbors, so attribute tokens stay coarse-grained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `/`
    Slash,
    /// Tag name
    Name,
    /// Attribute name
    AttrName,
    /// `=`
    Equals,
    /// Quoted attribute value, quotes included
    AttrValue,
    /// Raw text content between tags
    Text,
}

/// An atomic lexical unit plus the trivia that precedes it.
///
/// `span` covers the token's own text. The leading trivia (whitespace and
/// comments between this token and its predecessor) is carried on the token
/// itself, so the gap between two neighbors is exactly the later token's
/// `trivia` and spans `[earlier.end(), later.start())`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub trivia: String,
    pub span: Span,
}

impl Token {
    /// Create a token whose trivia begins at `full_start`.
    pub fn new(kind: TokenKind, trivia: &str, text: &str, full_start: usize) -> Self {
        let start = full_start + trivia.len();
        Self {
            kind,
            text: text.to_string(),
            trivia: trivia.to_string(),
            span: Span::new(start, start + text.len()),
        }
    }

    /// Offset of the leading trivia (equals `start()` when there is none).
    pub fn full_start(&self) -> usize {
        self.span.start - self.trivia.len()
    }

    /// Offset of the first non-trivia character.
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_offsets() {
        let token = Token::new(TokenKind::Name, "  ", "Foo", 1);
        assert_eq!(token.full_start(), 1);
        assert_eq!(token.start(), 3);
        assert_eq!(token.end(), 6);
        assert_eq!(token.span, Span::new(3, 6));
    }

    #[test]
    fn test_token_without_trivia() {
        let token = Token::new(TokenKind::LeftAngle, "", "<", 0);
        assert_eq!(token.full_start(), 0);
        assert_eq!(token.start(), 0);
        assert_eq!(token.end(), 1);
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }
}
