//! Test support: builds fixture trees from literal tag source.
//!
//! The shipped library never parses — the tree is an input. This minimal
//! reader exists so the scenario tests can be written against real source
//! text and re-checked after applying fixes.

use taglint_rules::{Diagnostic, Fix};
use taglint_syntax::{Document, Element, Node, Tag, TagKind, Token, TokenKind};

/// Read a snippet of tag source into a document.
pub fn document(source: &str) -> Document {
    Reader { source, pos: 0 }.read_document()
}

/// Apply every fix in `diagnostics` to `source`, descending by offset so
/// earlier spans stay valid.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut fixes: Vec<Fix> = diagnostics.iter().filter_map(|d| d.fix).collect();
    fixes.sort_by_key(|fix| std::cmp::Reverse(fix.offset()));
    let mut out = source.to_string();
    for fix in fixes {
        out = fix.apply(&out);
    }
    out
}

struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl Reader<'_> {
    fn read_document(&mut self) -> Document {
        let mut stack: Vec<(Tag, Vec<Node>)> = Vec::new();
        let mut top: Vec<Node> = Vec::new();

        while self.pos < self.source.len() {
            if self.peek() == Some('<') {
                let tag = self.read_tag();
                match tag.kind {
                    TagKind::Opening => stack.push((tag, Vec::new())),
                    TagKind::SelfClosing => {
                        let element = Element {
                            open: tag,
                            children: Vec::new(),
                            close: None,
                        };
                        push(&mut stack, &mut top, Node::Element(element));
                    }
                    TagKind::Closing => {
                        let element = match stack.pop() {
                            Some((open, children)) => Element {
                                open,
                                children,
                                close: Some(tag),
                            },
                            // A closing tag with no matching opening tag:
                            // surface it as a standalone node so it still
                            // traverses as one closing tag.
                            None => Element {
                                open: tag,
                                children: Vec::new(),
                                close: None,
                            },
                        };
                        push(&mut stack, &mut top, Node::Element(element));
                    }
                }
            } else {
                let start = self.pos;
                while self.pos < self.source.len() && self.peek() != Some('<') {
                    self.advance();
                }
                let text = &self.source[start..self.pos];
                let token = Token::new(TokenKind::Text, "", text, start);
                push(&mut stack, &mut top, Node::Text(token));
            }
        }

        assert!(stack.is_empty(), "unclosed opening tag");
        Document::new(top)
    }

    fn read_tag(&mut self) -> Tag {
        let mut tokens = Vec::new();
        let open_at = self.pos;
        self.advance(); // consume `<`
        tokens.push(Token::new(TokenKind::LeftAngle, "", "<", open_at));

        let mut seen_name = false;
        loop {
            let full_start = self.pos;
            while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
                self.advance();
            }
            let trivia = &self.source[full_start..self.pos];

            match self.peek().expect("unterminated tag") {
                '>' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::RightAngle, trivia, ">", full_start));
                    break;
                }
                '/' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Slash, trivia, "/", full_start));
                }
                '=' => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Equals, trivia, "=", full_start));
                }
                '"' => {
                    let start = self.pos;
                    self.advance();
                    while self.peek().expect("unterminated attribute value") != '"' {
                        self.advance();
                    }
                    self.advance();
                    let text = &self.source[start..self.pos];
                    tokens.push(Token::new(TokenKind::AttrValue, trivia, text, full_start));
                }
                _ => {
                    let start = self.pos;
                    while matches!(
                        self.peek(),
                        Some(c) if !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '=' | '"')
                    ) {
                        self.advance();
                    }
                    let kind = if seen_name {
                        TokenKind::AttrName
                    } else {
                        TokenKind::Name
                    };
                    seen_name = true;
                    let text = &self.source[start..self.pos];
                    tokens.push(Token::new(kind, trivia, text, full_start));
                }
            }
        }

        let kind = if tokens.get(1).is_some_and(|t| t.kind == TokenKind::Slash) {
            TagKind::Closing
        } else if tokens[tokens.len() - 2].kind == TokenKind::Slash {
            TagKind::SelfClosing
        } else {
            TagKind::Opening
        };
        Tag::new(kind, tokens)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

fn push(stack: &mut Vec<(Tag, Vec<Node>)>, top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some((_, children)) => children.push(node),
        None => top.push(node),
    }
}
