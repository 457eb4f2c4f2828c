//! Tag tree for markup documents.
//!
//! The tree is built by an upstream parser and handed to the checker
//! read-only. Elements nest; each carries its delimiter tags as token
//! sequences, so every inter-token gap in the original source survives
//! verbatim and `to_source` reproduces the input exactly.

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// The three tag variants, decided once per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagKind {
    /// `<Foo>`
    Opening,
    /// `<Foo/>`
    SelfClosing,
    /// `</Foo>`
    Closing,
}

/// A single tag: an ordered, contiguous run of tokens from `<` to `>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,
    pub tokens: Vec<Token>,
}

impl Tag {
    pub fn new(kind: TagKind, tokens: Vec<Token>) -> Self {
        Self { kind, tokens }
    }

    /// Offset of the tag's first character (its `<`, not any indentation
    /// before it). Diagnostics are pinned here.
    pub fn start(&self) -> usize {
        self.tokens.first().map_or(0, Token::start)
    }

    /// Offset one past the tag's `>`.
    pub fn end(&self) -> usize {
        self.tokens.last().map_or(0, Token::end)
    }
}

/// An element: opening tag, children, and (unless self-closing) a closing
/// tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub open: Tag,
    pub children: Vec<Node>,
    pub close: Option<Tag>,
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    /// Raw text content between tags.
    Text(Token),
}

/// A complete document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Pre-order iterator over every tag: siblings in source order, an
    /// element's opening tag before its children, its closing tag after.
    pub fn tags(&self) -> Tags<'_> {
        let mut stack: Vec<Frame<'_>> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter().rev() {
            stack.push(Frame::Node(node));
        }
        Tags { stack }
    }

    /// Reconstruct the source text from tokens and trivia.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            render_node(node, &mut out);
        }
        out
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(token) => {
            out.push_str(&token.trivia);
            out.push_str(&token.text);
        }
        Node::Element(el) => {
            render_tag(&el.open, out);
            for child in &el.children {
                render_node(child, out);
            }
            if let Some(close) = &el.close {
                render_tag(close, out);
            }
        }
    }
}

fn render_tag(tag: &Tag, out: &mut String) {
    for token in &tag.tokens {
        out.push_str(&token.trivia);
        out.push_str(&token.text);
    }
}

enum Frame<'a> {
    Node(&'a Node),
    Tag(&'a Tag),
}

/// Lazy pre-order tag traversal, driven by an explicit stack.
pub struct Tags<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for Tags<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<&'a Tag> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Tag(tag) => return Some(tag),
                Frame::Node(Node::Text(_)) => {}
                Frame::Node(Node::Element(el)) => {
                    if let Some(close) = &el.close {
                        self.stack.push(Frame::Tag(close));
                    }
                    for child in el.children.iter().rev() {
                        self.stack.push(Frame::Node(child));
                    }
                    self.stack.push(Frame::Tag(&el.open));
                }
            }
        }
        None
    }
}
