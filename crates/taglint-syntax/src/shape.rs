//! Named token accessors for the three tag shapes.
//!
//! Validators never index into a tag's token list directly; the shape is
//! computed once per tag, validating token counts and delimiter kinds up
//! front. A tag that does not fit its declared variant is a defect in the
//! upstream tree and surfaces as a [`ShapeError`].

use crate::token::{Token, TokenKind};
use crate::tree::{Tag, TagKind};
use crate::ShapeError;

/// The boundary-relevant tokens of one tag.
///
/// `closing_slash` is the `/` of a self-closing or closing tag;
/// `before_slash` is the token preceding a self-closing `/` (the last
/// attribute token, or the tag name when there are no attributes).
#[derive(Debug, Clone, Copy)]
pub struct TagShape<'a> {
    pub open_bracket: &'a Token,
    pub name: &'a Token,
    pub closing_slash: Option<&'a Token>,
    pub before_slash: Option<&'a Token>,
    pub before_close: &'a Token,
    pub close_bracket: &'a Token,
}

impl Tag {
    /// Resolve this tag's shape, failing loudly on a malformed token
    /// layout rather than guessing an adjacency.
    pub fn shape(&self) -> Result<TagShape<'_>, ShapeError> {
        TagShape::of(self)
    }
}

impl<'a> TagShape<'a> {
    pub fn of(tag: &'a Tag) -> Result<Self, ShapeError> {
        let min = match tag.kind {
            TagKind::Opening => 3,
            TagKind::SelfClosing | TagKind::Closing => 4,
        };
        let len = tag.tokens.len();
        if len < min {
            return Err(ShapeError {
                message: format!(
                    "{} tag needs at least {min} tokens, found {len}",
                    kind_name(tag.kind)
                ),
                offset: tag.start(),
            });
        }

        let open_bracket = expect(&tag.tokens[0], TokenKind::LeftAngle, "`<`")?;
        let close_bracket = expect(&tag.tokens[len - 1], TokenKind::RightAngle, "`>`")?;

        match tag.kind {
            TagKind::Opening => Ok(Self {
                open_bracket,
                name: expect(&tag.tokens[1], TokenKind::Name, "tag name after `<`")?,
                closing_slash: None,
                before_slash: None,
                before_close: &tag.tokens[len - 2],
                close_bracket,
            }),
            TagKind::SelfClosing => {
                let slash = expect(
                    &tag.tokens[len - 2],
                    TokenKind::Slash,
                    "`/` before the end bracket",
                )?;
                Ok(Self {
                    open_bracket,
                    name: expect(&tag.tokens[1], TokenKind::Name, "tag name after `<`")?,
                    closing_slash: Some(slash),
                    before_slash: Some(&tag.tokens[len - 3]),
                    // The token before a self-closing tag's `>` is its `/`.
                    before_close: slash,
                    close_bracket,
                })
            }
            TagKind::Closing => Ok(Self {
                open_bracket,
                name: expect(&tag.tokens[2], TokenKind::Name, "tag name after `</`")?,
                closing_slash: Some(expect(
                    &tag.tokens[1],
                    TokenKind::Slash,
                    "`/` after `<`",
                )?),
                before_slash: None,
                before_close: &tag.tokens[len - 2],
                close_bracket,
            }),
        }
    }
}

fn expect<'a>(
    token: &'a Token,
    kind: TokenKind,
    what: &str,
) -> Result<&'a Token, ShapeError> {
    if token.kind == kind {
        Ok(token)
    } else {
        Err(ShapeError {
            message: format!("expected {what}, found {:?}", token.kind),
            offset: token.start(),
        })
    }
}

fn kind_name(kind: TagKind) -> &'static str {
    match kind {
        TagKind::Opening => "an opening",
        TagKind::SelfClosing => "a self-closing",
        TagKind::Closing => "a closing",
    }
}
