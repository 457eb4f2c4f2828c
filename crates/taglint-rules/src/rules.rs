//! Boundary validators and the check entry point.
//!
//! Each validator locates one token adjacency from a tag's shape, asks
//! the classifier about the gap, and turns the synthesized edit (if any)
//! into a diagnostic. `check` drives them across the whole tree in
//! pre-order; a tag can produce up to four independent diagnostics and a
//! violation never stops the traversal.

use taglint_syntax::{Document, ShapeError, Span, Tag, TagKind, TagShape};

use crate::diagnostic::{messages, Diagnostic};
use crate::fix::{synthesize, Desired, Fix};
use crate::gap::Adjacency;
use crate::options::{AfterOpening, Options, Policy};

/// Check every tag in `doc` against the resolved options.
///
/// Diagnostics come back in traversal order. The only error is a
/// malformed tag in the upstream tree; style violations are data, not
/// errors.
pub fn check(doc: &Document, options: &Options) -> Result<Vec<Diagnostic>, ShapeError> {
    let mut diagnostics = Vec::new();
    for tag in doc.tags() {
        check_tag(tag, options, &mut diagnostics)?;
    }
    Ok(diagnostics)
}

/// Run the validators that apply to one tag, appending any diagnostics.
pub fn check_tag(
    tag: &Tag,
    options: &Options,
    out: &mut Vec<Diagnostic>,
) -> Result<(), ShapeError> {
    let shape = tag.shape()?;
    match tag.kind {
        TagKind::Opening => {
            out.extend(after_opening(tag, &shape, options.after_opening));
            out.extend(before_closing(tag, &shape, options.before_closing));
        }
        TagKind::SelfClosing => {
            out.extend(closing_slash(tag, &shape, options.closing_slash));
            out.extend(after_opening(tag, &shape, options.after_opening));
            out.extend(before_self_closing(
                tag,
                &shape,
                options.before_self_closing,
            ));
            out.extend(before_closing(tag, &shape, options.before_closing));
        }
        TagKind::Closing => {
            out.extend(after_opening(tag, &shape, options.after_opening));
            out.extend(closing_slash(tag, &shape, options.closing_slash));
            out.extend(before_closing(tag, &shape, options.before_closing));
        }
    }
    Ok(())
}

/// Classify one adjacency against a `never`/`always` policy and report
/// with the matching message when an edit is needed.
fn enforce(
    tag: &Tag,
    adjacency: &Adjacency<'_>,
    policy: Policy,
    never_message: &'static str,
    always_message: &'static str,
) -> Option<Diagnostic> {
    let (desired, message) = match policy {
        Policy::Never => (Desired::NoGap, never_message),
        Policy::Always => (Desired::SingleSpace, always_message),
        Policy::Allow => return None,
    };
    let fix = synthesize(adjacency, desired)?;
    Some(Diagnostic::new(tag.start(), message, Some(fix)))
}

/// The `/>` gap on self-closing tags and the `</` gap on closing tags.
fn closing_slash(tag: &Tag, shape: &TagShape<'_>, policy: Policy) -> Option<Diagnostic> {
    let slash = shape.closing_slash?;
    let (adjacency, never_message, always_message) = match tag.kind {
        TagKind::SelfClosing => (
            Adjacency::new(slash, shape.close_bracket),
            messages::CLOSING_SLASH_SELF_NEVER,
            messages::CLOSING_SLASH_SELF_ALWAYS,
        ),
        TagKind::Closing => (
            Adjacency::new(shape.open_bracket, slash),
            messages::CLOSING_SLASH_CLOSING_NEVER,
            messages::CLOSING_SLASH_CLOSING_ALWAYS,
        ),
        TagKind::Opening => return None,
    };
    enforce(tag, &adjacency, policy, never_message, always_message)
}

/// The gap before a self-closing tag's `/` — after the last attribute
/// token, or after the tag name when there are no attributes.
fn before_self_closing(
    tag: &Tag,
    shape: &TagShape<'_>,
    policy: Policy,
) -> Option<Diagnostic> {
    let slash = shape.closing_slash?;
    let before = shape.before_slash?;
    enforce(
        tag,
        &Adjacency::new(before, slash),
        policy,
        messages::BEFORE_SELF_CLOSING_NEVER,
        messages::BEFORE_SELF_CLOSING_ALWAYS,
    )
}

/// The gap between the bracket that precedes the tag name and the name
/// itself: `<`→name on opening and self-closing tags, `/`→name on
/// closing tags.
fn after_opening(
    tag: &Tag,
    shape: &TagShape<'_>,
    policy: AfterOpening,
) -> Option<Diagnostic> {
    let earlier = match tag.kind {
        TagKind::Closing => shape.closing_slash?,
        TagKind::Opening | TagKind::SelfClosing => shape.open_bracket,
    };
    let adjacency = Adjacency::new(earlier, shape.name);
    match policy {
        AfterOpening::Allow => None,
        AfterOpening::Never => enforce(
            tag,
            &adjacency,
            Policy::Never,
            messages::AFTER_OPENING_NEVER,
            messages::AFTER_OPENING_ALWAYS,
        ),
        AfterOpening::Always => enforce(
            tag,
            &adjacency,
            Policy::Always,
            messages::AFTER_OPENING_NEVER,
            messages::AFTER_OPENING_ALWAYS,
        ),
        AfterOpening::AllowMultiline => allow_multiline(tag, &adjacency),
    }
}

/// `allow-multiline` compliance: no gap, a single space, or a lone line
/// break. Anything else is a violation, fixed only when one delete
/// normalizes it.
fn allow_multiline(tag: &Tag, adjacency: &Adjacency<'_>) -> Option<Diagnostic> {
    if matches!(adjacency.trivia(), "" | " " | "\n" | "\r\n") {
        return None;
    }
    Some(Diagnostic::new(
        tag.start(),
        messages::AFTER_OPENING_NEVER,
        normalize_multiline(adjacency),
    ))
}

/// A single-delete normalization for a violating multiline gap, when one
/// exists: a line break with trailing indentation keeps the break; a gap
/// with no break at all collapses entirely. Comment-bearing and
/// multi-break gaps have no safe single edit.
fn normalize_multiline(adjacency: &Adjacency<'_>) -> Option<Fix> {
    let trivia = adjacency.trivia();
    let span = adjacency.span();
    if !adjacency.gap().multiline {
        if trivia.chars().all(|c| c == ' ' || c == '\t') {
            return Some(Fix::Delete { span });
        }
        return None;
    }
    let rest = trivia
        .strip_prefix("\r\n")
        .or_else(|| trivia.strip_prefix('\n'))?;
    if !rest.is_empty() && rest.chars().all(|c| c == ' ' || c == '\t') {
        let break_len = trivia.len() - rest.len();
        return Some(Fix::Delete {
            span: Span::new(span.start + break_len, span.end),
        });
    }
    None
}

/// The gap before a tag's `>`. Self-closing tags are exempt: their
/// pre-bracket gap is the `/`→`>` gap, owned by closing-slash.
fn before_closing(tag: &Tag, shape: &TagShape<'_>, policy: Policy) -> Option<Diagnostic> {
    if tag.kind == TagKind::SelfClosing {
        return None;
    }
    enforce(
        tag,
        &Adjacency::new(shape.before_close, shape.close_bracket),
        policy,
        messages::BEFORE_CLOSING_NEVER,
        messages::BEFORE_CLOSING_ALWAYS,
    )
}
