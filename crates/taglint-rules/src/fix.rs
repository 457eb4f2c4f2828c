//! Fix synthesis and single-edit application.

use serde::Serialize;
use taglint_syntax::Span;

use crate::gap::Adjacency;

/// A minimal textual edit resolving exactly one violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fix {
    /// Delete the text in `span`.
    Delete { span: Span },
    /// Insert a single space at `offset`.
    InsertSpace { offset: usize },
}

impl Fix {
    /// Apply this edit to `source`.
    ///
    /// One fix resolves one boundary; composing several is the external
    /// applier's concern (apply in descending offset order — spans of
    /// distinct boundaries never overlap).
    pub fn apply(&self, source: &str) -> String {
        match self {
            Fix::Delete { span } => {
                let mut out = String::with_capacity(source.len() - span.len());
                out.push_str(&source[..span.start]);
                out.push_str(&source[span.end..]);
                out
            }
            Fix::InsertSpace { offset } => {
                let mut out = String::with_capacity(source.len() + 1);
                out.push_str(&source[..*offset]);
                out.push(' ');
                out.push_str(&source[*offset..]);
                out
            }
        }
    }

    /// The offset the edit takes effect at, for ordering by the applier.
    pub fn offset(&self) -> usize {
        match self {
            Fix::Delete { span } => span.start,
            Fix::InsertSpace { offset } => *offset,
        }
    }
}

/// The gap state a policy demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Desired {
    /// `never`: the tokens must touch.
    NoGap,
    /// `always`: some gap must exist; one space is inserted when absent.
    SingleSpace,
}

/// Synthesize the edit that moves `adjacency` to the desired state, or
/// nothing when it already complies.
///
/// A delete spans the whole gap so that re-validation after applying
/// cannot flag the boundary again; an insert fires only on true absence.
pub(crate) fn synthesize(adjacency: &Adjacency<'_>, desired: Desired) -> Option<Fix> {
    let gap = adjacency.gap();
    match desired {
        Desired::NoGap if gap.present => Some(Fix::Delete { span: gap.span }),
        Desired::SingleSpace if !gap.present => Some(Fix::InsertSpace {
            offset: adjacency.earlier.end(),
        }),
        _ => None,
    }
}
