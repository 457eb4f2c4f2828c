//! Diagnostics and the fixed message templates.

use std::fmt;

use serde::Serialize;

use crate::fix::Fix;

/// The ten message templates, keyed by boundary context and direction.
/// Closing-slash counts once per tag context (`/>` on self-closing tags,
/// `</` on closing tags).
pub mod messages {
    pub const CLOSING_SLASH_SELF_NEVER: &str =
        "whitespace is forbidden between `/` and `>`; write `/>`";
    pub const CLOSING_SLASH_SELF_ALWAYS: &str =
        "whitespace is required between `/` and `>`; write `/ >`";
    pub const CLOSING_SLASH_CLOSING_NEVER: &str =
        "whitespace is forbidden between `<` and `/`; write `</`";
    pub const CLOSING_SLASH_CLOSING_ALWAYS: &str =
        "whitespace is required between `<` and `/`; write `< /`";
    pub const BEFORE_SELF_CLOSING_NEVER: &str =
        "a space is forbidden before the self-closing `/`";
    pub const BEFORE_SELF_CLOSING_ALWAYS: &str =
        "a space is required before the self-closing `/`";
    pub const AFTER_OPENING_NEVER: &str = "a space is forbidden after the opening bracket";
    pub const AFTER_OPENING_ALWAYS: &str = "a space is required after the opening bracket";
    pub const BEFORE_CLOSING_NEVER: &str =
        "a space is forbidden before the closing bracket";
    pub const BEFORE_CLOSING_ALWAYS: &str =
        "a space is required before the closing bracket";
}

/// One style violation, pinned to its tag's start offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub offset: usize,
    pub len: usize,
    pub message: &'static str,
    /// A ready-to-apply edit, when a deterministic single edit exists.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub(crate) fn new(offset: usize, message: &'static str, fix: Option<Fix>) -> Self {
        Self {
            offset,
            len: 1,
            message,
            fix,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}", self.offset, self.message)
    }
}
