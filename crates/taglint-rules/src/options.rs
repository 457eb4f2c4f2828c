//! Option resolution for the four boundary policies.
//!
//! Host tooling supplies a [`RawOptions`] record (four optional string
//! fields, typically deserialized from its own config format); resolution
//! validates each value against its enum and defaults missing fields to
//! `allow`. Invalid values fail resolution before any traversal begins.

use serde::Deserialize;

use crate::OptionsError;

/// Spacing policy for one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// A gap is required.
    Always,
    /// A gap is forbidden.
    Never,
    /// The boundary is unchecked.
    Allow,
}

/// Spacing policy for the after-opening boundary, which additionally
/// tolerates a lone line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterOpening {
    Always,
    Never,
    Allow,
    /// Like `Never`, but no gap, a single space, and a lone line break
    /// are all compliant.
    AllowMultiline,
}

/// Unvalidated configuration as host tooling supplies it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RawOptions {
    pub closing_slash: Option<String>,
    pub before_self_closing: Option<String>,
    pub after_opening: Option<String>,
    pub before_closing: Option<String>,
}

/// Resolved per-boundary policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub closing_slash: Policy,
    pub before_self_closing: Policy,
    pub after_opening: AfterOpening,
    pub before_closing: Policy,
}

impl Default for Options {
    /// Every boundary unchecked.
    fn default() -> Self {
        Self {
            closing_slash: Policy::Allow,
            before_self_closing: Policy::Allow,
            after_opening: AfterOpening::Allow,
            before_closing: Policy::Allow,
        }
    }
}

impl Options {
    /// Validate and default the four policy fields.
    pub fn resolve(raw: &RawOptions) -> Result<Self, OptionsError> {
        Ok(Self {
            closing_slash: policy("closingSlash", raw.closing_slash.as_deref())?,
            before_self_closing: policy(
                "beforeSelfClosing",
                raw.before_self_closing.as_deref(),
            )?,
            after_opening: after_opening("afterOpening", raw.after_opening.as_deref())?,
            before_closing: policy("beforeClosing", raw.before_closing.as_deref())?,
        })
    }
}

fn policy(field: &'static str, value: Option<&str>) -> Result<Policy, OptionsError> {
    match value {
        None | Some("allow") => Ok(Policy::Allow),
        Some("always") => Ok(Policy::Always),
        Some("never") => Ok(Policy::Never),
        Some(other) => Err(OptionsError {
            field,
            value: other.to_string(),
            expected: "`always`, `never`, `allow`",
        }),
    }
}

fn after_opening(
    field: &'static str,
    value: Option<&str>,
) -> Result<AfterOpening, OptionsError> {
    match value {
        None | Some("allow") => Ok(AfterOpening::Allow),
        Some("always") => Ok(AfterOpening::Always),
        Some("never") => Ok(AfterOpening::Never),
        Some("allow-multiline") => Ok(AfterOpening::AllowMultiline),
        Some(other) => Err(OptionsError {
            field,
            value: other.to_string(),
            expected: "`always`, `never`, `allow`, `allow-multiline`",
        }),
    }
}
