//! WASM bindings for the taglint checker.
//!
//! Exposes `check()` to JavaScript via wasm-bindgen. The host passes a
//! serialized tag tree and a raw options record; diagnostics come back as
//! a JS array. Throws on invalid options or a malformed tree.

use wasm_bindgen::prelude::*;

use taglint_rules::{Options, RawOptions};
use taglint_syntax::Document;

/// Check a tag tree against a spacing configuration.
///
/// `tree` is a serialized `Document`; `options` is an object with up to
/// four policy fields (`closingSlash`, `beforeSelfClosing`,
/// `afterOpening`, `beforeClosing`). Returns an array of
/// `{ offset, len, message, fix }` diagnostics.
#[wasm_bindgen]
pub fn check(tree: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let doc: Document =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    let raw: RawOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?;

    let resolved = Options::resolve(&raw).map_err(|e| JsError::new(&e.to_string()))?;
    let diagnostics =
        taglint_rules::check(&doc, &resolved).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&diagnostics).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the checker version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use taglint_rules::Policy;
    use taglint_syntax::{Element, Node, TagBuilder, TagKind, TokenKind};

    // =========================================================================
    // Native tests (non-WASM) — verify the serialized pipeline works
    // =========================================================================

    fn self_closing_doc() -> Document {
        // `<Foo/ >`
        let tag = TagBuilder::new(TagKind::SelfClosing, 0)
            .token(TokenKind::LeftAngle, "<")
            .token(TokenKind::Name, "Foo")
            .token(TokenKind::Slash, "/")
            .trivia(" ")
            .token(TokenKind::RightAngle, ">")
            .build();
        Document::new(vec![Node::Element(Element {
            open: tag,
            children: Vec::new(),
            close: None,
        })])
    }

    #[test]
    fn test_document_survives_json_round_trip() {
        let doc = self_closing_doc();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_pipeline_over_deserialized_tree() {
        // The same path `check()` takes, minus the JsValue hops.
        let json = serde_json::to_string(&self_closing_doc()).unwrap();
        let doc: Document = serde_json::from_str(&json).unwrap();

        let raw: RawOptions =
            serde_json::from_str(r#"{"closingSlash": "never"}"#).unwrap();
        let resolved = Options::resolve(&raw).unwrap();
        assert_eq!(resolved.closing_slash, Policy::Never);

        let diagnostics = taglint_rules::check(&doc, &resolved).unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert!(serde_json::to_string(&diagnostics).unwrap().contains("offset"));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let raw: RawOptions =
            serde_json::from_str(r#"{"beforeClosing": "perhaps"}"#).unwrap();
        assert!(Options::resolve(&raw).is_err());
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }
}
