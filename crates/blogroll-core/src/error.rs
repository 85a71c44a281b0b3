//! Parse errors for the outline format.

use thiserror::Error;

/// Malformed outline text. The parser never produces partial output: the
/// first structural error fails the whole parse so the caller can render a
/// fallback instead of a half-built list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed outline XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed outline attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}
