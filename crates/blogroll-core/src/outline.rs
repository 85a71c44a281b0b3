//! Outline-format parsing — raw export XML into a linear event sequence.
//!
//! The export document nests every real feed and folder under a fixed
//! wrapper element three levels deep (`opml` → `body` → `outline
//! title="Subscriptions"`). That depth is a structural property of the
//! remote export format, not a general OPML rule, so it lives here as the
//! named constant [`SUBSCRIPTIONS_DEPTH`] rather than as inferred logic.
//!
//! Only `<outline>` elements are meaningful; text, CDATA, comments, and
//! every other tag are skipped — but every element still counts toward the
//! depth so that an outline's depth equals its 1-based nesting level in the
//! document.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;

/// Nesting level of the synthetic wrapper element under which the remote
/// service places the whole subscription tree.
pub const SUBSCRIPTIONS_DEPTH: usize = 3;

/// Title of the wrapper element.
pub const SUBSCRIPTIONS_TITLE: &str = "Subscriptions";

const OUTLINE_TAG: &[u8] = b"outline";

/// The four attributes the outline format carries per element, with absent
/// attributes normalised to empty strings. Attribute names are matched
/// ASCII-case-insensitively; real exports vary between `htmlUrl` and
/// `HTMLURL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineAttrs {
    /// `TITLE` — display name of the feed or folder.
    pub title: String,
    /// `HTMLURL` — the site the feed belongs to.
    pub html_url: String,
    /// `XMLURL` — the feed document itself.
    pub xml_url: String,
    /// `TYPE` — the feed type tag (`rss` in practice).
    pub kind: String,
}

/// One parse event for an `<outline>` element, in document order.
///
/// `depth` is the element's 1-based nesting level counting every ancestor
/// element, outline or not (document root = 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEvent {
    /// `<outline ...>` with children to follow.
    Open { depth: usize, attrs: OutlineAttrs },
    /// `</outline>`. Carries no attributes.
    Close { depth: usize },
    /// A self-closing `<outline ... />` — always a leaf subscription.
    Complete { depth: usize, attrs: OutlineAttrs },
}

impl OutlineEvent {
    /// The event's nesting depth.
    pub fn depth(&self) -> usize {
        match self {
            OutlineEvent::Open { depth, .. }
            | OutlineEvent::Close { depth }
            | OutlineEvent::Complete { depth, .. } => *depth,
        }
    }
}

/// A node of the parsed outline tree. Folders carry children; leaf
/// subscriptions have none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineNode {
    pub attrs: OutlineAttrs,
    pub children: Vec<OutlineNode>,
}

/// Parse raw outline text into the linear event sequence.
///
/// Fails with [`ParseError`] on the first structural error — no partial
/// output.
pub fn parse_events(raw: &str) -> Result<Vec<OutlineEvent>, ParseError> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut events = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if is_outline(e.name().as_ref()) {
                    events.push(OutlineEvent::Open {
                        depth,
                        attrs: read_attrs(&e)?,
                    });
                }
            }
            Event::End(e) => {
                if is_outline(e.name().as_ref()) {
                    events.push(OutlineEvent::Close { depth });
                }
                depth = depth.saturating_sub(1);
            }
            Event::Empty(e) => {
                if is_outline(e.name().as_ref()) {
                    events.push(OutlineEvent::Complete {
                        depth: depth + 1,
                        attrs: read_attrs(&e)?,
                    });
                }
            }
            Event::Eof => break,
            // Text, CDATA, comments, declarations, PIs: depth-neutral, skipped.
            _ => {}
        }
    }

    Ok(events)
}

/// Parse raw outline text into a recursive node tree.
///
/// The event walk in [`format_events`](crate::format::format_events) never
/// needs the tree; this is for programmatic consumers that want to inspect
/// the subscription structure directly.
pub fn parse_tree(raw: &str) -> Result<Vec<OutlineNode>, ParseError> {
    let mut roots = Vec::new();
    let mut stack: Vec<OutlineNode> = Vec::new();

    for event in parse_events(raw)? {
        match event {
            OutlineEvent::Open { attrs, .. } => stack.push(OutlineNode {
                attrs,
                children: Vec::new(),
            }),
            OutlineEvent::Complete { attrs, .. } => {
                let leaf = OutlineNode {
                    attrs,
                    children: Vec::new(),
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(leaf),
                    None => roots.push(leaf),
                }
            }
            OutlineEvent::Close { .. } => {
                // Well-formedness is already enforced by the XML reader, so
                // every Close pairs with an Open on the stack.
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => roots.push(done),
                    }
                }
            }
        }
    }

    Ok(roots)
}

fn is_outline(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(OUTLINE_TAG)
}

fn read_attrs(e: &BytesStart<'_>) -> Result<OutlineAttrs, ParseError> {
    let mut attrs = OutlineAttrs::default();
    for attr in e.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        let value = attr
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();
        if key.eq_ignore_ascii_case(b"title") {
            attrs.title = value;
        } else if key.eq_ignore_ascii_case(b"htmlurl") {
            attrs.html_url = value;
        } else if key.eq_ignore_ascii_case(b"xmlurl") {
            attrs.xml_url = value;
        } else if key.eq_ignore_ascii_case(b"type") {
            attrs.kind = value;
        }
    }
    Ok(attrs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
