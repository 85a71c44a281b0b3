//! The formatter walk — outline events to concatenated markup.
//!
//! The walk keeps no explicit stack; the depth carried on each event is all
//! the structure it needs. The wrapper element is recognised on open by
//! depth *and* title, but on close by depth alone — the close event carries
//! no attributes, and the export format never places another outline at the
//! wrapper depth.

use crate::error::ParseError;
use crate::outline::{parse_events, OutlineAttrs, OutlineEvent, SUBSCRIPTIONS_DEPTH, SUBSCRIPTIONS_TITLE};
use crate::template::{expand, TemplateSet};

/// Render a parsed event sequence with the given templates.
pub fn format_events(events: &[OutlineEvent], templates: &TemplateSet) -> String {
    let no_attrs = OutlineAttrs::default();
    let mut out = String::new();

    for event in events {
        match event {
            OutlineEvent::Open { depth, attrs } => {
                if *depth == SUBSCRIPTIONS_DEPTH && attrs.title == SUBSCRIPTIONS_TITLE {
                    out.push_str(&expand(&templates.begin_list, attrs));
                } else {
                    out.push_str(&expand(&templates.begin_group, attrs));
                }
            }
            OutlineEvent::Close { depth } => {
                if *depth == SUBSCRIPTIONS_DEPTH {
                    out.push_str(&expand(&templates.end_list, &no_attrs));
                } else {
                    out.push_str(&expand(&templates.end_group, &no_attrs));
                }
            }
            OutlineEvent::Complete { attrs, .. } => {
                out.push_str(&expand(&templates.begin_item, attrs));
                out.push_str(&expand(&templates.end_item, attrs));
            }
        }
    }

    out
}

/// Parse raw outline text and render it in one call.
pub fn render_outline(raw: &str, templates: &TemplateSet) -> Result<String, ParseError> {
    Ok(format_events(&parse_events(raw)?, templates))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
