//! Markup templates and placeholder substitution.
//!
//! A [`TemplateSet`] is six format strings, one per structural emission of
//! the formatter walk. Placeholders are substituted from a fixed set of
//! named fields — `{title}`, `{url}`, `{type}`, `{feedUrl}` — in a single
//! left-to-right scan. An expanded value is never re-scanned, and anything
//! that is not one of the four known placeholders is copied through
//! verbatim.

use crate::outline::OutlineAttrs;

/// The six markup fragments a render emits, with `{title}` / `{url}` /
/// `{type}` / `{feedUrl}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Opens the whole subscription list.
    pub begin_list: String,
    /// Closes the whole subscription list.
    pub end_list: String,
    /// Opens a folder/category node.
    pub begin_group: String,
    /// Closes a folder/category node.
    pub end_group: String,
    /// Emitted for a leaf subscription, immediately followed by `end_item`.
    pub begin_item: String,
    /// Emitted right after `begin_item`.
    pub end_item: String,
}

impl TemplateSet {
    /// The built-in unordered-list preset: `<ul>`/`</ul>` wrapping with
    /// `<li>` folders and linked items.
    pub fn unordered_list() -> Self {
        Self {
            begin_list: "<ul>".to_string(),
            end_list: "</ul>".to_string(),
            begin_group: "<li>{title}<ul>".to_string(),
            end_group: "</ul></li>".to_string(),
            begin_item: r#"<li><a href="{url}">{title}</a></li>"#.to_string(),
            end_item: String::new(),
        }
    }
}

/// Which template set a render uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFormat {
    /// The built-in `<ul>`-based preset.
    UnorderedList,
    /// A caller-supplied template set.
    Custom(TemplateSet),
}

impl RenderFormat {
    /// Resolve to the concrete template set.
    pub fn templates(self) -> TemplateSet {
        match self {
            RenderFormat::UnorderedList => TemplateSet::unordered_list(),
            RenderFormat::Custom(templates) => templates,
        }
    }
}

/// Expand the placeholders in `template` from `attrs`.
///
/// Missing attributes substitute as empty strings. Unrecognized
/// placeholders and unmatched braces pass through untouched.
pub fn expand(template: &str, attrs: &OutlineAttrs) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            // No closing brace anywhere: the remainder is literal.
            out.push_str(tail);
            return out;
        };
        match field(attrs, &tail[1..close]) {
            Some(value) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                // Unknown name: keep the brace literal and rescan after it.
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn field<'a>(attrs: &'a OutlineAttrs, name: &str) -> Option<&'a str> {
    match name {
        "title" => Some(&attrs.title),
        "url" => Some(&attrs.html_url),
        "type" => Some(&attrs.kind),
        "feedUrl" => Some(&attrs.xml_url),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
