//! Static outline-format corpora used across harnesses.
//!
//! Every corpus is shaped like a real export document: an `opml` root, a
//! `head` the parser must ignore, and the whole subscription tree nested
//! under the depth-3 `Subscriptions` wrapper. Leaf feeds are self-closing
//! elements; folders use explicit open/close tags.

/// One folder, one feed — the canonical round-trip fixture.
pub const OPML_BASIC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="1.0">
  <head>
    <title>Subscriptions export</title>
  </head>
  <body>
    <outline title="Subscriptions">
      <outline title="News">
        <outline title="BBC" htmlUrl="http://bbc.com" type="rss" xmlUrl="http://bbc.com/rss" />
      </outline>
    </outline>
  </body>
</opml>"#;

/// Expected unordered-list rendering of [`OPML_BASIC`].
pub const EXPECTED_BASIC_UL: &str =
    r#"<ul><li>News<ul><li><a href="http://bbc.com">BBC</a></li></ul></li></ul>"#;

/// The wrapper with no subscriptions at all. Written with explicit
/// open/close tags: a self-closing wrapper would be a leaf, not a list.
pub const OPML_EMPTY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="1.0">
  <head>
    <title>Subscriptions export</title>
  </head>
  <body>
    <outline title="Subscriptions"></outline>
  </body>
</opml>"#;

/// Feeds directly under the wrapper, no folders.
pub const OPML_FLAT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="1.0">
  <body>
    <outline title="Subscriptions">
      <outline title="Daily" htmlUrl="http://daily.example" type="rss" xmlUrl="http://daily.example/rss" />
      <outline title="Weekly" htmlUrl="http://weekly.example" type="rss" xmlUrl="http://weekly.example/rss" />
    </outline>
  </body>
</opml>"#;

/// Two folders plus a loose feed, with an entity-escaped folder title.
pub const OPML_MULTI: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="1.0">
  <head>
    <title>Subscriptions export</title>
  </head>
  <body>
    <outline title="Subscriptions">
      <outline title="News &amp; Politics">
        <outline title="BBC" htmlUrl="http://bbc.com" type="rss" xmlUrl="http://bbc.com/rss" />
        <outline title="Reuters" htmlUrl="http://reuters.com" type="rss" xmlUrl="http://reuters.com/rss" />
      </outline>
      <outline title="Code">
        <outline title="Planet" htmlUrl="http://planet.example" type="rss" xmlUrl="http://planet.example/atom" />
      </outline>
      <outline title="Daily" htmlUrl="http://daily.example" type="rss" xmlUrl="http://daily.example/rss" />
    </outline>
  </body>
</opml>"#;

/// Same structure as [`OPML_BASIC`] with shouting tag and attribute names,
/// the way legacy exports sometimes arrive.
pub const OPML_UPPERCASE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<OPML version="1.0">
  <BODY>
    <OUTLINE TITLE="Subscriptions">
      <OUTLINE TITLE="News">
        <OUTLINE TITLE="BBC" HTMLURL="http://bbc.com" TYPE="rss" XMLURL="http://bbc.com/rss" />
      </OUTLINE>
    </OUTLINE>
  </BODY>
</OPML>"#;

/// Truncated mid-tag, the way a dropped connection leaves a body.
pub const OPML_TRUNCATED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<opml version="1.0">
  <body>
    <outline title="Subscriptions">
      <outline title="News"#;

/// Close tag that matches nothing.
pub const OPML_MISMATCHED: &str =
    r#"<opml><body><outline title="Subscriptions"></wrong></body></opml>"#;

/// Not outline XML at all — a truncated error page, the kind of body a
/// failing endpoint leaves in the cache.
pub const NOT_XML: &str = "<html><body><h1>503 Service Unavailable</h1></body></htm";
