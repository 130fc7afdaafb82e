// ABOUTME: Renders a PodcastDocument to XML with quick-xml.
// ABOUTME: Blocks present in the tree are always written; empty optional scalars are skipped.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::document::{podcast_document, PodcastDocument};
use crate::error::FeedError;
use crate::models::Feed;
use crate::podcast::{PodcastChannel, PodcastItem};

/// Output settings for the XML renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level; 0 writes everything on one line.
    pub indent: usize,
    /// Whether to start with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.indent = spaces;
        self
    }

    /// Disable indentation.
    pub fn compact(self) -> Self {
        self.indent(0)
    }

    /// Emit or skip the XML declaration.
    pub fn xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}

/// Maps a feed and renders it in one step.
pub fn to_podcast_xml(feed: &Feed, opts: &RenderOptions) -> Result<String, FeedError> {
    render_document(&podcast_document(feed), opts)
}

/// Renders a document into a string.
pub fn render_document(doc: &PodcastDocument, opts: &RenderOptions) -> Result<String, FeedError> {
    let bytes = write_document(doc, opts, Vec::new())?;
    debug!(
        items = doc.channel.items.len(),
        bytes = bytes.len(),
        "rendered podcast xml"
    );
    String::from_utf8(bytes).map_err(FeedError::xml)
}

/// Writes a document into `out` and hands the sink back.
pub fn write_document<W: Write>(
    doc: &PodcastDocument,
    opts: &RenderOptions,
    out: W,
) -> Result<W, FeedError> {
    let mut writer = if opts.indent > 0 {
        Writer::new_with_indent(out, b' ', opts.indent)
    } else {
        Writer::new(out)
    };

    if opts.xml_declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(FeedError::xml)?;
    }

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", doc.version.as_str()));
    rss.push_attribute(("xmlns:atom", doc.xmlns_atom.as_str()));
    rss.push_attribute(("xmlns:itunes", doc.xmlns_itunes.as_str()));
    start(&mut writer, rss)?;
    write_channel(&mut writer, &doc.channel)?;
    end(&mut writer, "rss")?;

    Ok(writer.into_inner())
}

fn write_channel<W: Write>(w: &mut Writer<W>, ch: &PodcastChannel) -> Result<(), FeedError> {
    start(w, BytesStart::new("channel"))?;

    text_element(w, "title", &ch.title)?;
    text_element(w, "link", &ch.link)?;
    text_element(w, "description", &ch.description)?;
    optional_element(w, "category", &ch.category)?;
    optional_element(w, "cloud", &ch.cloud)?;
    optional_element(w, "copyright", &ch.copyright)?;
    optional_element(w, "docs", &ch.docs)?;
    optional_element(w, "generator", &ch.generator)?;
    optional_element(w, "language", &ch.language)?;
    optional_element(w, "lastBuildDate", &ch.last_build_date)?;
    optional_element(w, "managingEditor", &ch.managing_editor)?;
    optional_element(w, "pubDate", &ch.pub_date)?;
    optional_element(w, "rating", &ch.rating)?;
    optional_element(w, "webMaster", &ch.web_master)?;
    if ch.ttl > 0 {
        text_element(w, "ttl", &ch.ttl.to_string())?;
    }
    optional_element(w, "skipHours", &ch.skip_hours)?;
    optional_element(w, "skipDays", &ch.skip_days)?;

    if let Some(image) = &ch.image {
        start(w, BytesStart::new("image"))?;
        text_element(w, "url", &image.url)?;
        text_element(w, "title", &image.title)?;
        text_element(w, "link", &image.link)?;
        optional_element(w, "description", &image.description)?;
        if image.width > 0 {
            text_element(w, "width", &image.width.to_string())?;
        }
        if image.height > 0 {
            text_element(w, "height", &image.height.to_string())?;
        }
        end(w, "image")?;
    }

    if let Some(input) = &ch.text_input {
        start(w, BytesStart::new("textInput"))?;
        text_element(w, "title", &input.title)?;
        text_element(w, "description", &input.description)?;
        text_element(w, "name", &input.name)?;
        text_element(w, "link", &input.link)?;
        end(w, "textInput")?;
    }

    if let Some(link) = &ch.atom_link {
        let mut el = BytesStart::new("atom:link");
        el.push_attribute(("href", link.href.as_str()));
        el.push_attribute(("rel", link.rel.as_str()));
        el.push_attribute(("type", link.link_type.as_str()));
        empty(w, el)?;
    }

    for item in &ch.items {
        write_item(w, item)?;
    }

    optional_element(w, "itunes:author", &ch.itunes_author)?;
    optional_element(w, "itunes:subtitle", &ch.itunes_subtitle)?;
    optional_element(w, "itunes:block", &ch.itunes_block)?;
    optional_element(w, "itunes:duration", &ch.itunes_duration)?;
    optional_element(w, "itunes:explicit", &ch.itunes_explicit)?;
    optional_element(w, "itunes:complete", &ch.itunes_complete)?;
    optional_element(w, "itunes:new-feed-url", &ch.itunes_new_feed_url)?;

    if let Some(summary) = &ch.itunes_summary {
        cdata_element(w, "itunes:summary", &summary.text)?;
    }
    if let Some(image) = &ch.itunes_image {
        let mut el = BytesStart::new("itunes:image");
        el.push_attribute(("href", image.href.as_str()));
        empty(w, el)?;
    }
    if let Some(owner) = &ch.itunes_owner {
        start(w, BytesStart::new("itunes:owner"))?;
        text_element(w, "itunes:name", &owner.name)?;
        text_element(w, "itunes:email", &owner.email)?;
        end(w, "itunes:owner")?;
    }
    if let Some(category) = &ch.itunes_category {
        let mut el = BytesStart::new("itunes:category");
        el.push_attribute(("text", category.text.as_str()));
        empty(w, el)?;
    }

    end(w, "channel")
}

fn write_item<W: Write>(w: &mut Writer<W>, item: &PodcastItem) -> Result<(), FeedError> {
    start(w, BytesStart::new("item"))?;

    text_element(w, "title", &item.title)?;
    text_element(w, "link", &item.link)?;
    text_element(w, "description", &item.description)?;
    optional_element(w, "category", &item.category)?;
    optional_element(w, "comments", &item.comments)?;
    optional_element(w, "guid", &item.guid)?;
    optional_element(w, "pubDate", &item.pub_date)?;
    optional_element(w, "source", &item.source)?;
    optional_element(w, "author", &item.author)?;

    if let Some(enc) = &item.enclosure {
        let mut el = BytesStart::new("enclosure");
        el.push_attribute(("url", enc.url.as_str()));
        el.push_attribute(("length", enc.length.as_str()));
        el.push_attribute(("type", enc.mime_type.as_str()));
        empty(w, el)?;
    }

    optional_element(w, "itunes:author", &item.itunes_author)?;
    optional_element(w, "itunes:subtitle", &item.itunes_subtitle)?;
    optional_element(w, "itunes:duration", &item.itunes_duration)?;
    optional_element(w, "itunes:explicit", &item.itunes_explicit)?;
    optional_element(w, "itunes:isClosedCaptioned", &item.itunes_is_closed_captioned)?;
    optional_element(w, "itunes:order", &item.itunes_order)?;

    if let Some(summary) = &item.itunes_summary {
        cdata_element(w, "itunes:summary", &summary.text)?;
    }
    if let Some(image) = &item.itunes_image {
        let mut el = BytesStart::new("itunes:image");
        el.push_attribute(("href", image.href.as_str()));
        empty(w, el)?;
    }

    end(w, "item")
}

fn start<W: Write>(w: &mut Writer<W>, el: BytesStart<'_>) -> Result<(), FeedError> {
    w.write_event(Event::Start(el)).map_err(FeedError::xml)
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<(), FeedError> {
    w.write_event(Event::End(BytesEnd::new(name)))
        .map_err(FeedError::xml)
}

fn empty<W: Write>(w: &mut Writer<W>, el: BytesStart<'_>) -> Result<(), FeedError> {
    w.write_event(Event::Empty(el)).map_err(FeedError::xml)
}

/// `<name>text</name>`, written even when `text` is empty.
fn text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<(), FeedError> {
    start(w, BytesStart::new(name))?;
    w.write_event(Event::Text(BytesText::new(text)))
        .map_err(FeedError::xml)?;
    end(w, name)
}

fn optional_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<(), FeedError> {
    if text.is_empty() {
        return Ok(());
    }
    text_element(w, name, text)
}

fn cdata_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<(), FeedError> {
    start(w, BytesStart::new(name))?;
    for section in cdata_sections(text) {
        w.write_event(Event::CData(BytesCData::new(section)))
            .map_err(FeedError::xml)?;
    }
    end(w, name)
}

/// Splits text so no section contains `]]>`; the terminator is broken across
/// two adjacent CDATA sections.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find("]]>") {
        sections.push(&rest[..pos + 2]);
        rest = &rest[pos + 2..];
    }
    sections.push(rest);
    sections
}
