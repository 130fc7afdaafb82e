// ABOUTME: Output document tree for podcast RSS 2.0 (RSS core + Atom self-link + iTunes).
// ABOUTME: Plain data; the mappers build it and the xml module renders it.

use serde::Serialize;

/// `<itunes:owner>` with nested name and email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItunesOwner {
    pub name: String,
    pub email: String,
}

/// `<itunes:category text="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItunesCategory {
    pub text: String,
}

/// `<itunes:summary>`, rendered as CDATA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItunesSummary {
    pub text: String,
}

/// `<itunes:image href="..."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItunesImage {
    pub href: String,
}

/// RSS `<image>` block. Width and height of zero are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastImage {
    pub url: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
}

/// `<atom:link href rel type/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastAtomLink {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub link_type: String,
}

/// RSS `<textInput>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastTextInput {
    pub title: String,
    pub description: String,
    pub name: String,
    pub link: String,
}

/// `<enclosure url length type/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastEnclosure {
    pub url: String,
    /// Byte length in base 10.
    pub length: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// A single `<item>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub category: String,
    pub comments: String,
    pub guid: String,
    pub pub_date: String,
    pub source: String,
    pub author: String,
    pub enclosure: Option<PodcastEnclosure>,
    pub itunes_author: String,
    pub itunes_subtitle: String,
    pub itunes_duration: String,
    pub itunes_explicit: String,
    pub itunes_is_closed_captioned: String,
    pub itunes_order: String,
    pub itunes_summary: Option<ItunesSummary>,
    pub itunes_image: Option<ItunesImage>,
}

/// The `<channel>` element and everything under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodcastChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub category: String,
    pub cloud: String,
    pub copyright: String,
    pub docs: String,
    pub generator: String,
    pub language: String,
    pub last_build_date: String,
    pub managing_editor: String,
    pub pub_date: String,
    pub rating: String,
    pub web_master: String,
    pub ttl: u32,
    pub skip_hours: String,
    pub skip_days: String,
    pub image: Option<PodcastImage>,
    pub text_input: Option<PodcastTextInput>,
    pub atom_link: Option<PodcastAtomLink>,
    pub items: Vec<PodcastItem>,
    pub itunes_author: String,
    pub itunes_subtitle: String,
    pub itunes_block: String,
    pub itunes_duration: String,
    pub itunes_explicit: String,
    pub itunes_complete: String,
    pub itunes_new_feed_url: String,
    pub itunes_summary: Option<ItunesSummary>,
    pub itunes_image: Option<ItunesImage>,
    pub itunes_owner: Option<ItunesOwner>,
    pub itunes_category: Option<ItunesCategory>,
}
