// ABOUTME: Podcast RSS generation library for podfeed.
// ABOUTME: Maps generic feeds to an RSS 2.0 + Atom + iTunes document tree and renders it as XML.

pub mod channel;
pub mod document;
pub mod error;
pub mod item;
pub mod mime;
pub mod models;
pub mod podcast;
pub mod time_format;
pub mod xml;

pub use channel::{managing_editor, podcast_channel};
pub use document::{
    podcast_document, PodcastDocument, ATOM_NAMESPACE, ITUNES_NAMESPACE, RSS_VERSION,
};
pub use error::FeedError;
pub use item::podcast_item;
pub use mime::{enclosure_mime_type, FALLBACK_MIME_TYPE};
pub use models::{Author, Feed, FeedItunes, Item, ItemItunes, Link};
pub use podcast::{
    ItunesCategory, ItunesImage, ItunesOwner, ItunesSummary, PodcastAtomLink, PodcastChannel,
    PodcastEnclosure, PodcastImage, PodcastItem, PodcastTextInput,
};
pub use time_format::{first_timestamp, format_rfc1123z, RFC1123Z};
pub use xml::{render_document, to_podcast_xml, write_document, RenderOptions};
