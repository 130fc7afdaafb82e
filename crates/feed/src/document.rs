// ABOUTME: Root <rss> envelope around a podcast channel.
// ABOUTME: Carries the fixed RSS version and the Atom and iTunes namespace declarations.

use serde::Serialize;

use crate::channel::podcast_channel;
use crate::models::Feed;
use crate::podcast::PodcastChannel;

pub const RSS_VERSION: &str = "2.0";
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// The complete serializable tree: `<rss>` with one `<channel>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodcastDocument {
    pub version: String,
    pub xmlns_atom: String,
    pub xmlns_itunes: String,
    pub channel: PodcastChannel,
}

impl PodcastDocument {
    pub fn new(channel: PodcastChannel) -> Self {
        Self {
            version: RSS_VERSION.to_string(),
            xmlns_atom: ATOM_NAMESPACE.to_string(),
            xmlns_itunes: ITUNES_NAMESPACE.to_string(),
            channel,
        }
    }
}

impl PodcastChannel {
    /// Wraps this channel in the `<rss>` envelope.
    pub fn into_document(self) -> PodcastDocument {
        PodcastDocument::new(self)
    }
}

/// Maps a feed straight to the document tree.
pub fn podcast_document(feed: &Feed) -> PodcastDocument {
    podcast_channel(feed).into_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_constants() {
        let doc = PodcastChannel::default().into_document();
        assert_eq!(doc.version, "2.0");
        assert_eq!(doc.xmlns_atom, "http://www.w3.org/2005/Atom");
        assert_eq!(doc.xmlns_itunes, "http://www.itunes.com/dtds/podcast-1.0.dtd");
    }

    #[test]
    fn mapping_is_repeatable() {
        let feed = Feed {
            title: "Show".into(),
            ..Default::default()
        };
        assert_eq!(podcast_document(&feed), podcast_document(&feed));
    }
}
