// ABOUTME: Format-agnostic feed models consumed by the podcast mappers.
// ABOUTME: Feed, Item, Link, Author and the iTunes extension blocks, all serde-friendly.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A link with optional relation, media type and length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type")]
    pub link_type: String,
    pub length: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }
}

/// Represents an author with a display name and email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Channel-level iTunes data attached to a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedItunes {
    pub language: String,
    /// Artwork URL, used for both the RSS image and itunes:image.
    pub logo: String,
    pub category: String,
    pub author: String,
    /// Owner email.
    pub email: String,
    pub explicit: String,
    pub complete: String,
    pub block: String,
    pub duration: String,
    pub new_feed_url: String,
}

/// Episode-level iTunes data attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemItunes {
    pub author: String,
    pub subtitle: String,
    pub duration: String,
    pub explicit: String,
    pub is_closed_captioned: String,
    pub order: String,
    pub image: String,
    pub audio_href: String,
    pub audio_size: i64,
    /// Short type token such as "mp3"; resolved to a MIME type on output.
    pub audio_type: String,
}

/// A single entry within a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub title: String,
    pub link: Link,
    pub source: Option<Link>,
    pub author: Option<Author>,
    pub description: String,
    pub id: String,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub itunes: ItemItunes,
}

/// A feed header plus its ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub title: String,
    pub link: Link,
    pub description: String,
    pub author: Option<Author>,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub subtitle: String,
    pub copyright: String,
    pub items: Vec<Item>,
    pub itunes: FeedItunes,
}

impl Feed {
    /// Appends an item, keeping insertion order.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_fills_defaults() {
        let feed: Feed = serde_json::from_str(r#"{"title": "Show"}"#).unwrap();
        assert_eq!(feed.title, "Show");
        assert!(feed.author.is_none());
        assert!(feed.created.is_none());
        assert!(feed.items.is_empty());
        assert_eq!(feed.itunes, FeedItunes::default());
    }

    #[test]
    fn link_type_uses_wire_name() {
        let json = r#"{"href": "http://x/feed", "rel": "self", "type": "application/rss+xml"}"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.link_type, "application/rss+xml");
        assert_eq!(link.rel, "self");
    }

    #[test]
    fn timestamps_parse_rfc3339_and_keep_offset() {
        let item: Item =
            serde_json::from_str(r#"{"created": "2006-01-02T15:04:05-07:00"}"#).unwrap();
        let created = item.created.unwrap();
        assert_eq!(created.offset().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn add_item_preserves_order() {
        let mut feed = Feed::default();
        for title in ["a", "b", "c"] {
            feed.add_item(Item {
                title: title.into(),
                ..Default::default()
            });
        }
        let titles: Vec<&str> = feed.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
