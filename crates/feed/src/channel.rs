// ABOUTME: Maps a generic Feed into a podcast <channel> node.
// ABOUTME: Synthesizes the image, atom link and iTunes blocks and maps every item in order.

use tracing::debug;

use crate::item::podcast_item;
use crate::models::{Author, Feed};
use crate::podcast::{
    ItunesCategory, ItunesImage, ItunesOwner, ItunesSummary, PodcastAtomLink, PodcastChannel,
    PodcastImage,
};
use crate::time_format::first_timestamp;

/// Builds the podcast channel for a feed. Never fails.
pub fn podcast_channel(feed: &Feed) -> PodcastChannel {
    let ext = &feed.itunes;

    let items: Vec<_> = feed.items.iter().map(podcast_item).collect();
    debug!(title = %feed.title, items = items.len(), "mapped podcast channel");

    PodcastChannel {
        title: feed.title.clone(),
        link: feed.link.href.clone(),
        description: feed.description.clone(),
        managing_editor: managing_editor(feed.author.as_ref()),
        pub_date: first_timestamp(&[feed.created, feed.updated]),
        last_build_date: first_timestamp(&[feed.updated]),
        copyright: feed.copyright.clone(),
        language: ext.language.clone(),
        image: Some(PodcastImage {
            title: feed.title.clone(),
            link: feed.link.href.clone(),
            url: ext.logo.clone(),
            ..Default::default()
        }),
        atom_link: Some(PodcastAtomLink {
            href: feed.link.href.clone(),
            rel: feed.link.rel.clone(),
            link_type: feed.link.link_type.clone(),
        }),
        items,
        itunes_author: ext.author.clone(),
        itunes_subtitle: feed.subtitle.clone(),
        itunes_block: ext.block.clone(),
        itunes_duration: ext.duration.clone(),
        itunes_explicit: ext.explicit.clone(),
        itunes_complete: ext.complete.clone(),
        itunes_new_feed_url: ext.new_feed_url.clone(),
        itunes_summary: Some(ItunesSummary {
            text: feed.description.clone(),
        }),
        itunes_image: Some(ItunesImage {
            href: ext.logo.clone(),
        }),
        itunes_owner: Some(ItunesOwner {
            name: ext.author.clone(),
            email: ext.email.clone(),
        }),
        itunes_category: Some(ItunesCategory {
            text: ext.category.clone(),
        }),
        ..Default::default()
    }
}

/// RSS managingEditor: "email (name)", or just the email when there is no name.
pub fn managing_editor(author: Option<&Author>) -> String {
    match author {
        Some(a) if !a.name.is_empty() => format!("{} ({})", a.email, a.name),
        Some(a) => a.email.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedItunes, Item, Link};
    use chrono::DateTime;

    #[test]
    fn managing_editor_composition() {
        let named = Author {
            name: "A".into(),
            email: "e@x".into(),
        };
        let unnamed = Author {
            name: String::new(),
            email: "e@x".into(),
        };
        assert_eq!(managing_editor(Some(&named)), "e@x (A)");
        assert_eq!(managing_editor(Some(&unnamed)), "e@x");
        assert_eq!(managing_editor(None), "");
    }

    #[test]
    fn dates_use_fallback_rules() {
        let created = DateTime::parse_from_rfc3339("2024-01-15T10:00:00+00:00").unwrap();
        let updated = DateTime::parse_from_rfc3339("2024-03-01T08:30:00+00:00").unwrap();

        let feed = Feed {
            created: Some(created),
            updated: Some(updated),
            ..Default::default()
        };
        let channel = podcast_channel(&feed);
        assert_eq!(channel.pub_date, "Mon, 15 Jan 2024 10:00:00 +0000");
        assert_eq!(channel.last_build_date, "Fri, 01 Mar 2024 08:30:00 +0000");

        let created_only = Feed {
            created: Some(created),
            ..Default::default()
        };
        let channel = podcast_channel(&created_only);
        assert_eq!(channel.pub_date, "Mon, 15 Jan 2024 10:00:00 +0000");
        assert_eq!(channel.last_build_date, "");
    }

    #[test]
    fn blocks_come_from_feed_and_itunes_data() {
        let feed = Feed {
            title: "Show".into(),
            link: Link {
                href: "http://x/feed".into(),
                rel: "self".into(),
                link_type: "application/rss+xml".into(),
                ..Default::default()
            },
            description: "desc".into(),
            subtitle: "tagline".into(),
            itunes: FeedItunes {
                logo: "http://x/logo.png".into(),
                author: "Owner".into(),
                email: "owner@x".into(),
                category: "Technology".into(),
                explicit: "no".into(),
                language: "en-us".into(),
                block: "yes".into(),
                duration: "3600".into(),
                complete: "Yes".into(),
                new_feed_url: "http://y/feed".into(),
            },
            ..Default::default()
        };

        let channel = podcast_channel(&feed);
        let image = channel.image.unwrap();
        assert_eq!(image.title, "Show");
        assert_eq!(image.link, "http://x/feed");
        assert_eq!(image.url, "http://x/logo.png");

        let atom = channel.atom_link.unwrap();
        assert_eq!(atom.href, "http://x/feed");
        assert_eq!(atom.rel, "self");
        assert_eq!(atom.link_type, "application/rss+xml");

        assert_eq!(channel.language, "en-us");
        assert_eq!(channel.itunes_subtitle, "tagline");
        assert_eq!(channel.itunes_explicit, "no");
        assert_eq!(channel.itunes_author, "Owner");
        assert_eq!(channel.itunes_block, "yes");
        assert_eq!(channel.itunes_duration, "3600");
        assert_eq!(channel.itunes_complete, "Yes");
        assert_eq!(channel.itunes_new_feed_url, "http://y/feed");
        assert_eq!(channel.itunes_summary.unwrap().text, "desc");
        assert_eq!(channel.itunes_image.unwrap().href, "http://x/logo.png");
        assert_eq!(
            channel.itunes_owner.unwrap(),
            ItunesOwner {
                name: "Owner".into(),
                email: "owner@x".into()
            }
        );
        assert_eq!(channel.itunes_category.unwrap().text, "Technology");
        assert!(channel.text_input.is_none());
    }

    #[test]
    fn empty_feed_still_gets_every_block() {
        let channel = podcast_channel(&Feed::default());
        assert!(channel.image.is_some());
        assert!(channel.atom_link.is_some());
        assert!(channel.itunes_summary.is_some());
        assert!(channel.itunes_image.is_some());
        assert!(channel.itunes_owner.is_some());
        assert!(channel.itunes_category.is_some());
        assert!(channel.items.is_empty());
        assert_eq!(channel.managing_editor, "");
    }

    #[test]
    fn items_keep_source_order() {
        let mut feed = Feed::default();
        for n in 0..5 {
            feed.add_item(Item {
                title: format!("Ep{n}"),
                ..Default::default()
            });
        }
        let channel = podcast_channel(&feed);
        assert_eq!(channel.items.len(), 5);
        for (n, item) in channel.items.iter().enumerate() {
            assert_eq!(item.title, format!("Ep{n}"));
        }
    }
}
