// ABOUTME: Maps one generic Item into a podcast <item> node.
// ABOUTME: Total: missing source fields become empty strings or absent blocks.

use crate::mime::enclosure_mime_type;
use crate::models::Item;
use crate::podcast::{ItunesImage, ItunesSummary, PodcastEnclosure, PodcastItem};
use crate::time_format::first_timestamp;

/// Builds the podcast item for a generic item.
pub fn podcast_item(item: &Item) -> PodcastItem {
    let ext = &item.itunes;

    PodcastItem {
        title: item.title.clone(),
        link: item.link.href.clone(),
        description: item.description.clone(),
        guid: item.id.clone(),
        pub_date: first_timestamp(&[item.created, item.updated]),
        source: item
            .source
            .as_ref()
            .map(|s| s.href.clone())
            .unwrap_or_default(),
        author: item
            .author
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        enclosure: enclosure(item),
        itunes_author: ext.author.clone(),
        itunes_subtitle: ext.subtitle.clone(),
        itunes_duration: ext.duration.clone(),
        itunes_explicit: ext.explicit.clone(),
        itunes_is_closed_captioned: ext.is_closed_captioned.clone(),
        itunes_order: ext.order.clone(),
        itunes_summary: Some(ItunesSummary {
            text: item.description.clone(),
        }),
        itunes_image: Some(ItunesImage {
            href: ext.image.clone(),
        }),
        ..Default::default()
    }
}

/// Present only when the item carries an audio size or an audio type.
fn enclosure(item: &Item) -> Option<PodcastEnclosure> {
    let ext = &item.itunes;
    if ext.audio_size <= 0 && ext.audio_type.is_empty() {
        return None;
    }
    Some(PodcastEnclosure {
        url: ext.audio_href.clone(),
        length: ext.audio_size.to_string(),
        mime_type: enclosure_mime_type(&ext.audio_type).to_string(),
    })
}
