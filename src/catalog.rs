pub mod data;
pub mod types;

// Re-exports
pub use data::{CHANNELS, SIDEBAR_CATEGORIES, TOP_SECTIONS};
pub use types::{Category, Channel};

/// All channels in grid order
pub fn channels() -> &'static [Channel] {
    &CHANNELS
}

/// Look up a channel by its navigation id
pub fn find_by_nav_id(nav_id: &str) -> Option<&'static Channel> {
    CHANNELS.iter().find(|channel| channel.nav_id() == nav_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_are_unique() {
        let ids: HashSet<String> = channels().iter().map(Channel::nav_id).collect();
        assert_eq!(ids.len(), channels().len());
    }

    #[test]
    fn test_grid_order_sky_before_tnt() {
        let first_tnt = channels()
            .iter()
            .position(|c| c.category == Category::TntSports)
            .unwrap();
        assert!(channels()[..first_tnt].iter().all(|c| c.category == Category::SkySports));
        assert!(channels()[first_tnt..].iter().all(|c| c.category == Category::TntSports));
    }

    #[test]
    fn test_find_by_nav_id() {
        let channel = find_by_nav_id("tnt-412").unwrap();
        assert_eq!(channel.name, "TNT Sport 3");
        assert!(find_by_nav_id("sky-999").is_none());
        assert!(find_by_nav_id("412").is_none());
    }

    #[test]
    fn test_embed_url() {
        let channel = find_by_nav_id("sky-402").unwrap();
        assert_eq!(
            channel.embed_url().as_deref(),
            Some("https://embedsforlife.online/embed/b81dcecb-79b8-11f0-8a44-bc2411b21e0d?autoplay=1&muted=0&controls=1")
        );
        assert_eq!(find_by_nav_id("sky-403").unwrap().embed_url(), None);
    }

    #[test]
    fn test_embed_url_with_existing_query() {
        let channel = Channel {
            stream_url: Some("https://example.test/embed?id=7"),
            ..CHANNELS[0].clone()
        };
        assert_eq!(
            channel.embed_url().as_deref(),
            Some("https://example.test/embed?id=7&autoplay=1&muted=0&controls=1")
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(find_by_nav_id("tnt-410").unwrap().title(), "CH 410 - TNT Sport 1");
    }
}
