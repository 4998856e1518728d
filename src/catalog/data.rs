// Static channel list, in grid order (Sky first, then TNT)

use crate::catalog::types::{Category, Channel};

const SKY_THUMB: &str = "sky-sports.png";
const SKY_MAIN_EVENT_THUMB: &str = "sky-main-event.png";
const TNT_THUMB: &str = "tnt-sports.png";

pub static CHANNELS: [Channel; 8] = [
    Channel {
        name: "Sky Sports Premier League",
        number: "402",
        description: "Premier League matches and analysis",
        category: Category::SkySports,
        stream_url: Some("https://embedsforlife.online/embed/b81dcecb-79b8-11f0-8a44-bc2411b21e0d"),
        thumbnail: Some(SKY_THUMB),
        is_live: true,
    },
    Channel {
        name: "Sky Sports Football",
        number: "403",
        description: "Football coverage from around the world",
        category: Category::SkySports,
        stream_url: None,
        thumbnail: Some(SKY_THUMB),
        is_live: true,
    },
    Channel {
        name: "Sky Sports Main Event",
        number: "404",
        description: "Major sporting events and highlights",
        category: Category::SkySports,
        stream_url: Some("https://embedsforlife.online/embed/5eb26fd6-7b05-11f0-8a44-bc2411b21e0d"),
        thumbnail: Some(SKY_MAIN_EVENT_THUMB),
        is_live: true,
    },
    Channel {
        name: "TNT Sport 1",
        number: "410",
        description: "Premium sports entertainment",
        category: Category::TntSports,
        stream_url: Some("https://embedsforlife.online/embed/0d8c4afe-3bc4-11f0-afb1-ecf4bbdafde4"),
        thumbnail: Some(TNT_THUMB),
        is_live: true,
    },
    Channel {
        name: "TNT Sport 2",
        number: "411",
        description: "Live sports coverage",
        category: Category::TntSports,
        stream_url: Some("https://embedsforlife.online/embed/48508494-3e9e-11f0-afb1-ecf4bbdafde4"),
        thumbnail: Some(TNT_THUMB),
        is_live: true,
    },
    Channel {
        name: "TNT Sport 3",
        number: "412",
        description: "Sports action and events",
        category: Category::TntSports,
        stream_url: Some("https://embedsforlife.online/embed/48508a47-3e9e-11f0-afb1-ecf4bbdafde4"),
        thumbnail: Some(TNT_THUMB),
        is_live: true,
    },
    Channel {
        name: "TNT Sport 4",
        number: "413",
        description: "Extended sports programming",
        category: Category::TntSports,
        stream_url: Some("https://embedsforlife.online/embed/48508e24-3e9e-11f0-afb1-ecf4bbdafde4"),
        thumbnail: Some(TNT_THUMB),
        is_live: true,
    },
    Channel {
        name: "TNT Sport 5",
        number: "414",
        description: "Sports highlights and analysis",
        category: Category::TntSports,
        stream_url: Some("https://embedsforlife.online/embed/485091d0-3e9e-11f0-afb1-ecf4bbdafde4"),
        thumbnail: Some(TNT_THUMB),
        is_live: true,
    },
];

/// Static sidebar categories, top to bottom
pub static SIDEBAR_CATEGORIES: [&str; 8] = [
    "LIVE SPORTS",
    "PREMIER LEAGUE",
    "CHAMPIONS LEAGUE",
    "FOOTBALL HIGHLIGHTS",
    "SKY SPORTS",
    "TNT SPORTS",
    "SPORTS NEWS",
    "MATCH REPLAYS",
];

/// Static top bar sections. Only "Channels" has content.
pub static TOP_SECTIONS: [&str; 4] = ["Channels", "Movies", "Series", "Radio"];
