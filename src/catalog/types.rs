// Channel catalog types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    SkySports,
    TntSports,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::SkySports => "Sky Sports",
            Self::TntSports => "TNT Sports",
        }
    }

    /// Prefix used for navigation ids
    pub fn nav_prefix(self) -> &'static str {
        match self {
            Self::SkySports => "sky",
            Self::TntSports => "tnt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    pub number: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Third-party embed page, opened opaquely
    pub stream_url: Option<&'static str>,
    /// File name under the resource `thumbnails` directory
    pub thumbnail: Option<&'static str>,
    pub is_live: bool,
}

impl Channel {
    /// Stable navigation id, e.g. `sky-402`
    pub fn nav_id(&self) -> String {
        format!("{}-{}", self.category.nav_prefix(), self.number)
    }

    /// Embed URL with the player parameters appended
    pub fn embed_url(&self) -> Option<String> {
        self.stream_url.map(|url| {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}autoplay=1&muted=0&controls=1")
        })
    }

    pub fn title(&self) -> String {
        format!("CH {} - {}", self.number, self.name)
    }
}
