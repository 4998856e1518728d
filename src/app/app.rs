// Core app structure and screen transitions

mod eframe_impl;
mod helpers;

use std::time::{Duration, Instant};

use crate::catalog::{channels, Channel};
use crate::config::AppConfig;
use crate::device::Capabilities;
use crate::input::RemoteDevice;
use crate::nav::{build_items, LayoutPolicy, NavConfig, Navigator};
use crate::ui::FocusHandles;
use crate::util::{msg, open_stream};

pub use helpers::Toast;

pub const PLAYER_BACK: &str = "player-back";
pub const PLAYER_FULLSCREEN: &str = "player-fullscreen";
pub const PLAYER_OPEN: &str = "player-open";

/// Top-level screen. Exactly one is mounted at a time.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Screen {
    Intro,
    Loading,
    Channels,
    Player,
}

/// The channel grid view and the navigator it owns while mounted
pub struct ChannelsPage {
    pub navigator: Navigator,
    pub handles: FocusHandles,
}

/// The player view: a row of controls over an externally opened stream
pub struct PlayerPage {
    pub channel: &'static Channel,
    pub navigator: Navigator,
    pub handles: FocusHandles,
}

pub struct SportsApp {
    pub config: AppConfig,
    pub capabilities: Capabilities,
    pub screen: Screen,
    pub screen_since: Instant,
    /// Milliseconds into the current splash at which the user skipped it
    pub skipped_at: Option<u64>,

    pub remotes: Vec<RemoteDevice>,

    pub channels: Option<ChannelsPage>,
    pub player: Option<PlayerPage>,
    /// Channel to land on when the grid is mounted again
    pub last_selected: Option<String>,
    pub toast: Option<Toast>,
}

impl SportsApp {
    pub fn new(config: AppConfig, capabilities: Capabilities, remotes: Vec<RemoteDevice>) -> Self {
        let first = if config.show_intro {
            Screen::Intro
        } else if config.show_loading {
            Screen::Loading
        } else {
            Screen::Channels
        };

        let mut app = SportsApp {
            config,
            capabilities,
            screen: first,
            screen_since: Instant::now(),
            skipped_at: None,
            remotes,
            channels: None,
            player: None,
            last_selected: None,
            toast: None,
        };
        app.enter_screen(first);
        app
    }

    pub fn screen_elapsed_ms(&self) -> u64 {
        self.screen_since.elapsed().as_millis() as u64
    }

    pub(crate) fn enter_screen(&mut self, screen: Screen) {
        log::debug!("app: {:?} -> {:?}", self.screen, screen);
        if self.screen == Screen::Channels && screen != Screen::Channels {
            self.unmount_channels();
        }
        if self.screen == Screen::Player && screen != Screen::Player {
            self.unmount_player();
        }

        self.screen = screen;
        self.screen_since = Instant::now();
        self.skipped_at = None;

        if screen == Screen::Channels && self.channels.is_none() {
            self.mount_channels();
        }
    }

    /// Skip the running splash. Its fade-out still plays.
    pub(crate) fn skip_splash(&mut self) {
        if self.skipped_at.is_none() {
            self.skipped_at = Some(self.screen_elapsed_ms());
        }
    }

    /// Called once the running splash has faded out
    pub(crate) fn finish_splash(&mut self) {
        let next = match self.screen {
            Screen::Intro if self.config.show_loading => Screen::Loading,
            Screen::Intro | Screen::Loading => Screen::Channels,
            other => other,
        };
        self.enter_screen(next);
    }

    fn mount_channels(&mut self) {
        let policy = self.config.layout_policy();
        let items = build_items(channels().iter().map(Channel::nav_id), policy);
        let grid_cols = policy.grid_cols(items.len());
        let initial = self
            .last_selected
            .clone()
            .or_else(|| self.config.initial_focus.clone());

        log::debug!("app: mounting channel grid ({} items, {} cols)", items.len(), grid_cols);
        self.channels = Some(ChannelsPage {
            navigator: Navigator::mount(items, NavConfig::new(grid_cols).with_initial_focus(initial)),
            handles: FocusHandles::new(),
        });
    }

    fn unmount_channels(&mut self) {
        if let Some(mut page) = self.channels.take() {
            page.navigator.unmount();
        }
    }

    /// Selection on the grid: open the player, or explain why not
    pub(crate) fn select_channel(&mut self, nav_id: &str) {
        let Some(channel) = crate::catalog::find_by_nav_id(nav_id) else {
            log::warn!("app: selected unknown channel `{}`", nav_id);
            return;
        };
        self.last_selected = Some(nav_id.to_string());

        if channel.stream_url.is_none() {
            log::info!("app: {} has no stream", channel.title());
            self.toast = Some(Toast::new(
                channel.name,
                format!("Channel {} - No stream available yet", channel.number),
                Duration::from_secs(3),
            ));
            return;
        }
        self.open_player(channel);
    }

    fn open_player(&mut self, channel: &'static Channel) {
        self.toast = Some(Toast::new(
            format!("Opening {}", channel.name),
            format!("Channel {} - Loading live stream...", channel.number),
            Duration::from_secs(2),
        ));

        let items = build_items([PLAYER_BACK, PLAYER_FULLSCREEN, PLAYER_OPEN], LayoutPolicy::SingleRow);
        let grid_cols = LayoutPolicy::SingleRow.grid_cols(items.len());
        self.player = Some(PlayerPage {
            channel,
            navigator: Navigator::mount(
                items,
                NavConfig::new(grid_cols).with_initial_focus(Some(PLAYER_OPEN.to_string())),
            ),
            handles: FocusHandles::new(),
        });
        self.enter_screen(Screen::Player);
        self.launch_stream(channel);
    }

    pub(crate) fn launch_stream(&mut self, channel: &Channel) {
        let Some(url) = channel.embed_url() else {
            return;
        };
        if let Err(e) = open_stream(&url) {
            log::error!("player: failed to open {}: {}", channel.title(), e);
            msg("Playback error", &format!("Could not open {}:\n{}", channel.title(), e));
        }
    }

    fn unmount_player(&mut self) {
        if let Some(mut page) = self.player.take() {
            page.navigator.unmount();
        }
    }

    /// Back from the player: unmount it and remount the grid
    pub(crate) fn close_player(&mut self) {
        self.enter_screen(Screen::Channels);
    }
}
