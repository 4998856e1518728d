// Input dispatch: raw keys -> the mounted view's navigator

use super::app::{Screen, SportsApp, PLAYER_BACK, PLAYER_FULLSCREEN, PLAYER_OPEN};
use crate::nav::{classify, NavAction, NavInput, RawKey};
use crate::ui::EguiSurface;

use eframe::egui;

impl SportsApp {
    /// Route window-system keys and remote codes to the current screen.
    ///
    /// Key presses the mounted view consumes are removed from `raw_input`
    /// so egui never sees them.
    pub(super) fn handle_input(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        for key in self.drain_remote_keys() {
            self.handle_key(ctx, &key);
        }

        raw_input.events.retain(|event| match event {
            egui::Event::Key {
                key,
                physical_key,
                pressed: true,
                ..
            } => {
                let mut raw = RawKey::named(key.name());
                if let Some(code) = (*physical_key).and_then(evdev_code) {
                    raw = raw.with_code(code);
                }
                !self.handle_key(ctx, &raw)
            }
            _ => true,
        });
    }

    /// Feed one key to the mounted screen. Returns whether it was consumed.
    pub(super) fn handle_key(&mut self, ctx: &egui::Context, key: &RawKey) -> bool {
        match self.screen {
            Screen::Intro | Screen::Loading => match classify(key) {
                NavInput::Select | NavInput::Back => {
                    self.skip_splash();
                    true
                }
                _ => false,
            },
            Screen::Channels => {
                let Some(page) = self.channels.as_mut() else {
                    return false;
                };
                let mut surface = EguiSurface::new(ctx, &mut page.handles);
                let outcome = page.navigator.handle_input(key, &mut surface);
                if let Some(action) = outcome.action {
                    self.on_channels_action(action);
                }
                outcome.consumed
            }
            Screen::Player => {
                let Some(page) = self.player.as_mut() else {
                    return false;
                };
                let mut surface = EguiSurface::new(ctx, &mut page.handles);
                let outcome = page.navigator.handle_input(key, &mut surface);
                if let Some(action) = outcome.action {
                    self.on_player_action(ctx, action);
                }
                outcome.consumed
            }
        }
    }

    pub(super) fn on_channels_action(&mut self, action: NavAction) {
        match action {
            NavAction::Select(id) => self.select_channel(&id),
            // The grid is the root view
            NavAction::Back => log::debug!("app: back on channel grid ignored"),
        }
    }

    pub(super) fn on_player_action(&mut self, ctx: &egui::Context, action: NavAction) {
        match action {
            NavAction::Back => self.close_player(),
            NavAction::Select(id) => match id.as_str() {
                PLAYER_BACK => self.close_player(),
                PLAYER_FULLSCREEN => toggle_fullscreen(ctx),
                PLAYER_OPEN => {
                    if let Some(channel) = self.player.as_ref().map(|p| p.channel) {
                        self.launch_stream(channel);
                    }
                }
                other => log::warn!("app: unknown player control `{}`", other),
            },
        }
    }
}

pub(super) fn toggle_fullscreen(ctx: &egui::Context) {
    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
}

/// Linux input code for the physical keys a remote bridge may report as keyboard keys
fn evdev_code(key: egui::Key) -> Option<u16> {
    use evdev::KeyCode;

    let code = match key {
        egui::Key::ArrowUp => KeyCode::KEY_UP,
        egui::Key::ArrowDown => KeyCode::KEY_DOWN,
        egui::Key::ArrowLeft => KeyCode::KEY_LEFT,
        egui::Key::ArrowRight => KeyCode::KEY_RIGHT,
        egui::Key::Enter => KeyCode::KEY_ENTER,
        egui::Key::Space => KeyCode::KEY_SPACE,
        egui::Key::Escape => KeyCode::KEY_ESC,
        egui::Key::Backspace => KeyCode::KEY_BACKSPACE,
        _ => return None,
    };
    Some(code.0)
}
