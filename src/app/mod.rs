mod app;
mod app_input;
mod app_panels;
mod pages_channels;
mod pages_player;
mod pages_splash;

pub use app::SportsApp;
