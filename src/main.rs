mod app;
mod catalog;
mod cli;
mod config;
mod device;
mod input;
mod nav;
mod paths;
mod ui;
mod util;

use crate::app::SportsApp;
use crate::cli::{parse_args, USAGE_TEXT};
use crate::config::load_cfg;
use crate::device::detect_capabilities;
use crate::input::scan_remote_devices;

use env_logger::Env;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("sports127: {}", e);
            eprintln!("{}", USAGE_TEXT);
            std::process::exit(1);
        }
    };
    if args.help {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }

    let mut config = load_cfg();
    args.apply(&mut config);

    let remotes = if config.remote_input {
        scan_remote_devices()
    } else {
        Vec::new()
    };

    let capabilities = detect_capabilities(config.device_identity.as_deref(), !remotes.is_empty());

    let fullscreen = config.fullscreen.unwrap_or(capabilities.is_tv_like);
    let scale = config
        .zoom_factor
        .unwrap_or(if capabilities.is_tv_like { 1.5 } else { 1.2 });

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("127 Sports")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 360.0])
            .with_fullscreen(fullscreen),
        ..Default::default()
    };

    log::info!(
        "Starting eframe app (fullscreen={}, zoom={}, remotes={})",
        fullscreen,
        scale,
        remotes.len()
    );

    eframe::run_native(
        "127 Sports",
        options,
        Box::new(move |cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_zoom_factor(scale);

            let mut fonts = eframe::egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(SportsApp::new(config, capabilities, remotes)))
        }),
    )
}
