// Command-line flags layered over the settings file

use crate::config::{AppConfig, LayoutKind};

pub static USAGE_TEXT: &str = r#"
Usage: sports127 [OPTIONS]

Options:
    --fullscreen          Start in fullscreen mode
    --windowed            Start windowed, even on TV-like devices
    --no-intro            Skip the intro splash
    --cols <n>            Column count of the channel grid
    --layout <kind>       Channel layout: row, column or grid
    --focus <nav-id>      Channel focused on start (e.g. sky-402)
    --help                Show this message
"#;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliArgs {
    pub help: bool,
    pub fullscreen: Option<bool>,
    pub no_intro: bool,
    pub cols: Option<u32>,
    pub layout: Option<LayoutKind>,
    pub focus: Option<String>,
}

pub fn parse_args<I, S>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter().map(|a| a.as_ref().to_string());

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => parsed.help = true,
            "--fullscreen" => parsed.fullscreen = Some(true),
            "--windowed" => parsed.fullscreen = Some(false),
            "--no-intro" => parsed.no_intro = true,
            "--cols" => {
                let value = args.next().ok_or("--cols needs a value")?;
                let cols: u32 = value
                    .parse()
                    .map_err(|_| format!("--cols: '{value}' is not a number"))?;
                if cols == 0 {
                    return Err("--cols must be at least 1".to_string());
                }
                parsed.cols = Some(cols);
            }
            "--layout" => {
                let value = args.next().ok_or("--layout needs a value")?;
                parsed.layout = Some(
                    LayoutKind::from_arg(&value)
                        .ok_or_else(|| format!("--layout: unknown layout '{value}'"))?,
                );
            }
            "--focus" => {
                parsed.focus = Some(args.next().ok_or("--focus needs a value")?);
            }
            other => return Err(format!("unknown option '{other}'")),
        }
    }

    Ok(parsed)
}

impl CliArgs {
    /// Overlay flags onto the loaded settings. The file on disk is left alone.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(fullscreen) = self.fullscreen {
            config.fullscreen = Some(fullscreen);
        }
        if self.no_intro {
            config.show_intro = false;
        }
        if let Some(cols) = self.cols {
            config.grid_cols = cols;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(focus) = &self.focus {
            config.initial_focus = Some(focus.clone());
        }
    }
}
