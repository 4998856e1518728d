use std::error::Error;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;

use dialog::DialogBox;

pub fn msg(title: &str, contents: &str) {
    let _ = dialog::Message::new(contents).title(title).show();
}

/// Hand a stream URL to the desktop's default handler.
/// Playback happens entirely inside whatever the handler opens.
pub fn open_stream(url: &str) -> Result<(), Box<dyn Error>> {
    if url.is_empty() {
        return Err("stream URL is empty".into());
    }
    log::info!("player: opening {}", url);
    spawn_reaped(Command::new("xdg-open").arg(url)).map_err(|e| format!("xdg-open failed: {e}"))?;
    Ok(())
}

/// Spawn `cmd` with output discarded and wait on it from a helper thread,
/// so the child never lingers as a zombie.
pub fn spawn_reaped(cmd: &mut Command) -> std::io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = cmd.stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                log::warn!("util: child exited with {}", status);
            }
            Some(status)
        }
        Err(e) => {
            log::warn!("util: waiting on child failed: {}", e);
            None
        }
    }))
}
