use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

pub static PATH_HOME: LazyLock<PathBuf> =
    LazyLock::new(|| env::var("HOME").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(".")));

/// Settings directory, honoring XDG_CONFIG_HOME
pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("sports127");
    }
    PATH_HOME.join(".config/sports127")
});

/// Bundled resources (logo, channel thumbnails)
pub static PATH_RES: LazyLock<PathBuf> = LazyLock::new(|| {
    let localinstall = PathBuf::from("/usr/share/sports127");
    if localinstall.exists() {
        return localinstall;
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("res")))
        .unwrap_or_else(|| PathBuf::from("res"))
});

/// `file://` URI of a bundled resource, if it is installed
pub fn res_uri(relative: &str) -> Option<String> {
    let path = PATH_RES.join(relative);
    path.exists().then(|| format!("file://{}", path.display()))
}

pub fn thumbnail_uri(file_name: &str) -> Option<String> {
    res_uri(&format!("thumbnails/{file_name}"))
}

pub fn logo_uri() -> Option<String> {
    res_uri("logo.png")
}
