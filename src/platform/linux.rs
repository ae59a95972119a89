// EmuBrowser platform paths for Linux
// Config: ~/.config/emubrowser

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for EmuBrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/emubrowser` if set, otherwise `~/.config/emubrowser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("emubrowser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("emubrowser")
    }
}
