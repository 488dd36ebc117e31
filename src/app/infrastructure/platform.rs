/// Best-effort check of the desktop's dark-mode preference.
///
/// Falls back to light when the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        let personalize = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize");
        if let Ok(key) = personalize {
            // 0 means apps use the dark theme
            if let Ok(value) = key.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        let gnome = |key: &str| command_stdout("gsettings", &["get", "org.gnome.desktop.interface", key]);
        if gnome("color-scheme").is_some_and(|s| s.contains("prefer-dark")) {
            return true;
        }
        if gnome("gtk-theme").is_some_and(|s| s.contains("dark")) {
            return true;
        }
    }

    #[cfg(target_os = "macos")]
    {
        if command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"])
            .is_some_and(|s| s.contains("dark"))
        {
            return true;
        }
    }

    false
}

/// Lowercased stdout of a successful command.
#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).to_lowercase())
}
