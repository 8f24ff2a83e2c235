/// Whether the desktop asks applications for a dark appearance.
///
/// Used only when the user never picked a theme. Defaults to light when the
/// platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    let detected = system_prefers_dark();
    tracing::debug!(?detected, "System dark mode detection");
    detected.unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn system_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let personalize = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let light = personalize.get_value::<u32, _>("AppsUseLightTheme").ok()?;
    Some(light == 0)
}

#[cfg(target_os = "linux")]
fn system_prefers_dark() -> Option<bool> {
    // GNOME and derivatives; other desktops answer nothing useful.
    let gtk_theme = gsettings("gtk-theme")?;
    if gtk_theme.to_lowercase().contains("dark") {
        return Some(true);
    }
    let scheme = gsettings("color-scheme")?;
    Some(scheme.contains("prefer-dark"))
}

#[cfg(target_os = "linux")]
fn gsettings(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn system_prefers_dark() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    // The key is absent in light mode, which makes `defaults` fail.
    if !output.status.success() {
        return Some(false);
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn system_prefers_dark() -> Option<bool> {
    None
}
