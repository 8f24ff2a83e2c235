//! Bridge to the native shell: splash screen, status bar and share sheet.
//!
//! Every call is fire-and-forget from the core's point of view. Failures are
//! logged here and downgraded to a no-op or a fallback.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::error::BridgeError;

pub const APP_ID: &str = "com.ethiopianchildrensbible.app";
pub const APP_NAME: &str = "Ethiopian Children's Bible";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long the launch splash stays up before auto-hiding.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2000);
pub const SPLASH_BACKGROUND: &str = "#ffffff";
pub const SPLASH_SPINNER_COLOR: &str = "#3b82f6";

/// Pause between the first render and hiding the splash screen.
pub const SPLASH_HIDE_DELAY: Duration = Duration::from_millis(500);

/// Link appended to shared content when the caller has none.
pub const DEFAULT_SHARE_URL: &str = "https://ethiopian-kids-bible.app";

/// Title of the native share dialog ("share with your friends").
pub const SHARE_DIALOG_TITLE: &str = "ለጓደኞችዎ ያጋሩ";

pub const APP_SHARE_TITLE: &str = "የህፃናት መጽሐፍ ቅዱስ";
pub const APP_SHARE_TEXT: &str =
    "ይህንን ድንቅ የህፃናት መጽሐፍ ቅዱስ አፕሊኬሽን ለልጆቻችሁ ተጠቀሙበት። ታሪኮች እና ጥቅሶች በአማርኛ ይገኛሉ!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    pub dialog_title: &'static str,
}

impl SharePayload {
    /// Exact text placed on the clipboard when no share sheet exists.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.text, self.url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to a share sheet.
    Shared,
    /// The user dismissed the sheet, or every route failed.
    Cancelled,
    /// No share sheet available; the text was copied instead.
    Clipboard,
}

/// Capabilities of the platform wrapper.
pub trait NativeShell {
    /// True when running inside a native shell with splash screen and status bar.
    fn is_native(&self) -> bool;

    fn hide_splash_screen(&mut self) -> Result<(), BridgeError>;

    fn set_status_bar_color(&mut self, color: &str, is_light: bool) -> Result<(), BridgeError>;

    /// Native share sheet. `None` when the shell has none.
    fn native_share(&mut self, payload: &SharePayload) -> Option<Result<(), BridgeError>>;

    /// Secondary share API offered by the host platform. `None` when absent.
    fn platform_share(&mut self, payload: &SharePayload) -> Option<Result<(), BridgeError>>;

    fn write_clipboard(&mut self, text: &str) -> Result<(), BridgeError>;
}

/// Hide the splash screen; a no-op outside a native shell.
pub fn hide_splash_screen(shell: &mut dyn NativeShell) {
    if !shell.is_native() {
        return;
    }
    if let Err(e) = shell.hide_splash_screen() {
        tracing::warn!("SplashScreen error: {e}");
    }
}

/// Set the status bar colour; a no-op outside a native shell.
pub fn set_status_bar_color(shell: &mut dyn NativeShell, color: &str, is_light: bool) {
    if !shell.is_native() {
        return;
    }
    if let Err(e) = shell.set_status_bar_color(color, is_light) {
        tracing::warn!("StatusBar error: {e}");
    }
}

/// Share through the best available route: native sheet, then the platform
/// share API, then the clipboard.
pub fn share_content(
    shell: &mut dyn NativeShell,
    title: &str,
    text: &str,
    url: Option<&str>,
) -> ShareOutcome {
    let payload = SharePayload {
        title: title.to_string(),
        text: text.to_string(),
        url: url.unwrap_or(DEFAULT_SHARE_URL).to_string(),
        dialog_title: SHARE_DIALOG_TITLE,
    };

    if let Some(result) = shell.native_share(&payload) {
        return match result {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                tracing::warn!("Share error: {e}");
                ShareOutcome::Cancelled
            }
        };
    }

    if let Some(result) = shell.platform_share(&payload) {
        return match result {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                tracing::debug!("Platform share dismissed: {e}");
                ShareOutcome::Cancelled
            }
        };
    }

    match shell.write_clipboard(&payload.clipboard_text()) {
        Ok(()) => ShareOutcome::Clipboard,
        Err(e) => {
            tracing::warn!("Clipboard error: {e}");
            ShareOutcome::Cancelled
        }
    }
}

/// Shell with no native features and an in-memory clipboard.
/// Used headless and in tests; clones share the clipboard.
#[derive(Debug, Clone, Default)]
pub struct HeadlessShell {
    clipboard: Rc<RefCell<Option<String>>>,
}

impl HeadlessShell {
    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }
}

impl NativeShell for HeadlessShell {
    fn is_native(&self) -> bool {
        false
    }

    fn hide_splash_screen(&mut self) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable("splash screen"))
    }

    fn set_status_bar_color(&mut self, _color: &str, _is_light: bool) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable("status bar"))
    }

    fn native_share(&mut self, _payload: &SharePayload) -> Option<Result<(), BridgeError>> {
        None
    }

    fn platform_share(&mut self, _payload: &SharePayload) -> Option<Result<(), BridgeError>> {
        None
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), BridgeError> {
        *self.clipboard.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
