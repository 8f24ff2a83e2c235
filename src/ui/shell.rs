use fltk::{app, enums::Color, frame::Frame, prelude::*, window::Window};

use crate::app::infrastructure::error::BridgeError;
use crate::app::infrastructure::native::{NativeShell, SharePayload};

/// Native features of the desktop build: a splash window, a coloured strip
/// standing in for the status bar, and the system clipboard. There is no
/// share sheet, so sharing always lands on the clipboard.
pub struct DesktopShell {
    splash: Option<Window>,
    status_strip: Frame,
}

impl DesktopShell {
    pub fn new(splash: Option<Window>, status_strip: Frame) -> Self {
        Self {
            splash,
            status_strip,
        }
    }
}

impl NativeShell for DesktopShell {
    fn is_native(&self) -> bool {
        true
    }

    fn hide_splash_screen(&mut self) -> Result<(), BridgeError> {
        if let Some(mut splash) = self.splash.take()
            && splash.shown()
        {
            splash.hide();
        }
        Ok(())
    }

    fn set_status_bar_color(&mut self, color: &str, _is_light: bool) -> Result<(), BridgeError> {
        let color = Color::from_hex_str(color).map_err(|e| BridgeError::Failed {
            operation: "status bar",
            reason: e.to_string(),
        })?;
        self.status_strip.set_color(color);
        self.status_strip.redraw();
        Ok(())
    }

    fn native_share(&mut self, _payload: &SharePayload) -> Option<Result<(), BridgeError>> {
        None
    }

    fn platform_share(&mut self, _payload: &SharePayload) -> Option<Result<(), BridgeError>> {
        None
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), BridgeError> {
        app::copy(text);
        Ok(())
    }
}
