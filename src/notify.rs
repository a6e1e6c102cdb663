//! Blocking browser dialogs.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("Could not show alert: {}", message);
        }
    }
}

/// Returns `false` when the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn report_error(action: &str, err: &dyn std::fmt::Display) {
    log::error!("{}: {}", action, err);
    alert(&format!("{}: {}", action, err));
}
