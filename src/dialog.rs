use packing_list::Confirm;

/// Native `window.confirm` prompt
pub struct BrowserConfirm;

impl BrowserConfirm {
    fn ask(message: &str) -> Result<bool, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        window
            .confirm_with_message(message)
            .map_err(|e| format!("{:?}", e))
    }
}

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        Self::ask(message).unwrap_or_else(|e| {
            log::warn!("[DIALOG] confirm failed, treating as declined: {}", e);
            false
        })
    }
}
