//! `Notifier` backed by `window.alert` / `window.confirm`.

use storefront::notify::Notifier;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.alert_with_message(message) {
                    log::warn!("alert failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            eprintln!("{message}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            eprintln!("{message} (declined: no browser)");
            false
        }
    }
}
