//! Blocking user dialogs.
//!
//! The browser maps these onto `window.alert` / `window.confirm`; the CLI
//! prints to stderr and answers confirmations from its `--yes` flag.

/// Alert and confirmation dialogs shown around user actions.
pub trait Notifier {
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
