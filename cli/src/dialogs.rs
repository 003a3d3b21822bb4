//! Terminal `Notifier`: alerts go to stderr, confirmations are answered by
//! the `--yes` flag instead of prompting.

use storefront::notify::Notifier;

pub struct StderrNotifier {
    assume_yes: bool,
}

impl StderrNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            eprintln!("{message} yes");
        } else {
            eprintln!("{message} no (pass --yes to confirm)");
        }
        self.assume_yes
    }
}
