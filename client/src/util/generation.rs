//! Monotonic tokens for telling the live controller apart from ones it
//! replaced, even when both were built for the same route id.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    current: u64,
}

impl Generations {
    /// Retire every earlier token and hand out the new live one.
    pub fn advance(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}
