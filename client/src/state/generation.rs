//! Request-generation counter for list re-fetches.
//!
//! List views have no request cancellation, so each fetch is stamped with a
//! generation and only the most recent one may write results back.

/// Monotonic fetch counter; only the latest stamp is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new fetch, invalidating every earlier stamp.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(self, stamp: u64) -> bool {
        self.0 == stamp
    }
}
