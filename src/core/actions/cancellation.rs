use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Polled by long-running drivers between units of work.
pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Cancels once a wall-clock budget has been used up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }
}

impl CancelToken for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn never_cancel_always_returns_false() {
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn zero_budget_deadline_is_already_cancelled() {
        assert!(Deadline::after(Duration::ZERO).is_cancelled());
    }

    #[test]
    fn long_deadline_is_not_cancelled() {
        assert!(!Deadline::after(Duration::from_secs(3600)).is_cancelled());
    }

    #[test]
    fn closure_token_counts_polls() {
        let polls = Cell::new(0);
        let token = || {
            polls.set(polls.get() + 1);
            polls.get() > 2
        };

        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
        assert!(token.is_cancelled());
    }
}
