//! Single-result emission gate.
//!
//! Every request must terminate with exactly one result, even when a late
//! permission decision and a synchronous early return both try to finish
//! the same request. The gate is a once-flag: the first submission wins,
//! every later one is rejected.

use std::sync::atomic::{AtomicBool, Ordering};

/// At-most-once gate guarding result emission for a single request.
#[derive(Debug, Default)]
pub struct ResultGate {
    submitted: AtomicBool,
}

impl ResultGate {
    /// Fresh gate with no result submitted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submitted: AtomicBool::new(false),
        }
    }

    /// Attempt to claim the emission slot. Returns `true` for the first
    /// caller and `false` for every subsequent one.
    pub fn submit(&self) -> bool {
        self.submitted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Whether a result has already been emitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_submission_wins() {
        let gate = ResultGate::new();
        assert!(!gate.is_submitted());
        assert!(gate.submit());
        assert!(gate.is_submitted());
        assert!(!gate.submit());
        assert!(!gate.submit());
    }

    #[test]
    fn concurrent_submissions_admit_exactly_one() {
        let gate = Arc::new(ResultGate::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.submit())
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|handle| handle.join().expect("gate thread panicked"))
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }
}
