//! Per-call job/user identifier generation.
//!
//! Every signed request carries a fresh `partner_params` pair; reusing a
//! pair across calls collides with provider-side idempotency tracking.
//! The source is injected so the gateway stays deterministic in tests.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// One `partner_params` pair, unique per call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdPair {
    pub job_id: String,
    pub user_id: String,
}

/// Supplier of fresh job/user identifier pairs.
pub trait IdSource: Send + Sync {
    fn next_pair(&self) -> IdPair;
}

/// Production source: random UUID v4 identifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_pair(&self) -> IdPair {
        IdPair {
            job_id: format!("job-{}", Uuid::new_v4()),
            user_id: format!("user-{}", Uuid::new_v4()),
        }
    }
}

/// Deterministic counter source for tests.
#[derive(Debug, Default)]
pub struct CountingSource {
    next: AtomicU64,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for CountingSource {
    fn next_pair(&self) -> IdPair {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        IdPair {
            job_id: format!("job-{n}"),
            user_id: format!("user-{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_pairs_are_unique() {
        let source = UuidSource;
        let a = source.next_pair();
        let b = source.next_pair();
        assert_ne!(a.job_id, b.job_id);
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn counting_source_is_sequential() {
        let source = CountingSource::new();
        assert_eq!(source.next_pair().job_id, "job-0");
        assert_eq!(source.next_pair().job_id, "job-1");
    }
}
