// Small capabilities the use cases need from the outside world: time and fresh identifiers.
//
// Both are injected so handlers stay deterministic under test.

use chrono::{NaiveDate, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Largest identifier the generators hand out. Stays inside the range a JSON
/// number can carry without losing precision.
pub const MAX_GENERATED_ID: i64 = (1 << 53) - 1;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Draws identifiers from the random bits of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> i64 {
        loop {
            let (_, low) = Uuid::new_v4().as_u64_pair();
            let id = (low as i64) & MAX_GENERATED_ID;
            if id > 0 {
                return id;
            }
        }
    }
}

/// Hands out consecutive identifiers starting at `start`.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn random_ids_are_positive_and_bounded() {
        let generator = RandomIdGenerator;
        for _ in 0..1_000 {
            let id = generator.next_id();
            assert!(id > 0);
            assert!(id <= MAX_GENERATED_ID);
        }
    }

    #[rstest]
    fn random_ids_do_not_repeat() {
        let generator = RandomIdGenerator;
        let ids: HashSet<i64> = (0..10_000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[rstest]
    fn sequential_ids_count_up_from_the_start() {
        let generator = SequentialIdGenerator::starting_at(500);
        assert_eq!(generator.next_id(), 500);
        assert_eq!(generator.next_id(), 501);
    }

    #[rstest]
    fn fixed_clock_always_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
