use std::collections::HashSet;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Status {
    Active,
    Inactive,
    Pending,
    Archived,
}

const ALL_STATUSES: [Status; 4] = [
    Status::Active,
    Status::Inactive,
    Status::Pending,
    Status::Archived,
];

/// RNG stub returning the same raw word on every draw, for pinning exact
/// values in tests.
struct FixedRng(u32);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.0) << 32) | u64::from(self.0)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.0.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[test]
fn random_int_stays_in_bounds_and_varies() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        let value = beanforge_random::random_int(&mut rng);
        assert!((1..1000).contains(&value), "out of bounds: {value}");
        seen.insert(value);
    }
    assert!(seen.len() > 1, "10,000 samples were constant");
}

#[test]
fn random_long_stays_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..10_000 {
        let value = beanforge_random::random_long(&mut rng);
        assert!((0..1000).contains(&value), "out of bounds: {value}");
    }
}

#[test]
fn random_big_decimal_zero_to_ten_bounds_and_scale() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..1_000 {
        let value = beanforge_random::random_big_decimal_zero_to_ten(&mut rng);
        assert!((0.0..=10.0).contains(&value), "out of bounds: {value}");
        let scaled = value * 100.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "more than two fractional digits: {value}"
        );
    }
}

#[test]
fn random_big_decimal_respects_caller_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..1_000 {
        let value = beanforge_random::random_big_decimal(&mut rng, -5.0, 5.0);
        assert!((-5.0..=5.0).contains(&value), "out of bounds: {value}");
    }
}

#[test]
fn random_string_is_ten_alphabetic_chars() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let value = beanforge_random::random_string(&mut rng);
        assert_eq!(value.len(), 10);
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()), "{value}");
        seen.insert(value);
    }
    assert!(seen.len() > 1);
}

#[test]
fn random_guid_is_v4_and_varies() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let guid = beanforge_random::random_guid(&mut rng);
        assert_eq!(guid.get_version_num(), 4);
        seen.insert(guid);
    }
    assert_eq!(seen.len(), 100, "collisions in 100 v4 draws");
}

#[test]
fn random_timestamp_spans_the_signed_32_bit_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut saw_pre_epoch = false;
    let mut saw_post_epoch = false;
    for _ in 0..1_000 {
        let instant = beanforge_random::random_timestamp(&mut rng);
        let seconds = instant.timestamp();
        assert!(seconds >= i64::from(i32::MIN) && seconds <= i64::from(i32::MAX));
        saw_pre_epoch |= seconds < 0;
        saw_post_epoch |= seconds >= 0;
    }
    assert!(saw_pre_epoch, "no pre-1970 instant in 1,000 draws");
    assert!(saw_post_epoch);
}

#[test]
fn random_timestamp_keeps_signed_interpretation() {
    // raw draw of 0xFFFF_FFFF reads as -1: one second before the epoch
    let mut rng = FixedRng(u32::MAX);
    let instant = beanforge_random::random_timestamp(&mut rng);
    assert_eq!(instant.timestamp(), -1);
}

#[test]
fn random_enum_single_value_always_returned() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..100 {
        let value = beanforge_random::random_enum(&mut rng, &[Status::Pending]);
        assert_eq!(value, Some(Status::Pending));
    }
}

#[test]
fn random_enum_reaches_every_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut seen = HashSet::new();
    for _ in 0..2_000 {
        if let Some(value) = beanforge_random::random_enum(&mut rng, &ALL_STATUSES) {
            seen.insert(value);
        }
    }
    assert_eq!(seen.len(), ALL_STATUSES.len(), "unreachable enum values");
}

#[test]
fn random_enum_empty_slice_yields_none() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let value: Option<Status> = beanforge_random::random_enum(&mut rng, &[]);
    assert_eq!(value, None);
}

#[test]
fn random_list_sizes_stay_below_max() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let list = beanforge_random::random_list(&mut rng, 5, |rng| {
            beanforge_random::random_int(rng)
        });
        assert!((1..=4).contains(&list.len()), "bad size: {}", list.len());
    }
}

#[test]
fn random_list_elements_come_from_supplier() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let list = beanforge_random::random_list(&mut rng, 5, |_| 7_i32);
    assert!(list.iter().all(|&v| v == 7));
}

#[test]
fn random_list_degenerate_max_yields_single_element() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let list = beanforge_random::random_list(&mut rng, 1, |rng| {
        beanforge_random::random_long(rng)
    });
    assert_eq!(list.len(), 1);
}

#[test]
fn random_set_collapses_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    for _ in 0..200 {
        let set = beanforge_random::random_set(&mut rng, 10, |rng| {
            beanforge_random::random_boolean(rng)
        });
        assert!(!set.is_empty() && set.len() <= 2);
    }
}

#[test]
fn random_map_sizes_stay_below_max() {
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    for _ in 0..200 {
        let map = beanforge_random::random_map(
            &mut rng,
            6,
            |rng| beanforge_random::random_string(rng),
            |rng| beanforge_random::random_int(rng),
        );
        assert!(!map.is_empty() && map.len() <= 5);
        assert!(map.keys().all(|k| k.len() == 10));
    }
}

#[test]
fn seeded_runs_replay() {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..50 {
        assert_eq!(
            beanforge_random::random_string(&mut a),
            beanforge_random::random_string(&mut b)
        );
    }
}
