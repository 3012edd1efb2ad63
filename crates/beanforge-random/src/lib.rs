//! Random primitives and random-size collections for test fixtures.
//!
//! Every function draws from a caller-supplied [`Rng`] so a test can pin a
//! seeded generator and replay a run. Nothing in this crate knows about bean
//! shapes; `beanforge-fixture` layers type-directed dispatch on top.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Uuid;

/// Length of strings produced by [`random_string`].
pub const RANDOM_STRING_LEN: usize = 10;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn random_boolean(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

/// Uniform in `[1, 1000)`.
pub fn random_int(rng: &mut impl Rng) -> i32 {
    rng.random_range(1..1000)
}

/// Uniform in `[0, 1000)`.
pub fn random_long(rng: &mut impl Rng) -> i64 {
    rng.random_range(0..1000)
}

/// `min + r * (max - min)` with `r` in `[0, 1)`, rounded to two fractional
/// digits with ties toward zero.
pub fn random_big_decimal(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    let value = min + rng.random::<f64>() * (max - min);
    round_half_down(value, 2)
}

pub fn random_big_decimal_zero_to_ten(rng: &mut impl Rng) -> f64 {
    random_big_decimal(rng, 0.0, 10.0)
}

/// 10-character alphabetic string, mixed case.
pub fn random_string(rng: &mut impl Rng) -> String {
    random_alphabetic(rng, RANDOM_STRING_LEN)
}

/// Alphabetic string of the requested length.
pub fn random_alphabetic(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| *ALPHABET.choose(rng).unwrap_or(&b'a') as char)
        .collect()
}

/// Version-4 UUID built from 16 RNG bytes, so seeded runs replay.
pub fn random_guid(rng: &mut impl Rng) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Instant at a random epoch second drawn as a signed 32-bit value.
///
/// Negative draws land before 1970 and the span stays clamped to the i32
/// range. Callers relying on this utility expect exactly that bias.
pub fn random_timestamp(rng: &mut impl Rng) -> DateTime<Utc> {
    let seconds = i64::from(rng.random::<i32>());
    DateTime::from_timestamp(seconds, 0).unwrap_or_default()
}

/// Uniform pick over the whole slice; `None` only when the slice is empty.
/// A one-element slice always yields that element.
pub fn random_enum<T: Clone>(rng: &mut impl Rng, values: &[T]) -> Option<T> {
    values.choose(rng).cloned()
}

/// List of size uniform in `[1, max_size)`, each element from `supplier`.
/// A `max_size` of 0 or 1 degenerates to a single element.
pub fn random_list<R, T, F>(rng: &mut R, max_size: usize, mut supplier: F) -> Vec<T>
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    let size = random_size(rng, max_size);
    (0..size).map(|_| supplier(rng)).collect()
}

/// Same sizing as [`random_list`]; duplicates collapse, so the realized size
/// may be smaller than the drawn one.
pub fn random_set<R, T, F>(rng: &mut R, max_size: usize, mut supplier: F) -> HashSet<T>
where
    R: Rng,
    T: Eq + Hash,
    F: FnMut(&mut R) -> T,
{
    let size = random_size(rng, max_size);
    (0..size).map(|_| supplier(rng)).collect()
}

/// Same sizing as [`random_list`]; key collisions collapse.
pub fn random_map<R, K, V, FK, FV>(
    rng: &mut R,
    max_size: usize,
    mut key_supplier: FK,
    mut value_supplier: FV,
) -> HashMap<K, V>
where
    R: Rng,
    K: Eq + Hash,
    FK: FnMut(&mut R) -> K,
    FV: FnMut(&mut R) -> V,
{
    let size = random_size(rng, max_size);
    (0..size)
        .map(|_| {
            let key = key_supplier(rng);
            let value = value_supplier(rng);
            (key, value)
        })
        .collect()
}

fn random_size(rng: &mut impl Rng, max_size: usize) -> usize {
    if max_size <= 1 {
        1
    } else {
        rng.random_range(1..max_size)
    }
}

fn round_half_down(value: f64, scale: i32) -> f64 {
    let factor = 10_f64.powi(scale);
    let scaled = value * factor;
    let truncated = scaled.trunc();
    let fraction = (scaled - truncated).abs();
    let rounded = if fraction > 0.5 {
        truncated + scaled.signum()
    } else {
        truncated
    };
    rounded / factor
}

#[cfg(test)]
mod tests {
    use super::round_half_down;

    #[test]
    fn half_down_rounds_ties_toward_zero() {
        // 0.125 is exact in binary, so the scaled value is a true tie
        assert_eq!(round_half_down(0.125, 2), 0.12);
        assert_eq!(round_half_down(-0.125, 2), -0.12);
        assert_eq!(round_half_down(3.456, 2), 3.46);
        assert_eq!(round_half_down(3.454, 2), 3.45);
        assert_eq!(round_half_down(-3.456, 2), -3.46);
        assert_eq!(round_half_down(0.0, 2), 0.0);
    }
}
