//! Integration tests for `ChainedHashMap`.

use std::any::Any;
use std::collections::HashMap;

use dsa_kit::collections::chained_hash_map::{DEFAULT_CAPACITY, LOAD_FACTOR_THRESHOLD};
use dsa_kit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn fill<H: HashFunction>(map: &mut ChainedHashMap<usize, H>, count: usize) {
    for i in 0..count {
        map.put(&format!("key{i}"), i).unwrap();
    }
}

// =============================================================================
// Basic operations
// =============================================================================

#[rstest]
fn test_put_then_get_latest_value() {
    let mut map = ChainedHashMap::new();

    map.put("cat", "meow").unwrap();
    assert_eq!(map.get("cat"), Ok(Some(&"meow")));

    map.put("cat", "purr").unwrap();
    assert_eq!(map.get("cat"), Ok(Some(&"purr")));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_remove_round_trip() {
    let mut map = ChainedHashMap::new();
    map.put("other", "x").unwrap();
    map.put("dog", "bark").unwrap();
    let before = map.len();

    assert_eq!(map.remove("dog"), Ok(Some("bark")));
    assert_eq!(map.get("dog"), Ok(None));
    assert_eq!(map.len(), before - 1);
}

#[rstest]
#[case::integer(Box::new(123_i32))]
#[case::float(Box::new(1.5_f64))]
#[case::unit(Box::new(()))]
#[case::chars(Box::new(vec!['a', 'b']))]
fn test_non_string_keys_are_rejected(#[case] key: Box<dyn Any>) {
    let mut map = ChainedHashMap::new();
    map.put("kept", 1).unwrap();

    assert_eq!(map.put(&*key, 2), Err(CollectionError::InvalidKey));
    assert_eq!(map.get(&*key), Err(CollectionError::InvalidKey));
    assert_eq!(map.contains_key(&*key), Err(CollectionError::InvalidKey));
    assert_eq!(map.remove(&*key), Err(CollectionError::InvalidKey));
    assert_eq!(map.len(), 1);
    assert_eq!(map.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
#[case::string(Box::new(String::from("key")))]
#[case::literal(Box::new("key"))]
#[case::boxed(Box::new(Box::<str>::from("key")))]
fn test_string_keys_behind_any(#[case] key: Box<dyn Any>) {
    let mut map = ChainedHashMap::new();

    map.put(&*key, 7).unwrap();
    assert_eq!(map.get("key"), Ok(Some(&7)));
}

// =============================================================================
// Resizing
// =============================================================================

#[rstest]
#[case(7, 10)]
#[case(8, 10)]
#[case(9, 20)]
#[case(16, 20)]
#[case(17, 40)]
fn test_capacity_after_inserts(#[case] count: usize, #[case] capacity: usize) {
    let mut map = ChainedHashMap::new();

    fill(&mut map, count);
    assert_eq!(map.len(), count);
    assert_eq!(map.capacity(), capacity);
}

#[rstest]
fn test_growth_is_independent_of_strategy() {
    let mut djb2 = ChainedHashMap::with_hasher(Djb2);
    let mut sdbm = ChainedHashMap::with_hasher(Sdbm);
    let mut lose_lose = ChainedHashMap::with_hasher(LoseLose);

    fill(&mut djb2, 9);
    fill(&mut sdbm, 9);
    fill(&mut lose_lose, 9);

    assert_eq!(djb2.capacity(), 20);
    assert_eq!(sdbm.capacity(), 20);
    assert_eq!(lose_lose.capacity(), 20);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
#[case(64)]
fn test_resize_preserves_contents(#[case] initial: usize) {
    let mut map = ChainedHashMap::with_capacity(initial).unwrap();
    let mut capacity = map.capacity();

    for i in 0..200 {
        map.put(&format!("key{i}"), i).unwrap();

        if map.capacity() != capacity {
            assert_eq!(map.capacity(), capacity * 2);
            capacity = map.capacity();
        }

        for j in 0..=i {
            assert_eq!(map.get(&format!("key{j}")), Ok(Some(&j)));
        }
    }
    assert_eq!(map.len(), 200);
}

#[rstest]
fn test_load_factor_stays_bounded() {
    let mut map = ChainedHashMap::new();

    for i in 0..500 {
        map.put(&i.to_string(), i).unwrap();
        // The check happens before insertion, so one extra entry may push the
        // ratio just past the threshold.
        let bound = (map.capacity() as f64 * LOAD_FACTOR_THRESHOLD + 1.0) / map.capacity() as f64;
        assert!(map.load_factor() <= bound, "load factor {}", map.load_factor());
    }
}

// =============================================================================
// Randomized comparison against std
// =============================================================================

#[rstest]
#[case(1)]
#[case(42)]
fn test_matches_std_hash_map_djb2(#[case] seed: u64) {
    compare_with_std(seed, ChainedHashMap::with_hasher(Djb2));
}

#[rstest]
#[case(7)]
#[case(1_234)]
fn test_matches_std_hash_map_lose_lose(#[case] seed: u64) {
    // Poor distribution means long chains; correctness must not depend on it.
    compare_with_std(seed, ChainedHashMap::with_hasher(LoseLose));
}

#[rstest]
fn test_matches_std_hash_map_sdbm() {
    compare_with_std(99, ChainedHashMap::new());
}

fn compare_with_std<H: HashFunction>(seed: u64, mut map: ChainedHashMap<u32, H>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut expected = HashMap::new();

    for _ in 0..5_000 {
        let key = format!("k{}", rng.random_range(0..128));
        match rng.random_range(0..4) {
            0 | 1 => {
                let value: u32 = rng.random();
                assert_eq!(map.put(&key, value), Ok(&value));
                expected.insert(key, value);
            }
            2 => assert_eq!(map.remove(&key), Ok(expected.remove(&key))),
            _ => assert_eq!(map.get(&key), Ok(expected.get(&key))),
        }
        assert_eq!(map.len(), expected.len());
    }

    let mut seen: Vec<(&str, &u32)> = map.iter().collect();
    seen.sort();
    let mut wanted: Vec<(&str, &u32)> = expected.iter().map(|(k, v)| (k.as_str(), v)).collect();
    wanted.sort();
    assert_eq!(seen, wanted);
}

// =============================================================================
// Rendering
// =============================================================================

#[rstest]
fn test_display_lists_every_bucket() {
    let mut map = ChainedHashMap::with_capacity_and_hasher(4, LoseLose).unwrap();
    map.put("ab", 1).unwrap();
    map.put("ba", 2).unwrap();

    // 'a' + 'b' = 195, 195 % 4 = 3.
    assert_eq!(
        map.to_string(),
        "[0]: null\n[1]: null\n[2]: null\n[3]: ab: 1 -> ba: 2 -> null\nSize: 2"
    );
}
