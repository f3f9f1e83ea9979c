use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dsa_kit::prelude::*;
use std::collections::HashMap;

const KEYS: usize = 5_000;

fn keys() -> Vec<String> {
    (0..KEYS).map(|i| format!("key-{i}")).collect()
}

fn put_get_remove<H: HashFunction>(keys: &[String], hasher: H) -> usize {
    let mut m = ChainedHashMap::with_hasher(hasher);
    for (i, key) in keys.iter().enumerate() {
        let _ = m.put(key, i);
    }
    for key in keys {
        let _ = black_box(m.get(key));
    }
    for key in keys {
        let _ = m.remove(key);
    }
    m.len()
}

fn bench_strategies(c: &mut Criterion) {
    let keys = keys();

    c.bench_function("chained_sdbm_put_get_remove", |b| {
        b.iter(|| black_box(put_get_remove(&keys, Sdbm)))
    });
    c.bench_function("chained_djb2_put_get_remove", |b| {
        b.iter(|| black_box(put_get_remove(&keys, Djb2)))
    });
    c.bench_function("chained_lose_lose_put_get_remove", |b| {
        b.iter(|| black_box(put_get_remove(&keys, LoseLose)))
    });
}

fn bench_std_hash_map(c: &mut Criterion) {
    let keys = keys();

    c.bench_function("std_hashmap_put_get_remove", |b| {
        b.iter(|| {
            let mut m = HashMap::new();
            for (i, key) in keys.iter().enumerate() {
                m.insert(key.clone(), i);
            }
            for key in &keys {
                let _ = black_box(m.get(key));
            }
            for key in &keys {
                let _ = m.remove(key);
            }
            black_box(m.len())
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    let keys = keys();

    c.bench_function("chained_grow_from_one_bucket", |b| {
        b.iter(|| {
            let mut m = ChainedHashMap::with_capacity(1).unwrap();
            for (i, key) in keys.iter().enumerate() {
                let _ = m.put(key, i);
            }
            black_box(m.capacity())
        })
    });
}

criterion_group!(benches, bench_strategies, bench_std_hash_map, bench_resize);
criterion_main!(benches);
