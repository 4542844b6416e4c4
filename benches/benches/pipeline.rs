// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pedigree_disclosure::state::DisclosureState;
use pedigree_disclosure::types::Disclosure;
use pedigree_records::Person;
use pedigree_records::normalize::normalize;
use pedigree_tree::{PersonMap, build_tree};
use serde_json::{Value, json};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Every Sosa number of the first `generations` generations.
fn gen_full_ids(generations: u32) -> Vec<u64> {
    (1..(1_u64 << generations)).collect()
}

/// Full tree with roughly one ancestor in `keep` dropped at random, the shape real
/// research produces.
fn gen_sparse_ids(generations: u32, keep: u64) -> Vec<u64> {
    let mut rng = Rng::new(0x5050_A11C_E5E5_1234);
    gen_full_ids(generations)
        .into_iter()
        .filter(|&id| id == 1 || rng.next_u64() % keep != 0)
        .collect()
}

fn gen_document(ids: &[u64]) -> Value {
    let people: Vec<Value> = ids
        .iter()
        .map(|&id| {
            json!({
                "Sosa": id,
                "Nom": format!("Person {id}"),
                "Date de naissance": "1850",
                "Lieu de naissance": "Lyon",
                "Conjoint": null,
                "Enfants": 3,
            })
        })
        .collect();
    json!({ "people": people })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &generations in &[8_u32, 12, 16] {
        let document = gen_document(&gen_full_ids(generations));
        group.throughput(Throughput::Elements((1_u64 << generations) - 1));
        group.bench_function(format!("people_g{generations}"), |b| {
            b.iter(|| black_box(normalize(&document)).len());
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for &generations in &[8_u32, 12, 16] {
        let people: Vec<Person> = gen_sparse_ids(generations, 7)
            .into_iter()
            .map(Person::new)
            .collect();
        group.throughput(Throughput::Elements(people.len() as u64));
        group.bench_function(format!("sparse_g{generations}"), |b| {
            b.iter_batched(
                || people.clone(),
                |people| black_box(build_tree(people)).map(|t| t.node_count()),
                BatchSize::SmallInput,
            );
        });
        let store = PersonMap::from_people(people.clone());
        group.bench_function(format!("from_store_g{generations}"), |b| {
            b.iter(|| black_box(store.build_tree()).map(|t| t.node_count()));
        });
    }
    group.finish();
}

fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_rows");
    let tree = build_tree(gen_full_ids(16).into_iter().map(Person::new)).unwrap();

    let mut state = DisclosureState::default();
    state.reset(tree.id());
    group.bench_function("default_horizon_g16", |b| {
        b.iter(|| black_box(state.visible_rows(&tree)).len());
    });

    // Open every node so the whole tree is rendered.
    let mut open = state.clone();
    for node in tree.iter() {
        open.set_override(node.id(), Disclosure::Expand);
    }
    group.throughput(Throughput::Elements(tree.node_count() as u64));
    group.bench_function("fully_expanded_g16", |b| {
        b.iter(|| black_box(open.visible_rows(&tree)).len());
    });

    group.bench_function("toggle_deep_leaf_g16", |b| {
        b.iter_batched(
            || open.clone(),
            |mut s| black_box(s.toggle(&tree, (1 << 15) + 7)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_build, bench_visible_rows);
criterion_main!(benches);
