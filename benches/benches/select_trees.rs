// Copyright 2025 the Prose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use prose_doc::{Document, ElementData, NodeId};
use prose_select::{Classifier, select};

/// A flat body with `n` text paragraphs.
fn gen_wide(n: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body"));
    for i in 0..n {
        let _ = doc.insert(
            Some(body),
            ElementData::with_text("p", format!("Paragraph number {i}.")),
        );
    }
    (doc, body)
}

/// `sections` sections, each holding `paras` paragraphs plus a heading and an
/// empty wrapper, so every rule fires somewhere.
fn gen_sectioned(sections: usize, paras: usize) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body"));
    for s in 0..sections {
        let section = doc.insert(Some(body), ElementData::new("section"));
        let _ = doc.insert(
            Some(section),
            ElementData::with_text("h2", format!("Section {s}")),
        );
        let _ = doc.insert(Some(section), ElementData::new("div"));
        for p in 0..paras {
            let _ = doc.insert(
                Some(section),
                ElementData::with_text("p", format!("Section {s}, paragraph {p}.")),
            );
        }
    }
    (doc, body)
}

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
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// A random tree of `n` nodes mixing containers, excluded kinds, and text.
fn gen_random(n: usize, seed: u64) -> (Document, NodeId) {
    const KINDS: &[&str] = &[
        "div", "p", "article", "span", "blockquote", "section", "h2", "aside", "pre",
    ];
    let mut rng = Rng::new(seed);
    let mut doc = Document::new();
    let body = doc.insert(None, ElementData::new("body"));
    let mut parents = vec![body];
    for i in 0..n {
        let kind = *rng.pick(KINDS);
        let data = if rng.next_u64() % 3 == 0 {
            ElementData::with_text(kind, format!("text {i}"))
        } else {
            ElementData::new(kind)
        };
        let parent = *rng.pick(&parents);
        let id = doc.insert(Some(parent), data);
        // Bias toward shallow trees: most nodes stay leaf-only candidates.
        if rng.next_u64() % 4 == 0 {
            parents.push(id);
        }
    }
    (doc, body)
}

fn bench_select(c: &mut Criterion) {
    let classifier = Classifier::default();

    let mut group = c.benchmark_group("select");
    for n in [100_usize, 1000, 10_000] {
        let (doc, body) = gen_wide(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("wide/{n}"), |b| {
            b.iter(|| black_box(select(&doc, body, &classifier)));
        });
    }

    for (sections, paras) in [(10_usize, 10_usize), (100, 10), (100, 100)] {
        let (doc, body) = gen_sectioned(sections, paras);
        let n = sections * (paras + 3);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sectioned/{sections}x{paras}"), |b| {
            b.iter(|| black_box(select(&doc, body, &classifier)));
        });
    }

    for n in [1000_usize, 10_000] {
        let (doc, body) = gen_random(n, 0x9E3779B97F4A7C15);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random/{n}"), |b| {
            b.iter(|| black_box(select(&doc, body, &classifier)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
