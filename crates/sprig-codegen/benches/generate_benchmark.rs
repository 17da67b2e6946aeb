//! Code generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sprig_codegen::{generate_code, ParseData, Settings};
use sprig_core::{LayoutMode, Node};

const PROFILE_CARD: &str = include_str!("../tests/fixtures/profile_card.json");

/// A vertical list of `rows` horizontal rows, each with a label and a value.
fn wide_list(rows: usize) -> ParseData {
    let root = (0..rows).fold(
        Node::component("List").with_layout(LayoutMode::Vertical),
        |list, i| {
            list.with_child(
                Node::frame(format!("Row {}", i))
                    .with_layout(LayoutMode::Horizontal)
                    .with_style("padding", (i % 4) as i32)
                    .with_child(Node::text("Label").with_style("color", "#333"))
                    .with_child(Node::text(format!("Value {}", i))),
            )
        },
    );
    ParseData::new(root)
}

fn generate_profile_card(c: &mut Criterion) {
    let data = ParseData::from_json(PROFILE_CARD).unwrap();
    let settings = Settings::default();
    c.bench_function("generate_profile_card", |b| {
        b.iter(|| generate_code(black_box(&data), &settings))
    });
}

fn generate_wide_list(c: &mut Criterion) {
    let data = wide_list(500);
    let settings = Settings::default();
    c.bench_function("generate_wide_list", |b| {
        b.iter(|| generate_code(black_box(&data), &settings))
    });
}

fn decode_profile_card(c: &mut Criterion) {
    c.bench_function("decode_profile_card", |b| {
        b.iter(|| ParseData::from_json(black_box(PROFILE_CARD)))
    });
}

criterion_group!(benches, decode_profile_card, generate_profile_card, generate_wide_list);
criterion_main!(benches);
