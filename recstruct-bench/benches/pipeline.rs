//! Load, resolve and generate benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use recstruct_bench::schemas::{SchemaShape, synthetic_xml};
use recstruct_codegen::Generator;
use recstruct_schema::{ResolvedFile, parse_file};
use std::hint::black_box;

const SHAPES: [(&str, SchemaShape); 3] = [
    ("small", SchemaShape::new(1, 10, 4, 3)),
    ("wide", SchemaShape::new(4, 250, 8, 1)),
    ("deep", SchemaShape::new(2, 200, 4, 50)),
];

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, shape) in SHAPES {
        let xml = synthetic_xml(shape);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &xml, |b, xml| {
            b.iter(|| parse_file(black_box(xml)).expect("parse"))
        });
    }
    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for (name, shape) in SHAPES {
        let file = parse_file(&synthetic_xml(shape)).expect("parse");
        group.throughput(Throughput::Elements(shape.total_records() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &file, |b, file| {
            b.iter(|| ResolvedFile::resolve(black_box(file.clone())).expect("resolve"))
        });
    }
    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, shape) in SHAPES {
        let file = parse_file(&synthetic_xml(shape)).expect("parse");
        let resolved = ResolvedFile::resolve(file).expect("resolve");
        group.throughput(Throughput::Elements(shape.total_records() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &resolved, |b, resolved| {
            b.iter(|| Generator::new(black_box(resolved)).generate())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_resolve,
    benchmark_generate,
);
criterion_main!(benches);
