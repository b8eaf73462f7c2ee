//! Benchmarks for the full evaluation pipeline and the minimizer alone
//!
//! Expressions are grouped by variable count so regressions in the
//! Quine–McCluskey passes or Petrick's method show up at the widths that
//! stress them.

use boolean_calculator::cover::minimize;
use boolean_calculator::evaluate_expression;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

const EXPRESSIONS: &[(&str, &str)] = &[
    ("2_and", "A AND B"),
    ("2_xor", "A XOR B"),
    ("3_majority", "A B + A C + B C"),
    ("3_cyclic", "A'B'C' + A'B'C + A'B C' + A B'C + A B C' + A B C"),
    ("4_mixed", "(A NAND B) NOR (C XOR D)"),
    ("4_textbook", "A'B'C'D' + A'B'C D' + A'B C'D + A'B C D' + A'B C D + A B'C'D' + A B'C'D + A B'C D' + A B C D'"),
    ("5_parity", "A ^ B ^ C ^ D ^ E"),
    ("5_threshold", "A B C + A B D + A B E + A C D + A C E + A D E + B C D + B C E + B D E + C D E"),
];

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_expression");
    for (name, text) in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| evaluate_expression(black_box(text)))
        });
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let variables: Vec<Arc<str>> = ["A", "B", "C", "D", "E"].iter().map(|v| Arc::from(*v)).collect();

    // Every other row of a 5-variable table: no merges possible
    let checkerboard: Vec<usize> = (0..32).filter(|i| (*i as u32).count_ones() % 2 == 0).collect();
    // All rows but one: many merge passes
    let nearly_full: Vec<usize> = (1..32).collect();
    // Cyclic pattern over 4 variables that needs Petrick's method
    let cyclic: Vec<usize> = vec![0, 1, 2, 5, 6, 7, 8, 9, 10, 14];

    let mut group = c.benchmark_group("minimize");
    group.bench_function("checkerboard_5", |b| {
        b.iter(|| minimize(black_box(&checkerboard), &[], &variables))
    });
    group.bench_function("nearly_full_5", |b| {
        b.iter(|| minimize(black_box(&nearly_full), &[], &variables))
    });
    group.bench_function("cyclic_4", |b| {
        b.iter(|| minimize(black_box(&cyclic), &[], &variables[..4]))
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_minimize);
criterion_main!(benches);
