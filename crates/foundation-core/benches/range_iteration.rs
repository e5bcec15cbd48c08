// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use foundation_core::math::range::Range;
use std::hint::black_box;

const SIZES: [i64; 3] = [64, 4_096, 262_144];

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_iteration");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("foundation", size), &size, |b, &size| {
            let range = Range::new(0_i64, size);
            b.iter(|| black_box(&range).iter().fold(0_i64, |acc, x| acc ^ x))
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            b.iter(|| (0_i64..black_box(size)).fold(0_i64, |acc, x| acc ^ x))
        });
    }
    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let ranges: Vec<Range<i64>> = (0..1_024_i64)
        .map(|i| Range::new((i * 37) % 500, (i * 53) % 700))
        .collect();
    let limits = Range::new(100_i64, 400);

    let mut group = c.benchmark_group("range_predicates");
    group.throughput(Throughput::Elements(ranges.len() as u64));

    group.bench_function("overlaps", |b| {
        b.iter(|| {
            ranges
                .iter()
                .filter(|r| r.overlaps(black_box(&limits)))
                .count()
        })
    });

    group.bench_function("clamped_to", |b| {
        b.iter(|| {
            ranges
                .iter()
                .map(|r| r.clamped_to(black_box(&limits)))
                .filter(|r| !r.is_empty())
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_iteration, bench_predicates);
criterion_main!(benches);
