use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expand_object::{expand, from_str};
use serde::Deserialize;

#[allow(dead_code)]
#[derive(Deserialize)]
struct Service {
    name: String,
    port: u16,
    tags: Vec<String>,
}

fn benchmark_expand_simple(c: &mut Criterion) {
    c.bench_function("expand_key_value", |b| b.iter(|| expand(black_box("a.b.c:d"))));

    c.bench_function("expand_scalar_list", |b| {
        b.iter(|| expand(black_box("1,2,3,4,5,true,false,x")))
    });
}

fn benchmark_expand_siblings(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_siblings");

    for size in [5, 25, 100].iter() {
        let pipes = (0..*size)
            .map(|i| format!("key{i}.child:value{i}"))
            .collect::<Vec<_>>()
            .join("|");
        let pluses = (0..*size)
            .map(|i| format!("k{i}:v{i}"))
            .collect::<Vec<_>>()
            .join("+");
        let pluses = format!("root.{pluses}");

        group.bench_with_input(BenchmarkId::new("pipe", size), &pipes, |b, source| {
            b.iter(|| expand(black_box(source.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("plus", size), &pluses, |b, source| {
            b.iter(|| expand(black_box(source.as_str())))
        });
    }

    group.finish();
}

fn benchmark_expand_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_arrays");

    for size in [10, 100, 500].iter() {
        let objects = (0..*size)
            .map(|i| format!("k{i}:v{i}"))
            .collect::<Vec<_>>()
            .join(",");

        group.bench_with_input(BenchmarkId::new("objects", size), &objects, |b, source| {
            b.iter(|| expand(black_box(source.as_str())))
        });
    }

    group.finish();
}

fn benchmark_escapes_and_patterns(c: &mut Criterion) {
    let source = r"a\.b.c\.d:/^x|y+z/gi|e\|f:g\,h|i:/[a-z]+/";

    c.bench_function("expand_escapes_and_patterns", |b| {
        b.iter(|| expand(black_box(source)))
    });
}

fn benchmark_typed(c: &mut Criterion) {
    let source = "name:api+port:8080+tags:web,internal";

    c.bench_function("from_str_struct", |b| {
        b.iter(|| from_str::<std::collections::HashMap<String, Service>>(black_box(
            "svc.name:api+port:8080+tags:web,internal",
        )))
    });

    c.bench_function("expand_then_json", |b| {
        b.iter(|| {
            let value = expand(black_box(source)).unwrap();
            serde_json::to_string(&value).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_expand_simple,
    benchmark_expand_siblings,
    benchmark_expand_arrays,
    benchmark_escapes_and_patterns,
    benchmark_typed
);
criterion_main!(benches);
