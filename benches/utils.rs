//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortener::utils::{generate_random_code, normalize, validate_target};

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_random_code");

    for length in [6, 8, 12, 20] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let code = generate_random_code(length);
                assert_eq!(code.len(), length);
            });
        });
    }

    group.finish();
}

// ============== normalize 基准测试 ==============

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/normalize");

    group.bench_function("absolute_https", |b| {
        b.iter(|| {
            assert!(normalize("https://example.com/path?query=1").is_ok());
        });
    });

    // 无 scheme，走第二次解析
    group.bench_function("bare_host", |b| {
        b.iter(|| {
            assert_eq!(normalize("test.dev").unwrap(), "https://test.dev/");
        });
    });

    group.bench_function("padded", |b| {
        b.iter(|| {
            assert!(normalize("   example.org/a/b   ").is_ok());
        });
    });

    group.bench_function("unparseable", |b| {
        b.iter(|| {
            assert!(normalize("exa mple.com").is_err());
        });
    });

    group.finish();
}

// ============== validate_target 基准测试 ==============

fn bench_validate_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_target");

    group.bench_function("valid_https", |b| {
        b.iter(|| {
            assert!(validate_target("https://example.com/path?query=1").is_ok());
        });
    });

    group.bench_function("invalid_dangerous_protocol", |b| {
        b.iter(|| {
            assert!(validate_target("javascript:alert(1)").is_err());
        });
    });

    group.bench_function("invalid_empty", |b| {
        b.iter(|| {
            assert!(validate_target("").is_err());
        });
    });

    let long_url = format!("https://example.com/{}", "a".repeat(1000));
    group.bench_function("invalid_too_long", |b| {
        b.iter(|| {
            assert!(validate_target(&long_url).is_err());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_random_code,
    bench_normalize,
    bench_validate_target,
);
criterion_main!(benches);
