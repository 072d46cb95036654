// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};
use globmatch::{Case, glob_units};

// local imports
use super::ND;

criterion_group!(benches, bench);

const GROUP: &str = "wildcard";

fn bench(c: &mut Criterion) {
    bench_with::<Sensitive>(c, "globmatch-cs");
    bench_with::<Insensitive>(c, "globmatch-ci");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(GROUP);
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const P1X: (&str, &str) = ("1x", "_*");
    const P27X: (&str, &str) = ("27x", "SOME_VERY_VERY_LONG_PREFIX_*");
    const P3S: (&str, &str) = ("3s", "*_VERY_*_NAME*");

    let variants = [
        ("short", "_TEST", P1X, true),
        ("short", "TEST", P1X, false),
        ("long", "_TEST_SOME_VERY_VERY_LONG_NAME", P1X, true),
        ("long", "SOME_VERY_VERY_LONG_PREFIX_AND_SOMEWHAT", P27X, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAME", P27X, false),
        ("long", "TEST_SOME_VERY_VERY_LONG_NAMES", P3S, true),
        ("long", "TEST_SOME_VERY_VERY_LONG_NONAME", P3S, false),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = [title, "matches"].join(ND);
        let len = input.len().to_string();
        let param = [*name, *pname, if *expected { "pos" } else { "neg" }, len.as_str()].join(ND);
        let pattern = Pattern::new(*pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched(setup, routine, BatchSize::NumIterations(16384));
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}

struct Sensitive(&'static str);

impl Wildcard for Sensitive {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        glob_units(self.0.as_bytes(), what.as_bytes(), Case::Sensitive)
    }
}

struct Insensitive(&'static str);

impl Wildcard for Insensitive {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        glob_units(self.0.as_bytes(), what.as_bytes(), Case::Insensitive)
    }
}
