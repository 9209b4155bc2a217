//! Benchmarks for application form validation.
//!
//! These benchmarks measure the phone pattern used by the form against a
//! compiled-once regex and a hand-rolled check.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const PHONE_PATTERN: &str = r"^\+380[0-9]{9}$";

fn bench_phone_regex_compile(c: &mut Criterion) {
    c.bench_function("phone_regex_compile", |b| {
        b.iter(|| Regex::new(black_box(PHONE_PATTERN)))
    });
}

fn bench_phone_regex_match(c: &mut Criterion) {
    let re = Regex::new(PHONE_PATTERN).unwrap();
    let phones = ["+380501234567", "+38050123456", "0501234567", "+380 50 123 45 67"];

    c.bench_function("phone_regex_match", |b| {
        b.iter(|| {
            phones
                .iter()
                .filter(|phone| re.is_match(black_box(phone)))
                .count()
        })
    });
}

fn bench_phone_manual_match(c: &mut Criterion) {
    let phones = ["+380501234567", "+38050123456", "0501234567", "+380 50 123 45 67"];

    c.bench_function("phone_manual_match", |b| {
        b.iter(|| {
            phones
                .iter()
                .filter(|phone| {
                    let phone = black_box(phone);
                    phone
                        .strip_prefix("+380")
                        .map(|rest| rest.len() == 9 && rest.bytes().all(|b| b.is_ascii_digit()))
                        .unwrap_or(false)
                })
                .count()
        })
    });
}

fn bench_age_parse(c: &mut Criterion) {
    let ages = ["17", "18", " 42 ", "abc", ""];

    c.bench_function("age_parse", |b| {
        b.iter(|| {
            ages.iter()
                .filter(|age| black_box(age).trim().parse::<i64>().is_ok_and(|a| a >= 18))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_phone_regex_compile,
    bench_phone_regex_match,
    bench_phone_manual_match,
    bench_age_parse
);
criterion_main!(benches);
