use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonevalidator::{NumberCategory, Validator};

// Test data shape: (region, number or prefix, category filter)
type TestEntity = (&'static str, &'static str, Option<NumberCategory>);

/// A mixed set of complete numbers across regions and categories, so the
/// measurement is not dominated by one plan's pattern.
fn setup_full_numbers() -> Vec<TestEntity> {
    vec![
        ("US", "6502530000", None),
        ("US", "8002530000", Some(NumberCategory::TollFree)),
        ("GB", "7123456789", Some(NumberCategory::Mobile)),
        ("DE", "15123456789", Some(NumberCategory::Mobile)),
        ("DE", "26180991", Some(NumberCategory::FixedLine)),
        ("IN", "9123456789", None),
        ("IN", "1234567890", Some(NumberCategory::Mobile)),
    ]
}

/// Prefixes below the regional minimum, forcing the digit-extension search.
fn setup_prefixes() -> Vec<TestEntity> {
    vec![
        ("US", "65", None),
        ("US", "0", None),
        ("GB", "71", Some(NumberCategory::Mobile)),
        ("DE", "15", Some(NumberCategory::Mobile)),
        ("IN", "912", None),
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let full_numbers: Vec<(Validator, &str, Option<NumberCategory>)> = setup_full_numbers()
        .into_iter()
        .map(|(region, number, category)| {
            (Validator::for_region(region).unwrap(), number, category)
        })
        .collect();
    let prefixes: Vec<(Validator, &str, Option<NumberCategory>)> = setup_prefixes()
        .into_iter()
        .map(|(region, number, category)| {
            (Validator::for_region(region).unwrap(), number, category)
        })
        .collect();

    let mut group = c.benchmark_group("Validation");

    group.bench_function("validate_pattern: full numbers", |b| {
        b.iter(|| {
            for (validator, number, category) in &full_numbers {
                let _ = validator.validate_pattern(black_box(number), black_box(*category));
            }
        })
    });

    group.bench_function("validate_pattern: prefix plausibility", |b| {
        b.iter(|| {
            for (validator, prefix, category) in &prefixes {
                let _ = validator.validate_pattern(black_box(prefix), black_box(*category));
            }
        })
    });

    group.bench_function("validate_length", |b| {
        b.iter(|| {
            for (validator, number, category) in &full_numbers {
                let _ = validator.validate_length(black_box(number), black_box(*category));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
