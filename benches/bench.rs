use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_empirics::scenarios::{self, Scenario};
use sort_empirics::sorts::{i64_less, Algorithm};

/// An ascending 1-based run with the scenario transform applied, the same
/// shape the harness stages for a window of this length.
fn scenario_input(scenario: Scenario, len: usize) -> Vec<i64> {
    let mut v: Vec<i64> = (1..=len as i64).collect();
    scenario.transform(&mut v);
    v
}

fn bench_sorts(c: &mut Criterion) {
    let test_lens = [100usize, 500, 2_000];
    let test_scenarios = [
        Scenario::NotDecreasing,
        Scenario::NotGrowing,
        Scenario::Random,
        Scenario::Definitive50,
    ];

    for scenario in test_scenarios {
        for len in test_lens {
            for algorithm in Algorithm::ORDER {
                let bench_name =
                    format!("{}-{}-{}", algorithm.name(), scenario.name(), len);

                c.bench_function(&bench_name, |b| {
                    b.iter_batched(
                        || scenario_input(scenario, len),
                        |mut input| {
                            algorithm
                                .run(black_box(input.as_mut_slice()), i64_less)
                                .unwrap()
                        },
                        BatchSize::LargeInput,
                    )
                });
            }
        }
    }
}

fn bench_scenario_generation(c: &mut Criterion) {
    // The canonical pass is quadratic; it runs outside the timed trials in
    // the harness but still dominates run setup time.
    c.bench_function("make_ascending-2000", |b| {
        b.iter_batched(
            || scenario_input(Scenario::Random, 2_000),
            |mut input| scenarios::make_ascending(black_box(&mut input)),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_sorts, bench_scenario_generation);
criterion_main!(benches);
