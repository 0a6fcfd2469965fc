//! Criterion benchmarks for cashpilot_core projections
//!
//! Run with: cargo bench -p cashpilot_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use cashpilot_core::analysis::{SensitivityParameter, sensitivity_analysis};
use cashpilot_core::model::{
    Assumption, AssumptionCategory, AssumptionKind, FinancialSnapshot, Scenario, ScenarioId,
};
use cashpilot_core::simulation::simulate_scenario;

fn create_scenario(months: i32) -> Scenario {
    let base = jiff::civil::date(2026, 1, 1);
    Scenario::new(
        ScenarioId(1),
        "bench",
        base,
        cashpilot_core::date_math::add_months(base, months - 1),
    )
}

fn create_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        revenue: 480_000.0,
        avg_unit_price: 120.0,
        unit_volume: 4_000.0,
        expenses: 360_000.0,
        fixed_expenses: 200_000.0,
        variable_expenses: 40_000.0,
        salaries: 120_000.0,
        cash: 50_000.0,
        receivables: 60_000.0,
        payables: 30_000.0,
        inventory: 20_000.0,
        fixed_assets: 150_000.0,
        equity: 200_000.0,
        debt: 80_000.0,
        bfr: 50_000.0,
    }
}

fn create_assumptions() -> Vec<Assumption> {
    vec![
        Assumption::new(
            "growth",
            AssumptionCategory::Revenue,
            AssumptionKind::GrowthRate { rate: 2.0 },
        ),
        Assumption::new(
            "hiring",
            AssumptionCategory::Salaries,
            AssumptionKind::Recurring { amount: 3_000.0 },
        ),
        Assumption::new(
            "machine",
            AssumptionCategory::Investment,
            AssumptionKind::OneTime {
                amount: 40_000.0,
                date: Some(jiff::civil::date(2026, 6, 1)),
            },
        ),
        Assumption::new(
            "terms",
            AssumptionCategory::PaymentTerms,
            AssumptionKind::PaymentTerms {
                customer_days: Some(60.0),
                supplier_days: Some(45.0),
            },
        ),
    ]
}

fn bench_simulate_scenario(c: &mut Criterion) {
    let snapshot = create_snapshot();
    let assumptions = create_assumptions();

    let mut group = c.benchmark_group("simulate_scenario");
    for months in [12, 60, 120] {
        let scenario = create_scenario(months);
        group.bench_with_input(
            BenchmarkId::from_parameter(months),
            &months,
            |b, _| {
                b.iter(|| {
                    simulate_scenario(
                        black_box(&scenario),
                        black_box(&assumptions),
                        black_box(&snapshot),
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_sensitivity_sweep(c: &mut Criterion) {
    let scenario = create_scenario(60);
    let snapshot = create_snapshot();
    let assumptions = create_assumptions();
    let parameter = SensitivityParameter::new(
        AssumptionCategory::Revenue,
        AssumptionKind::GrowthRate { rate: 0.0 },
    );
    let values: Vec<f64> = (0..50).map(|i| i as f64 * 0.25).collect();

    c.bench_function("sensitivity_sweep_50_points", |b| {
        b.iter(|| {
            sensitivity_analysis(
                black_box(&scenario),
                black_box(&assumptions),
                black_box(&snapshot),
                black_box(&parameter),
                black_box(&values),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_simulate_scenario, bench_sensitivity_sweep);
criterion_main!(benches);
