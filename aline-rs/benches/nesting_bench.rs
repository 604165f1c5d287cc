use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use aline_rs::entities::{CalculatorSession, Fabric, Measurements, Panel, SeamAllowances};
use aline_rs::nesting::FabricNester;

criterion_main!(benches);
criterion_group!(benches, layout_bench, drag_bench);

const PANEL_COUNTS: [i64; 4] = [4, 8, 16, 32];

fn create_panels(panel_count: i64) -> Vec<Panel> {
    let seams = SeamAllowances::try_new(1.0, 1.5, 2.0).unwrap();
    let measurements =
        Measurements::try_new(Some(72.0), Some(280.0), Some(65.0), panel_count, seams).unwrap();
    let mut session = CalculatorSession::new(measurements);
    // make the hem segments uneven so the placement order matters
    for i in 0..(panel_count as usize - 1) {
        let (lower, upper) = session.hem_splits().bounds(i);
        session.drag_hem_split(i, lower + (upper - lower) * 0.3);
    }
    session.panels().unwrap()
}

fn layout_bench(c: &mut Criterion) {
    let nester = FabricNester::new(Fabric::try_new(150.0, 1.0).unwrap());
    let mut group = c.benchmark_group("fabric_layout");
    for n in PANEL_COUNTS {
        let panels = create_panels(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &panels, |b, panels| {
            b.iter(|| nester.layout(black_box(panels)).unwrap())
        });
    }
    group.finish();
}

fn drag_bench(c: &mut Criterion) {
    let seams = SeamAllowances::default();
    let measurements =
        Measurements::try_new(Some(72.0), Some(280.0), Some(65.0), 32, seams).unwrap();
    let mut session = CalculatorSession::new(measurements);

    c.bench_function("drag_waist_split", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 7) % 31;
            black_box(session.drag_waist_split(i, black_box(0.5)))
        })
    });
}
