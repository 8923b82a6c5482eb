use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec2;
use hax_trace_editor::{calculate_circular_arc, parse_stadium, CurveSpec, SegmentPath};
use std::hint::black_box;

fn bench_hbs_parsing(c: &mut Criterion) {
    let json_content = include_str!("../tests/fixtures/simple_stadium.hbs");

    c.bench_function("hbs_parse_simple_stadium", |b| {
        b.iter(|| {
            let map = parse_stadium(black_box(json_content)).expect("hbs parse failed");
            black_box(map.segment_count())
        })
    });
}

fn build_curve_specs(count: usize) -> Vec<(DVec2, DVec2, CurveSpec)> {
    (0..count)
        .map(|i| {
            let f = i as f64;
            let p0 = DVec2::new((i % 100) as f64 * 7.0, (i % 37) as f64 * 3.0);
            let p1 = p0 + DVec2::new(50.0 + (i % 13) as f64 * 9.0, (i % 7) as f64 * 11.0);
            let spec = match i % 3 {
                0 => CurveSpec::Angle(-170.0 + (f * 1.7) % 340.0),
                1 => CurveSpec::Radius(60.0 + (f * 3.1) % 500.0),
                _ => CurveSpec::Sagitta(-40.0 + (f * 2.3) % 80.0),
            };
            (p0, p1, spec)
        })
        .collect()
}

fn bench_arc_solver(c: &mut Criterion) {
    // Der Solver läuft pro Redraw-Tick über jedes gekrümmte Segment —
    // hier der Batch-Durchsatz über gemischte Repräsentationen.
    let specs = build_curve_specs(1024);

    c.bench_function("arc_solver_batch_1024", |b| {
        b.iter(|| {
            let mut solved = 0usize;
            for &(p0, p1, spec) in &specs {
                if calculate_circular_arc(black_box(p0), black_box(p1), black_box(spec)).is_some() {
                    solved += 1;
                }
            }
            black_box(solved)
        })
    });
}

fn bench_arc_sampling(c: &mut Criterion) {
    let p0 = DVec2::new(0.0, 0.0);
    let p1 = DVec2::new(300.0, 40.0);
    let arc = calculate_circular_arc(p0, p1, CurveSpec::Angle(220.0)).expect("Bogen erwartet");
    let path = SegmentPath::Arc(arc);

    c.bench_function("arc_sample_polyline", |b| {
        b.iter(|| black_box(path.points(black_box(8.0))).len())
    });
}

criterion_group!(arc_benches, bench_hbs_parsing, bench_arc_solver, bench_arc_sampling);
criterion_main!(arc_benches);
