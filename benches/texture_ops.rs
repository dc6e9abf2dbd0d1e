//! Benchmarks for texture mapping.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::{Point3, Vector2};
use nib::algo::texture::{
    bake, evaluate, BakeOptions, EvaluateOptions, FitMethod, TextureMode, TextureModifier,
    TextureOptions,
};
use nib::prelude::*;

fn create_animation(frames: usize, strokes: usize, points: usize) -> GreasePencil {
    let mut layer = Layer::new("Lines");

    for f in 0..frames {
        let frame_strokes = (0..strokes)
            .map(|s| {
                Stroke::new(
                    (0..points)
                        .map(|p| {
                            let t = p as f64 / points as f64;
                            Point::new(Point3::new(t * 10.0, (t * 6.0 + s as f64).sin(), 0.0))
                                .with_uv_factor(Vector2::new(t, 0.0))
                        })
                        .collect(),
                )
            })
            .collect();
        layer = layer.with_frame(Frame::new(f as i32, frame_strokes));
    }

    GreasePencil::new("Drawing")
        .with_material(Material::new("Ink"))
        .with_layer(layer)
}

fn modifier() -> TextureModifier {
    TextureModifier::new(
        "Texture",
        TextureOptions::default()
            .with_mode(TextureMode::StrokeAndFill)
            .with_fit_method(FitMethod::FitStroke)
            .with_randomness(0.5, 0.5)
            .with_seed(1),
    )
}

fn bench_evaluate(c: &mut Criterion) {
    let base = create_animation(1, 500, 64);
    let m = modifier();

    c.bench_function("evaluate_500_strokes", |b| {
        b.iter_batched(
            || base.clone(),
            |mut gp| evaluate(&mut gp, &m, &EvaluateOptions::at_frame(0), &()),
            criterion::BatchSize::LargeInput,
        )
    });

    c.bench_function("evaluate_500_strokes_sequential", |b| {
        b.iter_batched(
            || base.clone(),
            |mut gp| evaluate(&mut gp, &m, &EvaluateOptions::at_frame(0).sequential(), &()),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_bake(c: &mut Criterion) {
    let base = create_animation(48, 100, 32);
    let m = modifier();

    c.bench_function("bake_48_frames", |b| {
        b.iter_batched(
            || base.clone(),
            |mut gp| bake(&mut gp, &m, &BakeOptions::default(), &()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_evaluate, bench_bake);
criterion_main!(benches);
