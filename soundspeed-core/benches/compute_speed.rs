use criterion::{black_box, criterion_group, criterion_main, Criterion};

use soundspeed_core::{cramer, Environment, SpeedCalculator};

fn bench_compute_speed(c: &mut Criterion) {
    let valid = SpeedCalculator::create(Some(72.0), Some(45.0));
    let rejected = SpeedCalculator::create(Some(120.0), Some(150.0));

    c.bench_function("compute_speed_valid", |b| {
        b.iter(|| black_box(&valid).compute_speed())
    });

    c.bench_function("compute_speed_rejected", |b| {
        b.iter(|| black_box(&rejected).compute_speed())
    });

    c.bench_function("cramer_speed_of_sound", |b| {
        b.iter(|| cramer::speed_of_sound(black_box(22.2), black_box(45.0), black_box(101325.0)))
    });

    c.bench_function("sweep_envelope", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for t in 32..=86 {
                for h in (0..=100).step_by(10) {
                    let env = Environment::new(t as f64, h as f64);
                    total += SpeedCalculator::from_environment(env).compute_speed().speed_of_sound as u64;
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_compute_speed);
criterion_main!(benches);
