use apm_logging::{create_logger_with_transport, resolve_level, transports::WriterTransport, LogInfo};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::{io, sync::Arc};

fn benchmark_resolve_level(c: &mut Criterion) {
    c.bench_function("resolve_level", |b| {
        b.iter(|| {
            for name in ["trace", "warning", "off", "bogus", ""] {
                black_box(resolve_level(black_box(Some(name))));
            }
        })
    });
}

fn benchmark_logging(c: &mut Criterion) {
    let logger = create_logger_with_transport(
        Some("info"),
        Arc::new(WriterTransport::<_, LogInfo>::new(io::sink())),
    );

    c.bench_function("log_message", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                logger.info(black_box("benchmark message"));
            }
        })
    });

    c.bench_function("log_filtered_message", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                logger.debug(black_box("benchmark message"));
            }
        })
    });
}

criterion_group!(benches, benchmark_resolve_level, benchmark_logging);
criterion_main!(benches);
