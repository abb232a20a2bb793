use pocketcore::test::{build_test, TestOptions};
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark_ppu_frame(c: &mut Criterion) {
    let mut gb = build_test(TestOptions {
        apu_enabled: Some(false),
        dma_enabled: Some(false),
        timer_enabled: Some(false),
        ..Default::default()
    });
    gb.load_rom_empty().unwrap();

    c.bench_function("ppu_next_frame", |b| {
        b.iter(|| {
            gb.next_frame();
        })
    });
}

criterion_group!(benches, benchmark_ppu_frame);
criterion_main!(benches);
