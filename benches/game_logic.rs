use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_memory::core::{Board, Game, GameConfig, HeadlessCanvas, Layout, ManualPacer, RenderContext};
use tui_memory::types::{InputEvent, ALL_COLORS, ALL_SHAPES};

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("generate_board_10x7", |b| {
        b.iter(|| Board::generate(black_box(10), black_box(7), &ALL_COLORS, &ALL_SHAPES, &mut rng))
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let layout = Layout::pixels(10, 7);

    c.bench_function("cell_at_sweep", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for y in (0..480).step_by(7) {
                for x in (0..640).step_by(7) {
                    if layout.cell_at(black_box(x), black_box(y)).is_some() {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(12345)).unwrap();
    let mut canvas = HeadlessCanvas::new(Layout::pixels(10, 7));
    let mut pacer = ManualPacer::new();
    let hover = [InputEvent::PointerMoved { x: 90, y: 85 }];

    c.bench_function("idle_frame_with_hover", |b| {
        b.iter(|| {
            let mut ctx = RenderContext::new(&mut canvas, &mut pacer);
            let flow = game.frame(&mut ctx, black_box(&hover)).unwrap();
            canvas.clear_ops();
            flow
        })
    });
}

criterion_group!(benches, bench_generate, bench_hit_test, bench_idle_frame);
criterion_main!(benches);
