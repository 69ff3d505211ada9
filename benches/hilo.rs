use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hilo_equity::core::parse_cards;
use hilo_equity::omaha::{best_high, best_low, evaluate_high, HiLoSimulationBuilder};

fn bench_evaluate_high(c: &mut Criterion) {
    let hands: Vec<_> = ["As Ks Qs Js Ts", "2c 2d 2h 7s 7c", "Ah 2d 3c 4s 9h"]
        .iter()
        .map(|s| parse_cards(s).unwrap())
        .collect();

    c.bench_function("evaluate_high", |b| {
        b.iter(|| {
            for h in &hands {
                std::hint::black_box(evaluate_high(h));
            }
        })
    });
}

fn bench_best_hand(c: &mut Criterion) {
    let hole = parse_cards("As 2s Kd Kc 9h").unwrap();
    let board = parse_cards("3s 4s 5d Kh Qh").unwrap();

    let mut group = c.benchmark_group("best_hand");
    group.bench_function("high", |b| {
        b.iter(|| best_high(std::hint::black_box(&hole), &board))
    });
    group.bench_function("low", |b| {
        b.iter(|| best_low(std::hint::black_box(&hole), &board))
    });
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);

    for players in [2usize, 4, 6] {
        let all = [
            "As Ah Ks Kh 2c",
            "Qs Qh Js Jh Tc",
            "3c 4c 5c 6d 7d",
            "8s 8d 9c 9d Td",
            "Ac 2d 3h Kc Qd",
            "6s 7s 8h 9h Th",
        ];
        let hands: Vec<_> = all[..players]
            .iter()
            .map(|s| parse_cards(s).unwrap())
            .collect();
        let sim = HiLoSimulationBuilder::new()
            .hands(hands)
            .trials(1_000)
            .seed(42)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("run", players), &sim, |b, sim| {
            b.iter(|| sim.run())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate_high, bench_best_hand, bench_simulation);
criterion_main!(benches);
