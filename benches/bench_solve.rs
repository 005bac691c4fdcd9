use criterion::{Criterion, black_box, criterion_group, criterion_main};
use crane::solve::{solve, solve_folded};
use crane::split::Split;

/// Build a puzzle with `stacks` stacks of `height` crates and `moves` moves
/// that cycle crates around without ever overdrawing a stack.
fn make_puzzle(stacks: usize, height: usize, moves: usize) -> String {
    let mut out = String::new();
    for level in 0..height {
        let row: Vec<String> = (0..stacks)
            .map(|s| format!("[{}]", (b'A' + ((s + level) % 26) as u8) as char))
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    let index: Vec<String> = (1..=stacks).map(|i| format!("{i:^3}")).collect();
    out.push_str(&index.join(" "));
    out.push_str("\n\n");
    // Move 3 crates forward and straight back so every stack keeps its height.
    for i in 0..moves / 2 {
        let from = i % stacks + 1;
        let to = (i + 1) % stacks + 1;
        out.push_str(&format!("move 3 from {from} to {to}\n"));
        out.push_str(&format!("move 3 from {to} to {from}\n"));
    }
    out
}

fn bench_solve(c: &mut Criterion) {
    let small = make_puzzle(9, 8, 500);
    let large = make_puzzle(9, 40, 20_000);

    c.bench_function("split_lines_large", |b| {
        b.iter(|| black_box(Split::lines(black_box(&large)).count()));
    });

    c.bench_function("solve_streaming_small", |b| {
        b.iter(|| black_box(solve(black_box(&small)).unwrap()));
    });

    c.bench_function("solve_streaming_large", |b| {
        b.iter(|| black_box(solve(black_box(&large)).unwrap()));
    });

    c.bench_function("solve_folded_large", |b| {
        b.iter(|| black_box(solve_folded(black_box(&large)).unwrap()));
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
